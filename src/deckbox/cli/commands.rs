//! # CLI Layer
//!
//! One possible UI client for deckbox. This is the only place that knows
//! about stdout, stderr, stdin and exit codes.
//!
//! ## Structure
//!
//! - `run()`: parses arguments, sets up logging, builds the context, dispatches
//! - `handle_*()`: one per subcommand, calls the API and prints the result
//! - Rendering lives in `render.rs`, argument definitions in `setup.rs`

use super::render::{
    print_messages, render_card_table, render_config, render_deck_list, render_deck_view,
    render_facets,
};
use super::setup::{CardArgs, Cli, Commands};
use clap::Parser;
use deckbox::api::{ConfigAction, DeckboxApi};
use deckbox::error::Result;
use deckbox::init::initialize;
use deckbox::model::CollectionStatus;
use deckbox::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};

struct AppContext {
    api: DeckboxApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.catalog.as_deref())?;
    log::debug!("Using catalog {}", ctx.catalog_path.display());
    let mut ctx = AppContext { api: ctx.api };

    match cli.command {
        Some(Commands::New { name }) => handle_new(&mut ctx, name),
        Some(Commands::Decks) | None => handle_decks(&ctx),
        Some(Commands::Use { deck }) => handle_use(&mut ctx, &deck),
        Some(Commands::Delete { deck, yes }) => handle_delete(&mut ctx, &deck, yes),
        Some(Commands::Add { cards }) => handle_add(&mut ctx, &cards),
        Some(Commands::Remove { cards }) => handle_remove(&mut ctx, &cards),
        Some(Commands::Show { deck }) => handle_show(&ctx, deck.as_deref()),
        Some(Commands::Search { term }) => handle_search(&ctx, &term.join(" ")),
        Some(Commands::Cards(args)) => handle_cards(&ctx, &args),
        Some(Commands::Mark { card, status }) => handle_mark(&mut ctx, &card, status),
        Some(Commands::Facets) => handle_facets(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn handle_new(ctx: &mut AppContext, name: Vec<String>) -> Result<()> {
    let result = ctx.api.create_deck(&name.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_decks(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_decks()?;
    print!("{}", render_deck_list(&result.listed_decks));
    print_messages(&result.messages);
    Ok(())
}

fn handle_use(ctx: &mut AppContext, deck: &str) -> Result<()> {
    let result = ctx.api.select_deck(deck)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, deck: &str, yes: bool) -> Result<()> {
    if !yes {
        let target = ctx.api.find_deck(deck)?;
        print!(
            "Delete deck '{}' ({} cards)? [y/N]: ",
            target.name,
            target.total_cards()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        if !is_confirmation(&input) {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_deck(deck)?;
    print_messages(&result.messages);
    Ok(())
}

fn is_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

fn handle_add(ctx: &mut AppContext, cards: &[String]) -> Result<()> {
    let result = ctx.api.add_cards(cards)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, cards: &[String]) -> Result<()> {
    let result = ctx.api.remove_cards(cards)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, deck: Option<&str>) -> Result<()> {
    let result = ctx.api.show_deck(deck)?;
    if let Some(view) = &result.deck_view {
        print!("{}", render_deck_view(view));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_cards(term)?;
    print!("{}", render_card_table(&result.listed_cards));
    print_messages(&result.messages);
    Ok(())
}

fn handle_cards(ctx: &AppContext, args: &CardArgs) -> Result<()> {
    let result = ctx.api.browse_cards(&args.to_filter())?;
    print!("{}", render_card_table(&result.listed_cards));
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark(ctx: &mut AppContext, card: &str, status: CollectionStatus) -> Result<()> {
    let result = ctx.api.mark_card(card, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_facets(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.facets()?;
    if let Some(facets) = &result.facets {
        print!("{}", render_facets(facets));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

use clap::{Args, Parser, Subcommand};
use deckbox::catalog::{CardFilter, PackFilter, DEFAULT_HP_MAX, DEFAULT_HP_MIN};
use deckbox::model::CollectionStatus;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deckbox", bin_name = "deckbox", version)]
#[command(about = "Card catalog, collection tracker and deck builder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Card data file (overrides config and DECKBOX_CATALOG)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a deck and make it the current one
    New {
        /// Deck name (words are joined with spaces)
        name: Vec<String>,
    },

    /// List decks (default)
    #[command(alias = "ls")]
    Decks,

    /// Select the current deck
    Use {
        /// Deck number, id or name
        deck: String,
    },

    /// Delete a deck
    #[command(alias = "rm")]
    Delete {
        /// Deck number, id or name
        deck: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add one copy of each card to the current deck
    Add {
        #[arg(required = true, value_name = "CARD_ID")]
        cards: Vec<String>,
    },

    /// Remove one copy of each card from the current deck
    Remove {
        #[arg(required = true, value_name = "CARD_ID")]
        cards: Vec<String>,
    },

    /// Show a deck summary and card list (current deck by default)
    Show {
        /// Deck number, id or name
        deck: Option<String>,
    },

    /// Search cards by name for deck building
    Search {
        /// Name fragment; empty lists the first cards
        term: Vec<String>,
    },

    /// Browse the catalog with filters
    Cards(CardArgs),

    /// Mark a card as owned, wanted or none
    Mark {
        #[arg(value_name = "CARD_ID")]
        card: String,

        /// owned | wanted | none
        status: CollectionStatus,
    },

    /// List the values available to each browse filter
    Facets,

    /// Get or set configuration
    Config {
        /// Config key (catalog_path, search_default_limit, search_max_limit)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CardArgs {
    /// Name contains (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub set: Option<String>,

    #[arg(long)]
    pub rarity: Option<String>,

    #[arg(long = "type", value_name = "TYPE")]
    pub card_type: Option<String>,

    #[arg(long)]
    pub weakness: Option<String>,

    #[arg(long, default_value_t = DEFAULT_HP_MIN)]
    pub hp_min: u32,

    #[arg(long, default_value_t = DEFAULT_HP_MAX)]
    pub hp_max: u32,

    /// Booster pack name, or "any" for cards with no pack restriction
    #[arg(long)]
    pub pack: Option<String>,
}

impl CardArgs {
    pub fn to_filter(&self) -> CardFilter {
        CardFilter {
            name: self.name.clone(),
            set: self.set.clone(),
            rarity: self.rarity.clone(),
            card_type: self.card_type.clone(),
            weakness: self.weakness.clone(),
            hp_min: self.hp_min,
            hp_max: self.hp_max,
            pack: PackFilter::parse(self.pack.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("deckbox").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_is_none() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn new_joins_name_words() {
        match parse(&["new", "Lightning", "Rush"]).command {
            Some(Commands::New { name }) => assert_eq!(name.join(" "), "Lightning Rush"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn delete_accepts_yes_flag() {
        match parse(&["delete", "2", "--yes"]).command {
            Some(Commands::Delete { deck, yes }) => {
                assert_eq!(deck, "2");
                assert!(yes);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_requires_a_card() {
        assert!(Cli::try_parse_from(["deckbox", "add"]).is_err());
    }

    #[test]
    fn mark_parses_status() {
        match parse(&["mark", "A1-001", "Wanted"]).command {
            Some(Commands::Mark { card, status }) => {
                assert_eq!(card, "A1-001");
                assert_eq!(status, CollectionStatus::Wanted);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from(["deckbox", "mark", "A1-001", "maybe"]).is_err());
    }

    #[test]
    fn cards_builds_filter_with_defaults() {
        let cli = parse(&["cards", "--type", "Fire", "--pack", "any", "--catalog", "x.json"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("x.json")));
        match cli.command {
            Some(Commands::Cards(args)) => {
                let filter = args.to_filter();
                assert_eq!(filter.card_type.as_deref(), Some("Fire"));
                assert_eq!(filter.hp_min, 0);
                assert_eq!(filter.hp_max, 9999);
                assert_eq!(filter.pack, PackFilter::Unrestricted);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}

//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every `render_*` function
//! returns a `String` so output can be tested without capturing stdout; the
//! `print_*` wrappers just write it out.
//!
//! Column layout is computed with `unicode-width`, since card names and rarity
//! glyphs are not all one column wide.

use chrono::{DateTime, Utc};
use colored::*;
use deckbox::api::{CardListing, CmdMessage, DeckListing, DeckView, Facets, MessageLevel};
use deckbox::config::DeckboxConfig;
use deckbox::engine::{MAX_COPIES, MAX_DECK_SIZE};
use deckbox::model::CollectionStatus;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const NAME_WIDTH: usize = 28;
const CURRENT_MARKER: &str = "▸";

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub fn render_deck_list(decks: &[DeckListing]) -> String {
    let mut out = String::new();
    for listing in decks {
        let marker = if listing.is_current { CURRENT_MARKER } else { " " };
        let idx = format!("{}. ", listing.index);
        let size = format!(
            "{:>2}/{}",
            listing.deck.total_cards(),
            MAX_DECK_SIZE
        );

        let fixed = 2 + idx.width() + size.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let name = truncate_to_width(&listing.deck.name, available);
        let padding = available.saturating_sub(name.width());

        let name = if listing.is_current {
            name.bold()
        } else {
            name.normal()
        };
        let _ = writeln!(
            out,
            "{} {}{}{}  {}{}",
            marker.yellow(),
            idx,
            name,
            " ".repeat(padding),
            size,
            format_time_ago(listing.deck.created_at).dimmed()
        );
    }
    out
}

pub fn render_deck_view(view: &DeckView) -> String {
    let mut out = String::new();
    let title = if view.is_current {
        format!("{} (current)", view.deck.name)
    } else {
        view.deck.name.clone()
    };
    let _ = writeln!(
        out,
        "{}  {}",
        title.bold(),
        format!("{}/{} cards", view.deck.total_cards(), MAX_DECK_SIZE).dimmed()
    );

    if view.entries.is_empty() && view.unknown_cards.is_empty() {
        let _ = writeln!(out, "{}", "This deck is empty.".dimmed());
        return out;
    }

    let _ = writeln!(out);
    for entry in &view.entries {
        let _ = writeln!(
            out,
            "  {}x {}  {}  {}",
            entry.count,
            pad_to_width(&truncate_to_width(&entry.card.name, NAME_WIDTH), NAME_WIDTH),
            pad_to_width(&entry.card.id, 10).dimmed(),
            entry.card.types.join("/")
        );
    }
    for id in &view.unknown_cards {
        let count = view.deck.count_of(id);
        let _ = writeln!(out, "  {}x {}", count, format!("{} (unknown card)", id).red());
    }

    let summary = &view.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", "Total:".bold(), summary.total);
    let _ = writeln!(out, "{} {}", "Types:".bold(), join_counts(&summary.by_type));
    let _ = writeln!(
        out,
        "{} {}",
        "Rarity:".bold(),
        join_counts(&summary.by_rarity)
    );
    out
}

pub fn render_card_table(cards: &[CardListing]) -> String {
    let mut out = String::new();
    for listing in cards {
        let card = &listing.card;
        let name = pad_to_width(&truncate_to_width(&card.name, NAME_WIDTH), NAME_WIDTH);
        let types = pad_to_width(&truncate_to_width(&card.types.join("/"), 12), 12);
        let rarity = pad_to_width(card.rarity_label(), 8);
        let hp = if card.hp > 0 {
            format!("{:>3} HP", card.hp)
        } else {
            "      ".to_string()
        };
        let status = match listing.status {
            CollectionStatus::Owned => "owned".green(),
            CollectionStatus::Wanted => "wanted".yellow(),
            CollectionStatus::None => "".normal(),
        };
        let in_deck = if listing.in_deck > 0 {
            format!("  [{}/{} in deck]", listing.in_deck, MAX_COPIES)
        } else {
            String::new()
        };

        let _ = writeln!(
            out,
            "{}  {}  {}  {}  {}  {}{}",
            pad_to_width(&card.id, 10).dimmed(),
            name,
            types,
            rarity,
            hp,
            status,
            in_deck.cyan()
        );
    }
    out
}

pub fn render_facets(facets: &Facets) -> String {
    let mut out = String::new();
    let groups: [(&str, &Vec<String>); 5] = [
        ("Sets", &facets.sets),
        ("Rarities", &facets.rarities),
        ("Types", &facets.types),
        ("Weaknesses", &facets.weaknesses),
        ("Booster packs", &facets.booster_packs),
    ];
    for (label, values) in groups {
        let joined = if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        };
        let _ = writeln!(out, "{} {}", format!("{}:", label).bold(), joined);
    }
    out
}

pub fn render_config(config: &DeckboxConfig) -> String {
    let mut out = String::new();
    for key in deckbox::config::CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            let _ = writeln!(out, "{} = {}", key, value);
        }
    }
    out
}

fn join_counts(counts: &std::collections::BTreeMap<String, u32>) -> String {
    if counts.is_empty() {
        return "-".to_string();
    }
    counts
        .iter()
        .map(|(k, v)| format!("{} {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckbox::commands::DeckEntry;
    use deckbox::model::{Card, Deck, DeckSummary};

    fn plain() {
        colored::control::set_override(false);
    }

    fn deck(name: &str, cards: &[(&str, u32)]) -> Deck {
        let mut deck = Deck::new("deck-1", name, Utc::now());
        for (id, n) in cards {
            deck.cards.insert(id.to_string(), *n);
        }
        deck
    }

    #[test]
    fn truncates_wide_text() {
        assert_eq!(truncate_to_width("Pikachu", 10), "Pikachu");
        assert_eq!(truncate_to_width("Charizard ex", 6), "Chari…");
        assert_eq!(truncate_to_width("◊◊◊◊", 4), "◊◊◊◊");
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("ok"), CmdMessage::warning("hm")]);
        assert_eq!(out, "ok\nhm\n");
    }

    #[test]
    fn deck_list_marks_current() {
        plain();
        let listed = vec![
            DeckListing {
                index: 1,
                deck: deck("Fire", &[("A", 3)]),
                is_current: false,
            },
            DeckListing {
                index: 2,
                deck: deck("Water", &[]),
                is_current: true,
            },
        ];
        let out = render_deck_list(&listed);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("  1. Fire"));
        assert!(lines[0].contains(" 3/60"));
        assert!(lines[1].starts_with("▸ 2. Water"));
    }

    #[test]
    fn deck_view_shows_entries_and_summary() {
        plain();
        let mut card = Card::new("A1-094", "Pikachu");
        card.types = vec!["Lightning".into()];
        let mut summary = DeckSummary {
            total: 2,
            ..Default::default()
        };
        summary.by_type.insert("Lightning".into(), 2);
        summary.by_rarity.insert("Unknown".into(), 2);

        let view = DeckView {
            deck: deck("Zap", &[("A1-094", 2), ("gone", 1)]),
            is_current: true,
            summary,
            entries: vec![DeckEntry { card, count: 2 }],
            unknown_cards: vec!["gone".into()],
        };
        let out = render_deck_view(&view);
        assert!(out.starts_with("Zap (current)  3/60 cards"));
        assert!(out.contains("2x Pikachu"));
        assert!(out.contains("1x gone (unknown card)"));
        assert!(out.contains("Types: Lightning 2"));
        assert!(out.contains("Rarity: Unknown 2"));
    }

    #[test]
    fn empty_deck_view() {
        plain();
        let view = DeckView {
            deck: deck("Blank", &[]),
            is_current: false,
            summary: DeckSummary::default(),
            entries: vec![],
            unknown_cards: vec![],
        };
        assert!(render_deck_view(&view).contains("This deck is empty."));
    }

    #[test]
    fn card_table_shows_status_and_deck_count() {
        plain();
        let mut card = Card::new("A1-094", "Pikachu");
        card.hp = 60;
        let out = render_card_table(&[CardListing {
            card,
            status: CollectionStatus::Owned,
            in_deck: 2,
        }]);
        assert!(out.contains("Pikachu"));
        assert!(out.contains(" 60 HP"));
        assert!(out.contains("owned"));
        assert!(out.contains("[2/4 in deck]"));
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&DeckboxConfig::default());
        assert!(out.contains("search_default_limit = 20"));
        assert!(out.contains("search_max_limit = 50"));
        assert!(out.contains("catalog_path = cards.json"));
    }
}

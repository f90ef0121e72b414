use crate::catalog::Catalog;
use crate::model::Card;

pub fn card(id: &str, name: &str, card_type: &str, rarity: Option<&str>, hp: u32) -> Card {
    let mut card = Card::new(id, name);
    card.set = "Genetic Apex".to_string();
    card.types = vec![card_type.to_string()];
    card.rarity = rarity.map(str::to_string);
    card.hp = hp;
    card
}

/// A small catalog covering the filter dimensions the tests care about.
pub fn sample_catalog() -> Catalog {
    let mut pikachu = card("A1-094", "Pikachu", "Lightning", Some("◊"), 60);
    pikachu.weaknesses = vec!["Fighting".into()];
    pikachu.booster_packs = vec!["Pikachu".into()];

    let mut charizard = card("A1-036", "Charizard ex", "Fire", Some("◊◊◊◊"), 180);
    charizard.weaknesses = vec!["Water".into()];
    charizard.booster_packs = vec!["Charizard".into()];
    charizard.subtypes = vec!["Stage 2".into()];

    let mut squirtle = card("A1-053", "Squirtle", "Water", Some("◊"), 60);
    squirtle.weaknesses = vec!["Lightning".into()];

    let mut potion = card("P-A-001", "Potion", "Trainer", None, 0);
    potion.set = "Promo-A".into();

    Catalog::from_cards(vec![pikachu, charizard, squirtle, potion])
}

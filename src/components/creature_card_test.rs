use super::*;
use crate::net::types::{NamedResource, TypeSlot};

fn record_with_types(names: &[&str]) -> Creature {
    Creature {
        id: 1,
        name: "bulbasaur".to_owned(),
        height: 7,
        weight: 69,
        base_experience: Some(64),
        types: names
            .iter()
            .map(|n| TypeSlot {
                kind: NamedResource {
                    name: (*n).to_owned(),
                },
            })
            .collect(),
        sprites: SpriteSet {
            front_default: Some("front.png".to_owned()),
            back_default: None,
            front_shiny: Some("shiny.png".to_owned()),
        },
    }
}

#[test]
fn card_title_capitalizes_and_pads() {
    assert_eq!(card_title("bulbasaur", 1), "Bulbasaur #001");
    assert_eq!(card_title("mewtwo", 150), "Mewtwo #150");
}

#[test]
fn card_title_keeps_large_identifiers_intact() {
    assert_eq!(card_title("wo-chien", 1001), "Wo-chien #1001");
}

#[test]
fn sprite_slots_keep_fixed_order_and_absences() {
    let record = record_with_types(&["grass"]);
    let slots = sprite_slots(&record.sprites);

    assert_eq!(slots[0].label, "front");
    assert_eq!(slots[0].url.as_deref(), Some("front.png"));
    assert_eq!(slots[1].label, "back");
    assert_eq!(slots[1].url, None);
    assert_eq!(slots[2].label, "shiny");
    assert_eq!(slots[2].url.as_deref(), Some("shiny.png"));
}

#[test]
fn type_names_preserve_record_order() {
    let record = record_with_types(&["grass", "poison"]);
    assert_eq!(type_names(&record), vec!["grass", "poison"]);
}

#[test]
fn type_names_are_never_deduplicated_or_sorted() {
    let record = record_with_types(&["poison", "grass", "poison"]);
    assert_eq!(type_names(&record), vec!["poison", "grass", "poison"]);
}

#[test]
fn base_experience_displays_value_or_placeholder() {
    assert_eq!(base_experience_display(Some(64)), "64");
    assert_eq!(base_experience_display(None), "--");
}

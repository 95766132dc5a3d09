use super::*;

// A trimmed-down catalog payload: the fields the card renders plus a few of
// the many extra fields a real response carries.
fn catalog_payload() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "is_default": true,
        "order": 1,
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
        ],
        "sprites": {
            "front_default": "https://img.example/1.png",
            "back_default": "https://img.example/1-back.png",
            "front_shiny": null,
            "other": { "official-artwork": {} }
        },
        "abilities": [],
        "stats": []
    })
}

#[test]
fn deserializes_rendered_subset_and_ignores_extras() {
    let creature: Creature = serde_json::from_value(catalog_payload()).unwrap();
    assert_eq!(creature.id, 1);
    assert_eq!(creature.name, "bulbasaur");
    assert_eq!(creature.height, 7);
    assert_eq!(creature.weight, 69);
    assert_eq!(creature.base_experience, Some(64));
}

#[test]
fn type_sequence_preserves_catalog_order() {
    let creature: Creature = serde_json::from_value(catalog_payload()).unwrap();
    let names: Vec<&str> = creature.types.iter().map(|t| t.kind.name.as_str()).collect();
    assert_eq!(names, vec!["grass", "poison"]);
}

#[test]
fn null_sprite_deserializes_as_absent() {
    let creature: Creature = serde_json::from_value(catalog_payload()).unwrap();
    assert!(creature.sprites.front_default.is_some());
    assert!(creature.sprites.back_default.is_some());
    assert_eq!(creature.sprites.front_shiny, None);
}

#[test]
fn missing_base_experience_deserializes_as_absent() {
    let mut payload = catalog_payload();
    payload.as_object_mut().unwrap().remove("base_experience");
    let creature: Creature = serde_json::from_value(payload).unwrap();
    assert_eq!(creature.base_experience, None);
}

#[test]
fn identifier_above_three_digits_survives() {
    let mut payload = catalog_payload();
    payload["id"] = serde_json::json!(10001);
    let creature: Creature = serde_json::from_value(payload).unwrap();
    assert_eq!(creature.id, 10001);
}

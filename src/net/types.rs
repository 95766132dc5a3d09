//! Serde DTOs for the catalog wire format.
//!
//! DESIGN
//! ======
//! These types mirror the subset of the PokeAPI `pokemon` payload the card
//! renders; everything else in the (large) response body is ignored during
//! deserialization so catalog-side additions stay non-breaking.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The parsed result of one successful lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Catalog identifier (positive, may exceed three digits).
    pub id: u32,
    /// Lower-case catalog name; display capitalization happens at render.
    pub name: String,
    /// Height in tenths of a meter.
    pub height: u32,
    /// Weight in tenths of a kilogram.
    pub weight: u32,
    /// Base experience yield; the catalog omits it for some entries.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Elemental types in catalog order; insertion order is display order.
    pub types: Vec<TypeSlot>,
    /// The three sprite references the card always reserves slots for.
    pub sprites: SpriteSet,
}

/// One entry of the ordered type sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    /// The type itself; the wire field is named `type`.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A named catalog resource reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Lower-case resource name (e.g. `"grass"`).
    pub name: String,
}

/// Sprite image locators; each may be absent for a given creature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteSet {
    /// Front-facing default sprite URL.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Back-facing default sprite URL.
    #[serde(default)]
    pub back_default: Option<String>,
    /// Front-facing shiny sprite URL.
    #[serde(default)]
    pub front_shiny: Option<String>,
}

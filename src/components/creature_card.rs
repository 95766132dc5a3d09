//! Result card for a successful lookup.
//!
//! DESIGN
//! ======
//! The card is a pure function of one `Creature`: title, three sprite slots,
//! physical stats, and the ordered type badges. All text shaping lives in
//! small helpers below the component so the projection stays testable
//! without rendering.

#[cfg(test)]
#[path = "creature_card_test.rs"]
mod creature_card_test;

use leptos::prelude::*;

use crate::net::types::{Creature, SpriteSet};
use crate::util::format::{capitalize_first, dex_number, tenths_to_units};

/// One of the three image slots the card always reserves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSlot {
    /// Which view this slot shows (`"front"`, `"back"`, `"shiny"`).
    pub label: &'static str,
    /// Image URL; an absent reference still keeps the slot, rendered with an
    /// empty `src` rather than omitted.
    pub url: Option<String>,
}

/// Summary card for one looked-up creature.
#[component]
pub fn CreatureCard(record: Creature) -> impl IntoView {
    let title = card_title(&record.name, record.id);
    let height = format!("{} m", tenths_to_units(record.height));
    let weight = format!("{} kg", tenths_to_units(record.weight));
    let experience = base_experience_display(record.base_experience);
    let slots = sprite_slots(&record.sprites);
    let badges = type_names(&record);

    view! {
        <div class="creature-card">
            <h2 class="creature-card__title">{title}</h2>

            <div class="creature-card__sprites">
                {slots
                    .into_iter()
                    .map(|slot| {
                        view! {
                            <img
                                class="creature-card__sprite"
                                src=slot.url.unwrap_or_default()
                                alt=slot.label
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <p class="creature-card__stat">
                <strong>"Height: "</strong>
                {height}
            </p>
            <p class="creature-card__stat">
                <strong>"Weight: "</strong>
                {weight}
            </p>
            <p class="creature-card__stat">
                <strong>"Base Experience: "</strong>
                {experience}
            </p>

            <div class="creature-card__types">
                <strong>"Types:"</strong>
                <div class="creature-card__badges">
                    {badges
                        .into_iter()
                        .map(|name| view! { <span class="creature-card__badge">{name}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

fn card_title(name: &str, id: u32) -> String {
    format!("{} {}", capitalize_first(name), dex_number(id))
}

fn base_experience_display(value: Option<u32>) -> String {
    value.map_or_else(|| "--".to_owned(), |v| v.to_string())
}

/// The fixed front/back/shiny slot sequence for a sprite set.
fn sprite_slots(sprites: &SpriteSet) -> [SpriteSlot; 3] {
    [
        SpriteSlot {
            label: "front",
            url: sprites.front_default.clone(),
        },
        SpriteSlot {
            label: "back",
            url: sprites.back_default.clone(),
        },
        SpriteSlot {
            label: "shiny",
            url: sprites.front_shiny.clone(),
        },
    ]
}

/// Badge labels in record order; never sorted, never deduplicated.
fn type_names(record: &Creature) -> Vec<String> {
    record.types.iter().map(|t| t.kind.name.clone()).collect()
}

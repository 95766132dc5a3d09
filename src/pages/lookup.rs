//! Lookup page: the single search screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the wiring of one lookup lifecycle: both trigger sources (submit
//! button and Enter in the input) land on the same form-submit handler,
//! which drives the `LookupState` transitions and spawns the network call.
//! The busy indicator, error region, and result card each observe one slice
//! of that state.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

use leptos::prelude::*;

use crate::components::creature_card::CreatureCard;
use crate::state::lookup::{LookupState, normalize_query};
use crate::state::ui::UiState;

/// The lookup screen: search form, busy indicator, error region, result card.
#[component]
pub fn LookupPage() -> impl IntoView {
    let lookup = expect_context::<RwSignal<LookupState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = RwSignal::new(String::new());

    // Single lifecycle entry point for both trigger sources. An input that
    // normalizes to empty is a silent no-op. The trigger button is disabled
    // while busy; an Enter keypress can still race a second request, and the
    // token handed out by `begin` makes the latest one win.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(name) = normalize_query(&query.get()) else {
            return;
        };
        lookup.update(|s| {
            s.begin();
        });
        let token = lookup.get_untracked().request_seq;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_creature(&name).await {
                Ok(record) => lookup.update(|s| {
                    s.finish_success(token, record);
                }),
                Err(error) => lookup.update(|s| {
                    s.finish_failure(token, error);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name, token);
    };

    let busy = move || lookup.get().is_busy();
    let error_message = move || error_text(&lookup.get());
    let record = move || lookup.get().record;

    let on_toggle_dark = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <div class="lookup-page">
            <header class="lookup-page__header toolbar">
                <span class="toolbar__title">"Pokédex"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__dark-toggle" on:click=on_toggle_dark title="Toggle dark mode">
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            <form class="lookup-form" on:submit=on_submit>
                <input
                    class="lookup-form__input"
                    type="text"
                    placeholder="Enter a name..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary lookup-form__submit" type="submit" disabled=busy>
                    "Search"
                </button>
            </form>

            <Show when=busy>
                <p class="lookup-page__loading">"Loading..."</p>
            </Show>

            <Show when=move || !error_message().is_empty()>
                <p class="lookup-page__error">{error_message}</p>
            </Show>

            {move || record().map(|r| view! { <CreatureCard record=r/> })}
        </div>
    }
}

fn error_text(state: &LookupState) -> String {
    state.error.map_or_else(String::new, |e| e.to_string())
}

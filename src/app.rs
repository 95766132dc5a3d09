//! Root application component, context providers, and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::lookup::LookupPage;
use crate::state::lookup::LookupState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the lookup and UI state contexts and applies the persisted
/// dark-mode preference once the app is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let lookup = RwSignal::new(LookupState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(lookup);
    provide_context(ui);

    Effect::new(move || {
        let enabled = crate::util::dark_mode::initial_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pokedex.css"/>
        <Title text="Pokédex"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LookupPage/>
            </Routes>
        </Router>
    }
}

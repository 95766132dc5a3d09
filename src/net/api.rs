//! REST call to the public creature catalog.
//!
//! Client-side (hydrate): one real HTTP GET via `gloo-net`.
//! Server-side and host tests: a stub returning the generic failure, since
//! the lookup is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode funnels into the two-variant lookup taxonomy: 404
//! means the catalog has no such entry, everything else (other statuses,
//! transport errors, malformed bodies) is the generic retryable message.
//! Nothing is retried automatically and nothing is surfaced beyond the
//! user-visible message region.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Creature;
use crate::state::lookup::LookupError;

/// Fixed base endpoint of the catalog service; the normalized query is
/// appended verbatim.
pub const API_BASE: &str = "https://pokeapi.co/api/v2/pokemon/";

#[cfg(any(test, feature = "hydrate"))]
fn creature_endpoint(query: &str) -> String {
    format!("{API_BASE}{query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> LookupError {
    if status == 404 {
        LookupError::NotFound
    } else {
        LookupError::RequestFailed
    }
}

/// Fetch one creature record by normalized name.
///
/// # Errors
///
/// [`LookupError::NotFound`] for a 404 response; [`LookupError::RequestFailed`]
/// for any other unsuccessful status, a transport-level failure, or a body
/// that does not parse.
pub async fn fetch_creature(query: &str) -> Result<Creature, LookupError> {
    #[cfg(feature = "hydrate")]
    {
        let url = creature_endpoint(query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| LookupError::RequestFailed)?;
        if !resp.ok() {
            return Err(classify_status(resp.status()));
        }
        resp.json::<Creature>()
            .await
            .map_err(|_| LookupError::RequestFailed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(LookupError::RequestFailed)
    }
}

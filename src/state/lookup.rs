//! Lookup request lifecycle: one user-initiated catalog query from input
//! normalization through success/error completion.
//!
//! DESIGN
//! ======
//! The lifecycle is an explicit state struct with pure transition methods so
//! the page component stays a thin event-wiring layer. Overlapping requests
//! are resolved last-request-wins: `begin` hands out a monotonically
//! increasing token and completions carrying a stale token are discarded.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

use crate::net::types::Creature;

/// Normalize raw input into a dispatchable query.
///
/// Returns `None` when the trimmed, lower-cased input is empty; an empty
/// query is silently ignored and never reaches the network.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim().to_lowercase();
    if query.is_empty() { None } else { Some(query) }
}

/// Where the controller is within one request-response cycle.
///
/// `Rendered` and `Failed` are terminal per request only; the controller
/// accepts the next trigger immediately from either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupPhase {
    /// No request dispatched yet, or the previous one has settled.
    #[default]
    Idle,
    /// A network call is outstanding.
    Busy,
    /// The latest request completed and its record is on screen.
    Rendered,
    /// The latest request failed and its message is on screen.
    Failed,
}

/// Why a lookup failed. Classification and display text are decoupled: the
/// variant selects the message, every variant renders in the same region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The catalog has no entry for the query (HTTP 404).
    #[error("Pokémon not found!")]
    NotFound,
    /// Any other unsuccessful status, transport failure, or malformed body.
    #[error("Something went wrong. Please try again.")]
    RequestFailed,
}

/// View state for the lookup surface: result card, error region, busy flag.
///
/// Owned by a single `RwSignal` and overwritten wholesale per transition;
/// the rendering layer observes it rather than being interleaved with the
/// request logic.
#[derive(Clone, Debug, Default)]
pub struct LookupState {
    /// Current lifecycle phase.
    pub phase: LookupPhase,
    /// Record shown in the result card, if the latest request succeeded.
    pub record: Option<Creature>,
    /// Error shown in the message region, if the latest request failed.
    pub error: Option<LookupError>,
    /// Token of the most recently dispatched request.
    pub request_seq: u64,
}

impl LookupState {
    /// Start a new request: discard the previous record and error, enter
    /// `Busy`, and return the token the eventual completion must present.
    pub fn begin(&mut self) -> u64 {
        self.record = None;
        self.error = None;
        self.phase = LookupPhase::Busy;
        self.request_seq += 1;
        self.request_seq
    }

    /// Complete the request identified by `token` with a parsed record.
    ///
    /// Returns `false` (state untouched) when the token is stale, i.e. a
    /// newer request was dispatched after this one.
    pub fn finish_success(&mut self, token: u64, record: Creature) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = LookupPhase::Rendered;
        self.record = Some(record);
        true
    }

    /// Complete the request identified by `token` with an error.
    ///
    /// Stale tokens are discarded exactly as in [`Self::finish_success`].
    pub fn finish_failure(&mut self, token: u64, error: LookupError) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = LookupPhase::Failed;
        self.error = Some(error);
        true
    }

    /// True while the latest request is still outstanding. Drives the busy
    /// indicator and the trigger-control disablement.
    pub fn is_busy(&self) -> bool {
        self.phase == LookupPhase::Busy
    }
}

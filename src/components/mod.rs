//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure projections of state into markup; the page owns all
//! lifecycle orchestration and passes finished records down as props.

pub mod creature_card;

//! Networking modules for the catalog REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single HTTP GET against the public catalog and maps
//! outcomes onto the lookup error taxonomy; `types` defines the serde schema
//! for the subset of the response the card renders.

pub mod api;
pub mod types;

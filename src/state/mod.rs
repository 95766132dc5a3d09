//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data split by domain: `lookup` owns the request lifecycle,
//! `ui` owns cosmetic chrome. Components read and write both through Leptos
//! context signals; nothing in here touches the DOM or the network.

pub mod lookup;
pub mod ui;

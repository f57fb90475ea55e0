//! Internal server-side models shared across layers.

pub mod app;
pub mod species;

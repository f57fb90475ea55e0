//! Shared data transfer objects for the HTTP API.

pub mod amendment;
pub mod api;
pub mod application;
pub mod licence;
pub mod reference;
pub mod returns;
pub mod status;

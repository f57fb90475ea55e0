//! Server application core modules.
//!
//! Everything behind the HTTP surface lives here: configuration, the Axum
//! controllers and router, the repository layer over the licensing schema,
//! the services that orchestrate transactional case operations, and the
//! outbound notification and postcode-lookup clients.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod notify;
pub mod postcode;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

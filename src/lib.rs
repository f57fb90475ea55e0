//! Larus: case-management backend for wildlife-control licensing.
//!
//! Applications are assessed, licences issued, amended, reported against and
//! eventually withdrawn or revoked; every step is persisted through the
//! `entity` crate and surfaced over an Axum HTTP API, with transactional
//! emails dispatched through a notification service after each successful
//! write.

pub mod model;
pub mod server;

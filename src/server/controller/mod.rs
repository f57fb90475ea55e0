//! HTTP controller endpoints for the Larus API.
//!
//! Controllers parse request bodies, call into services and repositories,
//! and map results to HTTP responses. Each handler carries its utoipa
//! annotations so the OpenAPI document stays next to the code it documents.

pub mod amendment;
pub mod application;
pub mod assessment;
pub mod case;
pub mod licence;
pub mod reference;
pub mod returns;

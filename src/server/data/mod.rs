//! Data access layer repositories.
//!
//! Repositories wrap the licensing schema one table (or tight table group)
//! at a time. They are generic over [`sea_orm::ConnectionTrait`] so the same
//! repository works on a plain connection and inside an open transaction;
//! services compose them into all-or-nothing case operations.

pub mod address;
pub mod advisory;
pub mod amendment;
pub mod application;
pub mod assessment;
pub mod case_record;
pub mod condition;
pub mod contact;
pub mod issue;
pub mod licence;
pub mod measure;
pub mod note;
pub mod returns;
pub mod species;

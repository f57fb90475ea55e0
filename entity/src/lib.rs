pub mod prelude;

pub mod activity;
pub mod address;
pub mod advisory;
pub mod amend_advisory;
pub mod amend_condition;
pub mod amendment;
pub mod application;
pub mod assessment;
pub mod condition;
pub mod contact;
pub mod issue;
pub mod licence;
pub mod licence_advisory;
pub mod licence_condition;
pub mod measure;
pub mod note;
pub mod returns;
pub mod revocation;
pub mod sea_orm_active_enums;
pub mod species_set;
pub mod withdrawal;

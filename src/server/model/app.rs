use sea_orm::DatabaseConnection;

use crate::server::{notify::NotifyClient, postcode::PostcodeClient};

/// Shared state handed to every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub notify: NotifyClient,
    pub postcodes: PostcodeClient,
    /// Internal mailbox copied on issuance and amendment emails.
    pub licensing_mailbox: String,
}

use thiserror::Error;

/// Errors from the outbound notification boundary.
///
/// These are logged at the dispatch site and never propagated to the caller
/// of a case operation; persistence always wins over notification.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Notification service rejected the send ({status}): {body}")]
    Api { status: u16, body: String },
}

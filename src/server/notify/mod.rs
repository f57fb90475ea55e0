//! Outbound notification boundary.
//!
//! The core hands a flat key/value personalisation map and a target address
//! to [`NotifyClient::send_email`]; sends happen strictly after the owning
//! database transaction has committed. [`NotifyClient::dispatch`] is the
//! best-effort variant used by services: failures are logged and swallowed
//! so a failed send can never undo a successful persistence.

pub mod personalisation;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::server::error::notify::NotifyError;

/// Flat key → string map rendered into an email template.
pub type Personalisation = BTreeMap<String, String>;

/// The transactional email templates the core can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    ApplicationConfirmation,
    LicenceIssued,
    LicenceAmended,
    ReportingReturn,
    FinalReturn,
    SiteVisitReturn,
}

impl Template {
    /// Template id registered with the notification service.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ApplicationConfirmation => "3a9a0d08-b30a-4f7a-9f4d-4a56c501ae6b",
            Self::LicenceIssued => "8c2f1b77-60d2-45a8-9d6e-9df1f6e4a7c3",
            Self::LicenceAmended => "d5cf4b10-1a2e-4c53-8f09-6f8d2f9ab14e",
            Self::ReportingReturn => "1f6a4c92-7e3b-4d88-b2a1-0c5e9d7f3a26",
            Self::FinalReturn => "72b8e0d4-5c17-49fa-8e63-b1a9f0c2d585",
            Self::SiteVisitReturn => "ae41c7f9-2d60-4b35-9c78-3e0d6b8a51f2",
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    email_address: &'a str,
    template_id: &'a str,
    personalisation: &'a Personalisation,
}

/// Client for the notification service's email endpoint.
#[derive(Clone)]
pub struct NotifyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NotifyClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Sends one templated email.
    pub async fn send_email(
        &self,
        template: Template,
        email_address: &str,
        personalisation: &Personalisation,
    ) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(format!("{}/v2/notifications/email", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                email_address,
                template_id: template.id(),
                personalisation,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api { status, body });
        }

        Ok(())
    }

    /// Best-effort send used after a commit: errors are logged, never
    /// returned, so notification failures cannot surface to the caller of a
    /// case operation.
    pub async fn dispatch(
        &self,
        template: Template,
        email_address: &str,
        personalisation: &Personalisation,
    ) {
        match self.send_email(template, email_address, personalisation).await {
            Ok(()) => {
                tracing::info!("Sent {:?} email to {}", template, email_address);
            }
            Err(e) => {
                tracing::warn!("Failed to send {:?} email to {}: {}", template, email_address, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::server::error::notify::NotifyError;

    use super::{NotifyClient, Template};

    fn personalisation() -> super::Personalisation {
        let mut map = BTreeMap::new();
        map.insert("licenceNumber".to_string(), "123456".to_string());
        map
    }

    /// Expect Ok when the notification service accepts the send
    #[tokio::test]
    async fn send_email_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v2/notifications/email")
            .match_header("authorization", "Bearer test_key")
            .with_status(201)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let client = NotifyClient::new(&server.url(), "test_key");
        let result = client
            .send_email(
                Template::ApplicationConfirmation,
                "holder@example.com",
                &personalisation(),
            )
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    /// Expect an Api error carrying the response status when the send is rejected
    #[tokio::test]
    async fn send_email_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/notifications/email")
            .with_status(400)
            .with_body("{\"errors\":[\"bad template\"]}")
            .create_async()
            .await;

        let client = NotifyClient::new(&server.url(), "test_key");
        let result = client
            .send_email(
                Template::LicenceIssued,
                "holder@example.com",
                &personalisation(),
            )
            .await;

        match result {
            Err(NotifyError::Api { status, .. }) => assert_eq!(status, 400),
            other => panic!("Expected Api error, got {:?}", other.err()),
        }
    }

    /// Expect dispatch to swallow send failures
    #[tokio::test]
    async fn dispatch_swallows_failures() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/notifications/email")
            .with_status(500)
            .create_async()
            .await;

        let client = NotifyClient::new(&server.url(), "test_key");

        // Must not panic or propagate.
        client
            .dispatch(
                Template::FinalReturn,
                "holder@example.com",
                &personalisation(),
            )
            .await;
    }
}

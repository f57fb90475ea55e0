//! Postcode lookup boundary.
//!
//! Thin passthrough to an external address-lookup API; no retry, no cache.

use serde::Deserialize;

use crate::{model::reference::FoundAddressDto, server::error::Error};

#[derive(Deserialize)]
struct LookupResponse {
    results: Vec<FoundAddressDto>,
}

#[derive(Clone)]
pub struct PostcodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl PostcodeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Looks up candidate addresses for a postcode.
    pub async fn find_addresses(&self, postcode: &str) -> Result<Vec<FoundAddressDto>, Error> {
        let response = self
            .http
            .get(format!("{}/addresses", self.base_url))
            .query(&[("postcode", postcode)])
            .send()
            .await?
            .error_for_status()?;

        let body: LookupResponse = response.json().await?;

        Ok(body.results)
    }
}

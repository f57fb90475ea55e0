use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub listen_address: String,
    pub notify_base_url: String,
    pub notify_api_key: String,
    pub postcode_base_url: String,
    /// Internal mailbox copied on licence issuance and amendment emails.
    pub licensing_mailbox: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_address = std::env::var("LISTEN_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            listen_address: validate_listen_address(listen_address)?,
            notify_base_url: std::env::var("NOTIFY_BASE_URL")
                .unwrap_or_else(|_| "https://api.notifications.service.gov.uk".to_string()),
            notify_api_key: require("NOTIFY_API_KEY")?,
            postcode_base_url: require("POSTCODE_BASE_URL")?,
            licensing_mailbox: require("LICENSING_MAILBOX")?,
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// A listen address that does not parse as a socket address would only fail
/// later at bind time, so it is rejected up front.
fn validate_listen_address(value: String) -> Result<String, ConfigError> {
    if let Err(e) = value.parse::<SocketAddr>() {
        return Err(ConfigError::InvalidEnvValue {
            var: "LISTEN_ADDRESS".to_string(),
            reason: e.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use crate::server::error::config::ConfigError;

    use super::validate_listen_address;

    /// Expect a well-formed socket address to pass through unchanged
    #[test]
    fn accepts_valid_listen_address() {
        let value = validate_listen_address("127.0.0.1:3000".to_string());

        assert_eq!(value.unwrap(), "127.0.0.1:3000");
    }

    /// Expect a malformed listen address to be rejected with the variable name
    #[test]
    fn rejects_malformed_listen_address() {
        match validate_listen_address("not-an-address".to_string()) {
            Err(ConfigError::InvalidEnvValue { var, .. }) => assert_eq!(var, "LISTEN_ADDRESS"),
            other => panic!("Expected InvalidEnvValue, got {:?}", other),
        }
    }
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs are well formed
//! - Check credentials are usable when the auth gate is on
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("upstream.base_url: '{value}' is not a valid URL ({reason})")]
    InvalidUrl { value: String, reason: String },

    #[error("upstream.base_url: unsupported scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("security.{0} must not be empty when security is enabled")]
    EmptyCredential(&'static str),
}

/// Validate `config`, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidUrl {
            value: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.security.enabled {
        if config.security.username.is_empty() {
            errors.push(ValidationError::EmptyCredential("username"));
        }
        if config.security.password.is_empty() {
            errors.push(ValidationError::EmptyCredential("password"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "localhost".to_string();
        config.upstream.base_url = "ftp://example.com".to_string();
        config.security.username = String::new();
        config.security.password = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidAddress {
                    field: "listener.bind_address",
                    value: "localhost".to_string(),
                },
                ValidationError::UnsupportedScheme("ftp".to_string()),
                ValidationError::EmptyCredential("username"),
                ValidationError::EmptyCredential("password"),
            ]
        );
    }

    #[test]
    fn empty_credentials_allowed_when_security_disabled() {
        let mut config = RelayConfig::default();
        config.security.enabled = false;
        config.security.username = String::new();
        config.security.password = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn metrics_address_only_checked_when_enabled() {
        let mut config = RelayConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidAddress { field: "observability.metrics_address", .. }]
        ));
    }
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the default locale is among the supported locales
//! - Validate locale codes and reserved segments
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the error refers to.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn is_locale_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase())
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".into(),
            message: format!("not a valid socket address: {}", config.listener.bind_address),
        });
    }

    let locales = &config.locales;
    if locales.supported.is_empty() {
        errors.push(ValidationError {
            field: "locales.supported".into(),
            message: "at least one locale is required".into(),
        });
    }
    for code in &locales.supported {
        if !is_locale_code(code) {
            errors.push(ValidationError {
                field: "locales.supported".into(),
                message: format!("invalid locale code: {:?} (expected two lowercase letters)", code),
            });
        }
    }
    for (i, code) in locales.supported.iter().enumerate() {
        if locales.supported[..i].contains(code) {
            errors.push(ValidationError {
                field: "locales.supported".into(),
                message: format!("duplicate locale code: {}", code),
            });
        }
    }
    if !locales.supported.contains(&locales.default_locale) {
        errors.push(ValidationError {
            field: "locales.default_locale".into(),
            message: format!("default locale {:?} is not in the supported list", locales.default_locale),
        });
    }

    for segment in &config.routing.skip_segments {
        if segment.is_empty() || segment.contains('/') {
            errors.push(ValidationError {
                field: "routing.skip_segments".into(),
                message: format!("invalid reserved segment: {:?}", segment),
            });
        }
    }

    if config
        .observability
        .metrics_address
        .parse::<SocketAddr>()
        .is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address".into(),
            message: format!(
                "not a valid socket address: {}",
                config.observability.metrics_address
            ),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".into(),
            message: "must be greater than zero".into(),
        });
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_default_locale_must_be_supported() {
        let mut config = GatewayConfig::default();
        config.locales.default_locale = "fr".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "locales.default_locale"));
    }

    #[test]
    fn test_locale_code_shape() {
        let mut config = GatewayConfig::default();
        config.locales.supported.push("english".into());
        config.locales.supported.push("EN".into());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors.iter().filter(|e| e.field == "locales.supported").count(),
            2
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "nonsense".into();
        config.locales.supported.clear();
        config.locales.default_locale = "en".into();
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_metrics_address_must_parse() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.field == "observability.metrics_address"));
    }

    #[test]
    fn test_reserved_segment_shape() {
        let mut config = GatewayConfig::default();
        config.routing.skip_segments.push("bad/segment".into());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "routing.skip_segments"));
    }
}

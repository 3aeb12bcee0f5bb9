use std::env;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

const DEFAULT_PROFILE: &str = "sandbox"; // Used only for local testing
const DEFAULT_SESSION_DURATION: i32 = 900;

// STS-permitted bounds for AssumeRoot sessions.
const MIN_SESSION_DURATION: i32 = 900;
const MAX_SESSION_DURATION: i32 = 3600;

#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// CORS allow-origin sent on every response.
    pub domain: String,
    /// Named AWS profile to source base credentials from; set only when
    /// running under AWS_SAM_LOCAL or LOCAL_TEST.
    pub local_profile: Option<String>,
    pub session_duration_seconds: i32,
}

impl BrokerConfig {
    pub fn from_env() -> Result<Self> {
        let local = env_flag("AWS_SAM_LOCAL") || env_flag("LOCAL_TEST");

        Ok(Self {
            domain: env::var("DOMAIN").unwrap_or_else(|_| "*".to_string()),
            local_profile: local
                .then(|| env::var("LOCAL_PROFILE").unwrap_or_else(|_| DEFAULT_PROFILE.to_string())),
            session_duration_seconds: env::var("SESSION_DURATION_SECONDS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_SESSION_DURATION),
        })
    }
}

impl Validate for BrokerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("domain", &self.domain)?;
        validate_range(
            "session_duration_seconds",
            self.session_duration_seconds,
            MIN_SESSION_DURATION,
            MAX_SESSION_DURATION,
        )?;
        if let Some(profile) = &self.local_profile {
            validate_non_empty_string("local_profile", profile)?;
        }

        tracing::info!("Broker configuration validation passed");
        Ok(())
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| v == "true").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_default_shape() {
        let config = BrokerConfig {
            domain: "*".to_string(),
            local_profile: None,
            session_duration_seconds: DEFAULT_SESSION_DURATION,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_session_duration() {
        let config = BrokerConfig {
            domain: "*".to_string(),
            local_profile: None,
            session_duration_seconds: 60,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_domain() {
        let config = BrokerConfig {
            domain: String::new(),
            local_profile: Some(DEFAULT_PROFILE.to_string()),
            session_duration_seconds: DEFAULT_SESSION_DURATION,
        };
        assert!(config.validate().is_err());
    }
}

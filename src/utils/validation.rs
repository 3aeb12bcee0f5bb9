use crate::utils::error::{BrokerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BrokerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: i32, min_value: i32, max_value: i32) -> Result<()> {
    if value < min_value || value > max_value {
        return Err(BrokerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min_value, max_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_string_accepts_values() {
        assert!(validate_non_empty_string("domain", "*").is_ok());
        assert!(validate_non_empty_string("domain", "https://ram.example.com").is_ok());
    }

    #[test]
    fn non_empty_string_rejects_blank() {
        assert!(validate_non_empty_string("domain", "").is_err());
        assert!(validate_non_empty_string("domain", "   ").is_err());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(validate_range("session_duration_seconds", 900, 900, 3600).is_ok());
        assert!(validate_range("session_duration_seconds", 3600, 900, 3600).is_ok());
        assert!(validate_range("session_duration_seconds", 899, 900, 3600).is_err());
        assert!(validate_range("session_duration_seconds", 3601, 900, 3600).is_err());
    }
}

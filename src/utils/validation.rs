use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_ordered_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    min: T,
    max: T,
) -> Result<()> {
    if min > max {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", min, max),
            reason: format!("Lower bound {} must not exceed upper bound {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("users.count", 10, 1).is_ok());
        assert!(validate_positive_number("users.count", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("users.email_domain", "example.com").is_ok());
        assert!(validate_non_empty_string("users.email_domain", "   ").is_err());
    }

    #[test]
    fn test_validate_ordered_range() {
        assert!(validate_ordered_range("numbers", 1, 100).is_ok());
        assert!(validate_ordered_range("numbers", 5, 5).is_ok());

        let err = validate_ordered_range("operations.delay_ms", 1500u64, 500u64).unwrap_err();
        assert!(err.to_string().contains("operations.delay_ms"));
    }
}

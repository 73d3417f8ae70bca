use crate::utils::error::{RegistryError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_BATCH_ID_LENGTH: usize = 20;
pub const MAX_VACCINE_NAME_LENGTH: usize = 50;

static BATCH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[0-9A-F]{{1,{}}}$", MAX_BATCH_ID_LENGTH))
        .expect("batch id pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 1 to 20 uppercase hexadecimal digits.
pub fn is_valid_batch_id(batch_id: &str) -> bool {
    BATCH_ID.is_match(batch_id)
}

/// Non-empty, no whitespace, at most 50 characters (not bytes).
pub fn is_valid_vaccine_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(char::is_whitespace)
        && name.chars().count() <= MAX_VACCINE_NAME_LENGTH
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

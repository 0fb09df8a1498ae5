// 📐 Input Validation - Birth date and name checks
// A birth date must look like DD/MM/YYYY and exist on the Gregorian calendar

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub const INVALID_FORMAT: &str = "Formato de data inválido. Use DD/MM/YYYY";
pub const INVALID_DATE: &str = "Data inválida";
pub const EMPTY_NAME: &str = "Nome não pode ser vazio";

// ============================================================================
// BIRTH DATE
// ============================================================================

/// A validated birth date, keeping the text exactly as the user typed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthDate {
    pub text: String,
    pub date: NaiveDate,
}

impl BirthDate {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Decimal digits of the date text, separators dropped
    pub fn digits(&self) -> impl Iterator<Item = u32> + '_ {
        self.text.chars().filter_map(|c| c.to_digit(10))
    }
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("date pattern is valid"))
}

/// Validate a `DD/MM/YYYY` birth date
pub fn validate_birth_date(input: &str) -> Result<BirthDate, ValidationError> {
    let text = input.trim();

    if !date_pattern().is_match(text) {
        return Err(ValidationError::new("birth_date", INVALID_FORMAT));
    }

    let date = NaiveDate::parse_from_str(text, "%d/%m/%Y")
        .map_err(|_| ValidationError::new("birth_date", INVALID_DATE))?;

    Ok(BirthDate {
        text: text.to_string(),
        date,
    })
}

/// Reject names with no visible characters
pub fn validate_name(input: &str) -> Result<&str, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name", EMPTY_NAME));
    }
    Ok(name)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_leap_day() {
        let birth = validate_birth_date("29/02/2000").unwrap();
        assert_eq!((birth.day(), birth.month(), birth.year()), (29, 2, 2000));
        assert_eq!(birth.text, "29/02/2000");
    }

    #[test]
    fn test_impossible_date() {
        let err = validate_birth_date("31/02/2000").unwrap_err();
        assert_eq!(err.field, "birth_date");
        assert_eq!(err.message, INVALID_DATE);

        // 1900 is not a leap year
        assert!(validate_birth_date("29/02/1900").is_err());
        assert!(validate_birth_date("00/01/2000").is_err());
        assert!(validate_birth_date("15/13/2000").is_err());
    }

    #[test]
    fn test_missing_leading_zeros_rejected() {
        let err = validate_birth_date("2/3/1982").unwrap_err();
        assert_eq!(err.message, INVALID_FORMAT);
    }

    #[test]
    fn test_other_separators_rejected() {
        assert!(validate_birth_date("02-03-1982").is_err());
        assert!(validate_birth_date("1982/03/02").is_err());
        assert!(validate_birth_date("02/03/82").is_err());
        assert!(validate_birth_date("").is_err());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        let arabic_indic = validate_birth_date("٠٢/٠٣/١٩٨٢").unwrap_err();
        assert_eq!(arabic_indic.message, INVALID_FORMAT);

        let fullwidth = validate_birth_date("０２/０３/１９８２").unwrap_err();
        assert_eq!(fullwidth.message, INVALID_FORMAT);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let birth = validate_birth_date("  02/03/1982 ").unwrap();
        assert_eq!(birth.text, "02/03/1982");
    }

    #[test]
    fn test_digits_skip_separators() {
        let birth = validate_birth_date("02/03/1982").unwrap();
        let digits: Vec<u32> = birth.digits().collect();
        assert_eq!(digits, vec![0, 2, 0, 3, 1, 9, 8, 2]);
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Ana ").unwrap(), "Ana");
        assert_eq!(validate_name("   ").unwrap_err().message, EMPTY_NAME);
    }
}

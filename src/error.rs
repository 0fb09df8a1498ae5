//! Error types for the numerology pipeline
//!
//! Library code returns `NumerologyResult`; binaries wrap it with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::calendar::ConversionError;
use crate::validation::ValidationError;

/// Result type alias for numerology operations
pub type NumerologyResult<T> = Result<T, NumerologyError>;

#[derive(Error, Debug)]
pub enum NumerologyError {
    /// Name or birth date rejected before any computation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Calendar collaborator failed (normally recovered inside the engine)
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl NumerologyError {
    /// Single-line message shown in place of a report
    pub fn report_line(&self) -> String {
        format!("Erro: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err: NumerologyError = ValidationError::new("birth_date", "Data inválida").into();
        assert_eq!(err.to_string(), "Data inválida");
        assert_eq!(err.report_line(), "Erro: Data inválida");
    }

    #[test]
    fn test_config_error_display() {
        let err = NumerologyError::Config {
            file: PathBuf::from("numerologia.toml"),
            message: "unknown variant".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in numerologia.toml: unknown variant"
        );
    }
}

// Numerologia - Core Library
// Exposes the numerology pipeline for the CLI, the API server, and tests

pub mod analysis;
pub mod batch;
pub mod calendar;
pub mod config;
pub mod error;
pub mod lucky;
pub mod reduction;
pub mod report;
pub mod resolver;
pub mod tables;
pub mod transliteration;
pub mod validation;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use analysis::{DominantLetter, HebrewBirthDate, NumerologyEngine, Reading};
pub use batch::{load_batch, read_batch, run_batch, BatchEntry, BatchRecord};
pub use calendar::{ArithmeticCalendar, ConversionError, HebrewCalendar, HebrewDate, MonthNameStyle};
pub use config::Config;
pub use error::{NumerologyError, NumerologyResult};
pub use lucky::{lucky_numbers, LuckyNumbers};
pub use reduction::{birth_number, digit_sum, name_number, reduce, NameNumber, Reduction};
pub use report::{generate_report, render_report, Report};
pub use resolver::{resolve_primary, resolve_secondary, PrimaryAssociation, SecondaryAssociation};
pub use tables::{HebrewSign, NumberTrait, PathDefinition};
pub use transliteration::transliterate;
pub use validation::{validate_birth_date, validate_name, BirthDate, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 🔮 Analysis Engine - Runs the whole numerology pipeline for one person
//
//   validate → transliterate → reduce → lucky numbers → resolve → calendar
//
// Produces a `Reading`: every value the report shows, already computed.

use serde::Serialize;
use tracing::{debug, warn};

use crate::calendar::{ArithmeticCalendar, HebrewCalendar, HebrewDate};
use crate::config::Config;
use crate::error::NumerologyResult;
use crate::lucky::{lucky_numbers, LuckyNumbers};
use crate::reduction::{birth_number, name_number, NameNumber, Reduction};
use crate::resolver::{resolve_primary, resolve_secondary, PrimaryAssociation, SecondaryAssociation};
use crate::tables::{hebrew_sign, letter_meaning, HebrewSign, UNKNOWN_SIGN};
use crate::validation::{validate_birth_date, validate_name, BirthDate};

// ============================================================================
// READING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DominantLetter {
    pub letter: char,
    pub count: usize,
    pub meaning: Option<&'static str>,
}

/// Hebrew side of the birth date: converted, or the reason it could not be
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HebrewBirthDate {
    Converted { date: HebrewDate },
    Failed { error: String },
}

impl HebrewBirthDate {
    pub fn date(&self) -> Option<&HebrewDate> {
        match self {
            HebrewBirthDate::Converted { date } => Some(date),
            HebrewBirthDate::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub name: String,
    pub birth_date: BirthDate,
    pub hebrew_date: HebrewBirthDate,
    pub sign: HebrewSign,
    pub name_number: NameNumber,
    pub birth_number: Reduction,
    pub lucky: LuckyNumbers,
    pub colors: Vec<&'static str>,
    pub dominant_letter: Option<DominantLetter>,
    pub primary: Vec<PrimaryAssociation>,
    pub secondary: Vec<SecondaryAssociation>,
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct NumerologyEngine {
    calendar: Box<dyn HebrewCalendar>,
}

impl NumerologyEngine {
    pub fn new() -> Self {
        Self::with_calendar(Box::new(ArithmeticCalendar::new()))
    }

    pub fn with_calendar(calendar: Box<dyn HebrewCalendar>) -> Self {
        NumerologyEngine { calendar }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_calendar(Box::new(ArithmeticCalendar::with_style(
            config.report.month_names,
        )))
    }

    /// Compute a full reading. Only validation can fail; calendar problems and
    /// missing table entries degrade individual fields instead.
    pub fn analyze(&self, name: &str, birth_date: &str) -> NumerologyResult<Reading> {
        let name = validate_name(name)?;
        let birth = validate_birth_date(birth_date)?;

        let name_number = name_number(name);
        let birth_number = birth_number(&birth);
        debug!(
            name_value = name_number.reduction.value,
            birth_value = birth_number.value,
            gematria = name_number.gematria,
            "reduced name and birth numbers"
        );

        let lucky = lucky_numbers(name_number.reduction, birth_number);
        let primary: Vec<_> = lucky.primary.iter().copied().map(resolve_primary).collect();
        let secondary: Vec<_> = lucky.secondary.iter().copied().map(resolve_secondary).collect();
        let colors = collect_colors(&primary);

        let (hebrew_date, sign) = self.hebrew_birth_date(&birth);
        let dominant_letter = dominant_letter(&name_number.hebrew);

        Ok(Reading {
            name: name.to_string(),
            birth_date: birth,
            hebrew_date,
            sign,
            name_number,
            birth_number,
            lucky,
            colors,
            dominant_letter,
            primary,
            secondary,
        })
    }

    fn hebrew_birth_date(&self, birth: &BirthDate) -> (HebrewBirthDate, HebrewSign) {
        match self.calendar.to_hebrew(birth.year(), birth.month(), birth.day()) {
            Ok(date) => {
                let sign = hebrew_sign(date.month).copied().unwrap_or(UNKNOWN_SIGN);
                (HebrewBirthDate::Converted { date }, sign)
            }
            Err(e) => {
                warn!(calendar = self.calendar.name(), error = %e, "Hebrew date conversion failed");
                (
                    HebrewBirthDate::Failed {
                        error: e.to_string(),
                    },
                    UNKNOWN_SIGN,
                )
            }
        }
    }
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors of the primary numbers, without repeats
fn collect_colors(primary: &[PrimaryAssociation]) -> Vec<&'static str> {
    let mut colors = Vec::new();
    for color in primary.iter().filter_map(|p| p.traits).flat_map(|t| t.colors.iter()) {
        if !colors.contains(color) {
            colors.push(*color);
        }
    }
    colors
}

/// Most frequent letter; ties go to the one that appears first
fn dominant_letter(hebrew: &str) -> Option<DominantLetter> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in hebrew.chars() {
        match counts.iter_mut().find(|(l, _)| *l == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }

    let mut best: Option<(char, usize)> = None;
    for (letter, count) in counts {
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((letter, count));
        }
    }

    best.map(|(letter, count)| DominantLetter {
        letter,
        count,
        meaning: letter_meaning(letter),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ConversionError;
    use crate::error::NumerologyError;

    struct BrokenCalendar;

    impl HebrewCalendar for BrokenCalendar {
        fn to_hebrew(&self, _: i32, _: u32, _: u32) -> Result<HebrewDate, ConversionError> {
            Err(ConversionError::new("calendário indisponível"))
        }
    }

    #[test]
    fn test_reading_maria_santos() {
        let reading = NumerologyEngine::new()
            .analyze("Maria Santos", "02/07/1975")
            .unwrap();

        assert_eq!(reading.name_number.reduction.value, 2);
        // 0+2+0+7+1+9+7+5 = 31 -> 4
        assert_eq!(reading.birth_number.value, 4);
        assert_eq!(reading.lucky.primary, vec![2, 4, 6]);
        assert_eq!(reading.lucky.secondary, vec![20, 4, 6]);

        let date = reading.hebrew_date.date().expect("converted");
        assert_eq!((date.day, date.month, date.year), (23, 4, 5735));
        assert_eq!(reading.sign.sign, "Câncer (Sartan)");

        assert!(matches!(
            reading.secondary[0],
            SecondaryAssociation::Path { number: 20, .. }
        ));
    }

    #[test]
    fn test_colors_deduplicated_in_order() {
        let reading = NumerologyEngine::new()
            .analyze("Maria Santos", "02/07/1975")
            .unwrap();
        assert_eq!(
            reading.colors,
            vec!["Laranja", "Azul claro", "Verde escuro", "Marrom", "Verde", "Dourado"]
        );
    }

    #[test]
    fn test_dominant_letter() {
        // מאריאסאנתעס: א appears 3 times
        let dominant = dominant_letter("מאריאסאנתעס").unwrap();
        assert_eq!(dominant.letter, 'א');
        assert_eq!(dominant.count, 3);
        assert_eq!(dominant.meaning, Some("Unidade, liderança, origem divina"));

        // Tie: first occurrence wins
        assert_eq!(dominant_letter("בג").unwrap().letter, 'ב');
        assert!(dominant_letter("").is_none());
    }

    #[test]
    fn test_conversion_failure_degrades() {
        let engine = NumerologyEngine::with_calendar(Box::new(BrokenCalendar));
        let reading = engine.analyze("Maria Santos", "02/07/1975").unwrap();

        assert_eq!(reading.sign, UNKNOWN_SIGN);
        assert_eq!(
            reading.hebrew_date,
            HebrewBirthDate::Failed {
                error: "calendário indisponível".to_string()
            }
        );
        // Numbers are unaffected
        assert_eq!(reading.lucky.primary, vec![2, 4, 6]);
    }

    #[test]
    fn test_master_number_is_unmapped() {
        let reading = NumerologyEngine::new().analyze("Chaim", "29/02/2000").unwrap();
        assert_eq!(reading.lucky.primary, vec![5, 6, 11]);
        assert!(reading.primary[2].traits.is_none());
        assert!(reading.primary[0].traits.is_some());
    }

    #[test]
    fn test_validation_short_circuits() {
        let err = NumerologyEngine::new()
            .analyze("Maria", "31/02/2000")
            .unwrap_err();
        assert!(matches!(err, NumerologyError::Validation(_)));

        let err = NumerologyEngine::new().analyze("  ", "02/07/1975").unwrap_err();
        assert!(matches!(err, NumerologyError::Validation(_)));
    }

    #[test]
    fn test_reading_serializes() {
        let reading = NumerologyEngine::new().analyze("Ana", "02/03/1982").unwrap();
        let json = serde_json::to_value(&reading).unwrap();

        assert_eq!(json["name"], "Ana");
        assert_eq!(json["hebrew_date"]["status"], "converted");
        assert_eq!(json["lucky"]["primary"], serde_json::json!([7, 5]));
    }
}

// 📅 Hebrew Calendar - Gregorian to Hebrew date conversion
//
// The engine only depends on the `HebrewCalendar` trait, so a failing or
// fake calendar can be plugged in. `ArithmeticCalendar` is the default:
// fixed-day arithmetic over the molad with the four postponement rules.
//
// Month numbering: Nisan = 1 ... Tishrei = 7 ... Adar = 12, Adar II = 13.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// CORE TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HebrewDate {
    pub day: u32,
    /// 1-13, Nisan first
    pub month: u32,
    pub year: i64,
    pub month_name: String,
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConversionError {
    pub message: String,
}

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        ConversionError {
            message: message.into(),
        }
    }
}

/// How month names are spelled in a `HebrewDate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNameStyle {
    /// Nissan, Iyar, ... Adar I / Adar II
    #[default]
    Transliterated,
    /// ניסן, אייר, ...
    Hebrew,
}

impl FromStr for MonthNameStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transliterated" => Ok(MonthNameStyle::Transliterated),
            "hebrew" => Ok(MonthNameStyle::Hebrew),
            other => Err(format!("unknown month name style '{}'", other)),
        }
    }
}

// ============================================================================
// CALENDAR TRAIT
// ============================================================================

/// Gregorian -> Hebrew conversion collaborator
pub trait HebrewCalendar: Send + Sync {
    fn to_hebrew(&self, year: i32, month: u32, day: u32) -> Result<HebrewDate, ConversionError>;

    /// Name used in logs
    fn name(&self) -> &str {
        "unnamed"
    }
}

// ============================================================================
// ARITHMETIC CALENDAR
// ============================================================================

/// Fixed day number of 1 Tishrei AM 1 (Julian 7 Oct 3761 BCE), day 1 = 1 Jan 1 CE
const HEBREW_EPOCH: i64 = -1_373_427;

const TRANSLITERATED_MONTHS: [&str; 13] = [
    "Nissan", "Iyar", "Sivan", "Tamuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

const HEBREW_MONTHS: [&str; 13] = [
    "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול", "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר",
    "אדר ב׳",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticCalendar {
    style: MonthNameStyle,
}

impl ArithmeticCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: MonthNameStyle) -> Self {
        ArithmeticCalendar { style }
    }

    fn month_name(&self, year: i64, month: u32) -> Option<&'static str> {
        let leap_adar = month == 12 && is_leap_year(year);
        let index = (month as usize).checked_sub(1)?;
        match self.style {
            MonthNameStyle::Transliterated if leap_adar => Some("Adar I"),
            MonthNameStyle::Hebrew if leap_adar => Some("אדר א׳"),
            MonthNameStyle::Transliterated => TRANSLITERATED_MONTHS.get(index).copied(),
            MonthNameStyle::Hebrew => HEBREW_MONTHS.get(index).copied(),
        }
    }
}

impl HebrewCalendar for ArithmeticCalendar {
    fn to_hebrew(&self, year: i32, month: u32, day: u32) -> Result<HebrewDate, ConversionError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ConversionError::new(format!("{:02}/{:02}/{:04} não existe", day, month, year))
        })?;

        let fixed = i64::from(date.num_days_from_ce());
        if fixed < HEBREW_EPOCH {
            return Err(ConversionError::new("data anterior ao calendário hebraico"));
        }

        let (h_year, h_month, h_day) = hebrew_from_fixed(fixed);
        debug!(fixed, h_year, h_month, h_day, "converted Gregorian date");

        let month_name = self
            .month_name(h_year, h_month)
            .ok_or_else(|| ConversionError::new(format!("mês hebraico {} inválido", h_month)))?;

        Ok(HebrewDate {
            day: h_day,
            month: h_month,
            year: h_year,
            month_name: month_name.to_string(),
        })
    }

    fn name(&self) -> &str {
        "arithmetic"
    }
}

// ============================================================================
// CALENDAR ARITHMETIC
// ============================================================================

pub fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

fn last_month_of_year(year: i64) -> u32 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Days from the epoch to the molad of Tishrei, with the weekday postponement
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(25_920);

    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Keeps year lengths within 353-355 / 383-385 days
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);

    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

fn new_year(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

fn days_in_year(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

fn last_day_of_month(year: i64, month: u32) -> u32 {
    let short = match month {
        2 | 4 | 6 | 10 | 13 => true,
        12 => !is_leap_year(year),
        8 => !matches!(days_in_year(year), 355 | 385),
        9 => matches!(days_in_year(year), 353 | 383),
        _ => false,
    };

    if short {
        29
    } else {
        30
    }
}

fn fixed_from_hebrew(year: i64, month: u32, day: u32) -> i64 {
    let month_days = |range: std::ops::Range<u32>| -> i64 {
        range.map(|m| i64::from(last_day_of_month(year, m))).sum()
    };

    let before_month = if month < 7 {
        month_days(7..last_month_of_year(year) + 1) + month_days(1..month)
    } else {
        month_days(7..month)
    };

    new_year(year) + i64::from(day) - 1 + before_month
}

fn hebrew_from_fixed(fixed: i64) -> (i64, u32, u32) {
    // Mean year length is 35975351/98496 days
    let approx = ((fixed - HEBREW_EPOCH) * 98_496).div_euclid(35_975_351) + 1;

    let mut year = approx - 1;
    while new_year(year + 1) <= fixed {
        year += 1;
    }

    let mut month = if fixed < fixed_from_hebrew(year, 1, 1) { 7 } else { 1 };
    while fixed > fixed_from_hebrew(year, month, last_day_of_month(year, month)) {
        month += 1;
    }

    let day = fixed - fixed_from_hebrew(year, month, 1) + 1;
    (year, month, day as u32)
}

// ============================================================================
// TESTS
// ============================================================================

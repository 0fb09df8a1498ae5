// ✡️ Hebrew Signs - Zodiac, tribe, letter and quality per Hebrew month
// Month numbering starts at Nisan (1); 13 is Adar II of leap years

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HebrewSign {
    pub sign: &'static str,
    pub tribe: &'static str,
    pub letter: &'static str,
    pub quality: &'static str,
}

const fn sign(
    sign: &'static str,
    tribe: &'static str,
    letter: &'static str,
    quality: &'static str,
) -> HebrewSign {
    HebrewSign { sign, tribe, letter, quality }
}

/// Rendered in place of a sign when the calendar conversion fails
pub const UNKNOWN_SIGN: HebrewSign = sign("Desconhecido", "", "", "");

static SIGNS: [HebrewSign; 13] = [
    sign("Áries (Taleh)", "Judá", "Heh (ה)", "Fala"),
    sign("Touro (Shor)", "Issacar", "Vav (ו)", "Pensamento"),
    sign("Gêmeos (Teomim)", "Zebulom", "Zayin (ז)", "Movimento"),
    sign("Câncer (Sartan)", "Rúben", "Chet (ח)", "Visão"),
    sign("Leão (Aryeh)", "Simeão", "Tet (ט)", "Audição"),
    sign("Virgem (Betulah)", "Gade", "Yud (י)", "Ação"),
    sign("Libra (Moznayim)", "Efraim", "Lamed (ל)", "Intimidade"),
    sign("Escorpião (Akrav)", "Manassés", "Nun (נ)", "Olfato"),
    sign("Sagitário (Keshet)", "Benjamim", "Samech (ס)", "Sono"),
    sign("Capricórnio (Gedi)", "Dã", "Ayin (ע)", "Ira"),
    sign("Aquário (Dli)", "Aser", "Tzadi (צ)", "Paladar"),
    sign("Peixes (Dagim)", "Naftali", "Kuf (ק)", "Riso"),
    sign("Peixes (Dagim)", "Naftali", "Kuf (ק)", "Riso"),
];

/// Sign for a Hebrew month index (1-13)
pub fn hebrew_sign(month: u32) -> Option<&'static HebrewSign> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    SIGNS.get(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_has_a_sign() {
        for m in 1..=13 {
            let s = hebrew_sign(m).expect("sign for month");
            assert!(!s.sign.is_empty());
            assert!(!s.tribe.is_empty());
        }
    }

    #[test]
    fn test_month_bounds() {
        assert!(hebrew_sign(0).is_none());
        assert!(hebrew_sign(14).is_none());
    }

    #[test]
    fn test_adar_two_repeats_adar() {
        assert_eq!(hebrew_sign(12), hebrew_sign(13));
        assert_eq!(hebrew_sign(7).map(|s| s.sign), Some("Libra (Moznayim)"));
    }

    #[test]
    fn test_unknown_placeholder() {
        assert_eq!(UNKNOWN_SIGN.sign, "Desconhecido");
        assert!(UNKNOWN_SIGN.tribe.is_empty());
    }
}

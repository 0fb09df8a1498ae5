// 🔤 Hebrew Letters - Gematria values and symbolic meanings
// Final forms (sofit) carry the value of their base letter

use serde::Serialize;

// ============================================================================
// LETTER DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HebrewLetter {
    /// The Hebrew character itself
    pub letter: char,

    /// Transliterated name (Aleph, Bet, ...)
    pub name: &'static str,

    /// Gematria value (1-400)
    pub value: u32,

    /// Base letter for final forms, `None` for base letters
    pub base: Option<char>,
}

const fn base(letter: char, name: &'static str, value: u32) -> HebrewLetter {
    HebrewLetter { letter, name, value, base: None }
}

const fn sofit(letter: char, name: &'static str, value: u32, of: char) -> HebrewLetter {
    HebrewLetter { letter, name, value, base: Some(of) }
}

/// 22 base letters + 5 final forms
pub static LETTERS: [HebrewLetter; 27] = [
    base('א', "Aleph", 1),
    base('ב', "Bet", 2),
    base('ג', "Gimel", 3),
    base('ד', "Dalet", 4),
    base('ה', "Heh", 5),
    base('ו', "Vav", 6),
    base('ז', "Zayin", 7),
    base('ח', "Chet", 8),
    base('ט', "Tet", 9),
    base('י', "Yud", 10),
    base('כ', "Kaf", 20),
    sofit('ך', "Kaf Sofit", 20, 'כ'),
    base('ל', "Lamed", 30),
    base('מ', "Mem", 40),
    sofit('ם', "Mem Sofit", 40, 'מ'),
    base('נ', "Nun", 50),
    sofit('ן', "Nun Sofit", 50, 'נ'),
    base('ס', "Samech", 60),
    base('ע', "Ayin", 70),
    base('פ', "Peh", 80),
    sofit('ף', "Peh Sofit", 80, 'פ'),
    base('צ', "Tzadi", 90),
    sofit('ץ', "Tzadi Sofit", 90, 'צ'),
    base('ק', "Kuf", 100),
    base('ר', "Resh", 200),
    base('ש', "Shin", 300),
    base('ת', "Tav", 400),
];

static MEANINGS: [(char, &str); 22] = [
    ('א', "Unidade, liderança, origem divina"),
    ('ב', "Dualidade, bênção, construção"),
    ('ג', "Generosidade, recompensa, movimento"),
    ('ד', "Porta, humildade, oportunidade"),
    ('ה', "Sopro, visão espiritual, revelação"),
    ('ו', "Conexão, continuidade, harmonia"),
    ('ז', "Espada, proteção, decisão"),
    ('ח', "Vida, graça, equilíbrio"),
    ('ט', "Serpente, transformação, purificação"),
    ('י', "Criação, potencial, mão divina"),
    ('כ', "Abertura, receptividade, poder"),
    ('ל', "Aprendizado, ensino, aspiração"),
    ('מ', "Água, sabedoria, fluxo"),
    ('נ', "Transformação, fidelidade, alma"),
    ('ס', "Apoio, proteção, estabilidade"),
    ('ע', "Visão, percepção, profundidade"),
    ('פ', "Boca, expressão, comunicação"),
    ('צ', "Justiça, retidão, propósito"),
    ('ק', "Sagrado, transcendência, elevação"),
    ('ר', "Cabeça, liderança, início"),
    ('ש', "Fogo, paixão, integração"),
    ('ת', "Completude, verdade, manifestação"),
];

// ============================================================================
// LOOKUPS
// ============================================================================

pub fn letter(c: char) -> Option<&'static HebrewLetter> {
    LETTERS.iter().find(|l| l.letter == c)
}

/// Gematria value of a single letter; non-Hebrew characters count 0
pub fn letter_value(c: char) -> u32 {
    letter(c).map(|l| l.value).unwrap_or(0)
}

/// Symbolic meaning of a letter. Final forms resolve through their base letter.
pub fn letter_meaning(c: char) -> Option<&'static str> {
    let key = letter(c).and_then(|l| l.base).unwrap_or(c);
    MEANINGS.iter().find(|(l, _)| *l == key).map(|(_, m)| *m)
}

/// Sum of the gematria values of every letter in `hebrew`
pub fn gematria(hebrew: &str) -> u32 {
    hebrew.chars().map(letter_value).sum()
}

// ============================================================================
// TESTS
// ============================================================================

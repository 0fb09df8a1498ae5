// 🔠 Transliteration - Latin names to Hebrew letters
// Longest match wins: digraphs are tried before single characters

use serde::Serialize;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransliterationRule {
    /// Lowercase Latin pattern, one or two characters
    pub pattern: &'static str,

    /// Hebrew letter emitted when the pattern matches
    pub letter: char,
}

const fn rule(pattern: &'static str, letter: char) -> TransliterationRule {
    TransliterationRule { pattern, letter }
}

/// Emitted for any character without a rule
pub const FALLBACK_LETTER: char = 'א';

pub static DIGRAPHS: [TransliterationRule; 6] = [
    rule("ch", 'ח'),
    rule("kh", 'כ'),
    rule("ss", 'ס'),
    rule("ph", 'פ'),
    rule("tz", 'צ'),
    rule("sh", 'ש'),
];

pub static SINGLES: [TransliterationRule; 20] = [
    rule("a", 'א'),
    rule("b", 'ב'),
    rule("g", 'ג'),
    rule("d", 'ד'),
    rule("h", 'ה'),
    rule("v", 'ו'),
    rule("w", 'ו'),
    rule("z", 'ז'),
    rule("i", 'י'),
    rule("y", 'י'),
    rule("k", 'כ'),
    rule("l", 'ל'),
    rule("m", 'מ'),
    rule("n", 'נ'),
    rule("s", 'ס'),
    rule("o", 'ע'),
    rule("p", 'פ'),
    rule("q", 'ק'),
    rule("r", 'ר'),
    rule("t", 'ת'),
];

// 'e' reads as a vowel carrier, same as 'a'
static VOWEL_CARRIERS: [TransliterationRule; 1] = [rule("e", 'א')];

fn find_digraph(first: char, second: char) -> Option<char> {
    DIGRAPHS
        .iter()
        .find(|r| {
            let mut p = r.pattern.chars();
            p.next() == Some(first) && p.next() == Some(second)
        })
        .map(|r| r.letter)
}

fn find_single(c: char) -> Option<char> {
    SINGLES
        .iter()
        .chain(VOWEL_CARRIERS.iter())
        .find(|r| r.pattern.chars().eq(std::iter::once(c)))
        .map(|r| r.letter)
}

// ============================================================================
// TRANSLITERATOR
// ============================================================================

/// Map a Latin-script name to Hebrew letters.
///
/// Case-insensitive, whitespace ignored, never fails: unknown characters
/// become [`FALLBACK_LETTER`]. The result has at most as many letters as the
/// input has non-space characters.
pub fn transliterate(name: &str) -> String {
    let chars: Vec<char> = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut hebrew = String::with_capacity(chars.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            if let Some(letter) = find_digraph(chars[i], next) {
                hebrew.push(letter);
                i += 2;
                continue;
            }
        }

        hebrew.push(find_single(chars[i]).unwrap_or(FALLBACK_LETTER));
        i += 1;
    }

    hebrew
}

// ============================================================================
// TESTS
// ============================================================================

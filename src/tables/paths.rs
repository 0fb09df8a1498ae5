// 🌳 Tree of Life - The 22 paths between the sefirot (numbered 11-32)

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathDefinition {
    pub number: u32,
    pub letter: &'static str,
    pub connection: &'static str,
    pub meaning: &'static str,
}

const fn path(
    number: u32,
    letter: &'static str,
    connection: &'static str,
    meaning: &'static str,
) -> PathDefinition {
    PathDefinition { number, letter, connection, meaning }
}

pub const FIRST_PATH: u32 = 11;
pub const LAST_PATH: u32 = 32;

pub static PATHS: [PathDefinition; 22] = [
    path(11, "Aleph (א)", "Keter-Chochmah", "Respiração divina, início espiritual"),
    path(12, "Bet (ב)", "Keter-Binah", "Criação, estrutura inicial"),
    path(13, "Gimel (ג)", "Keter-Tiferet", "Generosidade, equilíbrio cósmico"),
    path(14, "Dalet (ד)", "Chochmah-Binah", "Porta da sabedoria, humildade"),
    path(15, "Heh (ה)", "Chochmah-Tiferet", "Visão espiritual, harmonia"),
    path(16, "Vav (ו)", "Chochmah-Chesed", "Conexão, amor universal"),
    path(17, "Zayin (ז)", "Binah-Tiferet", "Proteção, decisão espiritual"),
    path(18, "Chet (ח)", "Binah-Gevurah", "Vida, equilíbrio de forças"),
    path(19, "Tet (ט)", "Chesed-Gevurah", "Transformação, purificação"),
    path(20, "Yud (י)", "Chesed-Tiferet", "Criação, potencial divino"),
    path(21, "Kaf (כ)", "Chesed-Netzach", "Receptividade, poder espiritual"),
    path(22, "Lamed (ל)", "Gevurah-Tiferet", "Aprendizado, aspiração"),
    path(23, "Mem (מ)", "Gevurah-Hod", "Sabedoria fluida, introspecção"),
    path(24, "Nun (נ)", "Tiferet-Netzach", "Transformação, fidelidade"),
    path(25, "Samech (ס)", "Tiferet-Hod", "Apoio, estabilidade espiritual"),
    path(26, "Ayin (ע)", "Tiferet-Yesod", "Visão profunda, conexão com a alma"),
    path(27, "Peh (פ)", "Netzach-Hod", "Expressão, comunicação divina"),
    path(28, "Tzadi (צ)", "Netzach-Yesod", "Justiça, propósito elevado"),
    path(29, "Kuf (ק)", "Hod-Yesod", "Sagrado, transcendência"),
    path(30, "Resh (ר)", "Hod-Malkhut", "Liderança, manifestação inicial"),
    path(31, "Shin (ש)", "Netzach-Malkhut", "Paixão, integração espiritual"),
    path(32, "Tav (ת)", "Yesod-Malkhut", "Completude, verdade manifestada"),
];

pub fn path_definition(number: u32) -> Option<&'static PathDefinition> {
    PATHS.iter().find(|p| p.number == number)
}

/// True when `number` names one of the 22 paths
pub fn is_path_number(number: u32) -> bool {
    (FIRST_PATH..=LAST_PATH).contains(&number)
}

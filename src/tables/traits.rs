// 🎨 Number Traits - Colors, sefirot, gems and elements for 1-9
// Master numbers and anything above 9 have no entry

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberTrait {
    pub number: u32,
    pub colors: &'static [&'static str],
    pub characteristics: &'static str,
    pub sefira: &'static str,
    pub letter: &'static str,
    pub gemstone: &'static str,
    pub element: &'static str,
}

pub static NUMBER_TRAITS: [NumberTrait; 9] = [
    NumberTrait {
        number: 1,
        colors: &["Branco", "Vermelho"],
        characteristics: "Liderança, independência, iniciativa",
        sefira: "Keter (Coroa)",
        letter: "Aleph (א)",
        gemstone: "Diamante",
        element: "Fogo",
    },
    NumberTrait {
        number: 2,
        colors: &["Laranja", "Azul claro"],
        characteristics: "Cooperação, sensibilidade, diplomacia",
        sefira: "Chochmah (Sabedoria)",
        letter: "Bet (ב)",
        gemstone: "Pérola",
        element: "Água",
    },
    NumberTrait {
        number: 3,
        colors: &["Amarelo", "Rosa"],
        characteristics: "Criatividade, expressão, otimismo",
        sefira: "Chesed (Bondade)",
        letter: "Gimel (ג)",
        gemstone: "Safira",
        element: "Fogo",
    },
    NumberTrait {
        number: 4,
        colors: &["Verde escuro", "Marrom"],
        characteristics: "Estabilidade, organização, trabalho árduo",
        sefira: "Gevurah (Força)",
        letter: "Dalet (ד)",
        gemstone: "Esmeralda",
        element: "Terra",
    },
    NumberTrait {
        number: 5,
        colors: &["Vermelho", "Laranja"],
        characteristics: "Liberdade, versatilidade, aventura",
        sefira: "Hod (Esplendor)",
        letter: "Heh (ה)",
        gemstone: "Turquesa",
        element: "Ar",
    },
    NumberTrait {
        number: 6,
        colors: &["Verde", "Dourado"],
        characteristics: "Harmonia, responsabilidade, cuidado",
        sefira: "Tiferet (Beleza)",
        letter: "Vav (ו)",
        gemstone: "Quartzo rosa",
        element: "Ar",
    },
    NumberTrait {
        number: 7,
        colors: &["Roxo", "Azul escuro"],
        characteristics: "Espiritualidade, introspecção, sabedoria",
        sefira: "Netzach (Vitória)",
        letter: "Zayin (ז)",
        gemstone: "Ametista",
        element: "Água",
    },
    NumberTrait {
        number: 8,
        colors: &["Azul escuro", "Preto"],
        characteristics: "Abundância, poder, realização",
        sefira: "Binah (Compreensão)",
        letter: "Chet (ח)",
        gemstone: "Ônix",
        element: "Terra",
    },
    NumberTrait {
        number: 9,
        colors: &["Violeta", "Dourado"],
        characteristics: "Humanitarismo, compaixão, idealismo",
        sefira: "Yesod (Fundação)",
        letter: "Tet (ט)",
        gemstone: "Topázio",
        element: "Ar",
    },
];

pub fn number_trait(number: u32) -> Option<&'static NumberTrait> {
    NUMBER_TRAITS.iter().find(|t| t.number == number)
}

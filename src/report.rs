// 📝 Report Assembler - Renders a Reading as a Markdown report
// No computation happens here; everything shown is already in the Reading

use std::fmt;

use crate::analysis::{HebrewBirthDate, NumerologyEngine, Reading};
use crate::resolver::{PrimaryAssociation, SecondaryAssociation};
use crate::tables::NumberTrait;

pub const UNMAPPED: &str = "não mapeado";
const NO_MEANING: &str = "Significado não disponível";

/// Display adapter: `Report(&reading).to_string()` is the full report
pub struct Report<'a>(pub &'a Reading);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        writeln!(f, "## 🔮 Relatório Numerológico Cabalístico")?;
        writeln!(f)?;
        writeln!(f, "- **Nome:** {}", r.name)?;
        writeln!(f, "- **Data de Nascimento (Gregoriana):** {}", r.birth_date.text)?;
        match &r.hebrew_date {
            HebrewBirthDate::Converted { date } => {
                writeln!(f, "- **Data de Nascimento (Hebraica):** {}", date)?
            }
            HebrewBirthDate::Failed { error } => {
                writeln!(f, "- **Data de Nascimento (Hebraica):** Erro na conversão: {}", error)?
            }
        }
        writeln!(f)?;

        writeln!(f, "### 🍀 Números da Sorte")?;
        writeln!(f)?;
        writeln!(f, "#### Primários")?;
        writeln!(f, "{}", join_numbers(&r.lucky.primary))?;
        writeln!(f)?;
        writeln!(f, "#### Secundários")?;
        writeln!(f, "{}", join_numbers(&r.lucky.secondary))?;
        writeln!(f)?;

        writeln!(f, "### 🎨 Cores Associadas")?;
        writeln!(f)?;
        if r.colors.is_empty() {
            writeln!(f, "Nenhuma cor associada")?;
        } else {
            writeln!(f, "{}", r.colors.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "### ✡️ Signo Hebraico")?;
        writeln!(f)?;
        writeln!(f, "- **Signo:** {}", r.sign.sign)?;
        writeln!(f, "- **Tribo:** {}", r.sign.tribe)?;
        writeln!(f, "- **Letra:** {}", r.sign.letter)?;
        writeln!(f, "- **Qualidade:** {}", r.sign.quality)?;
        writeln!(f)?;

        writeln!(f, "### 📜 Análise do Nome")?;
        writeln!(f)?;
        writeln!(f, "- **Nome em Hebraico:** {}", r.name_number.hebrew)?;
        writeln!(f, "- **Valor Guemátrico:** {}", r.name_number.gematria)?;
        writeln!(f, "- **Número do Nome:** {}", r.name_number.reduction.value)?;
        writeln!(f, "- **Número de Nascimento:** {}", r.birth_number.value)?;
        match &r.dominant_letter {
            Some(d) => writeln!(
                f,
                "- **Letra Dominante:** {} ({}x): {}",
                d.letter,
                d.count,
                d.meaning.unwrap_or(NO_MEANING)
            )?,
            None => writeln!(f, "- **Letra Dominante:** {}", NO_MEANING)?,
        }
        writeln!(f)?;

        writeln!(f, "### 🔢 Associações dos Números Primários")?;
        for assoc in &r.primary {
            writeln!(f)?;
            write_primary(f, assoc)?;
        }
        writeln!(f)?;

        writeln!(f, "### 🌳 Caminhos e Associações dos Números Secundários")?;
        for assoc in &r.secondary {
            writeln!(f)?;
            write_secondary(f, assoc)?;
        }

        Ok(())
    }
}

fn join_numbers(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_traits(f: &mut fmt::Formatter<'_>, t: &NumberTrait) -> fmt::Result {
    writeln!(f, "- **Cores:** {}", t.colors.join(", "))?;
    writeln!(f, "- **Características:** {}", t.characteristics)?;
    writeln!(f, "- **Sefira:** {}", t.sefira)?;
    writeln!(f, "- **Letra:** {}", t.letter)?;
    writeln!(f, "- **Pedra:** {}", t.gemstone)?;
    writeln!(f, "- **Elemento:** {}", t.element)
}

fn write_primary(f: &mut fmt::Formatter<'_>, assoc: &PrimaryAssociation) -> fmt::Result {
    writeln!(f, "#### Número {}", assoc.number)?;
    match assoc.traits {
        Some(t) => write_traits(f, t),
        None => writeln!(f, "- {}", UNMAPPED),
    }
}

fn write_secondary(f: &mut fmt::Formatter<'_>, assoc: &SecondaryAssociation) -> fmt::Result {
    match assoc {
        SecondaryAssociation::Path { number, path } => {
            writeln!(f, "#### Número {}: Caminho {} da Árvore da Vida", number, path.number)?;
            writeln!(f, "- **Letra:** {}", path.letter)?;
            writeln!(f, "- **Conexão:** {}", path.connection)?;
            writeln!(f, "- **Significado:** {}", path.meaning)
        }
        SecondaryAssociation::Reduced {
            number,
            reduced,
            traits,
        } => {
            if number == reduced {
                writeln!(f, "#### Número {}", number)?;
            } else {
                writeln!(f, "#### Número {} (reduzido a {})", number, reduced)?;
            }
            match traits {
                Some(t) => write_traits(f, t),
                None => writeln!(f, "- {}", UNMAPPED),
            }
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub fn render_report(reading: &Reading) -> String {
    Report(reading).to_string()
}

impl NumerologyEngine {
    /// Full report text, or a single `Erro: ...` line when the input is rejected
    pub fn report(&self, name: &str, birth_date: &str) -> String {
        match self.analyze(name, birth_date) {
            Ok(reading) => render_report(&reading),
            Err(e) => e.report_line(),
        }
    }
}

/// Report with the default engine (arithmetic calendar, transliterated months)
pub fn generate_report(name: &str, birth_date: &str) -> String {
    NumerologyEngine::new().report(name, birth_date)
}

// ============================================================================
// TESTS
// ============================================================================

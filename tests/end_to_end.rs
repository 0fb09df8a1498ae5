// End-to-end report generation through the public API

use numerologia::{
    generate_report, ConversionError, HebrewCalendar, HebrewDate, MonthNameStyle, NumerologyEngine,
    ArithmeticCalendar,
};

struct UnavailableCalendar;

impl HebrewCalendar for UnavailableCalendar {
    fn to_hebrew(&self, _: i32, _: u32, _: u32) -> Result<HebrewDate, ConversionError> {
        Err(ConversionError::new("biblioteca de calendário ausente"))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

fn lucky_section(report: &str) -> &str {
    let start = report.find("Números da Sorte").expect("lucky numbers section");
    let rest = &report[start..];
    let end = rest.find("\n### ").unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn test_maria_santos_report() {
    let report = generate_report("Maria Santos", "02/07/1975");

    assert!(!report.starts_with("Erro:"));
    assert!(!report.contains("Erro:"));

    let lucky = lucky_section(&report);
    let subsections: Vec<&str> = lucky
        .lines()
        .filter(|l| l.starts_with("#### "))
        .collect();
    assert_eq!(subsections, vec!["#### Primários", "#### Secundários"]);

    let sign_line = report
        .lines()
        .find(|l| l.starts_with("- **Signo:**"))
        .expect("sign line");
    assert!(!sign_line.trim_start_matches("- **Signo:**").trim().is_empty());

    println!("✅ End-to-end report:\n{}", report);
}

#[test]
fn test_calendar_failure_still_renders() {
    let engine = NumerologyEngine::with_calendar(Box::new(UnavailableCalendar));
    let report = engine.report("Maria Santos", "02/07/1975");

    assert!(!report.starts_with("Erro:"));
    assert!(report.contains("- **Signo:** Desconhecido"));
    assert!(report.contains("Erro na conversão: biblioteca de calendário ausente"));
    assert!(report.contains("#### Primários\n2, 4, 6"));
}

#[test]
fn test_impossible_date_is_the_whole_output() {
    assert_eq!(generate_report("Maria Santos", "31/02/2000"), "Erro: Data inválida");
}

#[test]
fn test_hebrew_month_names() {
    let engine = NumerologyEngine::with_calendar(Box::new(ArithmeticCalendar::with_style(
        MonthNameStyle::Hebrew,
    )));
    let report = engine.report("Ana", "02/03/1982");
    assert!(report.contains("7 אדר 5742"), "{}", report);
}

#[test]
fn test_reports_are_deterministic() {
    let a = generate_report("Maylan Passos Oliveira", "02/03/1982");
    let b = generate_report("Maylan Passos Oliveira", "02/03/1982");
    assert_eq!(a, b);
    // 731 -> 11 is kept as a master number
    assert!(a.contains("- **Número do Nome:** 11"));
}

//! Numerologia CLI - Kabbalistic numerology reports
//!
//! Usage: numerologia <COMMAND>
//!
//! Commands:
//!   report  Generate the report for one person
//!   batch   Generate reports for every row of a CSV file
//!   path    Show a tree-of-life path (11-32)
//!   sign    Show the Hebrew sign of a month (1-13)
//!   trait   Show the traits of a number (1-9)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use numerologia::tables::{hebrew_sign, number_trait, path_definition};
use numerologia::{load_batch, render_report, run_batch, Config, NumerologyEngine};

const LOG_ENV: &str = "NUMEROLOGIA_LOG";

/// Numerologia - Kabbalistic numerology reports
#[derive(Parser, Debug)]
#[command(name = "numerologia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./numerologia.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the report for one person
    Report {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Birth date as DD/MM/YYYY
        #[arg(short, long)]
        birth_date: String,

        /// Print the computed reading as JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Generate reports for every row of a CSV file (headers: name,birth_date)
    Batch {
        /// CSV file to read
        #[arg(short, long)]
        input: PathBuf,

        /// One JSON object per line instead of text reports
        #[arg(long)]
        json: bool,
    },

    /// Show a tree-of-life path (11-32)
    Path { number: u32 },

    /// Show the Hebrew sign of a month (1 = Nisan ... 13 = Adar II)
    Sign { month: u32 },

    /// Show the traits of a number (1-9)
    Trait { number: u32 },
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    let engine = NumerologyEngine::from_config(&config);

    match cli.command {
        Commands::Report {
            name,
            birth_date,
            json,
        } => run_report(&engine, &name, &birth_date, json),
        Commands::Batch { input, json } => run_batch_file(&engine, &input, json),
        Commands::Path { number } => {
            show_path(number);
            Ok(())
        }
        Commands::Sign { month } => {
            show_sign(month);
            Ok(())
        }
        Commands::Trait { number } => {
            show_trait(number);
            Ok(())
        }
    }
}

fn run_report(engine: &NumerologyEngine, name: &str, birth_date: &str, json: bool) -> Result<()> {
    let reading = match engine.analyze(name, birth_date) {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("{}", e.report_line());
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print!("{}", render_report(&reading));
    }

    Ok(())
}

fn run_batch_file(engine: &NumerologyEngine, input: &std::path::Path, json: bool) -> Result<()> {
    let records = load_batch(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let entries = run_batch(engine, &records);

    for entry in &entries {
        if json {
            println!("{}", serde_json::to_string(entry)?);
        } else {
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("📄 Linha {}: {}", entry.line, entry.name);
            println!("{}", entry.report);
        }
    }

    let failed = entries.iter().filter(|e| e.is_error()).count();
    eprintln!("✓ {} relatórios gerados, {} com erro", entries.len() - failed, failed);

    Ok(())
}

fn show_path(number: u32) {
    match path_definition(number) {
        Some(p) => {
            println!("🌳 Caminho {}", p.number);
            println!("   Letra:       {}", p.letter);
            println!("   Conexão:     {}", p.connection);
            println!("   Significado: {}", p.meaning);
        }
        None => println!("❌ Caminho {} não mapeado (use 11-32)", number),
    }
}

fn show_sign(month: u32) {
    match hebrew_sign(month) {
        Some(s) => {
            println!("✡️  Mês {}", month);
            println!("   Signo:     {}", s.sign);
            println!("   Tribo:     {}", s.tribe);
            println!("   Letra:     {}", s.letter);
            println!("   Qualidade: {}", s.quality);
        }
        None => println!("❌ Mês {} não mapeado (use 1-13)", month),
    }
}

fn show_trait(number: u32) {
    match number_trait(number) {
        Some(t) => {
            println!("🔢 Número {}", t.number);
            println!("   Cores:           {}", t.colors.join(", "));
            println!("   Características: {}", t.characteristics);
            println!("   Sefira:          {}", t.sefira);
            println!("   Letra:           {}", t.letter);
            println!("   Pedra:           {}", t.gemstone);
            println!("   Elemento:        {}", t.element);
        }
        None => println!("❌ Número {} não mapeado", number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(5), "debug");
    }

    #[test]
    fn test_verbose_flag_counts() {
        let cli = Cli::try_parse_from(["numerologia", "-vv", "trait", "7"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Trait { number: 7 }));
    }
}

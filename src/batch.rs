// 📂 Batch Mode - Reports for every row of a CSV file
// Expected headers: name,birth_date

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::analysis::{NumerologyEngine, Reading};
use crate::error::NumerologyResult;
use crate::report::render_report;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchRecord {
    pub name: String,
    pub birth_date: String,
}

/// One processed row. Rejected rows keep their `Erro:` line as the report.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// 1-based line in the CSV file (header is line 1)
    pub line: usize,
    pub name: String,
    pub birth_date: String,
    pub report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<Reading>,
}

impl BatchEntry {
    pub fn is_error(&self) -> bool {
        self.reading.is_none()
    }
}

pub fn load_batch(csv_path: &Path) -> NumerologyResult<Vec<BatchRecord>> {
    let file = std::fs::File::open(csv_path)?;
    read_batch(file)
}

pub fn read_batch<R: Read>(reader: R) -> NumerologyResult<Vec<BatchRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: BatchRecord = result?;
        records.push(record);
    }

    debug!(count = records.len(), "loaded batch records");
    Ok(records)
}

pub fn run_batch(engine: &NumerologyEngine, records: &[BatchRecord]) -> Vec<BatchEntry> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let (report, reading) = match engine.analyze(&record.name, &record.birth_date) {
                Ok(reading) => (render_report(&reading), Some(reading)),
                Err(e) => (e.report_line(), None),
            };

            BatchEntry {
                line: i + 2,
                name: record.name.clone(),
                birth_date: record.birth_date.clone(),
                report,
                reading,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumerologyError;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "name,birth_date\nAna,02/03/1982\nMaria Santos, 02/07/1975\nBruno,31/02/2000\n";

    #[test]
    fn test_read_batch() {
        let records = read_batch(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].name, "Maria Santos");
        assert_eq!(records[1].birth_date, "02/07/1975");
    }

    #[test]
    fn test_load_batch_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(&path, SAMPLE).unwrap();

        assert_eq!(load_batch(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let err = read_batch("nome,data\nAna,02/03/1982\n".as_bytes()).unwrap_err();
        assert!(matches!(err, NumerologyError::Csv(_)));
    }

    #[test]
    fn test_invalid_rows_do_not_stop_the_batch() {
        let records = read_batch(SAMPLE.as_bytes()).unwrap();
        let entries = run_batch(&NumerologyEngine::new(), &records);

        assert_eq!(entries.len(), 3);
        assert!(!entries[0].is_error());
        assert!(!entries[1].is_error());
        assert!(entries[2].is_error());
        assert_eq!(entries[2].report, "Erro: Data inválida");
        assert_eq!(entries[2].line, 4);

        println!("✅ Batch test passed: {} entries", entries.len());
    }
}

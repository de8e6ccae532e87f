//! The narrow seam to the external table store.
//!
//! The shared sheet supports exactly two operations: read the full
//! table and overwrite the full table. There is no row-level write,
//! no transaction, and no row identity beyond position, so the trait
//! deliberately offers nothing more. Last-writer-wins is the accepted
//! concurrency policy: two users who both fetch and then both write
//! will silently lose the first write. Acceptable for a single club's
//! books, documented here so nobody designs against it.

use std::path::{Path, PathBuf};

use crate::{LedgerError, ResultLedger};

/// Fetch-all / replace-all access to the table of raw cells.
pub trait TableStore: Send {
    /// Reads the complete table, header row included. Implementations
    /// must always return fresh data; the dashboard never caches
    /// across operations.
    fn fetch_all(&self) -> ResultLedger<Vec<Vec<String>>>;

    /// Overwrites the complete table. On error the caller must not
    /// assume anything was persisted and has to reload before
    /// trusting local state again.
    fn replace_all(&mut self, rows: &[Vec<String>]) -> ResultLedger<()>;
}

/// File-backed store, the deployed stand-in for the shared sheet.
#[derive(Debug)]
pub struct CsvTableStore {
    path: PathBuf,
}

impl CsvTableStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TableStore for CsvTableStore {
    fn fetch_all(&self) -> ResultLedger<Vec<Vec<String>>> {
        if !self.path.exists() {
            // A sheet nobody has written yet is an empty table, not a
            // connectivity failure.
            tracing::warn!(path = %self.path.display(), "ledger file not found, starting empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|err| LedgerError::Load(err.to_string()))?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|err| LedgerError::Load(err.to_string()))?;
            rows.push(record.iter().map(ToString::to_string).collect());
        }
        Ok(rows)
    }

    fn replace_all(&mut self, rows: &[Vec<String>]) -> ResultLedger<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|err| LedgerError::Write(err.to_string()))?;
        for row in rows {
            writer
                .write_record(row)
                .map_err(|err| LedgerError::Write(err.to_string()))?;
        }
        writer
            .flush()
            .map_err(|err| LedgerError::Write(err.to_string()))
    }
}

/// In-memory store for tests and demo mode.
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    rows: Vec<Vec<String>>,
}

impl MemoryTableStore {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Current table contents, for assertions.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl TableStore for MemoryTableStore {
    fn fetch_all(&self) -> ResultLedger<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn replace_all(&mut self, rows: &[Vec<String>]) -> ResultLedger<()> {
        self.rows = rows.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryTableStore::default();
        let rows = vec![vec!["Datum".to_string()], vec!["01.01.2024".to_string()]];
        store.replace_all(&rows).unwrap();
        assert_eq!(store.fetch_all().unwrap(), rows);
    }

    #[test]
    fn csv_store_reads_back_what_it_wrote() {
        let path = std::env::temp_dir().join(format!(
            "kassenbuch_store_{}.csv",
            std::process::id()
        ));
        let mut store = CsvTableStore::new(&path);
        let rows = vec![
            vec!["Datum".to_string(), "Anlass_Person".to_string()],
            vec!["01.01.2024".to_string(), "Einkauf, Lager".to_string()],
        ];
        store.replace_all(&rows).unwrap();
        assert_eq!(store.fetch_all().unwrap(), rows);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_reads_as_empty_table() {
        let store = CsvTableStore::new("/nonexistent/kassenbuch.csv");
        assert!(store.fetch_all().unwrap().is_empty());
    }
}

//! Ledger file storage
//!
//! Saves and loads the whole ledger to a single JSON file. The on-disk shape
//! is a versioned list of tagged records, independent of the in-memory types.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Entry, EntryKind, Ledger, Money};

use super::file_io::{read_json_optional, write_json_atomic};

/// Current on-disk schema version
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

/// Serializable ledger file
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFile {
    schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    entries: Vec<EntryRecord>,
}

/// One persisted entry; `amount` is a decimal string with the digits as entered
#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    kind: EntryKind,
    description: String,
    amount: Money,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            kind: entry.kind(),
            description: entry.description().to_string(),
            amount: entry.amount(),
        }
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = TrackerError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        Entry::new(record.kind, record.description, record.amount)
            .map_err(|e| TrackerError::CorruptData(format!("Invalid entry: {}", e)))
    }
}

/// Result of reading the ledger file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; entries are in saved order
    Loaded(Vec<Entry>),
    /// Nothing has been saved at this path yet
    NoData,
}

/// Persistence adapter bound to one ledger file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with every entry in `ledger`
    pub fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        let file = LedgerFile {
            schema_version: LEDGER_SCHEMA_VERSION,
            saved_at: Some(Utc::now()),
            entries: ledger.iter().map(EntryRecord::from).collect(),
        };

        write_json_atomic(&self.path, &file)?;

        tracing::info!(
            path = %self.path.display(),
            entries = ledger.len(),
            "saved ledger"
        );
        Ok(())
    }

    /// Read the file back
    ///
    /// A missing file is [`LoadOutcome::NoData`]. Unreadable contents, an
    /// unknown schema version, or an entry that breaks the entry invariants
    /// are all [`TrackerError::CorruptData`].
    pub fn load(&self) -> TrackerResult<LoadOutcome> {
        let file = read_json_optional::<LedgerFile, _>(&self.path).inspect_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "ledger file unreadable")
        })?;

        let Some(file) = file else {
            tracing::debug!(path = %self.path.display(), "no ledger file");
            return Ok(LoadOutcome::NoData);
        };

        if file.schema_version != LEDGER_SCHEMA_VERSION {
            return Err(TrackerError::CorruptData(format!(
                "Unsupported schema version {} in {}",
                file.schema_version,
                self.path.display()
            )));
        }

        let entries = file
            .entries
            .into_iter()
            .map(Entry::try_from)
            .collect::<TrackerResult<Vec<_>>>()?;

        tracing::info!(
            path = %self.path.display(),
            entries = entries.len(),
            saved_at = ?file.saved_at,
            "loaded ledger"
        );
        Ok(LoadOutcome::Loaded(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("finance_data.json"));
        (temp_dir, store)
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append(Entry::parse(EntryKind::Income, "Salary", "1000.00").unwrap());
        ledger.append(Entry::parse(EntryKind::Expense, "Rent", "400.00").unwrap());
        ledger.append(Entry::parse(EntryKind::Expense, "Food", "50.50").unwrap());
        ledger
    }

    #[test]
    fn test_load_missing_file_is_no_data() {
        let (_temp_dir, store) = create_test_store();
        assert_eq!(store.load().unwrap(), LoadOutcome::NoData);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let ledger = sample_ledger();

        store.save(&ledger).unwrap();

        match store.load().unwrap() {
            LoadOutcome::Loaded(entries) => assert_eq!(entries, ledger.to_sequence()),
            LoadOutcome::NoData => panic!("expected saved entries"),
        }
    }

    #[test]
    fn test_round_trip_awkward_text_and_extreme_amounts() {
        let (_temp_dir, store) = create_test_store();
        let max = Money::MAX.to_string();
        let items = [
            (EntryKind::Income, r#"Said "thanks""#, max.as_str()),
            (
                EntryKind::Expense,
                r"C:\Users\me\receipt.pdf",
                "0.0000000000000000000000000001",
            ),
            (EntryKind::Expense, "Café à Tōkyō 日本の昼食 🍜", "19.999"),
            (EntryKind::Income, "Lunch   with    team", "1e3"),
            (EntryKind::Expense, "line one\nline two\ttab", "0.10"),
            (EntryKind::Income, "{\"kind\":\"expense\"}", "1000000000000000.000"),
        ];
        let mut ledger = Ledger::new();
        for (kind, description, amount) in items {
            ledger.append(Entry::parse(kind, description, amount).unwrap());
        }

        store.save(&ledger).unwrap();
        let loaded = match store.load().unwrap() {
            LoadOutcome::Loaded(entries) => Ledger::from(entries),
            LoadOutcome::NoData => panic!("expected saved entries"),
        };

        assert_eq!(loaded, ledger);
        for (before, after) in ledger.iter().zip(&loaded) {
            assert_eq!(before.description(), after.description());
            assert_eq!(before.amount().to_string(), after.amount().to_string());
            assert_eq!(
                before.amount().as_decimal().scale(),
                after.amount().as_decimal().scale()
            );
        }
        assert_eq!(loaded.to_sequence()[3].description(), "Lunch   with    team");
    }

    #[test]
    fn test_save_empty_ledger() {
        let (_temp_dir, store) = create_test_store();

        store.save(&Ledger::new()).unwrap();

        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(Vec::new()));
    }

    #[test]
    fn test_save_overwrites_previous() {
        let (_temp_dir, store) = create_test_store();
        store.save(&sample_ledger()).unwrap();

        let mut smaller = Ledger::new();
        smaller.append(Entry::parse(EntryKind::Income, "Gift", "5").unwrap());
        store.save(&smaller).unwrap();

        assert_eq!(
            store.load().unwrap(),
            LoadOutcome::Loaded(smaller.to_sequence().to_vec())
        );
    }

    #[test]
    fn test_file_format() {
        let (_temp_dir, store) = create_test_store();
        store.save(&sample_ledger()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["schema_version"], 1);
        assert_eq!(raw["entries"][0]["kind"], "income");
        assert_eq!(raw["entries"][0]["description"], "Salary");
        assert_eq!(raw["entries"][0]["amount"], "1000.00");
        assert_eq!(raw["entries"][2]["amount"], "50.50");
    }

    #[test]
    fn test_load_without_saved_at() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"{"schema_version":1,"entries":[{"kind":"expense","description":"Tea","amount":"2.50"}]}"#,
        )
        .unwrap();

        let expected = Entry::parse(EntryKind::Expense, "Tea", "2.50").unwrap();
        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(vec![expected]));
    }

    #[test]
    fn test_load_garbage_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), b"\xac\xed\x00\x05sr\x00").unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_load_empty_file_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "").unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_load_unknown_schema_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{"schema_version":99,"entries":[]}"#).unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_load_invalid_entry_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"{"schema_version":1,"entries":[{"kind":"income","description":"Bad","amount":"-1.00"}]}"#,
        )
        .unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_load_oversized_amount_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"{"schema_version":1,"entries":[{"kind":"income","description":"A","amount":"50000000000000000"}]}"#,
        )
        .unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_load_non_numeric_amount_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"{"schema_version":1,"entries":[{"kind":"income","description":"A","amount":"ten"}]}"#,
        )
        .unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_load_unknown_kind_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"{"schema_version":1,"entries":[{"kind":"transfer","description":"X","amount":"1.00"}]}"#,
        )
        .unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_save_to_unwritable_path_is_io_error() {
        let (temp_dir, _) = create_test_store();
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let store = LedgerStore::new(blocker.join("finance_data.json"));
        let err = store.save(&sample_ledger()).unwrap_err();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}

//! # Order Ledger
//!
//! Append-only order rows in `orders.csv`, matching the tabular file the
//! calculator's orders have always been kept in:
//!
//! ```text
//! Date,Member Type,Dimensions,Weight (Kg),Total Cost (Rs)
//! 2026-08-28 10:15:00,Shaft,"Diameter: 100 mm, Length: 1000 mm",61.65,5092.61
//! ```
//!
//! Safety features:
//! - **Missing file is not an error**: loading a path that does not exist
//!   yields an empty ledger
//! - **Atomic saves**: write to .tmp, fsync, rename to prevent corruption
//! - **File locking**: an exclusive lock file guards the whole
//!   read-append-write cycle against concurrent entry forms

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use cost_core::{CalculationResult, CostError, CostResult, DimensionSet, MemberType};

/// Timestamp format used in the Date column
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One saved order row.
///
/// Field names serialize to the ledger's column headers, so existing
/// `orders.csv` files read back without migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// When the order was entered
    #[serde(rename = "Date", with = "ledger_date")]
    pub date: NaiveDateTime,

    /// Cross-section category that was quoted
    #[serde(rename = "Member Type")]
    pub member_type: MemberType,

    /// Human-readable dimension summary, e.g. "Diameter: 100 mm, Length: 1000 mm"
    #[serde(rename = "Dimensions")]
    pub dimensions: String,

    /// Computed weight in kg
    #[serde(rename = "Weight (Kg)")]
    pub weight_kg: f64,

    /// Tax-inclusive price in rupees
    #[serde(rename = "Total Cost (Rs)")]
    pub total_cost: f64,
}

impl OrderRecord {
    /// Build a row for a calculation performed now.
    pub fn new(
        member_type: MemberType,
        dimensions: &DimensionSet,
        result: &CalculationResult,
    ) -> Self {
        OrderRecord {
            date: Local::now().naive_local(),
            member_type,
            dimensions: dimensions.summary(),
            weight_kg: result.weight_kg.0,
            total_cost: result.total_cost,
        }
    }
}

/// Serde adapter for the ledger's `YYYY-MM-DD HH:MM:SS` date column
mod ledger_date {
    use super::{NaiveDateTime, DATE_FORMAT};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Exclusive lock guarding a ledger file, released when dropped.
///
/// Uses an OS-level lock on a `.lock` sibling so two entry forms on a
/// shared drive cannot interleave their read-append-write cycles.
struct LedgerLock {
    lock_path: PathBuf,
    _lock_file: File,
}

impl LedgerLock {
    fn acquire(ledger_path: &Path) -> CostResult<Self> {
        let mut lock_path = ledger_path.to_path_buf();
        let extension = lock_path
            .extension()
            .map(|e| format!("{}.lock", e.to_string_lossy()))
            .unwrap_or_else(|| "lock".to_string());
        lock_path.set_extension(extension);

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CostError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.lock_exclusive().map_err(|e| {
            CostError::file_error("lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(LedgerLock {
            lock_path,
            _lock_file: lock_file,
        })
    }
}

impl Drop for LedgerLock {
    fn drop(&mut self) {
        // OS lock is released when _lock_file is dropped
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// In-memory view of the order ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLedger {
    pub records: Vec<OrderRecord>,
}

impl OrderLedger {
    /// Load the ledger from `path`.
    ///
    /// A missing file yields an empty ledger; the file is created on the
    /// first save.
    pub fn load(path: &Path) -> CostResult<Self> {
        if !path.exists() {
            return Ok(OrderLedger::default());
        }

        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            CostError::file_error("open", path.display().to_string(), e.to_string())
        })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: OrderRecord = row.map_err(|e| CostError::SerializationError {
                reason: format!("Invalid row in {}: {}", path.display(), e),
            })?;
            records.push(record);
        }

        Ok(OrderLedger { records })
    }

    /// Save all rows to `path` with atomic write semantics.
    ///
    /// Writes to a `.tmp` sibling, syncs, then renames over the target so an
    /// interrupted save never leaves a half-written ledger.
    pub fn save(&self, path: &Path) -> CostResult<()> {
        let tmp_path = path.with_extension("csv.tmp");

        let tmp_file = File::create(&tmp_path).map_err(|e| {
            CostError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        let mut writer = csv::Writer::from_writer(tmp_file);
        for record in &self.records {
            writer.serialize(record).map_err(|e| CostError::SerializationError {
                reason: e.to_string(),
            })?;
        }

        let mut tmp_file = writer.into_inner().map_err(|e| CostError::SerializationError {
            reason: e.to_string(),
        })?;

        tmp_file.flush().map_err(|e| {
            CostError::file_error("flush temp file", tmp_path.display().to_string(), e.to_string())
        })?;
        tmp_file.sync_all().map_err(|e| {
            CostError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CostError::file_error("rename to final", path.display().to_string(), e.to_string())
        })?;

        Ok(())
    }

    /// Append one row to the ledger at `path`.
    ///
    /// Holds an exclusive lock across the whole load-append-save cycle.
    pub fn append(path: &Path, record: OrderRecord) -> CostResult<()> {
        let _lock = LedgerLock::acquire(path)?;
        let mut ledger = OrderLedger::load(path)?;
        ledger.records.push(record);
        ledger.save(path)
    }

    /// Rows for one member type
    pub fn filter_by_member(&self, member_type: MemberType) -> Vec<&OrderRecord> {
        self.records
            .iter()
            .filter(|r| r.member_type == member_type)
            .collect()
    }

    /// Sum of the Total Cost column
    pub fn total_cost_sum(&self) -> f64 {
        self.records.iter().map(|r| r.total_cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cost_core::{calculate, Dimension, MaterialConstants, MemberCostInput};

    fn sample_record(member_type: MemberType, cost: f64) -> OrderRecord {
        OrderRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 28)
                .unwrap()
                .and_hms_opt(10, 15, 0)
                .unwrap(),
            member_type,
            dimensions: "Diameter: 100 mm, Length: 1000 mm".to_string(),
            weight_kg: 61.6539,
            total_cost: cost,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = OrderLedger::load(&dir.path().join("orders.csv")).unwrap();
        assert!(ledger.records.is_empty());
    }

    #[test]
    fn test_append_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");

        OrderLedger::append(&path, sample_record(MemberType::Shaft, 5092.61)).unwrap();
        OrderLedger::append(&path, sample_record(MemberType::Plate, 2825.46)).unwrap();

        let ledger = OrderLedger::load(&path).unwrap();
        assert_eq!(ledger.records.len(), 2);
        assert_eq!(ledger.records[0].member_type, MemberType::Shaft);
        assert!((ledger.total_cost_sum() - 7918.07).abs() < 1e-9);
    }

    #[test]
    fn test_header_row_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");

        OrderLedger::append(&path, sample_record(MemberType::Shaft, 5092.61)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "Date,Member Type,Dimensions,Weight (Kg),Total Cost (Rs)"
        );
    }

    #[test]
    fn test_filter_by_member() {
        let ledger = OrderLedger {
            records: vec![
                sample_record(MemberType::Shaft, 100.0),
                sample_record(MemberType::Plate, 200.0),
                sample_record(MemberType::Shaft, 300.0),
            ],
        };
        assert_eq!(ledger.filter_by_member(MemberType::Shaft).len(), 2);
        assert_eq!(ledger.filter_by_member(MemberType::IJoist).len(), 0);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");

        let ledger = OrderLedger {
            records: vec![sample_record(MemberType::Shaft, 5092.61)],
        };
        ledger.save(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("csv.tmp").exists());
    }

    #[test]
    fn test_record_from_calculation() {
        let dims = DimensionSet::new()
            .with(Dimension::Diameter, 100.0)
            .with(Dimension::Length, 1000.0);
        let input = MemberCostInput {
            member_type: MemberType::Shaft,
            dimensions: dims.clone(),
            cost_per_kg: 70.0,
        };
        let result = calculate(&input, &MaterialConstants::default()).unwrap();

        let record = OrderRecord::new(MemberType::Shaft, &dims, &result);
        assert_eq!(record.dimensions, "Diameter: 100 mm, Length: 1000 mm");
        assert!((record.weight_kg - 61.6539).abs() < 1e-4);
        assert!((record.total_cost - 5092.61).abs() < 0.005);
    }
}

//! Kinematics table reader.
//!
//! The gun consumes a plain-text table with one four-momentum record per
//! row (`e px py pz`, whitespace or comma separated), as written by the
//! upstream event dump. The whole table is held in memory; the file is
//! read once at construction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cg_core::traits::KinematicsSource;
use cg_core::{Error, KinematicsRecord, Result};

/// In-memory kinematics table.
#[derive(Debug, Clone, Default)]
pub struct KinematicsTable {
    records: Vec<KinematicsRecord>,
}

impl KinematicsTable {
    /// Read a table from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;
        log::info!("read {} kinematics records from {}", table.records.len(), path.display());
        Ok(table)
    }

    /// Read a table from any buffered reader. Blank lines are skipped;
    /// a malformed row is a [`Error::Parse`] naming the line number.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let row = line.trim();
            if row.is_empty() {
                continue;
            }
            let fields: Vec<&str> = row
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .collect();
            if fields.len() != 4 {
                return Err(Error::Parse(format!(
                    "line {}: expected 4 columns (e px py pz), got {}",
                    idx + 1,
                    fields.len()
                )));
            }
            let mut values = [0.0f64; 4];
            for (value, field) in values.iter_mut().zip(&fields) {
                *value = field.parse().map_err(|_| {
                    Error::Parse(format!("line {}: bad float {:?}", idx + 1, field))
                })?;
            }
            records.push(KinematicsRecord::new(values[0], values[1], values[2], values[3]));
        }
        Ok(Self { records })
    }

    /// All records in file order.
    pub fn records(&self) -> &[KinematicsRecord] {
        &self.records
    }
}

impl KinematicsSource for KinematicsTable {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn record(&self, idx: usize) -> Option<KinematicsRecord> {
        self.records.get(idx).copied()
    }
}

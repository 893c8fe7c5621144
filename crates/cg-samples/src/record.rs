//! Analysis sample records.

use cg_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Option keys the downstream analysis driver understands.
const KNOWN_OPTION_KEYS: [&str; 4] = ["isMC", "useWeights", "xsec", "addEventInfo"];

/// One analysis sample: a dataset plus job-splitting metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Remote dataset identifier.
    pub dataset_path: String,
    /// `key=value` flags for the analysis driver.
    pub options: Vec<String>,
    /// Luminosity-block splitting algorithm name (e.g. `EventAwareLumiBased`).
    pub splitting: String,
    /// Reserved; always empty today.
    pub reserved: String,
    /// Job-splitting granularity.
    pub target_units_per_job: u32,
}

impl SampleRecord {
    /// Create a record with an empty reserved field.
    pub fn new(
        dataset_path: impl Into<String>,
        options: &[&str],
        splitting: impl Into<String>,
        target_units_per_job: u32,
    ) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            splitting: splitting.into(),
            reserved: String::new(),
            target_units_per_job,
        }
    }

    /// Check the record shape: non-empty dataset and splitting strategy,
    /// positive unit count, well-formed options, non-negative `xsec`.
    pub fn validate(&self) -> Result<()> {
        if self.dataset_path.trim().is_empty() {
            return Err(Error::Validation("dataset_path is empty".to_string()));
        }
        if self.splitting.trim().is_empty() {
            return Err(Error::Validation("splitting strategy is empty".to_string()));
        }
        if self.target_units_per_job == 0 {
            return Err(Error::Validation("target_units_per_job must be >= 1".to_string()));
        }
        for option in &self.options {
            parse_option(option)?;
        }
        Ok(())
    }

    /// Value of option `key`, if present.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.iter().find_map(|o| {
            let (k, v) = o.split_once('=')?;
            (k == key).then_some(v)
        })
    }

    /// Cross section in pb, if the record carries one.
    pub fn xsec(&self) -> Option<f64> {
        self.option("xsec").and_then(|v| v.parse().ok())
    }
}

/// Split one `key=value` option and check key and value.
///
/// Keys must be known to the analysis driver; values are boolean-like
/// (`True`/`False`) or floats, and `xsec` must be a non-negative float.
fn parse_option(option: &str) -> Result<(&str, &str)> {
    let (key, value) = option.split_once('=').ok_or_else(|| {
        Error::Validation(format!("option {:?} is not a key=value pair", option))
    })?;
    if !KNOWN_OPTION_KEYS.contains(&key) {
        return Err(Error::Validation(format!("unknown option key {:?}", key)));
    }
    if key == "xsec" {
        let xsec: f64 = value.parse().map_err(|_| {
            Error::Validation(format!("xsec value {:?} is not a float", value))
        })?;
        if !xsec.is_finite() || xsec < 0.0 {
            return Err(Error::Validation(format!("xsec must be >= 0 (got {})", value)));
        }
    } else if value != "True" && value != "False" && value.parse::<f64>().is_err() {
        return Err(Error::Validation(format!(
            "option {:?} value {:?} is neither boolean nor float",
            key, value
        )));
    }
    Ok((key, value))
}

//! Per-step metric history
//!
//! Append-only record keyed by metric name. The scheduler owns and writes
//! it; everyone else gets a shared reference.

use crate::error::{Result, SgdrError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved history key for the applied learning rate
pub const LR_KEY: &str = "lr";

/// Metric values reported for a single step or epoch
pub type Logs = BTreeMap<String, f64>;

/// Values of one metric together with the steps they were reported on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    steps: Vec<usize>,
    values: Vec<f64>,
}

impl Series {
    fn push(&mut self, step: usize, value: f64) {
        self.steps.push(step);
        self.values.push(value);
    }

    /// Steps the metric was reported on, ascending
    pub fn steps(&self) -> &[usize] {
        &self.steps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value reported on `step`, if any
    pub fn at(&self, step: usize) -> Option<f64> {
        self.steps.binary_search(&step).ok().map(|i| self.values[i])
    }
}

/// Ordered log of metric name to per-step values
///
/// Every step records `lr`; other metrics appear only on the steps that
/// reported them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    steps: usize,
    metrics: BTreeMap<String, Series>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one step: the applied rate plus whatever the caller reported.
    /// A caller-supplied `lr` is ignored.
    pub(crate) fn record_step(&mut self, lr: f64, logs: &Logs) {
        let step = self.steps;
        self.metrics.entry(LR_KEY.to_string()).or_default().push(step, lr);
        for (key, value) in logs.iter().filter(|(key, _)| key.as_str() != LR_KEY) {
            self.metrics.entry(key.clone()).or_default().push(step, *value);
        }
        self.steps += 1;
    }

    /// Values recorded under `key`, in step order
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.metrics.get(key).map(Series::values)
    }

    /// Full series for `key`, including the step of each value
    pub fn series(&self, key: &str) -> Option<&Series> {
        self.metrics.get(key)
    }

    /// Applied learning rates, one per step
    pub fn lr(&self) -> &[f64] {
        self.get(LR_KEY).unwrap_or(&[])
    }

    /// Metric names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    /// Iterate over (name, series) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of recorded steps
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of distinct metrics
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Render as CSV with one row per step
    ///
    /// `lr` comes first, remaining metrics follow in key order. A metric
    /// missing on a step leaves that cell blank.
    pub fn to_csv(&self) -> Result<String> {
        let mut columns: Vec<&str> = vec![LR_KEY];
        columns.extend(self.keys().filter(|k| *k != LR_KEY));

        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["step"];
        header.extend(&columns);
        writer.write_record(&header)?;

        for step in 0..self.steps {
            let mut row = vec![step.to_string()];
            row.extend(columns.iter().map(|column| {
                self.series(column)
                    .and_then(|series| series.at(step))
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            }));
            writer.write_record(&row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SgdrError::Serialization { message: e.to_string() })?;
        String::from_utf8(bytes).map_err(|e| SgdrError::Serialization { message: e.to_string() })
    }
}

//! Machine-readable run reports.

use serde::{Deserialize, Serialize};

use crate::convert::{CheckOutcome, CheckStatus, ConversionSummary};

/// Report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Serializable summary of one `embedgen` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub report_version: u32,
    /// Whether the run succeeded (for check runs: whether the output is current).
    pub ok: bool,
    pub input: String,
    pub output: String,
    pub byte_count: usize,
    pub line_count: usize,
    /// BLAKE3 hex hash of the input bytes.
    pub input_hash: String,
    /// Set only for check runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_to_date: Option<bool>,
    /// Array length found in a stale output, when it could be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_bytes: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub duration_ms: u64,
}

impl ConversionReport {
    /// Builds a report for a conversion that wrote its output.
    pub fn from_summary(summary: &ConversionSummary) -> Self {
        Self {
            report_version: REPORT_VERSION,
            ok: true,
            input: summary.input.to_string_lossy().into_owned(),
            output: summary.output.to_string_lossy().into_owned(),
            byte_count: summary.byte_count,
            line_count: summary.line_count,
            input_hash: summary.input_hash.clone(),
            up_to_date: None,
            embedded_bytes: None,
            warnings: summary.warnings.iter().map(ToString::to_string).collect(),
            duration_ms: 0,
        }
    }

    /// Builds a report for a check run.
    pub fn from_check(outcome: &CheckOutcome) -> Self {
        let up_to_date = outcome.is_up_to_date();
        let embedded_bytes = match outcome.status {
            CheckStatus::Stale { embedded_bytes } => embedded_bytes,
            _ => None,
        };
        Self {
            ok: up_to_date,
            up_to_date: Some(up_to_date),
            embedded_bytes,
            ..Self::from_summary(&outcome.summary)
        }
    }

    /// Sets the run duration.
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

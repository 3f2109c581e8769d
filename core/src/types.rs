use serde::{Deserialize, Serialize};

use crate::message::InfoMessage;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cfg {
    /// Stop at the first bad package (default true).
    pub fail_fast: Option<bool>,
    /// Emit the structured record next to each line (default false).
    pub include_records: Option<bool>,
}

impl Cfg {
    pub fn fail_fast(&self) -> bool {
        self.fail_fast.unwrap_or(true)
    }

    pub fn include_records(&self) -> bool {
        self.include_records.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Line {
        index: usize,
        workout_type: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        record: Option<InfoMessage>,
    },
    Rejected {
        index: usize,
        workout_type: String,
        error: String,
    },
}

impl ReportEntry {
    pub fn is_line(&self) -> bool {
        matches!(self, ReportEntry::Line { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Report {
    pub reports: Vec<ReportEntry>,
    pub ok: usize,
    pub rejected: usize,
}

impl Report {
    /// Rendered lines in input order, rejected packages skipped.
    pub fn lines(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter_map(|e| match e {
                ReportEntry::Line { message, .. } => Some(message.as_str()),
                ReportEntry::Rejected { .. } => None,
            })
            .collect()
    }
}

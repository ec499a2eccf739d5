use serde::Serialize;

use crate::pipeline::blur_detector::{BlurReport, ProcessError};

/// Per-identifier outcome: metrics on success, the error message otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessResult {
    Scored(BlurReport),
    Failed { path: String, error: String },
}

impl ProcessResult {
    pub fn failed(path: impl Into<String>, error: &ProcessError) -> Self {
        Self::Failed {
            path: path.into(),
            error: error.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Scored(report) => &report.path,
            Self::Failed { path, .. } => path,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

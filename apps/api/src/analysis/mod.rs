//! Résumé analysis: turns the generator's free text into a typed
//! `AnalysisResult` or a typed failure.
//!
//! Parsing is strict and all-or-nothing: the text must be one JSON object, and
//! every field must be present with the right shape. There is no fence
//! stripping, no per-field defaulting, and no retry at this layer.

pub mod analyzer;
pub mod handlers;
pub mod prompts;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::analysis::AnalysisResult;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Please paste your resume content")]
    EmptyInput,

    #[error("Analysis response is not a JSON object: {reason}")]
    Parse { raw: String, reason: String },

    #[error("Analysis response failed validation: {reason}")]
    Validation { raw: String, reason: String },

    #[error("Text generation failed: {0}")]
    Service(String),
}

/// Coarse failure class, stored with a failed analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Parse,
    Validation,
    Service,
}

impl AnalysisError {
    /// `None` for input rejected before any generation call.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            AnalysisError::EmptyInput => None,
            AnalysisError::Parse { .. } => Some(FailureKind::Parse),
            AnalysisError::Validation { .. } => Some(FailureKind::Validation),
            AnalysisError::Service(_) => Some(FailureKind::Service),
        }
    }

    /// The generator output that failed to parse, kept for diagnostics.
    pub fn raw(&self) -> Option<&str> {
        match self {
            AnalysisError::Parse { raw, .. } | AnalysisError::Validation { raw, .. } => Some(raw),
            AnalysisError::EmptyInput | AnalysisError::Service(_) => None,
        }
    }
}

/// Parses one generator response into an [`AnalysisResult`].
///
/// - not JSON, or JSON whose top level is not an object → `Parse`
/// - a missing field or a wrong type → `Validation`
///
/// A decoded score is always finite: a numeric literal outside `f64` range
/// (such as `1e400`) is refused by the JSON decoder and lands in `Parse`.
/// Fields beyond the known set are ignored.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| AnalysisError::Parse {
        raw: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !value.is_object() {
        return Err(AnalysisError::Parse {
            raw: raw.to_string(),
            reason: format!("top-level value is {}, expected an object", json_type(&value)),
        });
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::Validation {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

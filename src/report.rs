//! Report assembly and rendering.
//!
//! The report is built once per invocation, serialized, and discarded.
//! Field order in the JSON encoding follows struct declaration order, so
//! the wire format is deterministic. Rendering prepends a CGI-style
//! content-type header; if encoding ever fails, the body is replaced by a
//! minimal error payload rather than a truncated report.

use serde::Serialize;

use crate::demos::DemoEntry;
use crate::error::ReportError;
use crate::frequency::FrequencyEntry;
use crate::histogram::LengthBucket;
use crate::sysinfo::SystemInfo;

/// Header line emitted before every rendered document.
pub const CONTENT_TYPE_HEADER: &str = "Content-type: application/json";

/// The complete report document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    /// Environment facts collected before assembly.
    pub system_info: SystemInfo,
    /// Metrics and rankings over the sample text.
    pub text_analysis: TextAnalysis,
    /// Whole-text transformation results.
    pub transformations: Transformations,
    /// The fixed snippet catalog, in display order.
    pub demos: Vec<DemoEntry>,
}

/// Analysis block: the raw text plus everything counted over it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TextAnalysis {
    pub sample_text: String,
    pub word_count: usize,
    pub char_count: usize,
    pub line_count: usize,
    pub most_common_words: Vec<FrequencyEntry>,
    pub word_length_stats: Vec<LengthBucket>,
}

/// Transformation block: highlight and reversal outputs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Transformations {
    pub highlighted_text: String,
    pub reversed_text: String,
}

impl Report {
    /// Encodes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(ReportError::from)
    }
}

/// Renders the full output document: header line, blank line, JSON body.
///
/// A serialization failure is downgraded to an error payload so the caller
/// always emits a well-formed document.
pub fn render_document(report: &Report) -> String {
    let body = match report.to_json() {
        Ok(body) => body,
        Err(err) => error_body(&err),
    };
    format!("{CONTENT_TYPE_HEADER}\n\n{body}")
}

/// Renders an error document in place of a report.
pub fn error_document(err: &ReportError) -> String {
    format!("{CONTENT_TYPE_HEADER}\n\n{}", error_body(err))
}

fn error_body(err: &ReportError) -> String {
    let payload = serde_json::json!({ "error": err.to_string() });
    // Encoding a one-field string map cannot realistically fail; fall back
    // to a hand-built object rather than panic if it ever does.
    serde_json::to_string_pretty(&payload)
        .unwrap_or_else(|_| format!("{{\"error\": {:?}}}", err.to_string()))
}

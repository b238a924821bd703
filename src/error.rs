use thiserror::Error;

/// Errors that can occur while building or serializing a report.
///
/// Highlight rules are validated up front: a pattern that fails to compile
/// surfaces here before any analysis pass runs. Serialization failures are
/// propagated rather than swallowed so callers can emit a well-formed error
/// document in place of a partial report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// Configuration rejected at pipeline entry.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A highlight rule's pattern failed to compile.
    #[error("invalid highlight pattern for class `{class}`: {source}")]
    InvalidRule {
        /// The css class of the offending rule.
        class: String,
        #[source]
        source: regex::Error,
    },

    /// The assembled report could not be encoded as JSON.
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

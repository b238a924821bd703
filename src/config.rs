//! Configuration for the report pipeline.
//!
//! [`ReportConfig`] carries every knob the pipeline honors: how many ranked
//! words to keep and the ordered highlight rule chain. It is cheap to clone
//! and serializable so a deployment can keep its rule set in a config file.
//!
//! # Determinism
//!
//! For a fixed configuration and input text the pipeline output is identical
//! on every machine. Rule order is part of the configuration's meaning: each
//! rule rewrites the previous rule's output, so reordering rules changes the
//! result.

use serde::{Deserialize, Serialize};

/// Number of ranked words kept in the frequency table by default.
pub const DEFAULT_TOP_WORDS: usize = 5;

/// An uncompiled highlight rule: a regex pattern paired with the css class
/// its matches are wrapped in.
///
/// Rules are compiled once at pipeline entry; a pattern that fails to compile
/// is a fatal [`ReportError::InvalidRule`](crate::ReportError::InvalidRule)
/// surfaced before any report output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSpec {
    /// Regular expression matched against the working text, case-sensitive.
    pub pattern: String,
    /// Class label carried by the inserted markup.
    pub css_class: String,
}

impl RuleSpec {
    /// Convenience constructor for literal rule tables.
    pub fn new(pattern: impl Into<String>, css_class: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            css_class: css_class.into(),
        }
    }
}

/// Configuration for one report generation run.
///
/// # Examples
///
/// ```rust
/// use textreport::ReportConfig;
///
/// let cfg = ReportConfig::default();
/// assert_eq!(cfg.top_words, 5);
/// assert_eq!(cfg.rules.len(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// How many entries the frequency ranking is truncated to.
    ///
    /// Must be >= 1; a zero value is rejected at pipeline entry with
    /// [`ReportError::InvalidConfig`](crate::ReportError::InvalidConfig).
    pub top_words: usize,

    /// Ordered highlight rule chain.
    ///
    /// Applied strictly in declaration order; each rule operates on the
    /// cumulative output of the rules before it. An empty list is valid and
    /// leaves the text untouched.
    pub rules: Vec<RuleSpec>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
            rules: default_rule_specs(),
        }
    }
}

/// The stock rule chain used by the bundled binary.
///
/// Keyword rules run first, then function-like terms, then project names.
/// Later rules scan text already containing markup inserted by earlier ones;
/// these patterns are chosen so they cannot match inside that markup.
pub fn default_rule_specs() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new("GET|POST|DELETE", "highlight-keyword"),
        RuleSpec::new(r"HTTP/1\.1|C\+\+|CGI", "highlight-function"),
        RuleSpec::new("WebServ", "highlight-string"),
    ]
}

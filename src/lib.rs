//! Text analytics report pipeline.
//!
//! One document goes in, one structured JSON report comes out. The pipeline
//! runs a handful of independent passes over the text and assembles their
//! results together with a fixed demo catalog and environment metadata.
//!
//! ## What we do
//!
//! - **Count things** - words, characters, newline-delimited lines
//! - **Rank words** - case-insensitive frequency table, punctuation stripped,
//!   ties broken by first occurrence, truncated to a configured size
//! - **Bucket lengths** - one histogram bucket per observed token length
//! - **Highlight** - an ordered regex rule chain wraps matches in class
//!   markers, each rule rewriting the previous rule's output
//! - **Reverse** - every token's characters flipped, tokens rejoined with
//!   single spaces
//! - **Assemble** - all of the above plus system metadata and the snippet
//!   catalog, serialized as pretty JSON behind a content-type header
//!
//! ## Pure function guarantee
//!
//! Every analysis pass is a pure function of the input text: no I/O, no
//! clock calls, no shared state. The only environment-touching code is
//! [`SystemInfo::collect`], which runs before assembly and degrades to
//! placeholders instead of failing. Same text + same config = same analysis
//! on any machine.
//!
//! ## Main entry point
//!
//! Call [`generate_report`] with the text, a [`ReportConfig`], the demo
//! catalog, and collected [`SystemInfo`]; render the result with
//! [`render_document`]. Errors are typed so you can actually handle them.

mod config;
mod demos;
mod error;
mod frequency;
mod highlight;
mod histogram;
mod normalize;
mod report;
mod reverse;
mod sample;
mod sysinfo;

pub use crate::config::{default_rule_specs, ReportConfig, RuleSpec, DEFAULT_TOP_WORDS};
pub use crate::demos::{demo_catalog, DemoEntry};
pub use crate::error::ReportError;
pub use crate::frequency::{top_words, FrequencyEntry};
pub use crate::highlight::{compile_rules, highlight, HighlightRule};
pub use crate::histogram::{length_histogram, LengthBucket, LengthHistogram};
pub use crate::normalize::{text_metrics, TextMetrics};
pub use crate::report::{
    error_document, render_document, Report, TextAnalysis, Transformations, CONTENT_TYPE_HEADER,
};
pub use crate::reverse::reverse_words;
pub use crate::sample::SAMPLE_TEXT;
pub use crate::sysinfo::{SystemInfo, PLACEHOLDER};

use std::time::Instant;

use tracing::{info, Level};

/// Runs every analysis pass over `text` and assembles the report.
///
/// Stages run synchronously and in a fixed order; none depends on another's
/// output, only on the raw text. The highlight rule chain is compiled here,
/// so a bad pattern fails the run before any analysis output exists. The
/// catalog is passed by reference and copied into the report unchanged.
///
/// # Errors
///
/// - [`ReportError::InvalidConfig`] if `cfg.top_words` is zero
/// - [`ReportError::InvalidRule`] if a highlight pattern fails to compile
pub fn generate_report(
    text: &str,
    cfg: &ReportConfig,
    catalog: &[DemoEntry],
    system: SystemInfo,
) -> Result<Report, ReportError> {
    let start = Instant::now();

    if cfg.top_words == 0 {
        return Err(ReportError::InvalidConfig(
            "top_words must be >= 1".into(),
        ));
    }

    let span = tracing::span!(Level::INFO, "report.generate", input_bytes = text.len());
    let _guard = span.enter();

    let rules = compile_rules(&cfg.rules)?;

    let metrics = text_metrics(text);
    let most_common_words = top_words(text, cfg.top_words);
    let histogram = length_histogram(text);
    let highlighted_text = highlight(text, &rules);
    let reversed_text = reverse_words(text);

    let report = Report {
        system_info: system,
        text_analysis: TextAnalysis {
            sample_text: text.to_string(),
            word_count: metrics.word_count,
            char_count: metrics.char_count,
            line_count: metrics.line_count,
            most_common_words,
            word_length_stats: histogram.buckets,
        },
        transformations: Transformations {
            highlighted_text,
            reversed_text,
        },
        demos: catalog.to_vec(),
    };

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        word_count = report.text_analysis.word_count,
        line_count = report.text_analysis.line_count,
        rule_count = cfg.rules.len(),
        demo_count = report.demos.len(),
        elapsed_micros,
        "report_assembled"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_system() -> SystemInfo {
        SystemInfo {
            version: "0.1.0".to_string(),
            platform: "linux-x86_64".to_string(),
            hostname: "test-host".to_string(),
            current_time: "2026-01-01 00:00:00".to_string(),
            kernel: "6.1.0".to_string(),
        }
    }

    #[test]
    fn pipeline_assembles_all_blocks() {
        let cfg = ReportConfig::default();
        let report = generate_report("cat dog cat", &cfg, demo_catalog(), fixed_system())
            .expect("pipeline succeeds");

        assert_eq!(report.text_analysis.word_count, 3);
        assert_eq!(report.text_analysis.most_common_words[0].word, "cat");
        assert_eq!(report.text_analysis.most_common_words[0].count, 2);
        assert_eq!(report.transformations.reversed_text, "tac god tac");
        assert_eq!(report.demos.len(), 5);
        assert_eq!(report.system_info.hostname, "test-host");
    }

    #[test]
    fn zero_top_words_is_rejected() {
        let cfg = ReportConfig {
            top_words: 0,
            ..Default::default()
        };
        let result = generate_report("text", &cfg, demo_catalog(), fixed_system());
        assert!(matches!(result, Err(ReportError::InvalidConfig(_))));
    }

    #[test]
    fn bad_rule_fails_before_assembly() {
        let cfg = ReportConfig {
            rules: vec![RuleSpec::new("(oops", "broken")],
            ..Default::default()
        };
        let result = generate_report("text", &cfg, demo_catalog(), fixed_system());
        assert!(matches!(result, Err(ReportError::InvalidRule { .. })));
    }

    #[test]
    fn empty_input_still_produces_a_report() {
        let cfg = ReportConfig::default();
        let report =
            generate_report("", &cfg, demo_catalog(), fixed_system()).expect("empty input is fine");

        assert_eq!(report.text_analysis.word_count, 0);
        assert!(report.text_analysis.most_common_words.is_empty());
        assert!(report.text_analysis.word_length_stats.is_empty());
        assert_eq!(report.transformations.highlighted_text, "");
        assert_eq!(report.transformations.reversed_text, "");
    }

    #[test]
    fn independent_passes_only_read_the_raw_text() {
        // The frequency table sees normalized tokens while the histogram
        // sees the original ones; "C++." counts 4 chars but ranks as "c".
        let cfg = ReportConfig::default();
        let report = generate_report("C++.", &cfg, demo_catalog(), fixed_system())
            .expect("pipeline succeeds");

        assert_eq!(report.text_analysis.most_common_words[0].word, "c");
        assert_eq!(report.text_analysis.word_length_stats[0].length, 4);
    }
}

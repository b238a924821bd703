//! Ordered regex highlight substitution.
//!
//! The transformer is an explicit fold over the rule chain: the working
//! string produced by rule N is the input to rule N+1, and the original text
//! is never re-scanned after the first rule. That makes rule order part of
//! the output contract, and it means a later rule whose pattern happens to
//! match markup inserted by an earlier rule will rewrite that markup. The
//! stock rules avoid this by construction; custom rule chains are expected
//! to do the same, and the behavior is pinned by tests rather than guarded
//! against.

use regex::Regex;

use crate::config::RuleSpec;
use crate::error::ReportError;

/// A compiled highlight rule.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    pattern: Regex,
    css_class: String,
}

impl HighlightRule {
    /// Compiles a rule. A bad pattern is fatal: the error names the rule's
    /// css class so a long chain stays debuggable.
    pub fn new(pattern: &str, css_class: impl Into<String>) -> Result<Self, ReportError> {
        let css_class = css_class.into();
        let pattern = Regex::new(pattern).map_err(|source| ReportError::InvalidRule {
            class: css_class.clone(),
            source,
        })?;
        Ok(Self { pattern, css_class })
    }

    /// The class label this rule's markup carries.
    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    /// Wraps every non-overlapping, left-to-right match in a span marker.
    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("<span class=\"{}\">{}</span>", self.css_class, &caps[0])
            })
            .into_owned()
    }
}

/// Compiles an ordered rule table, preserving declaration order.
pub fn compile_rules(specs: &[RuleSpec]) -> Result<Vec<HighlightRule>, ReportError> {
    specs
        .iter()
        .map(|spec| HighlightRule::new(&spec.pattern, spec.css_class.clone()))
        .collect()
}

/// Applies `rules` in order, threading the working string through each one.
///
/// Deterministic: identical `(text, rules)` always yields byte-identical
/// output. An empty rule list returns the text unchanged.
pub fn highlight(text: &str, rules: &[HighlightRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |current, rule| rule.apply(&current))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(specs: &[(&str, &str)]) -> Vec<HighlightRule> {
        let specs: Vec<RuleSpec> = specs
            .iter()
            .map(|(p, c)| RuleSpec::new(*p, *c))
            .collect();
        compile_rules(&specs).expect("test rules compile")
    }

    #[test]
    fn wraps_matches_in_class_markers() {
        let out = highlight("GET then POST", &rules(&[("GET|POST", "kw")]));
        assert_eq!(
            out,
            "<span class=\"kw\">GET</span> then <span class=\"kw\">POST</span>"
        );
    }

    #[test]
    fn rule_order_is_significant() {
        let forward = highlight("ab", &rules(&[("ab", "one"), ("b", "two")]));
        let backward = highlight("ab", &rules(&[("b", "two"), ("ab", "one")]));
        assert_ne!(forward, backward);
    }

    #[test]
    fn later_rules_scan_cumulative_output_not_the_original() {
        // The second rule matches the word "class" inside the markup the
        // first rule inserted. This is the documented ordering sensitivity.
        let out = highlight("cat", &rules(&[("cat", "animal"), ("class", "meta")]));
        assert_eq!(
            out,
            "<span <span class=\"meta\">class</span>=\"animal\">cat</span>"
        );
    }

    #[test]
    fn identical_inputs_produce_identical_bytes() {
        let chain = rules(&[("GET|POST|DELETE", "kw"), ("CGI", "fn")]);
        let text = "GET the CGI page, POST it back";
        assert_eq!(highlight(text, &chain), highlight(text, &chain));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let out = highlight("get GET", &rules(&[("GET", "kw")]));
        assert_eq!(out, "get <span class=\"kw\">GET</span>");
    }

    #[test]
    fn empty_rule_list_is_identity() {
        assert_eq!(highlight("untouched", &[]), "untouched");
    }

    #[test]
    fn bad_pattern_reports_offending_class() {
        let err = HighlightRule::new("(unclosed", "broken-class")
            .expect_err("pattern must not compile");
        match err {
            ReportError::InvalidRule { class, .. } => assert_eq!(class, "broken-class"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

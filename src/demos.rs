//! The fixed demo snippet catalog.
//!
//! Each entry pairs an illustrative one-liner with the value it produces
//! over [`SAMPLE_TEXT`](crate::SAMPLE_TEXT). Results are baked in as data:
//! nothing here is evaluated at report time, and the catalog never changes
//! after process start. Tests verify the baked values against a live
//! recomputation so catalog and sample text cannot drift apart.

use serde::Serialize;

/// One catalog entry: a labeled snippet and its precomputed result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DemoEntry {
    /// Display label.
    pub name: &'static str,
    /// The snippet source, for display only.
    pub code: &'static str,
    /// The value the snippet yields over the sample text.
    pub result: &'static str,
}

/// The catalog, in fixed display order.
pub fn demo_catalog() -> &'static [DemoEntry] {
    &CATALOG
}

static CATALOG: [DemoEntry; 5] = [
    DemoEntry {
        name: "Regex Matching",
        code: r#"Regex::new(r"[A-Z][a-z]+")?.find_iter(text).map(|m| m.as_str()).collect::<Vec<_>>().join(", ")"#,
        result: "The, Web, Serv, It, This",
    },
    DemoEntry {
        name: "Map Transform",
        code: r#"text.split_whitespace().map(|w| w[..1].to_uppercase() + &w[1..]).collect::<Vec<_>>().join(" ")"#,
        result: "The WebServ Project Implements A HTTP/1.1 Compliant Web Server In C++. \
                 It Handles GET, POST And DELETE Methods, Can Serve Static Files, \
                 Process CGI Scripts, And Provides Various Configuration Options. \
                 This Demonstrates Dynamic Text Processing Capabilities Through CGI.",
    },
    DemoEntry {
        name: "Functional Filter",
        code: r#"text.split_whitespace().filter(|w| w.len() > 5).collect::<Vec<_>>().join(" ")"#,
        result: "WebServ project implements HTTP/1.1 compliant server handles DELETE \
                 methods, static files, process scripts, provides various configuration \
                 options. demonstrates dynamic processing capabilities through",
    },
    DemoEntry {
        name: "String Interpolation",
        code: r#"format!("There are {word_count} words in the text")"#,
        result: "There are 38 words in the text",
    },
    DemoEntry {
        name: "One-line Sort",
        code: r#"{ let mut words: Vec<_> = text.split_whitespace().collect(); words.sort_by_key(|w| w.len()); words.join(" ") }"#,
        result: "a in It The web and can CGI and C++. GET, POST This text CGI. serve \
                 server DELETE static files, WebServ project handles process various \
                 dynamic through HTTP/1.1 methods, scripts, provides options. compliant \
                 implements processing demonstrates capabilities configuration",
    },
];

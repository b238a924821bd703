//! CGI-style entry point: analyzes the bundled sample document and writes
//! the rendered report to stdout. Logs go to stderr so the payload stays
//! clean for whatever captures it.

use textreport::{
    demo_catalog, error_document, generate_report, render_document, ReportConfig, SystemInfo,
    SAMPLE_TEXT,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = ReportConfig::default();
    let system = SystemInfo::collect();

    match generate_report(SAMPLE_TEXT, &cfg, demo_catalog(), system) {
        Ok(report) => println!("{}", render_document(&report)),
        Err(err) => println!("{}", error_document(&err)),
    }
}

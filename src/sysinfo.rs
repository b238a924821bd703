//! System metadata collection.
//!
//! The report carries a handful of environment facts: who generated it,
//! where, and when. They are opaque strings as far as the pipeline is
//! concerned, gathered synchronously before assembly. A value that cannot
//! be obtained degrades to [`PLACEHOLDER`] with a warning; metadata
//! collection never fails the report.

use std::process::Command;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Substituted for any metadata value that could not be collected.
pub const PLACEHOLDER: &str = "unknown";

/// Environment facts attached to every report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemInfo {
    /// Generator version (compile-time crate version).
    pub version: String,
    /// `{os}-{arch}` identifier of the build target.
    pub platform: String,
    /// Host name, as reported by the `hostname` command.
    pub hostname: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub current_time: String,
    /// OS kernel release, as reported by `uname -r`.
    pub kernel: String,
}

impl SystemInfo {
    /// Gathers metadata from the running environment.
    pub fn collect() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            hostname: command_line("hostname", &[]).unwrap_or_else(|| fallback("hostname")),
            current_time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            kernel: command_line("uname", &["-r"]).unwrap_or_else(|| fallback("kernel")),
        }
    }
}

fn fallback(field: &'static str) -> String {
    warn!(field, "system metadata unavailable, using placeholder");
    PLACEHOLDER.to_string()
}

/// Runs a command and returns its trimmed stdout, or `None` on any failure:
/// missing binary, non-zero exit, bad UTF-8, or empty output.
fn command_line(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

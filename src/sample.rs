//! The bundled demo document.
//!
//! Every pipeline invocation analyzes one fixed multi-line sample; the demo
//! catalog's pre-baked results are computed over this exact text, so the two
//! must stay in sync.

/// The sample document fed through the pipeline by the bundled binary.
///
/// Four lines, trailing newline included. The stock highlight rules target
/// the HTTP method names and project terms that appear here.
pub const SAMPLE_TEXT: &str = "\
The WebServ project implements a HTTP/1.1 compliant web server in C++.
It handles GET, POST and DELETE methods, can serve static files,
process CGI scripts, and provides various configuration options.
This demonstrates dynamic text processing capabilities through CGI.
";

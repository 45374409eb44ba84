//! CLI output: error mapping and exit codes.

/// No results were found.
pub const EXIT_OK: i32 = 0;

/// At least one result was found.
pub const EXIT_RESULTS: i32 = 1;

/// The run failed with an unhandled error.
pub const EXIT_FAILURE: i32 = 255;

/// Map a failed run to the line printed on stderr. The top-level message is
/// kept verbatim; causes follow on their own lines.
pub fn map_error(e: &anyhow::Error) -> String {
    let mut out = e.to_string();
    for cause in e.chain().skip(1) {
        out.push_str(&format!("\n  caused by: {}", cause));
    }
    out
}

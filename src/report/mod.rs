//! Text rendering for both tools. Everything writes to a `Write` so the
//! binaries can hand in stdout and tests a buffer.

pub mod simple;
pub mod structured;

use crate::config::ProbeConfig;

pub const SHORT_RULE: &str = "==================================================";
pub const LONG_RULE: &str = "============================================================";

fn to_fixed_width(input: &str, width: usize) -> String {
    use unicode_truncate::UnicodeTruncateStr;

    let (truncated, _) = input.unicode_truncate(width);
    format!("{:<width$}", truncated, width = width)
}

/// SSE URL suggested to clients of a working server.
pub fn sse_url(config: &ProbeConfig, port: u16) -> String {
    format!("{}/sse", config.base_url(port))
}

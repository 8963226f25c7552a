pub mod http;
pub mod policy;
pub mod result;
pub mod tcp;

use std::fmt::Write;

pub mod prelude {
    pub use super::http::{Endpoint, EndpointProber};
    pub use super::policy::ProbeStyle;
    pub use super::result::{EndpointOutcome, OverallStatus, ProbeFailure};
    pub use super::tcp::check_port_listening;
}

/// Flatten an error and its sources into one line.
pub fn report_error(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ". Caused by: {}", src);
        err = src;
    }
    s
}

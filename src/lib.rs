//! Connectivity checks for MCP servers expected on a local port range.
//!
//! Two runners share the same probes: [`prober::PortProber`] prints a verdict
//! per port as it goes, [`tester::McpServerTester`] keeps structured results
//! for a bucketed summary and an optional detail dump.

pub mod config;
pub mod error;
pub mod logger;
pub mod probe;
pub mod prober;
pub mod report;
pub mod tester;

pub use config::{ProbeConfig, load_config};
pub use error::{ConfigError, ProbeError};
pub use prober::PortProber;
pub use tester::McpServerTester;

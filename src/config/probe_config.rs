use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Probe configuration shared by the port prober and the MCP server tester.
/// Every field has a default, so an empty (or missing) config file yields the
/// stock run against `localhost:9001-9010`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Host the servers are expected on.
    pub host: String,

    /// First port of the probed range (inclusive).
    pub first_port: u16,

    /// Last port of the probed range (inclusive).
    pub last_port: u16,

    /// Timeout of the raw TCP listening check.
    pub tcp_timeout_ms: u64,

    /// Timeout of every HTTP probe issued by the port prober.
    pub simple_http_timeout_ms: u64,

    /// Timeout of the SSE and messages probes issued by the server tester.
    pub endpoint_timeout_ms: u64,

    /// Timeout of the server info (root) probe issued by the server tester.
    pub server_info_timeout_ms: u64,

    /// Status codes from `POST /messages` that count as a working endpoint.
    /// Defaults to 200, 400, 405 and 422 if not specified.
    pub accepted_message_statuses: Vec<u16>,

    /// Script suggested when no server is running.
    pub startup_script: String,

    /// How many example SSE URLs the summaries print.
    pub example_url_limit: usize,
}

fn default_message_statuses() -> Vec<u16> {
    vec![200, 400, 405, 422]
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            first_port: 9001,
            last_port: 9010,
            tcp_timeout_ms: 2000,
            simple_http_timeout_ms: 3000,
            endpoint_timeout_ms: 5000,
            server_info_timeout_ms: 3000,
            accepted_message_statuses: default_message_statuses(),
            startup_script: "./start_sse_servers.sh".to_string(),
            example_url_limit: 3,
        }
    }
}

impl ProbeConfig {
    /// A default configuration narrowed to a single host and port range.
    pub fn for_ports(host: &str, first_port: u16, last_port: u16) -> Self {
        Self {
            host: host.to_string(),
            first_port,
            last_port,
            ..Default::default()
        }
    }

    pub fn ports(&self) -> RangeInclusive<u16> {
        self.first_port..=self.last_port
    }

    pub fn port_count(&self) -> usize {
        self.ports().count()
    }

    pub fn tcp_timeout(&self) -> Duration {
        Duration::from_millis(self.tcp_timeout_ms)
    }

    pub fn simple_http_timeout(&self) -> Duration {
        Duration::from_millis(self.simple_http_timeout_ms)
    }

    pub fn endpoint_timeout(&self) -> Duration {
        Duration::from_millis(self.endpoint_timeout_ms)
    }

    pub fn server_info_timeout(&self) -> Duration {
        Duration::from_millis(self.server_info_timeout_ms)
    }

    /// Base URL of the server expected on `port`, without a trailing slash.
    pub fn base_url(&self, port: u16) -> String {
        format!("http://{}:{}", self.host, port)
    }

    /// Check the values a YAML file or environment override may have broken.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_port > self.last_port {
            return Err(ConfigError::Invalid {
                message: format!(
                    "first_port {} is greater than last_port {}",
                    self.first_port, self.last_port
                ),
            });
        }
        if self.first_port == 0 {
            return Err(ConfigError::Invalid {
                message: "port 0 cannot be probed".to_string(),
            });
        }

        let timeouts = [
            ("tcp_timeout_ms", self.tcp_timeout_ms),
            ("simple_http_timeout_ms", self.simple_http_timeout_ms),
            ("endpoint_timeout_ms", self.endpoint_timeout_ms),
            ("server_info_timeout_ms", self.server_info_timeout_ms),
        ];
        if let Some((name, _)) = timeouts.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Invalid {
                message: format!("{name} must be greater than zero"),
            });
        }

        Url::parse(&self.base_url(self.first_port)).map_err(|e| ConfigError::Invalid {
            message: format!("host '{}' does not form a valid URL: {e}", self.host),
        })?;

        Ok(())
    }
}

//! MCP server tester: probes every port, keeps the structured results and
//! reports them as working, problematic or not running.

use std::collections::BTreeMap;
use std::io::Write;

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::probe::prelude::*;
use crate::report::structured as render;

/// Structured result for one port. `details` keeps the message fields in
/// the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReport {
    pub port: u16,
    pub port_listening: bool,
    pub sse_endpoint: bool,
    pub messages_endpoint: bool,
    pub server_info: bool,
    pub status: OverallStatus,
    pub details: Vec<(&'static str, String)>,
}

impl ServerReport {
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn overall_message(status: OverallStatus) -> &'static str {
    match status {
        OverallStatus::Working => "✅ Server working",
        OverallStatus::Problematic => "⚠️  Server running but MCP endpoints may have issues",
        OverallStatus::NotResponding => "❌ Server not responding properly",
        OverallStatus::NotRunning => "Server not running - port not listening",
    }
}

/// The three summary buckets. A listening port that is not working is
/// problematic, whether or not its root answered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TesterSummary {
    pub working: Vec<u16>,
    pub problematic: Vec<u16>,
    pub not_running: Vec<u16>,
}

impl TesterSummary {
    pub fn from_results(results: &BTreeMap<u16, ServerReport>) -> Self {
        let mut summary = Self::default();
        for (port, result) in results {
            if result.sse_endpoint || result.messages_endpoint {
                summary.working.push(*port);
            } else if result.port_listening {
                summary.problematic.push(*port);
            } else {
                summary.not_running.push(*port);
            }
        }
        summary
    }
}

pub struct McpServerTester {
    config: ProbeConfig,
    http: EndpointProber,
    results: BTreeMap<u16, ServerReport>,
}

impl McpServerTester {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let http = EndpointProber::new(
            &config.host,
            ProbeStyle::Structured,
            config.accepted_message_statuses.clone(),
        )?;
        Ok(Self {
            config,
            http,
            results: BTreeMap::new(),
        })
    }

    pub fn results(&self) -> &BTreeMap<u16, ServerReport> {
        &self.results
    }

    /// Probe one port: TCP first, then SSE, messages and server info when something listens.
    pub async fn test_single_server(&self, port: u16) -> ServerReport {
        let listening =
            check_port_listening(&self.config.host, port, self.config.tcp_timeout()).await;
        let port_detail = if listening { "Listening" } else { "Not listening" };
        let mut details = vec![("port", port_detail.to_string())];

        if !listening {
            details.push(("overall", overall_message(OverallStatus::NotRunning).to_string()));
            return ServerReport {
                port,
                port_listening: false,
                sse_endpoint: false,
                messages_endpoint: false,
                server_info: false,
                status: OverallStatus::NotRunning,
                details,
            };
        }

        let endpoint_timeout = self.config.endpoint_timeout();
        let sse = self.http.probe(port, Endpoint::Sse, endpoint_timeout).await;
        let messages = self
            .http
            .probe(port, Endpoint::Messages, endpoint_timeout)
            .await;
        let info = self
            .http
            .probe(port, Endpoint::ServerInfo, self.config.server_info_timeout())
            .await;

        let status = OverallStatus::assess(sse.success, messages.success, info.success);
        details.push(("sse", sse.message));
        details.push(("messages", messages.message));
        details.push(("server", info.message));
        details.push(("overall", overall_message(status).to_string()));

        ServerReport {
            port,
            port_listening: true,
            sse_endpoint: sse.success,
            messages_endpoint: messages.success,
            server_info: info.success,
            status,
            details,
        }
    }

    /// Test every configured port, store the results and print the summary.
    pub async fn test_all_servers<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        render::write_run_header(out, &self.config)?;

        for port in self.config.ports() {
            writeln!(out, "Testing server on port {port}...")?;
            out.flush()?;

            let result = self.test_single_server(port).await;
            log::info!("Port {port}: {}", result.status);
            self.results.insert(port, result);
            writeln!(out)?;
        }

        self.print_summary(out)
    }

    pub fn summary(&self) -> TesterSummary {
        TesterSummary::from_results(&self.results)
    }

    pub fn print_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        render::write_summary(out, &self.summary(), &self.config)
    }

    pub fn print_detailed_results<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        render::write_detailed_results(out, &self.results)
    }
}

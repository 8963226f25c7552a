//! Port prober: walks the configured port range, prints a verdict per port as
//! it goes and a short summary at the end.

use std::io::Write;

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::probe::prelude::*;
use crate::report::simple as render;

/// Everything learned about one port during a prober run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortReport {
    pub port: u16,
    pub listening: bool,
    pub root: Option<EndpointOutcome>,
    pub sse: Option<EndpointOutcome>,
    pub messages: Option<EndpointOutcome>,
    pub status: OverallStatus,
}

impl PortReport {
    fn not_running(port: u16) -> Self {
        Self {
            port,
            listening: false,
            root: None,
            sse: None,
            messages: None,
            status: OverallStatus::NotRunning,
        }
    }

    /// Working or problematic: the server answered on at least one endpoint.
    pub fn is_responding(&self) -> bool {
        matches!(
            self.status,
            OverallStatus::Working | OverallStatus::Problematic
        )
    }
}

/// Port lists derived from a finished run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProberSummary {
    pub listening: Vec<u16>,
    pub working: Vec<u16>,
    pub not_running: Vec<u16>,
}

impl ProberSummary {
    pub fn from_reports(reports: &[PortReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            if report.status.is_listening() {
                summary.listening.push(report.port);
            } else {
                summary.not_running.push(report.port);
            }
            if report.is_responding() {
                summary.working.push(report.port);
            }
        }
        summary
    }
}

pub struct PortProber {
    config: ProbeConfig,
    http: EndpointProber,
}

impl PortProber {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let http = EndpointProber::new(
            &config.host,
            ProbeStyle::Simple,
            config.accepted_message_statuses.clone(),
        )?;
        Ok(Self { config, http })
    }

    /// Probe one port: TCP first, then root, SSE and messages when something listens.
    pub async fn test_single_port(&self, port: u16) -> PortReport {
        if !check_port_listening(&self.config.host, port, self.config.tcp_timeout()).await {
            return PortReport::not_running(port);
        }

        let timeout = self.config.simple_http_timeout();
        let root = self.http.probe(port, Endpoint::Root, timeout).await;
        let sse = self.http.probe(port, Endpoint::Sse, timeout).await;
        let messages = self.http.probe(port, Endpoint::Messages, timeout).await;
        let status = OverallStatus::assess(sse.success, messages.success, root.success);

        PortReport {
            port,
            listening: true,
            root: Some(root),
            sse: Some(sse),
            messages: Some(messages),
            status,
        }
    }

    /// Run the whole range, printing to `out` as results come in.
    pub async fn run<W: Write>(&self, out: &mut W) -> std::io::Result<Vec<PortReport>> {
        render::write_banner(out, &self.config)?;

        let mut reports = Vec::with_capacity(self.config.port_count());
        for port in self.config.ports() {
            writeln!(out, "Testing port {port}...")?;
            out.flush()?;

            let report = self.test_single_port(port).await;
            log::info!("Port {port}: {}", report.status);
            render::write_port_report(out, &report)?;
            writeln!(out)?;
            reports.push(report);
        }

        let summary = ProberSummary::from_reports(&reports);
        render::write_summary(out, &summary, &self.config)?;
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn config_for(port: u16) -> ProbeConfig {
        ProbeConfig {
            simple_http_timeout_ms: 1000,
            tcp_timeout_ms: 1000,
            ..ProbeConfig::for_ports("127.0.0.1", port, port)
        }
    }

    fn unused_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_not_listening_skips_http_probes() {
        let port = unused_port();
        let prober = PortProber::new(config_for(port)).unwrap();

        let report = prober.test_single_port(port).await;

        assert_eq!(report, PortReport::not_running(port));
        assert!(report.root.is_none());
        assert!(report.messages.is_none());
    }

    #[tokio::test]
    async fn test_working_server() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sse");
                then.status(200).body("event: endpoint\ndata: /messages\n\n");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/messages");
                then.status(400);
            })
            .await;

        let prober = PortProber::new(config_for(server.port())).unwrap();
        let report = prober.test_single_port(server.port()).await;

        assert!(report.listening);
        assert_eq!(report.status, OverallStatus::Working);
        assert_eq!(report.root, Some(EndpointOutcome::ok("HTTP 200")));
        assert_eq!(report.sse, Some(EndpointOutcome::ok("HTTP 200")));
        assert_eq!(report.messages, Some(EndpointOutcome::ok("HTTP 400")));
    }

    #[tokio::test]
    async fn test_any_sse_answer_counts_as_working() {
        // no mocks: every path answers 404
        let server = MockServer::start_async().await;

        let prober = PortProber::new(config_for(server.port())).unwrap();
        let report = prober.test_single_port(server.port()).await;

        assert_eq!(report.status, OverallStatus::Working);
        assert_eq!(
            report.messages,
            Some(EndpointOutcome::failed("HTTP 404 (unexpected status)"))
        );
    }

    #[tokio::test]
    async fn test_run_prints_summary() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/messages");
                then.status(405);
            })
            .await;

        let prober = PortProber::new(config_for(server.port())).unwrap();
        let mut out = Vec::new();
        let reports = prober.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(reports.len(), 1);
        let port = server.port();
        assert!(text.contains(&format!("Testing port {port}...")));
        assert!(text.contains(&format!("✅ Port {port}: Listening")));
        assert!(text.contains(&format!("Working MCP servers: [{port}]")));
        assert!(text.contains(&format!("  http://127.0.0.1:{port}/sse")));
    }

    #[tokio::test]
    async fn test_repeated_runs_agree() {
        let server = MockServer::start_async().await;
        let prober = PortProber::new(config_for(server.port())).unwrap();

        let first = prober.test_single_port(server.port()).await;
        let second = prober.test_single_port(server.port()).await;
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_counts_problematic_as_working() {
        let responding = |port, status| PortReport {
            port,
            listening: true,
            root: Some(EndpointOutcome::ok("HTTP 200")),
            sse: None,
            messages: None,
            status,
        };
        let reports = vec![
            responding(9001, OverallStatus::Working),
            responding(9002, OverallStatus::Problematic),
            responding(9003, OverallStatus::NotResponding),
            PortReport::not_running(9004),
        ];

        let summary = ProberSummary::from_reports(&reports);
        assert_eq!(summary.listening, vec![9001, 9002, 9003]);
        assert_eq!(summary.working, vec![9001, 9002]);
        assert_eq!(summary.not_running, vec![9004]);
    }
}

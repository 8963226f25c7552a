use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use super::policy::{ProbeStyle, classify_failure, classify_status};
use super::report_error;
use super::result::{EndpointOutcome, ProbeFailure};

const USER_AGENT: &str = concat!("mcpprobe/", env!("CARGO_PKG_VERSION"));

/// The HTTP endpoints an MCP server is expected to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Root,
    Sse,
    Messages,
    /// `GET /`, reported as server information by the server tester.
    ServerInfo,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Root | Endpoint::ServerInfo => "/",
            Endpoint::Sse => "/sse",
            Endpoint::Messages => "/messages",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Root => "Root",
            Endpoint::Sse => "SSE",
            Endpoint::Messages => "Messages",
            Endpoint::ServerInfo => "Server info",
        }
    }
}

/// JSON-RPC ping posted to `/messages`.
#[derive(Debug, Serialize)]
struct PingRequest {
    jsonrpc: &'static str,
    method: &'static str,
    id: u32,
}

const PING: PingRequest = PingRequest {
    jsonrpc: "2.0",
    method: "ping",
    id: 1,
};

/// Issues single-attempt HTTP probes against `http://<host>:<port>` and
/// classifies each answer according to its [`ProbeStyle`].
pub struct EndpointProber {
    client: Client,
    host: String,
    style: ProbeStyle,
    accepted_messages: Vec<u16>,
}

impl EndpointProber {
    pub fn new(
        host: &str,
        style: ProbeStyle,
        accepted_messages: Vec<u16>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            host: host.to_string(),
            style,
            accepted_messages,
        })
    }

    pub fn url(&self, port: u16, endpoint: Endpoint) -> String {
        format!("http://{}:{}{}", self.host, port, endpoint.path())
    }

    /// Probe one endpoint. Never fails: transport errors are folded into the outcome.
    /// The response body is left unread, so a streaming `/sse` answer does not hold the probe.
    pub async fn probe(&self, port: u16, endpoint: Endpoint, timeout: Duration) -> EndpointOutcome {
        let url = self.url(port, endpoint);
        let request = match endpoint {
            Endpoint::Messages => self.client.post(&url).json(&PING),
            Endpoint::Root | Endpoint::Sse | Endpoint::ServerInfo => self.client.get(&url),
        };

        match request.timeout(timeout).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                log::debug!("{} {url} answered {status}", endpoint.label());
                classify_status(self.style, endpoint, status, &self.accepted_messages)
            }
            Err(e) => {
                let failure = failure_from(&e);
                log::debug!("{} {url} failed: {failure:?}", endpoint.label());
                classify_failure(self.style, endpoint, &failure)
            }
        }
    }
}

fn failure_from(err: &reqwest::Error) -> ProbeFailure {
    // a connect-phase timeout is still a connection failure
    if err.is_connect() {
        ProbeFailure::ConnectionRefused
    } else if err.is_timeout() {
        ProbeFailure::Timeout
    } else {
        ProbeFailure::Other(report_error(err))
    }
}

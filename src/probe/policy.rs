use super::http::Endpoint;
use super::result::{EndpointOutcome, ProbeFailure};

/// Which tool is classifying. The port prober and the server tester read the
/// same responses differently, so every rule is keyed by style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStyle {
    /// Port prober: any response on `/` or `/sse` counts.
    Simple,
    /// Server tester: `/sse` must answer 200, the root probe reports server info.
    Structured,
}

/// Classify a received HTTP status.
///
/// `/messages` succeeds only for a status in `accepted_messages`, whatever the
/// style. Every other endpoint accepts any status except `/sse` under the
/// structured style, which wants a 200.
pub fn classify_status(
    style: ProbeStyle,
    endpoint: Endpoint,
    status: u16,
    accepted_messages: &[u16],
) -> EndpointOutcome {
    match (style, endpoint) {
        (ProbeStyle::Simple, Endpoint::Messages) => {
            if accepted_messages.contains(&status) {
                EndpointOutcome::ok(format!("HTTP {status}"))
            } else {
                EndpointOutcome::failed(format!("HTTP {status} (unexpected status)"))
            }
        }
        (ProbeStyle::Simple, _) => {
            if status < 400 {
                EndpointOutcome::ok(format!("HTTP {status}"))
            } else {
                EndpointOutcome::ok(format!("HTTP {status} (server responding)"))
            }
        }
        (ProbeStyle::Structured, Endpoint::Messages) => {
            if accepted_messages.contains(&status) {
                EndpointOutcome::ok(format!("Messages endpoint responding (status: {status})"))
            } else {
                EndpointOutcome::failed(format!("Messages endpoint returned status: {status}"))
            }
        }
        (ProbeStyle::Structured, Endpoint::Sse) => {
            if status == 200 {
                EndpointOutcome::ok(format!("SSE endpoint responding (status: {status})"))
            } else {
                EndpointOutcome::failed(format!("SSE endpoint returned status: {status}"))
            }
        }
        (ProbeStyle::Structured, Endpoint::Root | Endpoint::ServerInfo) => match status {
            200 => EndpointOutcome::ok("Root endpoint accessible"),
            404 => EndpointOutcome::ok("Server running (404 expected for root)"),
            _ => EndpointOutcome::ok(format!("Server responding (status: {status})")),
        },
    }
}

/// Classify a probe that never got a response.
pub fn classify_failure(
    style: ProbeStyle,
    endpoint: Endpoint,
    failure: &ProbeFailure,
) -> EndpointOutcome {
    let message = match (style, failure) {
        (_, ProbeFailure::Other(text)) => format!("Error: {text}"),
        (ProbeStyle::Simple, ProbeFailure::ConnectionRefused) => "Connection refused".to_string(),
        (ProbeStyle::Simple, ProbeFailure::Timeout) => "Timeout".to_string(),
        (ProbeStyle::Structured, ProbeFailure::ConnectionRefused) => match endpoint {
            Endpoint::Sse | Endpoint::Messages => {
                "Connection refused - server not running".to_string()
            }
            Endpoint::Root | Endpoint::ServerInfo => "Connection refused".to_string(),
        },
        (ProbeStyle::Structured, ProbeFailure::Timeout) => match endpoint {
            Endpoint::Sse | Endpoint::Messages => "Request timeout".to_string(),
            // the server info probe has no timeout wording of its own
            Endpoint::Root | Endpoint::ServerInfo => "Error: request timed out".to_string(),
        },
    };
    EndpointOutcome::failed(message)
}

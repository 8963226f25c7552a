use std::fmt;

/// What a single endpoint probe concluded: whether the endpoint counts as
/// responding, plus the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointOutcome {
    pub success: bool,
    pub message: String,
}

impl EndpointOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Transport-level failure of an HTTP probe, before any response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    ConnectionRefused,
    Timeout,
    Other(String),
}

/// Verdict for one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverallStatus {
    /// SSE or messages endpoint answered as expected.
    Working,
    /// The server answers on `/` but the MCP endpoints do not.
    Problematic,
    /// Listening, but no HTTP probe succeeded.
    NotResponding,
    /// Nothing accepted the TCP connection.
    NotRunning,
}

impl OverallStatus {
    /// Verdict for a listening port, from the outcome of its probes.
    pub fn assess(sse_ok: bool, messages_ok: bool, root_ok: bool) -> Self {
        if sse_ok || messages_ok {
            OverallStatus::Working
        } else if root_ok {
            OverallStatus::Problematic
        } else {
            OverallStatus::NotResponding
        }
    }

    pub fn is_listening(&self) -> bool {
        !matches!(self, OverallStatus::NotRunning)
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OverallStatus::Working => "working",
            OverallStatus::Problematic => "problematic",
            OverallStatus::NotResponding => "not responding",
            OverallStatus::NotRunning => "not running",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_or_messages_means_working() {
        assert_eq!(OverallStatus::assess(true, false, false), OverallStatus::Working);
        assert_eq!(OverallStatus::assess(false, true, false), OverallStatus::Working);
        assert_eq!(OverallStatus::assess(true, true, true), OverallStatus::Working);
    }

    #[test]
    fn test_root_only_means_problematic() {
        assert_eq!(OverallStatus::assess(false, false, true), OverallStatus::Problematic);
    }

    #[test]
    fn test_nothing_means_not_responding() {
        let status = OverallStatus::assess(false, false, false);
        assert_eq!(status, OverallStatus::NotResponding);
        assert!(status.is_listening());
        assert!(!OverallStatus::NotRunning.is_listening());
    }
}

use std::io::{self, Write};

use super::{SHORT_RULE, sse_url};
use crate::config::ProbeConfig;
use crate::probe::prelude::*;
use crate::prober::{PortReport, ProberSummary};

pub fn write_banner<W: Write>(out: &mut W, config: &ProbeConfig) -> io::Result<()> {
    writeln!(out, "Simple MCP Server Port Test")?;
    writeln!(
        out,
        "Testing ports {}-{}...",
        config.first_port, config.last_port
    )?;
    writeln!(out, "{SHORT_RULE}")
}

/// Per-port lines printed right after a port has been probed.
pub fn write_port_report<W: Write>(out: &mut W, report: &PortReport) -> io::Result<()> {
    let port = report.port;
    if !report.listening {
        return writeln!(out, "  ❌ Port {port}: Not listening");
    }

    writeln!(out, "  ✅ Port {port}: Listening")?;
    let probes = [
        (Endpoint::Root, &report.root),
        (Endpoint::Sse, &report.sse),
        (Endpoint::Messages, &report.messages),
    ];
    for (endpoint, outcome) in probes {
        if let Some(outcome) = outcome {
            writeln!(
                out,
                "     {} ({}): {}",
                endpoint.label(),
                endpoint.path(),
                outcome.message
            )?;
        }
    }

    match report.status {
        OverallStatus::Working => {
            writeln!(out, "  🎉 Port {port}: MCP server appears to be working!")
        }
        OverallStatus::Problematic => writeln!(
            out,
            "  ⚠️  Port {port}: Server running but MCP endpoints may have issues"
        ),
        OverallStatus::NotResponding | OverallStatus::NotRunning => {
            writeln!(out, "  ❌ Port {port}: Server not responding properly")
        }
    }
}

pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &ProberSummary,
    config: &ProbeConfig,
) -> io::Result<()> {
    writeln!(out, "{SHORT_RULE}")?;
    writeln!(out, "SUMMARY:")?;
    writeln!(out, "Ports listening: {:?}", summary.listening)?;
    writeln!(out, "Working MCP servers: {:?}", summary.working)?;
    writeln!(out, "Not running: {:?}", summary.not_running)?;

    if !summary.working.is_empty() {
        writeln!(out, "\n🎉 {} servers are working!", summary.working.len())?;
        writeln!(out, "Connect using SSE endpoints:")?;
        for port in summary.working.iter().take(config.example_url_limit) {
            writeln!(out, "  {}", sse_url(config, *port))?;
        }
    } else {
        writeln!(out, "\n❌ No servers are working properly.")?;
        if summary.listening.is_empty() {
            writeln!(out, "💡 Try running: {}", config.startup_script)?;
        }
    }
    Ok(())
}

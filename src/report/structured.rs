use std::collections::BTreeMap;
use std::io::{self, Write};

use super::{LONG_RULE, sse_url, to_fixed_width};
use crate::config::ProbeConfig;
use crate::tester::{ServerReport, TesterSummary};

pub fn write_banner<W: Write>(out: &mut W, config: &ProbeConfig) -> io::Result<()> {
    writeln!(out, "MCP Server Connectivity Tester")?;
    writeln!(
        out,
        "Testing ports {}-{} for MCP server functionality",
        config.first_port, config.last_port
    )?;
    writeln!(out)
}

pub fn write_run_header<W: Write>(out: &mut W, config: &ProbeConfig) -> io::Result<()> {
    writeln!(
        out,
        "Testing MCP servers on ports {}-{}...",
        config.first_port, config.last_port
    )?;
    writeln!(out, "{LONG_RULE}")
}

pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &TesterSummary,
    config: &ProbeConfig,
) -> io::Result<()> {
    writeln!(out, "\n{LONG_RULE}")?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{LONG_RULE}")?;

    writeln!(
        out,
        "✅ Working servers ({}): {:?}",
        summary.working.len(),
        summary.working
    )?;
    writeln!(
        out,
        "⚠️  Problematic servers ({}): {:?}",
        summary.problematic.len(),
        summary.problematic
    )?;
    writeln!(
        out,
        "❌ Not running ({}): {:?}",
        summary.not_running.len(),
        summary.not_running
    )?;

    if !summary.working.is_empty() {
        writeln!(
            out,
            "\n🎉 {} out of {} servers are working properly!",
            summary.working.len(),
            config.port_count()
        )?;
        writeln!(out, "\nTo connect to a working server, use:")?;
        for port in summary.working.iter().take(config.example_url_limit) {
            writeln!(out, "  {}", sse_url(config, *port))?;
        }
    }

    if !summary.not_running.is_empty() {
        writeln!(
            out,
            "\n🔧 {} servers are not running. Check if {} was executed.",
            summary.not_running.len(),
            script_name(&config.startup_script)
        )?;
    }

    if !summary.problematic.is_empty() {
        writeln!(
            out,
            "\n⚠️  {} servers are running but have endpoint issues.",
            summary.problematic.len()
        )?;
    }
    Ok(())
}

/// Every recorded detail per port, keys padded to a common width.
pub fn write_detailed_results<W: Write>(
    out: &mut W,
    results: &BTreeMap<u16, ServerReport>,
) -> io::Result<()> {
    writeln!(out, "\n{LONG_RULE}")?;
    writeln!(out, "DETAILED RESULTS")?;
    writeln!(out, "{LONG_RULE}")?;

    let key_width = results
        .values()
        .flat_map(|r| r.details.iter().map(|(k, _)| k.len()))
        .max()
        .unwrap_or(0);

    for (port, result) in results {
        writeln!(out, "\nPort {port}:")?;
        for (key, value) in &result.details {
            writeln!(out, "  {}: {}", to_fixed_width(key, key_width), value)?;
        }
    }
    Ok(())
}

fn script_name(script: &str) -> &str {
    script.rsplit('/').next().unwrap_or(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::prelude::OverallStatus;

    fn render_summary(summary: &TesterSummary) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, summary, &ProbeConfig::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_buckets_and_hints() {
        let summary = TesterSummary {
            working: vec![9001, 9002, 9003, 9004],
            problematic: vec![9005],
            not_running: vec![9006, 9007],
        };
        let text = render_summary(&summary);

        assert!(text.contains("✅ Working servers (4): [9001, 9002, 9003, 9004]"));
        assert!(text.contains("⚠️  Problematic servers (1): [9005]"));
        assert!(text.contains("❌ Not running (2): [9006, 9007]"));
        assert!(text.contains("🎉 4 out of 10 servers are working properly!"));
        assert!(text.contains("  http://localhost:9003/sse"));
        assert!(!text.contains("  http://localhost:9004/sse"));
        assert!(
            text.contains(
                "🔧 2 servers are not running. Check if start_sse_servers.sh was executed."
            )
        );
        assert!(text.contains("⚠️  1 servers are running but have endpoint issues."));
    }

    #[test]
    fn test_summary_with_nothing_running() {
        let summary = TesterSummary {
            not_running: (9001..=9010).collect(),
            ..Default::default()
        };
        let text = render_summary(&summary);

        assert!(text.contains("✅ Working servers (0): []"));
        assert!(!text.contains("To connect"));
        assert!(!text.contains("endpoint issues"));
        assert!(text.contains("🔧 10 servers are not running."));
    }

    #[test]
    fn test_detailed_results_keep_detail_order() {
        let mut results = BTreeMap::new();
        results.insert(
            9002,
            ServerReport {
                port: 9002,
                port_listening: false,
                sse_endpoint: false,
                messages_endpoint: false,
                server_info: false,
                status: OverallStatus::NotRunning,
                details: vec![
                    ("port", "Not listening".to_string()),
                    ("overall", "Server not running - port not listening".to_string()),
                ],
            },
        );
        results.insert(
            9001,
            ServerReport {
                port: 9001,
                port_listening: true,
                sse_endpoint: true,
                messages_endpoint: false,
                server_info: true,
                status: OverallStatus::Working,
                details: vec![
                    ("port", "Listening".to_string()),
                    ("sse", "SSE endpoint responding (status: 200)".to_string()),
                    ("messages", "Messages endpoint returned status: 404".to_string()),
                    ("server", "Root endpoint accessible".to_string()),
                    ("overall", "✅ Server working".to_string()),
                ],
            },
        );

        let mut out = Vec::new();
        write_detailed_results(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("DETAILED RESULTS"));
        let first = text.find("Port 9001:").unwrap();
        let second = text.find("Port 9002:").unwrap();
        assert!(first < second);
        assert!(text.contains("  messages: Messages endpoint returned status: 404"));
        assert!(text.contains("  port    : Listening"));
        assert!(text.find("  sse     :").unwrap() < text.find("  overall :").unwrap());
    }
}

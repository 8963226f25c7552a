use clap::Parser;
use mcpprobe::logger::init_logger;
use mcpprobe::report::structured::write_banner;
use mcpprobe::{McpServerTester, ProbeError, load_config};

/// Test MCP servers on the configured ports for listening sockets and working
/// SSE / messages endpoints.
#[derive(Debug, Parser)]
#[command(
    name = "mcpprobe",
    about,
    ignore_errors = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print every recorded detail per port after the summary
    #[arg(long)]
    detailed: bool,
}

async fn run(cli: Cli) -> Result<(), ProbeError> {
    let config = load_config()?;
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = write_banner(&mut stdout, &config) {
        log::warn!("Failed to write to stdout: {e}");
    }

    let mut tester = McpServerTester::new(config)?;
    if let Err(e) = tester.test_all_servers(&mut stdout).await {
        log::warn!("Failed to write to stdout: {e}");
    }

    if cli.detailed {
        if let Err(e) = tester.print_detailed_results(&mut stdout) {
            log::warn!("Failed to write to stdout: {e}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

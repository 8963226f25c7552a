use mcpprobe::logger::init_logger;
use mcpprobe::{PortProber, ProbeError, load_config};

async fn run() -> Result<(), ProbeError> {
    let config = load_config()?;
    let prober = PortProber::new(config)?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = prober.run(&mut stdout).await {
        log::warn!("Failed to write to stdout: {e}");
    }
    Ok(())
}

// Takes no arguments; anything passed on the command line is ignored.
#[tokio::main]
async fn main() {
    init_logger();

    if let Err(e) = run().await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

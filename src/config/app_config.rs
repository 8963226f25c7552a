use std::env;
use std::path::Path;

use super::probe_config::ProbeConfig;
use crate::error::ConfigError;

pub const CONFIG_FILE_ENV: &str = "MCPPROBE_CONFIG";
pub const HOST_ENV: &str = "MCPPROBE_HOST";
pub const PORTS_ENV: &str = "MCPPROBE_PORTS";
pub const DEFAULT_CONFIG_FILE: &str = "mcpprobe.yml";

/// Load the probe configuration from a `.env` file, a YAML file and environment variables.
/// The YAML file is read from the location in `MCPPROBE_CONFIG` (default `mcpprobe.yml`).
/// A missing default file falls back to built-in defaults, while a missing file that was
/// named explicitly is an error. `MCPPROBE_HOST` and `MCPPROBE_PORTS` override the file.
pub fn load_config() -> Result<ProbeConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }

    let explicit = env::var(CONFIG_FILE_ENV).ok();
    let location = explicit
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    let mut config = read_config_file(Path::new(&location), explicit.is_some())?;
    apply_overrides(&mut config, env::var(HOST_ENV).ok(), env::var(PORTS_ENV).ok())?;
    config.validate()?;

    log::info!(
        "Probing {} ports {}-{}",
        config.host,
        config.first_port,
        config.last_port
    );
    Ok(config)
}

/// Read a YAML config file. When `required` is false a missing file yields the defaults.
pub fn read_config_file(path: &Path, required: bool) -> Result<ProbeConfig, ConfigError> {
    let location = path.display().to_string();
    let config_str = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            log::debug!("No config file at {location}, using defaults");
            return Ok(ProbeConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: location,
                source,
            });
        }
    };

    // an empty document deserializes to unit, not to a mapping
    if config_str.trim().is_empty() {
        return Ok(ProbeConfig::default());
    }

    serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Yaml {
        path: location,
        source,
    })
}

/// Apply the host and port range overrides taken from the environment.
pub fn apply_overrides(
    config: &mut ProbeConfig,
    host: Option<String>,
    ports: Option<String>,
) -> Result<(), ConfigError> {
    if let Some(host) = host.map(|h| h.trim().to_string()).filter(|h| !h.is_empty()) {
        config.host = host;
    }
    if let Some(ports) = ports {
        let (first, last) = parse_port_range(&ports)?;
        config.first_port = first;
        config.last_port = last;
    }
    Ok(())
}

/// Parse `9001-9010` or a single `9005` into an inclusive range.
pub fn parse_port_range(input: &str) -> Result<(u16, u16), ConfigError> {
    let invalid = || ConfigError::PortRange(input.to_string());

    let (first, last) = match input.split_once('-') {
        Some((first, last)) => (first, last),
        None => (input, input),
    };
    let first: u16 = first.trim().parse().map_err(|_| invalid())?;
    let last: u16 = last.trim().parse().map_err(|_| invalid())?;

    if first > last {
        return Err(invalid());
    }
    Ok((first, last))
}

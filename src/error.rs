use thiserror::Error;

/// Errors raised while loading or validating the probe configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid port range '{0}', expected FIRST-LAST or a single port")]
    PortRange(String),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Errors that stop a probe run before any port is tested.
///
/// Network failures against the probed servers never end up here; they are
/// folded into endpoint outcomes at the probe boundary.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T, E = ProbeError> = std::result::Result<T, E>;

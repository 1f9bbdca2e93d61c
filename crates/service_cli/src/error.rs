//! CLI error types.

use thiserror::Error;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A referenced file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument value is outside the supported set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A graph or result encoding could not be read or written.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// A graph failed structural validation.
    #[error("graph error: {0}")]
    Graph(#[from] product_core::GraphError),

    /// A simulation run failed.
    #[error("simulation error: {0}")]
    Simulation(#[from] product_engine::SimulationError),
}

use thiserror::Error;

/// Errors raised by the design environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("Invalid action: expected {expected} components, got {actual}")]
    InvalidArgument { expected: usize, actual: usize },

    #[error("Episode finished after {max_steps} steps; call reset() before stepping again")]
    EpisodeDone { max_steps: u32 },

    #[error("Invalid environment configuration: {0}")]
    InvalidConfig(String),
}

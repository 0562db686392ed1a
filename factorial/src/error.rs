use thiserror::Error;

/// Failure to evaluate a single factorial. Never fatal to a run: the
/// session renders it into the result line for that entry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("factorial is undefined for negative input {0}")]
    NegativeInput(i32),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    #[error("maximum token length must be at least 1")]
    ZeroTokenLength,
}

/// Everything that can stop a session before it reaches the end.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

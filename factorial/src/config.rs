use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Largest number of integers collected in one run.
pub const DEFAULT_CAPACITY: usize = 100;

/// Bytes kept from a single token. Anything past this is skipped.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 9;

/// How a factorial that does not fit in an `i32` is written out.
#[derive(Default, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OverflowPolicy {
    /// Print the wrapped value and mark it as an overflow.
    #[default]
    Report,
    /// Print the wrapped value as if nothing happened.
    Wrap,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OverflowPolicy::Report => write!(f, "report"),
            OverflowPolicy::Wrap => write!(f, "wrap"),
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "report" => Ok(OverflowPolicy::Report),
            "wrap" => Ok(OverflowPolicy::Wrap),
            other => Err(format!(
                "unknown overflow policy '{other}', expected 'report' or 'wrap'"
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    pub capacity: usize,
    pub max_token_len: usize,
    pub overflow: OverflowPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            overflow: OverflowPolicy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub const fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_token_len == 0 {
            return Err(ConfigError::ZeroTokenLength);
        }
        Ok(())
    }
}

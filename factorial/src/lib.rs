mod coerce;
mod collector;
mod config;
mod error;
mod evaluator;
mod reader;
mod session;

pub use crate::coerce::coerce;
pub use crate::collector::{Numbers, StopReason};
pub use crate::config::{Config, OverflowPolicy, DEFAULT_CAPACITY, DEFAULT_MAX_TOKEN_LEN};
pub use crate::error::{ConfigError, EvalError, SessionError};
pub use crate::evaluator::{factorial, Entry, Factorial};
pub use crate::session::{Phase, Report, Session};

use std::io::{BufRead, Write};

fn run_helper<R: BufRead, W: Write>(
    config: Config,
    input: R,
    output: W,
) -> Result<Report, SessionError> {
    let session = Session::new(config, input, output)?;
    session.run()
}

/// Prompts on `output` for up to `config.capacity` numbers read from
/// `input`, then writes the factorial of each in entry order.
pub fn run<R: BufRead, W: Write>(
    config: Config,
    input: R,
    output: W,
) -> Result<Report, SessionError> {
    log::info!(
        "Starting with capacity {}, token limit {}, overflow policy {}",
        config.capacity,
        config.max_token_len,
        config.overflow
    );
    run_helper(config, input, output)
}

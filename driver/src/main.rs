use anyhow::{Context, Result};
use clap::Parser;
use factorial::{Config, OverflowPolicy, DEFAULT_CAPACITY, DEFAULT_MAX_TOKEN_LEN};
use log::LevelFilter;
use std::io;

#[derive(Parser, Debug)]
#[clap(
    name = "factorials",
    version,
    about = "Read integers from stdin until 'q' and print their factorials"
)]
struct Cli {
    #[clap(long, default_value_t = DEFAULT_CAPACITY, help = "Maximum number of integers to read")]
    capacity: usize,

    #[clap(
        long,
        default_value_t = DEFAULT_MAX_TOKEN_LEN,
        help = "Bytes kept from each token, the rest are skipped"
    )]
    max_token_len: usize,

    #[clap(
        long,
        default_value = "report",
        help = "How to print results that do not fit in 32 bits: report or wrap"
    )]
    overflow: OverflowPolicy,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let config = Config::new()
        .with_capacity(cli.capacity)
        .with_max_token_len(cli.max_token_len)
        .with_overflow(cli.overflow);

    let stdin = io::stdin();
    let stdout = io::stdout();
    factorial::run(config, stdin.lock(), stdout.lock())
        .context("failed to compute factorials")?;
    Ok(())
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Print every narcissistic number with up to `--max-digits` digits.
//!
//! Numbers go to stdout one per line, ascending, followed by the elapsed
//! time. Progress and statistics are logged; set `RUST_LOG=info` (or `debug`
//! for per-length detail) to see them.

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use armstrong_search::numeric::constants::DEFAULT_MAX_LENGTH;
use armstrong_search::{search, SearchConfig, Width};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search numbers of 1 up to this many digits
    #[arg(short, long, env = "ARMSTRONG_MAX_DIGITS", default_value_t = DEFAULT_MAX_LENGTH)]
    max_digits: usize,

    /// Integer width: auto, u64 or u128
    #[arg(short, long, env = "ARMSTRONG_WIDTH", default_value_t = Width::Auto)]
    width: Width,

    /// Worker threads (default: one per core)
    #[arg(short, long, env = "ARMSTRONG_THREADS")]
    threads: Option<usize>,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        let config = SearchConfig::new(self.max_digits).with_width(self.width);
        match self.threads {
            Some(threads) => config.with_threads(threads),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger from environment variables (RUST_LOG)
    env_logger::init();

    let config = cli.config();
    let start = Instant::now();
    let report = search(&config)
        .with_context(|| format!("searching up to {} digits", config.max_len))?;
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for number in report.numbers.to_decimal_strings() {
        writeln!(out, "{}", number)?;
    }
    writeln!(out, "Execution time: {} seconds", elapsed.as_secs_f64())?;
    out.flush()?;

    for length in &report.lengths {
        info!(
            "{:>2} digits: {} found ({})",
            length.length, length.found, length.statistics
        );
    }
    info!("Width {}: {}", report.width, report.statistics);
    Ok(())
}

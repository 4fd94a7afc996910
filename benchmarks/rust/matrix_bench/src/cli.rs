//! Command line shared by every benchmark binary.
//!
//! ```text
//! <binary> [N] [CSV] [--quiet] [--json] [--threads <N>]
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::error::Result;
use crate::metrics::Kernel;
use crate::DEFAULT_N;

#[derive(Parser, Debug, Clone, Default)]
#[command(version, allow_negative_numbers = true)]
pub struct BenchArgs {
    /// Matrix / vector dimension (leading digits are used, like atoi)
    #[arg(value_name = "N")]
    pub size: Option<String>,

    /// Append the run's metrics to this CSV file, creating it with a header if needed
    #[arg(value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Suppress the summary lines on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the metrics record as a JSON object on stdout
    #[arg(long)]
    pub json: bool,

    /// Worker threads (default: all cores, or RAYON_NUM_THREADS)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

impl BenchArgs {
    /// Parse the process arguments under `kernel`'s binary name.
    pub fn parse_for(kernel: Kernel) -> Self {
        let matches = Self::command()
            .name(kernel.binary_name())
            .about(kernel.description())
            .get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Verbose,
    Quiet,
}

impl Verbosity {
    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub n: usize,
    pub csv_path: Option<PathBuf>,
    pub verbosity: Verbosity,
    pub json: bool,
    pub threads: Option<usize>,
}

impl BenchConfig {
    pub fn from_args(args: BenchArgs) -> Self {
        let n = match args.size.as_deref() {
            None => {
                tracing::warn!("no size given, defaulting to N={DEFAULT_N}");
                DEFAULT_N
            }
            Some(raw) => parse_dimension(raw).unwrap_or_else(|| {
                tracing::warn!(input = raw, "unparseable size, defaulting to N={DEFAULT_N}");
                DEFAULT_N
            }),
        };
        Self {
            n,
            csv_path: args.csv,
            verbosity: if args.quiet {
                Verbosity::Quiet
            } else {
                Verbosity::Verbose
            },
            json: args.json,
            threads: args.threads.filter(|&t| t > 0),
        }
    }

    /// Size the global worker pool and report how many workers it has.
    ///
    /// Must run before the first parallel kernel; afterwards the pool is fixed.
    pub fn init_thread_pool(&self) -> Result<usize> {
        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()?;
        }
        let workers = rayon::current_num_threads();
        tracing::info!(workers, "worker pool ready");
        Ok(workers)
    }
}

/// Leading-digit parse in the manner of C's `atoi`: whitespace and an optional
/// `+` are skipped and parsing stops at the first non-digit. Returns `None`
/// when there are no leading digits or the value does not fit in `usize`.
pub fn parse_dimension(raw: &str) -> Option<usize> {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hashcrack::report::{
    DEFAULT_REPORT_PATH, render_banner, render_partition, render_summary, write_report,
};
use hashcrack::search::{MAX_SUPPORTED_LENGTH, clamp_max_length, partition};
use hashcrack::{Charset, ParallelConfig, REFERENCE_ALPHABET, SearchConfig, run_parallel_search};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "hashcrack")]
#[command(about = "hashcrack - multithreaded keyspace search for a fingerprint match")]
#[command(version)]
struct Args {
    /// String whose fingerprint is searched for
    #[arg(default_value = "test")]
    target: String,

    /// Number of worker threads (values below 1 become 1)
    #[arg(default_value_t = 4, allow_negative_numbers = true)]
    threads: i64,

    /// Maximum candidate length (clamped to 1..=8)
    #[arg(default_value_t = 4, allow_negative_numbers = true)]
    max_length: i64,

    /// Ordered alphabet candidates are built from
    #[arg(long, default_value = REFERENCE_ALPHABET)]
    charset: String,

    /// File the performance report is written to
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    report: PathBuf,

    /// Skip writing the performance report
    #[arg(long)]
    no_report: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let threads = match usize::try_from(args.threads) {
        Ok(n) if n >= 1 => n,
        _ => {
            warn!(requested = args.threads, "thread count must be at least 1, using 1");
            1
        }
    };

    // Negative lengths fall through as 0 and clamp up to 1.
    let max_length = clamp_max_length(usize::try_from(args.max_length).unwrap_or(0));
    if i64::try_from(max_length).ok() != Some(args.max_length) {
        warn!(
            requested = args.max_length,
            used = max_length,
            "max length must be between 1 and {}, clamping",
            MAX_SUPPORTED_LENGTH
        );
    }

    let charset = Charset::new(&args.charset).context("invalid --charset")?;
    let search_config = SearchConfig::new(args.target)
        .with_charset(charset)
        .with_max_length(max_length);
    let parallel_config = ParallelConfig::default().with_workers(threads);

    let keyspace = search_config
        .keyspace()
        .context("invalid keyspace configuration")?;

    println!(
        "{}",
        render_banner(&search_config, parallel_config.num_workers, keyspace.size())
    );
    println!("{}", render_partition(&partition(keyspace.size(), threads)));

    let outcome =
        run_parallel_search(&search_config, &parallel_config).context("search aborted")?;

    println!();
    print!("{}", render_summary(&outcome));

    if !args.no_report {
        match write_report(&outcome, &args.report) {
            Ok(()) => println!("\nDetailed metrics saved to: {}", args.report.display()),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}

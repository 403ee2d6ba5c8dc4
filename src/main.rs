//! Interactive shell over the in-memory paged table.
//!
//! ```bash
//! pagedb            # prompt on stdin/stdout
//! pagedb -v         # debug logging on stderr
//! PAGEDB_LOG=pagedb=trace pagedb
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagedb::Repl;

/// A tiny pseudo-SQL shell backed by a fixed-capacity paged table
#[derive(Parser, Debug)]
#[command(name = "pagedb", version, about)]
struct Args {
    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Explicit tracing filter, overrides --verbose
    #[arg(long, env = "PAGEDB_LOG", value_name = "FILTER")]
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match Repl::new(stdin, stdout).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// stdout carries the shell protocol, so logs go to stderr.
fn init_logging(args: &Args) {
    let filter = match &args.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None if args.verbose => EnvFilter::new("pagedb=debug"),
        None => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

use clap::Parser;
use elb_bytes::{Report, parse_log};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_PATH: &str = "tmp/merged_log_file.log";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Access log to summarize
    #[arg(default_value = DEFAULT_LOG_PATH)]
    path: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match parse_log(&args.path) {
        Ok(dataset) => {
            print!("{}", Report::from_dataset(&dataset));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr; stdout only carries the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

mod args;
mod generator;
mod stream;

use args::CliArgs;
use clap::Parser;
use generator::ClientPool;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, BufWriter},
    process::ExitCode,
};
use stream::{StreamStats, write_log_stream};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let clients = ClientPool::new(&mut rng, *args.clients());

    match run(&args, &mut rng, &clients) {
        Ok(stats) => {
            eprintln!(
                "Wrote {} access log lines ({} noise) from {} clients: {} bytes received, {} bytes sent",
                stats.records + stats.noise,
                stats.noise,
                clients.as_slice().len(),
                stats.received_bytes,
                stats.sent_bytes
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("noise-maker error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs, rng: &mut StdRng, clients: &ClientPool) -> io::Result<StreamStats> {
    let (lines, ratio) = (*args.lines(), *args.noise_ratio());
    match args.output() {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_log_stream(&mut out, rng, lines, clients, ratio)
        }
        None => {
            let mut out = io::stdout().lock();
            write_log_stream(&mut out, rng, lines, clients, ratio)
        }
    }
}

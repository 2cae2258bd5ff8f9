use clap::Parser;
use derive_getters::Getters;
use std::path::PathBuf;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate synthetic load-balancer access logs for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Number of distinct client endpoints
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    clients: u16,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fraction of lines that deliberately do not match the access log grammar
    #[arg(long, default_value_t = 0.0, value_parser = parse_ratio)]
    noise_ratio: f64,
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::parse_from(["noise-maker"]);
        assert_eq!(*args.lines(), 1000);
        assert_eq!(*args.clients(), 10);
        assert_eq!(*args.seed(), None);
        assert_eq!(*args.noise_ratio(), 0.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(CliArgs::try_parse_from(["noise-maker", "--clients", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["noise-maker", "--noise-ratio", "1.5"]).is_err());
        assert!(CliArgs::try_parse_from(["noise-maker", "--noise-ratio", "x"]).is_err());
    }
}

use crate::generator::{ClientPool, generate_access_line, generate_noise_line};
use rand::Rng;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub records: usize,
    pub noise: usize,
    pub received_bytes: u128,
    pub sent_bytes: u128,
}

pub fn write_log_stream<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    lines: usize,
    clients: &ClientPool,
    noise_ratio: f64,
) -> io::Result<StreamStats> {
    let mut stats = StreamStats::default();
    for _ in 0..lines {
        if noise_ratio > 0.0 && rng.random_bool(noise_ratio) {
            writeln!(out, "{}", generate_noise_line(rng, clients))?;
            stats.noise += 1;
        } else {
            let line = generate_access_line(rng, clients);
            writeln!(out, "{line}")?;
            stats.records += 1;
            stats.received_bytes += u128::from(line.received_bytes);
            stats.sent_bytes += u128::from(line.sent_bytes);
        }
    }
    out.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn writes_requested_line_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = ClientPool::new(&mut rng, 4);
        let mut out = Vec::new();
        let stats = write_log_stream(&mut out, &mut rng, 25, &pool, 0.2).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 25);
        assert_eq!(stats.records + stats.noise, 25);
    }

    #[test]
    fn zero_ratio_writes_no_noise() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = ClientPool::new(&mut rng, 4);
        let stats = write_log_stream(&mut io::sink(), &mut rng, 100, &pool, 0.0).unwrap();
        assert_eq!(stats.noise, 0);
        assert_eq!(stats.records, 100);
    }
}

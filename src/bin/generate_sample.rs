use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

const HEADER: &str = "site,hour,vehicles,mean_speed";
const SITES: [(&str, f64); 3] = [("north_gate", 420.0), ("ring_road", 900.0), ("market_st", 260.0)];

/// SplitMix64 stream; deterministic per seed.
struct Jitter(u64);

impl Jitter {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[-spread, spread)`.
    fn around(&mut self, spread: f64) -> f64 {
        (self.unit() * 2.0 - 1.0) * spread
    }

    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

/// Daily traffic profile: rush-hour peaks at 08:00 and 17:00.
fn expected_vehicles(hour: u32, base: f64) -> f64 {
    let peak = |centre: f64, width: f64| {
        (-(f64::from(hour) - centre).powi(2) / (2.0 * width * width)).exp()
    };
    base * (0.2 + peak(8.0, 1.5) + 0.8 * peak(17.0, 2.0))
}

/// Write one day of hourly observations per site, returning the data rows
/// written (header excluded).
///
/// Sensor dropouts show up as `n/a` counts or empty speeds, and the odd
/// blank line is thrown in, so the loader and the numeric filter have
/// something to skip.
fn write_sample(mut out: impl Write, seed: u64) -> io::Result<usize> {
    let mut rng = Jitter(seed);
    writeln!(out, "{HEADER}")?;

    let mut rows = 0;
    for (site, base) in SITES {
        for hour in 0..24u32 {
            let vehicles = (expected_vehicles(hour, base) + rng.around(base * 0.08)).max(0.0);
            let speed = (60.0 - vehicles / base * 25.0 + rng.around(3.0)).max(5.0);

            let vehicles_cell = if rng.chance(0.04) {
                "n/a".to_string()
            } else {
                format!("{}", vehicles.round() as u64)
            };
            let speed_cell = if rng.chance(0.03) {
                String::new()
            } else {
                format!("{speed:.1}")
            };

            writeln!(out, "{site},{hour},{vehicles_cell},{speed_cell}")?;
            rows += 1;
            if rng.chance(0.02) {
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    let output_path = "sample_traffic.csv";
    let file = File::create(output_path).context("creating output file")?;
    let rows = write_sample(BufWriter::new(file), 42).context("writing sample rows")?;

    println!(
        "Wrote {rows} observations for {} sites to {output_path}",
        SITES.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfr::{convert_to_float, create_slice, flatten, load_csv, LoadOptions, SlicePattern};

    fn generate(seed: u64) -> (Vec<u8>, usize) {
        let mut buf = Vec::new();
        let rows = write_sample(&mut buf, seed).unwrap();
        (buf, rows)
    }

    #[test]
    fn test_same_seed_same_output() {
        assert_eq!(generate(7), generate(7));
        assert_ne!(generate(7).0, generate(8).0);
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = Jitter(1);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.around(2.0).abs() <= 2.0);
        }
    }

    #[test]
    fn test_rush_hour_is_busier_than_night() {
        assert!(expected_vehicles(8, 100.0) > expected_vehicles(3, 100.0));
        assert!(expected_vehicles(17, 100.0) > expected_vehicles(23, 100.0));
    }

    #[test]
    fn test_output_loads_with_one_header_and_all_rows() {
        let (buf, rows) = generate(42);
        assert_eq!(rows, SITES.len() * 24);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&buf).unwrap();
        file.flush().unwrap();

        let table = load_csv(file.path(), &LoadOptions::default().with_ignore_rows([0])).unwrap();
        assert_eq!(table.dims.as_pair(), [rows as i64, 4]);

        let mut frame = table.data;
        let converted = convert_to_float(&mut frame, 2);
        assert!(converted > rows / 2 && converted <= rows);

        let north = create_slice(&frame, 0, &SlicePattern::from("north_gate"), &[1]);
        assert_eq!(flatten(&north).len(), 24);
    }
}

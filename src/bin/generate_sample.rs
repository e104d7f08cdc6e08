//! Generate a sample monthly cash-flow CSV for trying out the chart helpers.
//!
//! Writes `sample_cashflows.csv`: one row per day over 2023, with the
//! month label used as the waterfall dropdown bucket.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use log::info;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let out_path = "sample_cashflows.csv";

    let mut writer = csv::Writer::from_path(out_path)
        .with_context(|| format!("creating {out_path}"))?;
    writer
        .write_record(["date", "month", "revenue", "costs", "net"])
        .context("writing CSV header")?;

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).context("building start date")?;
    let end = NaiveDate::from_ymd_opt(2024, 1, 1).context("building end date")?;
    let mut day = start;
    let mut n_rows = 0usize;

    while day < end {
        // Revenue drifts upward over the year; costs stay roughly flat.
        let day_of_year = (day - start).num_days() as f64;
        let revenue = rng.gauss(100.0 + day_of_year * 0.1, 12.0).max(0.0);
        let costs = -rng.gauss(70.0, 8.0).abs();
        let net = revenue + costs;

        writer
            .write_record([
                day.to_string(),
                day.format("%Y-%m").to_string(),
                format!("{revenue:.2}"),
                format!("{costs:.2}"),
                format!("{net:.2}"),
            ])
            .with_context(|| format!("writing row for {day}"))?;

        day = day
            .checked_add_days(Days::new(1))
            .context("date overflow")?;
        n_rows += 1;
    }

    writer.flush().context("flushing CSV")?;
    info!("wrote {n_rows} rows to {out_path}");
    println!("Wrote {n_rows} rows to {out_path}");
    Ok(())
}

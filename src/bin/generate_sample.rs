use anyhow::{Context, Result};

/// Implementation name and base latencies (add, modify, delete in μs;
/// best-price lookup in ns) loosely modelled on a 10k-order run.
const IMPLEMENTATIONS: [(&str, [f64; 4]); 4] = [
    ("Map-based", [1850.0, 420.0, 610.0, 35.0]),
    ("Vector (binary search)", [1320.0, 310.0, 540.0, 12.0]),
    ("Reverse vector", [980.0, 260.0, 390.0, 9.0]),
    ("Linear search", [2450.0, 880.0, 1210.0, 8.0]),
];

const METRICS: [&str; 4] = ["Add", "Modify", "Delete", "BestPrice"];
const STATS: [&str; 5] = ["Mean", "Median", "StdDev", "Min", "Max"];

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

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Mean, Median, StdDev, Min, Max for one metric around `base`.
fn summary(base: f64, rng: &mut SimpleRng) -> [f64; 5] {
    let mean = base * rng.range(0.95, 1.05);
    let std_dev = base * rng.range(0.02, 0.12);
    let median = mean - std_dev * rng.range(0.0, 0.3);
    let min = (mean - 2.0 * std_dev).max(0.0);
    let max = mean + 3.0 * std_dev;
    [mean, median, std_dev, min, max]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "orderbook_benchmark.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    let mut header = vec!["Implementation".to_string()];
    for metric in METRICS {
        header.extend(STATS.iter().map(|stat| format!("{metric} {stat}")));
    }
    writer.write_record(&header).context("writing header")?;

    for (name, bases) in IMPLEMENTATIONS {
        let mut record = vec![name.to_string()];
        for base in bases {
            record.extend(summary(base, &mut rng).iter().map(|v| format!("{v:.3}")));
        }
        writer
            .write_record(&record)
            .with_context(|| format!("writing row for {name}"))?;
    }
    writer.flush().context("flushing output file")?;

    println!(
        "Wrote {} implementations ({} columns) to {output_path}",
        IMPLEMENTATIONS.len(),
        header.len()
    );
    Ok(())
}

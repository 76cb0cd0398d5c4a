use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use marine_etl::DEFAULT_INPUT;

/// Write a synthetic marine measurement table for trying the pipeline.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Output CSV path.
    #[arg(default_value = DEFAULT_INPUT)]
    output: PathBuf,

    /// Measurements per station.
    #[arg(short, long, default_value_t = 20)]
    rows_per_station: usize,

    /// PRNG seed; equal seeds give identical files.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Station id with its typical (temperature °C, salinity PSU).
const STATIONS: [(&str, f64, f64); 4] = [
    ("NS-01", 9.0, 34.8),
    ("BAL-07", 7.5, 7.2),
    ("MED-12", 18.5, 38.1),
    ("TRP-03", 27.0, 35.4),
];

const SPECIES: [&str; 6] = [
    "Aurelia aurita",
    "Gadus morhua",
    "Mytilus edulis",
    "Posidonia oceanica",
    "Acropora millepora",
    "Zostera marina",
];

/// One row rendered the way field loggers tend to: occasionally blank or
/// "N/A", pH sometimes drifting far outside the seawater band.
fn measurement(rng: &mut SimpleRng, station: &(&str, f64, f64)) -> [String; 5] {
    let (id, temp, sal) = *station;

    let temperature = if rng.chance(0.05) {
        "N/A".to_string()
    } else {
        format!("{:.2}", temp + rng.uniform(-2.5, 2.5))
    };
    let salinity = if rng.chance(0.03) {
        String::new()
    } else {
        format!("{:.2}", sal + rng.uniform(-0.8, 0.8))
    };
    let ph = if rng.chance(0.1) {
        format!("{:.2}", rng.uniform(2.0, 12.0))
    } else {
        format!("{:.2}", rng.uniform(7.6, 8.4))
    };

    [
        id.to_string(),
        rng.pick(&SPECIES).to_string(),
        temperature,
        salinity,
        ph,
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(["station_id", "species", "temperature_c", "salinity_psu", "ph"])?;

    let mut rows = 0usize;
    for station in &STATIONS {
        for _ in 0..args.rows_per_station {
            writer.write_record(measurement(&mut rng, station))?;
            rows += 1;
        }
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {rows} measurements ({} stations) to {}",
        STATIONS.len(),
        args.output.display()
    );
    Ok(())
}

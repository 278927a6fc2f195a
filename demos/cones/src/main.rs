//! cones — smallest runnable demo for the rust_s2 workspace.
//!
//! Samples 200 uniform points inside the 1°×1° grid cell at (30°N, 89°W),
//! runs all four location estimators, and bootstraps 95%/99% confidence
//! cones around the extrinsic and intrinsic means.  With the fixed SEED
//! every number printed is reproducible run-to-run.

use std::time::Instant;

use anyhow::Result;

use s2_core::StatRng;
use s2_stats::{
    BootstrapConfig, EstimatorKind, bootstrap_cones, ext_mean, ext_median, generate, int_mean,
    int_median, medoids,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const CELL_LAT: i32 = 30;
const CELL_LON: i32 = -89;
const SAMPLE_SIZE: usize = 200;
const SEED: u64 = 42;
const RESAMPLES: usize = 1_000;

fn main() -> Result<()> {
    let mut rng = StatRng::new(SEED);
    let sample = generate::cell_uniform(CELL_LAT, CELL_LON, SAMPLE_SIZE, &mut rng)?;
    println!(
        "{} points in cell [{CELL_LAT}, {}] x [{CELL_LON}, {}], discrepancy {:.4}",
        sample.len(),
        CELL_LAT + 1,
        CELL_LON + 1,
        generate::discrepancy(&sample),
    );

    // ── Point estimates ───────────────────────────────────────────────────
    println!("extrinsic mean   : {}", ext_mean(&sample)?);
    println!("extrinsic median : {}", ext_median(&sample)?);
    println!("intrinsic mean   : {}", int_mean(&sample)?);
    println!("intrinsic median : {}", int_median(&sample)?);
    if let Some(m) = medoids(&sample) {
        println!(
            "medoids          : i1 = {} {}, i2 = {} {}",
            m.min_distance, sample[m.min_distance], m.min_squared, sample[m.min_squared]
        );
    }

    // ── Bootstrap cones ───────────────────────────────────────────────────
    let config = BootstrapConfig {
        resamples: RESAMPLES,
        seed: SEED,
    };
    for kind in [EstimatorKind::ExtrinsicMean, EstimatorKind::IntrinsicMean] {
        let start = Instant::now();
        let cones = bootstrap_cones(&sample, kind, &config)?;
        println!(
            "{kind}: c95 = {:.4}°, c99 = {:.4}°  ({} resamples in {:.2?})",
            cones.c95_deg,
            cones.c99_deg,
            RESAMPLES,
            start.elapsed(),
        );
    }

    Ok(())
}

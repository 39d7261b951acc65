use std::error::Error;
use std::path::Path;
use std::time::Instant;

use csv::Writer;
use tracing::info;

use crate::config::constant::{SCALING_CSV_PATH, SCALING_REPEATS};
use crate::error::Result;
use crate::fixtures::data_generator::regular_n_gon;

use super::search::init_tracing_and_env;

/// 75 log-spaced points between 2^0 and 2^5, truncated and deduplicated.
pub fn n_gon_sizes() -> Vec<usize> {
    let num = 75;
    let mut sizes: Vec<usize> = (0..num)
        .map(|k| 2f64.powf(5.0 * k as f64 / (num - 1) as f64) as usize)
        .collect();
    sizes.dedup();
    sizes
}

/// Seconds spent on `repeats` depot searches for each n-gon size.
pub fn time_depot_search(sizes: &[usize], repeats: usize) -> Result<Vec<(usize, f64)>> {
    let mut timings = Vec::with_capacity(sizes.len());

    for &n in sizes {
        let country = regular_n_gon(n)?;
        let start = Instant::now();
        for _ in 0..repeats {
            country.best_depot_site()?;
        }
        let seconds = start.elapsed().as_secs_f64();

        info!("{} settlements: {:.6}s for {} runs", n, seconds, repeats);
        timings.push((n, seconds));
    }

    Ok(timings)
}

pub fn save_timings_csv(timings: &[(usize, f64)], filename: impl AsRef<Path>) -> Result<()> {
    let mut wtr = Writer::from_path(filename)?;
    wtr.write_record(["n_settlements", "seconds"])?;
    for (n, seconds) in timings {
        wtr.write_record([n.to_string(), seconds.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run() -> std::result::Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    let sizes = n_gon_sizes();
    info!("Timing depot search over {} country sizes", sizes.len());

    let timings = time_depot_search(&sizes, SCALING_REPEATS)?;
    save_timings_csv(&timings, SCALING_CSV_PATH)?;

    info!("Wrote timings to {}", SCALING_CSV_PATH);
    Ok(())
}

use std::error::Error;
use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;
use crate::domain::country::Country;
use crate::error::Result;
use crate::setup::init::read_country_csv;
use crate::solver::nearest_neighbour::{DepotChoice, Tour};

/// Initialize tracing and environment
pub(crate) fn init_tracing_and_env() -> std::result::Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE),
        )
        .try_init()?;

    dotenv::dotenv().ok();
    Ok(())
}

/// Pick the best depot for the configured country and report it.
pub fn solve(country: &Country, settings: &Settings) -> Result<DepotChoice> {
    info!(
        "Searching {} depots over {} settlements (parallel: {})",
        country.n_depots(),
        country.n_settlements(),
        settings.parallel_depots
    );

    let choice = if settings.parallel_depots {
        country.best_depot_site_par()?
    } else {
        country.best_depot_site()?
    };

    print_choice(&choice);
    save_tour_csv(&choice.tour, &settings.tour_csv)?;
    save_report_json(&choice, &settings.report_json)?;

    Ok(choice)
}

pub fn run() -> std::result::Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;
    let settings = Settings::from_env()?;

    let country = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        read_country_csv(&settings.country_csv)?
            .into_inner()
            .with_speed(settings.speed)?
    };

    solve(&country, &settings)?;
    Ok(())
}

pub fn print_choice(choice: &DepotChoice) {
    info!("The best depot is {}", choice.depot);
    info!("With a total tour time of {:.2}h", choice.total_hours());
    info!("The route taken is:");
    for location in &choice.tour.waypoints {
        info!("\t{}", location);
    }
}

/// One row per waypoint: the leg into it and the running total.
pub fn save_tour_csv(tour: &Tour, filename: impl AsRef<Path>) -> Result<()> {
    let mut wtr = Writer::from_path(filename.as_ref())?;

    wtr.write_record([
        "step",
        "location",
        "region",
        "role",
        "leg_hours",
        "cumulative_hours",
    ])?;

    let mut cumulative = 0.0;
    let legs_in = std::iter::once(0.0).chain(tour.leg_hours.iter().copied());
    for (step, (location, leg)) in tour.waypoints.iter().zip(legs_in).enumerate() {
        cumulative += leg;
        wtr.write_record([
            step.to_string(),
            location.name().to_string(),
            location.region().to_string(),
            location.role().to_string(),
            leg.to_string(),
            cumulative.to_string(),
        ])?;
    }

    wtr.flush()?;
    debug!("Wrote tour to {}", filename.as_ref().display());
    Ok(())
}

pub fn save_report_json(choice: &DepotChoice, filename: impl AsRef<Path>) -> Result<()> {
    let file = File::create(filename.as_ref())?;
    serde_json::to_writer_pretty(file, choice)?;
    debug!("Wrote report to {}", filename.as_ref().display());
    Ok(())
}

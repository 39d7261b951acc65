use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use tracing::{info, warn};

use crate::error::{Result, TourError};

pub mod constant {
    pub const DEFAULT_SPEED: f64 = 4.75;
    pub const SEED: u64 = 64;
    pub const COUNTRY_CSV_PATH: &str = "country.csv";
    pub const TOUR_CSV_PATH: &str = "best_tour.csv";
    pub const REPORT_JSON_PATH: &str = "best_depot.json";
    pub const SCALING_CSV_PATH: &str = "execution_time.csv";
    pub const SCALING_REPEATS: usize = 10;
    pub const N_GON_RADIUS: f64 = 100_000.0;
}

/// Runtime settings for the drivers, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub country_csv: String,
    pub speed: f64,
    pub parallel_depots: bool,
    pub tour_csv: String,
    pub report_json: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            country_csv: constant::COUNTRY_CSV_PATH.to_string(),
            speed: constant::DEFAULT_SPEED,
            parallel_depots: false,
            tour_csv: constant::TOUR_CSV_PATH.to_string(),
            report_json: constant::REPORT_JSON_PATH.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        dotenv().ok();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let country_csv = lookup("COUNTRY_CSV").unwrap_or_else(|| {
            warn!(
                "COUNTRY_CSV not set, using default path {}",
                defaults.country_csv
            );
            defaults.country_csv.clone()
        });

        let speed: f64 = parse_var(&lookup, "TRAVEL_SPEED")?.unwrap_or(defaults.speed);
        if !(speed.is_finite() && speed > 0.0) {
            return Err(TourError::Config {
                key: "TRAVEL_SPEED".to_string(),
                value: speed.to_string(),
                message: "expected a finite positive number of metres per second".to_string(),
            });
        }

        let settings = Settings {
            country_csv,
            speed,
            parallel_depots: parse_var(&lookup, "PARALLEL_DEPOTS")?
                .unwrap_or(defaults.parallel_depots),
            tour_csv: lookup("TOUR_CSV").unwrap_or(defaults.tour_csv),
            report_json: lookup("REPORT_JSON").unwrap_or(defaults.report_json),
        };

        info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| TourError::Config {
                key: key.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn variables_override_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("COUNTRY_CSV", "data/country.csv"),
            ("TRAVEL_SPEED", " 10 "),
            ("PARALLEL_DEPOTS", "true"),
        ]))
        .unwrap();

        assert_eq!(settings.country_csv, "data/country.csv");
        assert_eq!(settings.speed, 10.0);
        assert!(settings.parallel_depots);
        assert_eq!(settings.tour_csv, constant::TOUR_CSV_PATH);
    }

    #[test]
    fn malformed_speed_is_a_config_error() {
        let err = Settings::from_lookup(lookup_from(&[("TRAVEL_SPEED", "fast")])).unwrap_err();
        assert!(matches!(err, TourError::Config { ref key, .. } if key == "TRAVEL_SPEED"));
    }

    #[test]
    fn negative_or_nan_speed_is_a_config_error() {
        for raw in ["-4.75", "NaN", "0"] {
            let err = Settings::from_lookup(lookup_from(&[("TRAVEL_SPEED", raw)])).unwrap_err();
            assert!(matches!(err, TourError::Config { ref key, .. } if key == "TRAVEL_SPEED"));
            assert_eq!(err.kind(), crate::error::ErrorKind::Validation);
        }
    }
}

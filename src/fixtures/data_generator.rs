use std::f64::consts::PI;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::constant::N_GON_RADIUS;
use crate::domain::country::Country;
use crate::domain::location::Location;
use crate::domain::types::Role;
use crate::error::Result;

const N_GON_REGION: &str = "Ring";

/// One depot at the origin and `n` settlements evenly spaced on a circle of radius
/// `N_GON_RADIUS`, all in one region.
pub fn regular_n_gon(n: usize) -> Result<Country> {
    let mut locations = Vec::with_capacity(n + 1);
    locations.push(Location::new("Depot", N_GON_REGION, 0.0, 0.0, Role::Depot)?.into_inner());

    for i in 0..n {
        // theta stays in [-pi, pi)
        let theta = -PI + 2.0 * PI * (i as f64) / (n as f64);
        let name = format!("Location {}", i + 1);
        locations.push(
            Location::new(&name, N_GON_REGION, N_GON_RADIUS, theta, Role::Settlement)?
                .into_inner(),
        );
    }

    Country::new(locations)
}

/// Generates a reproducible random country. Locations are shuffled so depots are not
/// all at the front of the sequence.
pub fn random_country(
    n_settlements: usize,
    n_depots: usize,
    n_regions: usize,
    seed: u64,
) -> Result<Country> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n_regions = n_regions.max(1);
    let mut locations = Vec::with_capacity(n_settlements + n_depots);

    let roles = std::iter::repeat(Role::Depot)
        .take(n_depots)
        .chain(std::iter::repeat(Role::Settlement).take(n_settlements));

    for (i, role) in roles.enumerate() {
        let name = match role {
            Role::Depot => format!("Depot {}", i + 1),
            Role::Settlement => format!("Settlement {}", i + 1 - n_depots),
        };
        let region = format!("Region {}", rng.gen_range(1..=n_regions));
        let r = rng.gen_range(0.0..=N_GON_RADIUS);
        let theta = rng.gen_range(-PI..=PI);

        locations.push(Location::new(&name, &region, r, theta, role)?.into_inner());
    }

    locations.shuffle(&mut rng);
    info!(
        "Generated random country: {} depots, {} settlements, {} regions (seed {})",
        n_depots, n_settlements, n_regions, seed
    );

    Country::new(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constant::SEED;

    #[test]
    fn n_gon_has_one_central_depot() {
        let country = regular_n_gon(6).unwrap();
        assert_eq!(country.len(), 7);
        assert_eq!(country.n_depots(), 1);
        assert_eq!(country.depots()[0].r(), 0.0);
        assert!(country
            .settlements()
            .iter()
            .all(|l| l.r() == N_GON_RADIUS && l.theta() >= -PI && l.theta() < PI));
    }

    #[test]
    fn empty_n_gon_is_just_the_depot() {
        let country = regular_n_gon(0).unwrap();
        assert_eq!(country.len(), 1);
        assert_eq!(country.n_settlements(), 0);
    }

    #[test]
    fn random_country_is_reproducible() {
        let a = random_country(20, 3, 4, SEED).unwrap();
        let b = random_country(20, 3, 4, SEED).unwrap();

        assert_eq!(a.n_depots(), 3);
        assert_eq!(a.n_settlements(), 20);
        let describe = |c: &Country| -> Vec<String> {
            c.all_locations().iter().map(|l| l.to_string()).collect()
        };
        assert_eq!(describe(&a), describe(&b));
    }
}

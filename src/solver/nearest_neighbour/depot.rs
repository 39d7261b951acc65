use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, span, Level};

use crate::domain::country::Country;
use crate::domain::location::Location;
use crate::error::{Result, TourError};
use crate::solver::nearest_neighbour::tour::Tour;

/// The depot whose nearest-neighbour tour is quickest, with that tour.
#[derive(Debug, Clone, Serialize)]
pub struct DepotChoice {
    pub depot: Location,
    pub tour: Tour,
}

impl DepotChoice {
    pub fn total_hours(&self) -> f64 {
        self.tour.total_hours
    }
}

impl Country {
    /// Build a tour from every depot and keep the quickest. Exact ties go to the depot
    /// that sorts first by (name, region).
    pub fn best_depot_site(&self) -> Result<DepotChoice> {
        let depots = self.depot_indices();
        if depots.is_empty() {
            return Err(TourError::NoDepots);
        }

        let search_span = span!(Level::INFO, "best_depot_site", depots = depots.len());
        let _search_guard = search_span.enter();

        let tours = depots
            .iter()
            .map(|&depot| self.nn_tour_from(depot))
            .collect::<Result<Vec<Tour>>>()?;

        self.select_best(&depots, tours)
    }

    /// Same result as [`Country::best_depot_site`], with the per-depot tours built on the
    /// rayon pool. Selection still happens in one pass over the tours in depot order.
    pub fn best_depot_site_par(&self) -> Result<DepotChoice> {
        let depots = self.depot_indices();
        if depots.is_empty() {
            return Err(TourError::NoDepots);
        }

        let search_span = span!(Level::INFO, "best_depot_site_par", depots = depots.len());
        let _search_guard = search_span.enter();

        let tours = depots
            .par_iter()
            .map(|&depot| self.nn_tour_from(depot))
            .collect::<Result<Vec<Tour>>>()?;

        self.select_best(&depots, tours)
    }

    /// `tours[i]` is the tour from `depots[i]`.
    fn select_best(&self, depots: &[usize], tours: Vec<Tour>) -> Result<DepotChoice> {
        let mut candidates = Vec::with_capacity(tours.len());
        for (&depot, tour) in depots.iter().zip(tours) {
            let depot = self.get_location(depot)?;
            debug!("Depot {}: {:.4}h", depot.name(), tour.total_hours);
            candidates.push((depot, tour));
        }

        let (depot, tour) = candidates
            .into_iter()
            .min_by(|(depot_a, a), (depot_b, b)| {
                a.total_hours
                    .total_cmp(&b.total_hours)
                    .then_with(|| depot_a.cmp_key(depot_b))
            })
            .ok_or(TourError::NoDepots)?;

        info!(
            "Best depot is {} with a total tour time of {:.2}h",
            depot.name(),
            tour.total_hours
        );

        Ok(DepotChoice {
            depot: depot.clone(),
            tour,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Role;
    use crate::error::ErrorKind;
    use std::f64::consts::PI;

    fn loc(name: &str, region: &str, r: f64, theta: f64, role: Role) -> Location {
        Location::new(name, region, r, theta, role).unwrap().into_inner()
    }

    #[test]
    fn no_depots_is_not_found() {
        let country = Country::new(vec![loc("Undead Burg", "Lordran", 1.0, 0.0, Role::Settlement)])
            .unwrap();

        let err = country.best_depot_site().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = country.best_depot_site_par().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn central_depot_beats_remote_depot() {
        let country = Country::new(vec![
            loc("Outpost", "Lordran", 50_000.0, PI, Role::Depot),
            loc("Hub", "Lordran", 0.0, 0.0, Role::Depot),
            loc("North", "Lordran", 1000.0, PI / 2.0, Role::Settlement),
            loc("South", "Lordran", 1000.0, -PI / 2.0, Role::Settlement),
        ])
        .unwrap();

        let choice = country.best_depot_site().unwrap();
        assert_eq!(choice.depot.name(), "Hub");
        assert_eq!(choice.tour.depot().map(|l| l.name()), Some("Hub"));
        assert_eq!(choice.total_hours(), choice.tour.total_hours);
    }

    #[test]
    fn symmetric_depots_tie_break_by_name() {
        // Mirror images across the origin give identical tour times.
        let country = Country::new(vec![
            loc("Zeta", "Lordran", 1000.0, 0.0, Role::Depot),
            loc("Alpha", "Lordran", 1000.0, -PI, Role::Depot),
            loc("Centre", "Lordran", 0.0, 0.0, Role::Settlement),
        ])
        .unwrap();

        let choice = country.best_depot_site().unwrap();
        assert_eq!(choice.depot.name(), "Alpha");
    }

    #[test]
    fn parallel_search_agrees_with_sequential() {
        let mut locations = vec![];
        for i in 0..12 {
            let theta = -PI + (i as f64) * PI / 6.0;
            let role = if i % 4 == 0 { Role::Depot } else { Role::Settlement };
            let region = if i % 3 == 0 { "Lordran" } else { "Drangleic" };
            let r = 1000.0 + 250.0 * i as f64;
            locations.push(loc(&format!("Location {}", i), region, r, theta, role));
        }
        let country = Country::new(locations).unwrap();

        let seq = country.best_depot_site().unwrap();
        let par = country.best_depot_site_par().unwrap();
        assert_eq!(seq.depot.key(), par.depot.key());
        assert_eq!(seq.total_hours(), par.total_hours());
    }
}

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, span, trace, Level};

use crate::domain::country::Country;
use crate::domain::location::Location;
use crate::error::{Result, TourError};

/// A closed depot-to-depot route with the hours spent on each leg.
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    pub waypoints: Vec<Location>,
    pub leg_hours: Vec<f64>,
    pub total_hours: f64,
}

impl Tour {
    /// The depot the tour starts and ends at; `None` only for a hand-built empty tour.
    pub fn depot(&self) -> Option<&Location> {
        self.waypoints.first()
    }

    /// Settlements in visiting order, without the depot at either end.
    pub fn settlements(&self) -> &[Location] {
        self.waypoints
            .get(1..self.waypoints.len().saturating_sub(1))
            .unwrap_or(&[])
    }

    /// Consecutive (from, to, hours) triples.
    pub fn legs(&self) -> impl Iterator<Item = (&Location, &Location, f64)> + '_ {
        self.waypoints
            .iter()
            .tuple_windows()
            .zip(self.leg_hours.iter().copied())
            .map(|((from, to), hours)| (from, to, hours))
    }
}

impl Country {
    /// Greedy nearest-neighbour tour through every settlement, starting and ending at
    /// `starting_depot`.
    pub fn nn_tour(&self, starting_depot: &Location) -> Result<Tour> {
        let depot = self.resolve(starting_depot)?;
        self.nn_tour_from(depot)
    }

    pub(crate) fn nn_tour_from(&self, depot: usize) -> Result<Tour> {
        let depot_location = self.get_location(depot)?;
        if !depot_location.is_depot() {
            return Err(TourError::NotADepot(depot_location.key()));
        }

        let tour_span = span!(Level::DEBUG, "nn_tour", depot = %depot_location.name());
        let _tour_guard = tour_span.enter();

        let mut remaining = self.settlement_indices();
        let mut route: Vec<usize> = Vec::with_capacity(remaining.len() + 2);
        let mut leg_hours: Vec<f64> = Vec::with_capacity(remaining.len() + 1);
        let mut total_hours = 0.0;

        route.push(depot);
        let mut current = depot;

        while !remaining.is_empty() {
            let Some(trip) = self.fastest_trip_among(current, &remaining)? else {
                break;
            };

            trace!(
                "{} -> {}: {:.4}h",
                self.get_location(current)?.name(),
                trip.destination.name(),
                trip.hours
            );

            route.push(trip.index);
            leg_hours.push(trip.hours);
            total_hours += trip.hours;
            remaining.retain(|&ind| ind != trip.index);
            current = trip.index;
        }

        let back_to_start = self.travel_time_between(current, depot)?;
        route.push(depot);
        leg_hours.push(back_to_start);
        total_hours += back_to_start;

        debug!(
            "Tour from {} visits {} settlements in {:.2}h",
            depot_location.name(),
            route.len() - 2,
            total_hours
        );

        Ok(Tour {
            waypoints: route
                .iter()
                .map(|&ind| self.all_locations()[ind].clone())
                .collect(),
            leg_hours,
            total_hours,
        })
    }
}

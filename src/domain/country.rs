use std::collections::HashMap;

use tracing::debug;

use crate::config::constant::DEFAULT_SPEED;
use crate::domain::location::Location;
use crate::domain::types::{LocationKey, LocationRecord, Normalized, Role};
use crate::error::{Result, TourError};
use crate::evaluation::travel_time::travel_time;

/// The fixed set of locations under analysis.
///
/// The sequence itself never changes after construction; only member roles may be
/// flipped through [`Country::set_role`].
#[derive(Debug, Clone)]
pub struct Country {
    locations: Vec<Location>,
    index: HashMap<LocationKey, usize>,
    speed: f64,
}

impl Country {
    pub fn new(locations: Vec<Location>) -> Result<Country> {
        let mut index = HashMap::with_capacity(locations.len());
        for (ind, location) in locations.iter().enumerate() {
            let key = location.key();
            if index.contains_key(&key) {
                return Err(TourError::Duplicate(key));
            }
            index.insert(key, ind);
        }

        debug!(
            "Built country with {} locations ({} depots)",
            locations.len(),
            locations.iter().filter(|l| l.is_depot()).count()
        );

        Ok(Country {
            locations,
            index,
            speed: DEFAULT_SPEED,
        })
    }

    /// Build from tabular rows, collecting the normalization notices of every row.
    ///
    /// A row that fails validation is reported with its 1-based position among the data rows.
    pub fn from_records(records: Vec<LocationRecord>) -> Result<Normalized<Country>> {
        let mut notices = vec![];
        let mut locations = Vec::with_capacity(records.len());

        for (ind, record) in records.into_iter().enumerate() {
            let built = Location::new(
                &record.location,
                &record.region,
                record.r,
                record.theta,
                Role::from_depot_flag(record.depot),
            )
            .map_err(|e| TourError::InvalidRow {
                row: ind + 1,
                location: record.location.clone(),
                source: Box::new(e),
            })?;
            notices.extend(built.notices);
            locations.push(built.value);
        }

        Ok(Normalized {
            value: Country::new(locations)?,
            notices,
        })
    }

    /// Replace the travel speed, in metres per second.
    pub fn with_speed(mut self, speed: f64) -> Result<Country> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(TourError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(self)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn all_locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn settlements(&self) -> Vec<&Location> {
        self.locations.iter().filter(|l| l.is_settlement()).collect()
    }

    pub fn depots(&self) -> Vec<&Location> {
        self.locations.iter().filter(|l| l.is_depot()).collect()
    }

    pub fn n_settlements(&self) -> usize {
        self.locations.iter().filter(|l| l.is_settlement()).count()
    }

    pub fn n_depots(&self) -> usize {
        self.locations.iter().filter(|l| l.is_depot()).count()
    }

    pub(crate) fn settlement_indices(&self) -> Vec<usize> {
        self.role_indices(Role::Settlement)
    }

    pub(crate) fn depot_indices(&self) -> Vec<usize> {
        self.role_indices(Role::Depot)
    }

    fn role_indices(&self, role: Role) -> Vec<usize> {
        self.locations
            .iter()
            .enumerate()
            .filter(|(_, l)| l.role() == role)
            .map(|(ind, _)| ind)
            .collect()
    }

    pub fn get_location(&self, index: usize) -> Result<&Location> {
        self.locations
            .get(index)
            .ok_or(TourError::IndexOutOfBounds {
                index,
                len: self.locations.len(),
            })
    }

    pub fn index_of(&self, key: &LocationKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.index_of(&location.key()).is_some()
    }

    /// Position of `location` in this country, matched by name and region.
    pub fn resolve(&self, location: &Location) -> Result<usize> {
        let key = location.key();
        self.index_of(&key).ok_or(TourError::NotFound(key))
    }

    pub fn locations_in_region(&self, region: &str) -> usize {
        self.locations
            .iter()
            .filter(|l| l.region() == region)
            .count()
    }

    pub fn set_role(&mut self, index: usize, role: Role) -> Result<()> {
        let len = self.locations.len();
        let location = self
            .locations
            .get_mut(index)
            .ok_or(TourError::IndexOutOfBounds { index, len })?;
        location.set_role(role);
        Ok(())
    }

    /// Congestion-adjusted hours from `start` to `end`. Both must be members of this
    /// country; their stored coordinates are used.
    pub fn travel_time(&self, start: &Location, end: &Location) -> Result<f64> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;
        self.travel_time_between(from, to)
    }

    pub(crate) fn travel_time_between(&self, from: usize, to: usize) -> Result<f64> {
        let start = self.get_location(from)?;
        let end = self.get_location(to)?;

        let distance = start.distance_to(end);
        let different_regions = u8::from(start.region() != end.region());
        let in_dest_region = self.locations_in_region(end.region());

        travel_time(distance, different_regions, in_dest_region, self.speed)
    }
}

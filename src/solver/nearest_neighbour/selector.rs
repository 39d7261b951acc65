use std::cmp::Ordering;

use crate::domain::country::Country;
use crate::domain::location::Location;
use crate::error::Result;

/// A candidate destination, either a location value or a position in the country.
#[derive(Debug, Clone, Copy)]
pub enum CandidateRef<'a> {
    Direct(&'a Location),
    Indexed(usize),
}

impl<'a> From<&'a Location> for CandidateRef<'a> {
    fn from(location: &'a Location) -> Self {
        CandidateRef::Direct(location)
    }
}

impl From<usize> for CandidateRef<'_> {
    fn from(index: usize) -> Self {
        CandidateRef::Indexed(index)
    }
}

/// The chosen next stop and the hours it takes to get there.
#[derive(Debug, Clone, Copy)]
pub struct Trip<'a> {
    pub destination: &'a Location,
    pub index: usize,
    pub hours: f64,
}

impl Trip<'_> {
    /// Strict total order over (hours, name, region).
    fn cmp_rank(&self, other: &Trip<'_>) -> Ordering {
        self.hours
            .total_cmp(&other.hours)
            .then_with(|| self.destination.cmp_key(other.destination))
    }
}

impl Country {
    /// Find the candidate reachable fastest from `current`.
    ///
    /// With `candidates` omitted, every settlement other than `current` is considered.
    /// Ties on travel time go to the alphabetically first (name, region). An empty
    /// candidate set yields `Ok(None)`.
    pub fn fastest_trip_from(
        &self,
        current: &Location,
        candidates: Option<&[CandidateRef<'_>]>,
    ) -> Result<Option<Trip<'_>>> {
        let resolved = match candidates {
            Some(candidates) => self.resolve_candidates(candidates)?,
            None => self
                .settlement_indices()
                .into_iter()
                .filter(|&ind| !self.all_locations()[ind].same_place(current))
                .collect(),
        };

        if resolved.is_empty() {
            return Ok(None);
        }

        let from = self.resolve(current)?;
        self.fastest_trip_among(from, &resolved)
    }

    /// Index bounds are checked against the full location sequence.
    fn resolve_candidates(&self, candidates: &[CandidateRef<'_>]) -> Result<Vec<usize>> {
        candidates
            .iter()
            .map(|candidate| match candidate {
                CandidateRef::Direct(location) => self.resolve(location),
                CandidateRef::Indexed(index) => self.get_location(*index).map(|_| *index),
            })
            .collect()
    }

    pub(crate) fn fastest_trip_among(
        &self,
        from: usize,
        candidates: &[usize],
    ) -> Result<Option<Trip<'_>>> {
        let mut best: Option<Trip<'_>> = None;

        for &index in candidates {
            let trip = Trip {
                destination: self.get_location(index)?,
                index,
                hours: self.travel_time_between(from, index)?,
            };

            best = match best {
                Some(current) if current.cmp_rank(&trip) != Ordering::Greater => Some(current),
                _ => Some(trip),
            };
        }

        Ok(best)
    }
}

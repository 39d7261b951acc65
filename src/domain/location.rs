use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::domain::types::{LocationKey, Normalized, Notice, Role};
use crate::error::{Result, TourError};
use crate::evaluation::distance::polar_distance;
use crate::utils::title_case;

/// A named point on the polar plane.
///
/// Identity is the [`LocationKey`] returned by [`Location::key`]; there is deliberately no
/// `PartialEq` on the whole record. The role is the only field that may change after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    name: String,
    region: String,
    r: f64,
    theta: f64,
    role: Role,
}

impl Location {
    /// Validate and build a location. A name that is not in title case is rewritten and the
    /// rewrite is reported as a [`Notice`]; the region is kept as given.
    pub fn new(
        name: &str,
        region: &str,
        r: f64,
        theta: f64,
        role: Role,
    ) -> Result<Normalized<Location>> {
        if name.trim().is_empty() {
            return Err(TourError::Validation {
                field: "name",
                reason: "expected a non-empty string".to_string(),
            });
        }
        if region.trim().is_empty() {
            return Err(TourError::Validation {
                field: "region",
                reason: "expected a non-empty string".to_string(),
            });
        }
        if !r.is_finite() || r < 0.0 {
            return Err(TourError::Validation {
                field: "r",
                reason: format!("expected r to be non-negative, got {} instead", r),
            });
        }
        if !theta.is_finite() || !(-PI..=PI).contains(&theta) {
            return Err(TourError::Validation {
                field: "theta",
                reason: format!(
                    "expected theta to lie between -pi and pi radians, got {} instead",
                    theta
                ),
            });
        }

        let mut notices = vec![];
        let name = normalize_field("name", name, &mut notices);

        Ok(Normalized {
            value: Location {
                name,
                region: region.to_string(),
                r,
                theta,
                role,
            },
            notices,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_depot(&self) -> bool {
        self.role == Role::Depot
    }

    pub fn is_settlement(&self) -> bool {
        self.role == Role::Settlement
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn toggle_role(&mut self) {
        self.role = self.role.toggled();
    }

    pub fn key(&self) -> LocationKey {
        LocationKey::new(self.name.clone(), self.region.clone())
    }

    pub fn same_place(&self, other: &Location) -> bool {
        self.name == other.name && self.region == other.region
    }

    /// Compare by name, then region; agrees with `Ord` on [`LocationKey`].
    pub fn cmp_key(&self, other: &Location) -> Ordering {
        (self.name.as_str(), self.region.as_str())
            .cmp(&(other.name.as_str(), other.region.as_str()))
    }

    /// Straight-line distance to `other`, in the same unit as `r`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        polar_distance(self.r, self.theta, other.r, other.theta)
    }
}

fn normalize_field(field: &'static str, raw: &str, notices: &mut Vec<Notice>) -> String {
    let titled = title_case(raw);
    if titled != raw {
        notices.push(Notice {
            field,
            original: raw.to_string(),
            normalized: titled.clone(),
        });
    }
    titled
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, [{}] in {} at {:.2}m, {:.2}π",
            self.name,
            self.role,
            self.region,
            self.r,
            self.theta / PI
        )
    }
}

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Whether a location is a depot (tour start/end) or a settlement (delivery target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Depot,
    Settlement,
}

impl Role {
    pub fn from_depot_flag(is_depot: bool) -> Role {
        if is_depot {
            Role::Depot
        } else {
            Role::Settlement
        }
    }

    pub fn toggled(self) -> Role {
        match self {
            Role::Depot => Role::Settlement,
            Role::Settlement => Role::Depot,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Depot => write!(f, "depot"),
            Role::Settlement => write!(f, "settlement"),
        }
    }
}

/// Identity of a location. Two locations with the same name and region are the same
/// place, whatever their coordinates or role.
///
/// Field order matters: the derived `Ord` compares by name, then region, which is the
/// tie-break order used by the selector and the depot optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationKey {
    pub name: String,
    pub region: String,
}

impl LocationKey {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> LocationKey {
        LocationKey {
            name: name.into(),
            region: region.into(),
        }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.region)
    }
}

/// Advisory notice raised when an input field was rewritten during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub field: &'static str,
    pub original: String,
    pub normalized: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} was not in title format, changed to {}",
            self.field, self.original, self.normalized
        )
    }
}

/// A successfully constructed value together with any notices raised while building it.
#[derive(Debug, Clone)]
pub struct Normalized<T> {
    pub value: T,
    pub notices: Vec<Notice>,
}

impl<T> Normalized<T> {
    pub fn clean(value: T) -> Normalized<T> {
        Normalized {
            value,
            notices: vec![],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// One row of tabular location input: `location, region, r, theta[, depot]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub location: String,
    pub region: String,
    pub r: f64,
    pub theta: f64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub depot: bool,
}

// Spreadsheet exports write flags as True/False, 1/0 or leave the cell blank.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        other => Err(de::Error::custom(format!(
            "expected a boolean depot flag, got {}",
            other
        ))),
    }
}

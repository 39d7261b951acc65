pub mod config;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod setup;
pub mod solver;
pub mod utils;

pub use domain::{Country, Location, LocationKey, LocationRecord, Normalized, Notice, Role};
pub use error::{ErrorKind, Result, TourError};
pub use solver::nearest_neighbour::{CandidateRef, DepotChoice, Tour, Trip};

pub mod country;
pub mod location;
pub mod types;

pub use country::Country;
pub use location::Location;
pub use types::{LocationKey, LocationRecord, Normalized, Notice, Role};

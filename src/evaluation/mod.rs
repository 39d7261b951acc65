pub mod distance;
pub mod travel_time;

pub use distance::polar_distance;
pub use travel_time::travel_time;

pub mod nearest_neighbour;
pub mod scaling;
pub mod search;

pub mod depot;
pub mod selector;
pub mod tour;

pub use depot::*;
pub use selector::*;
pub use tour::*;

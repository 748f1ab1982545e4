//! Entities of the road network: towns, roads and their validation errors.

pub mod error;
pub mod key;
pub mod road;
pub mod town;

pub use error::Error;
pub use key::RoadKey;
pub use road::{Distance, Road, UNIT_DISTANCE};
pub use town::Town;

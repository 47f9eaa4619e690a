//! Weighted random selection: pick one item from a table of item weights.
pub mod boolean;
pub mod error;
pub mod roller;
pub mod selector;
pub mod table;

pub use boolean::{try_weighted_bool, weighted_bool, weighted_bool_with};
pub use error::SelectError;
pub use roller::Roller;
pub use selector::{select_one, WeightedRandomizer};
pub use table::WeightTable;

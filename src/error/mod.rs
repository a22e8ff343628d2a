//! Cubo error types.

mod invalid_value;
mod partition;


pub use invalid_value::{InvalidGridSize, InvalidPanel, InvalidRotation};
pub use partition::PartitionError;

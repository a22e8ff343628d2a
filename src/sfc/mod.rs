//! Space-filling-curve construction and the SFC partitioner.

mod curve;
mod tile;

pub use curve::{global_curve, panel_curve};
pub use tile::Square;

pub(crate) use curve::rank_map;

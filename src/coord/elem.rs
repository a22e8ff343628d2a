//! Element coordinates and cross-panel neighbor resolution.

use crate::{
    panel::{Edge, Panel},
    rotation::Rotation,
};
use std::fmt;

// -----------------------------------------------------------------------------

/// 1-based element coordinates on a panel.
///
/// Values outside `[1, ne]` are allowed and denote elements on adjacent
/// panels (e.g. `ei = ne + 1` is the first column of the eastern
/// neighbor).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElemIJ {
    /// `ei` component, growing eastward.
    pub i: i32,
    /// `ej` component, growing northward.
    pub j: i32,
}

impl ElemIJ {
    /// Initializes a new element coordinate with the specified components.
    #[must_use]
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Returns true if both components lie within `[1, ne]`.
    #[must_use]
    pub const fn is_within(self, ne: u32) -> bool {
        let n = ne as i32;
        self.i >= 1 && self.i <= n && self.j >= 1 && self.j <= n
    }
}

impl fmt::Display for ElemIJ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

// -----------------------------------------------------------------------------

/// A resolved element position: in-bounds coordinates, owning panel, and
/// the rotation accumulated while crossing panel edges.
///
/// Any vector quantity defined in the source frame must be rotated by
/// `rotation` to be expressed in the destination frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ElemNeighbor {
    /// In-bounds element coordinates on `panel`.
    pub coord: ElemIJ,
    /// Owning panel.
    pub panel: Panel,
    /// Accumulated frame rotation.
    pub rotation: Rotation,
}

/// Resolves a possibly out-of-bounds element coordinate to its owning
/// panel.
///
/// Returns `None` for coordinates in a diagonal corner region (both
/// components out of range): the cube corners have only three incident
/// panels and no well-defined diagonal neighbor.
///
/// A coordinate more than one panel away along a single axis is resolved
/// by repeated single-edge hops, each hop reducing the offending component
/// by one panel width and rotating the pair into the next panel's frame.
pub(crate) fn resolve(
    ne: u32,
    coord: ElemIJ,
    panel: Panel,
) -> Option<ElemNeighbor> {
    let n = ne as i32;
    let ElemIJ { mut i, mut j } = coord;
    let mut panel = panel;
    let mut rotation = Rotation::Identity;

    loop {
        let out_i = i < 1 || i > n;
        let out_j = j < 1 || j > n;

        let edge = match (out_i, out_j) {
            (false, false) => {
                return Some(ElemNeighbor {
                    coord: ElemIJ::new(i, j),
                    panel,
                    rotation,
                });
            }
            // Diagonal cube-corner neighbors are undefined.
            (true, true) => return None,
            (true, false) => {
                if i > n {
                    i -= n;
                    Edge::East
                } else {
                    i += n;
                    Edge::West
                }
            }
            (false, true) => {
                if j > n {
                    j -= n;
                    Edge::North
                } else {
                    j += n;
                    Edge::South
                }
            }
        };

        let orient = panel.neighbor(edge);
        (i, j) = orient.rotation.apply(n, i, j);
        panel = orient.panel;
        rotation = rotation.compose(orient.rotation);
    }
}

#[cfg(test)]
#[path = "./elem_tests.rs"]
mod tests;

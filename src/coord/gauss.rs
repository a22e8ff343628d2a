//! Quadrature-point coordinates and cross-panel neighbor resolution.

use super::{
    elem::{self, ElemIJ},
    quotient,
};
use crate::panel::Panel;
use std::fmt;

// -----------------------------------------------------------------------------

/// 1-based quadrature-point coordinates within an element.
///
/// Values outside `[1, ngq]` address points of neighboring elements:
/// `gi = ngq + k` is the `k`-th point of the eastern neighbor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussIJ {
    /// `gi` component, growing eastward.
    pub i: i32,
    /// `gj` component, growing northward.
    pub j: i32,
}

impl GaussIJ {
    /// Initializes a new quadrature coordinate with the specified
    /// components.
    #[must_use]
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for GaussIJ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

// -----------------------------------------------------------------------------

/// A resolved quadrature point: in-bounds point, owning element and panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GaussNeighbor {
    /// In-bounds quadrature coordinates within `elem`.
    pub point: GaussIJ,
    /// Owning element on `panel`.
    pub elem: ElemIJ,
    /// Owning panel.
    pub panel: Panel,
}

/// Resolves a possibly out-of-bounds quadrature coordinate.
///
/// The global quadrature index splits into an element offset (how many
/// elements away) and a within-element point; the element offset rides
/// through the element-level resolution and the point is rotated into the
/// destination frame. `None` for diagonal cube-corner positions.
pub(crate) fn resolve(
    ne: u32,
    ngq: u32,
    point: GaussIJ,
    coord: ElemIJ,
    panel: Panel,
) -> Option<GaussNeighbor> {
    #[allow(clippy::cast_possible_wrap)] // ngq is far below i32::MAX.
    let n = ngq as i32;
    let di = quotient(n, point.i - 1);
    let dj = quotient(n, point.j - 1);

    let shifted = ElemIJ::new(coord.i + di, coord.j + dj);
    let nbr = elem::resolve(ne, shifted, panel)?;

    let (gi, gj) =
        nbr.rotation.apply(n, point.i - di * n, point.j - dj * n);

    Some(GaussNeighbor {
        point: GaussIJ::new(gi, gj),
        elem: nbr.coord,
        panel: nbr.panel,
    })
}

#[cfg(test)]
#[path = "./gauss_tests.rs"]
mod tests;

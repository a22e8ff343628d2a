//! Neighbor queries over a whole cubed-sphere mesh.

use crate::{
    coord::{elem, gauss, ElemIJ, ElemNeighbor, GaussIJ, GaussNeighbor},
    error,
    panel::Panel,
};

/// A cubed-sphere mesh of six `ne × ne` panels.
///
/// This is the entry point for the neighbor algebra; it owns no storage,
/// only the mesh size.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeGrid {
    ne: u32,
}

impl CubeGrid {
    /// Initializes a new grid with `ne` elements per panel side.
    ///
    /// # Errors
    ///
    /// [`error::InvalidGridSize`] for an empty grid.
    pub const fn new(ne: u32) -> Result<Self, error::InvalidGridSize> {
        if ne == 0 {
            return Err(error::InvalidGridSize::new(
                ne,
                "at least one element per side",
            ));
        }
        Ok(Self { ne })
    }

    /// Returns the number of elements per panel side.
    #[must_use]
    pub const fn ne(self) -> u32 {
        self.ne
    }

    /// Returns the total number of elements.
    #[must_use]
    pub const fn elem_count(self) -> u32 {
        6 * self.ne * self.ne
    }

    /// Resolves a possibly out-of-bounds element coordinate to the panel
    /// owning it.
    ///
    /// In-bounds coordinates come back unchanged with no rotation.
    /// `None` marks the undefined diagonal cube-corner neighbors.
    ///
    /// # Example
    ///
    /// ```
    /// use cubo::{CubeGrid, ElemIJ, Panel};
    ///
    /// let grid = CubeGrid::new(6)?;
    /// let panel = Panel::try_from(1)?;
    ///
    /// // One step east of the panel's last column.
    /// let nbr = grid.elem_neighbor(ElemIJ::new(7, 3), panel).unwrap();
    /// assert_eq!(nbr.coord, ElemIJ::new(1, 3));
    /// assert_eq!(u8::from(nbr.panel), 2);
    ///
    /// // Across a cube corner: undefined.
    /// assert!(grid.elem_neighbor(ElemIJ::new(0, 0), panel).is_none());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn elem_neighbor(
        self,
        coord: ElemIJ,
        panel: Panel,
    ) -> Option<ElemNeighbor> {
        elem::resolve(self.ne, coord, panel)
    }

    /// Resolves a possibly out-of-bounds quadrature point, for elements
    /// carrying an `ngq × ngq` point grid.
    ///
    /// `ngq` must be at least 1.
    #[must_use]
    pub fn gauss_neighbor(
        self,
        ngq: u32,
        point: GaussIJ,
        coord: ElemIJ,
        panel: Panel,
    ) -> Option<GaussNeighbor> {
        debug_assert!(ngq >= 1, "empty quadrature grid");
        gauss::resolve(self.ne, ngq, point, coord, panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grid() {
        assert!(CubeGrid::new(0).is_err());
        assert!(CubeGrid::new(1).is_ok());
    }

    #[test]
    fn counts() {
        let grid = CubeGrid::new(4).expect("grid");
        assert_eq!(grid.ne(), 4);
        assert_eq!(grid.elem_count(), 96);
    }
}

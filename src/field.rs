//! Per-element storage over the whole cube.

use crate::{coord::ElemIJ, panel::Panel, NUM_PANELS};

// -----------------------------------------------------------------------------

/// An element of the cubed-sphere mesh: panel plus in-bounds coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeCell {
    /// Element coordinates, both in `[1, ne]`.
    pub coord: ElemIJ,
    /// Owning panel.
    pub panel: Panel,
}

// -----------------------------------------------------------------------------

/// A value per element of the whole cube, i.e. a `ne × ne × 6` array.
///
/// Storage is column-major with the element `ei` axis fastest and the
/// panel axis slowest, matching the canonical traversal order used to
/// number local ids.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CubeField<T> {
    ne: u32,
    data: Vec<T>,
}

impl<T: Clone> CubeField<T> {
    /// Initializes a new field with every element set to `value`.
    pub(crate) fn filled(ne: u32, value: T) -> Self {
        let side = ne as usize;
        Self {
            ne,
            data: vec![value; side * side * NUM_PANELS],
        }
    }
}

impl<T> CubeField<T> {
    /// Returns the number of elements per panel side.
    #[must_use]
    pub const fn ne(&self) -> u32 {
        self.ne
    }

    /// Returns the total number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        let side = self.ne as usize;
        side * side * NUM_PANELS
    }

    /// Returns whether the field is empty (`ne = 0` never occurs in
    /// practice, this is for completeness).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn offset(&self, coord: ElemIJ, panel: Panel) -> usize {
        debug_assert!(coord.is_within(self.ne), "element out of bounds");
        let side = self.ne as usize;
        #[allow(clippy::cast_sign_loss)] // Asserted above.
        let (ei, ej) = (coord.i as usize - 1, coord.j as usize - 1);

        ((usize::from(panel) - 1) * side + ej) * side + ei
    }

    /// Returns the value stored for the given element.
    #[must_use]
    pub fn get(&self, coord: ElemIJ, panel: Panel) -> &T {
        &self.data[self.offset(coord, panel)]
    }

    pub(crate) fn set(&mut self, coord: ElemIJ, panel: Panel, value: T) {
        let offset = self.offset(coord, panel);
        self.data[offset] = value;
    }

    /// Iterates over all elements in canonical order: panel-major, then
    /// `ej`, then `ei` fastest.
    pub fn cells(&self) -> impl Iterator<Item = (CubeCell, &T)> {
        #[allow(clippy::cast_possible_wrap)] // ne is far below i32::MAX.
        let n = self.ne as i32;
        Panel::iter()
            .flat_map(move |panel| {
                (1..=n).flat_map(move |ej| {
                    (1..=n).map(move |ei| CubeCell {
                        coord: ElemIJ::new(ei, ej),
                        panel,
                    })
                })
            })
            .zip(self.data.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_order_is_ei_fastest() {
        let mut field = CubeField::filled(2, 0_u32);
        field.set(ElemIJ::new(2, 1), Panel::new_unchecked(1), 7);

        let values: Vec<u32> =
            field.cells().map(|(_, value)| *value).collect();

        // (2, 1) on panel 1 is the second cell of the scan.
        assert_eq!(values[1], 7);
        assert_eq!(values.iter().filter(|&&v| v == 7).count(), 1);

        let cell = field.cells().nth(1).map(|(cell, _)| cell).expect("cell");
        assert_eq!(cell.coord, ElemIJ::new(2, 1));
    }

    #[test]
    fn cell_count() {
        let field = CubeField::filled(3, 0_u8);
        assert_eq!(field.len(), 54);
        assert_eq!(field.cells().count(), 54);
        assert!(!field.is_empty());
    }
}

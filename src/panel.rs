//! The six faces of the cubed sphere and their adjacency.

use crate::{error, rotation::Rotation, NUM_PANELS};
use std::fmt;

// -----------------------------------------------------------------------------

/// One of the six cube panels.
///
/// Panels 1 to 4 form the equatorial belt (eastward order `1→2→3→4→1`),
/// panel 5 is the south cap and panel 6 the north cap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel(u8);

impl Panel {
    /// Initializes a new `Panel` using a value that may be out of range.
    ///
    /// # Safety
    ///
    /// The value must be a valid panel number (1 to 6).
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value >= 1 && value <= NUM_PANELS as u8, "panel out of range");
        Self(value)
    }

    /// Returns true if the panel belongs to the equatorial belt.
    ///
    /// # Example
    ///
    /// ```
    /// use cubo::Panel;
    ///
    /// assert!(Panel::try_from(2)?.is_equatorial());
    /// assert!(!Panel::try_from(5)?.is_equatorial());
    /// # Ok::<(), cubo::error::InvalidPanel>(())
    /// ```
    #[must_use]
    pub const fn is_equatorial(self) -> bool {
        self.0 <= 4
    }

    /// Returns true if the panel is one of the two caps.
    #[must_use]
    pub const fn is_cap(self) -> bool {
        self.0 > 4
    }

    /// Returns the total number of panels.
    #[must_use]
    pub const fn count() -> u8 {
        NUM_PANELS as u8
    }

    /// Returns all the panels, in panel-number order.
    ///
    /// # Example
    ///
    /// ```
    /// use cubo::Panel;
    ///
    /// let panels = Panel::iter().collect::<Vec<_>>();
    /// assert_eq!(panels.len(), 6);
    /// ```
    pub fn iter() -> impl Iterator<Item = Self> {
        (1..=Self::count()).map(Self::new_unchecked)
    }

    /// Returns the panel reached by crossing the given edge, along with the
    /// rotation the local frame undergoes.
    pub(crate) fn neighbor(self, edge: Edge) -> PanelOrient {
        NEIGHBORS[usize::from(self.0) - 1][edge as usize]
    }
}

impl TryFrom<u8> for Panel {
    type Error = error::InvalidPanel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 1 || usize::from(value) > NUM_PANELS {
            return Err(Self::Error::new(value, "out of range"));
        }
        Ok(Self(value))
    }
}

impl From<Panel> for u8 {
    fn from(value: Panel) -> Self {
        value.0
    }
}

impl From<Panel> for usize {
    fn from(value: Panel) -> Self {
        Self::from(value.0)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -----------------------------------------------------------------------------

/// A panel edge, named from the panel's own coordinate frame.
///
/// `ei` grows eastward, `ej` northward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Edge {
    /// `ei > ne` side.
    East = 0,
    /// `ei < 1` side.
    West = 1,
    /// `ej > ne` side.
    North = 2,
    /// `ej < 1` side.
    South = 3,
}

/// Destination of an edge crossing: the adjacent panel and the rotation
/// applied to coordinates and vectors carried across.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelOrient {
    /// Adjacent panel.
    pub panel: Panel,
    /// Quarter turns the local frame undergoes.
    pub rotation: Rotation,
}

macro_rules! panel_orient {
    [$panel:literal, $rot:literal] => {
        PanelOrient {
            panel: Panel::new_unchecked($panel),
            rotation: Rotation::new_unchecked($rot),
        }
    }
}

/// Definition of which panels neighbor each other, per edge
/// (east/west/north/south).
///
/// The caps attach rotated: each equatorial panel meets panel 6 (resp. 5)
/// with one more quarter turn (resp. one less) than its predecessor, and the
/// cap rows are the inverses of the equatorial ones.
#[rustfmt::skip]
static NEIGHBORS: [[PanelOrient; 4]; NUM_PANELS] = [
    // Panel 1.
    [
        panel_orient!(2, 0), panel_orient!(4, 0),
        panel_orient!(6, 0), panel_orient!(5, 0),
    ],
    // Panel 2.
    [
        panel_orient!(3, 0), panel_orient!(1, 0),
        panel_orient!(6, 3), panel_orient!(5, 1),
    ],
    // Panel 3.
    [
        panel_orient!(4, 0), panel_orient!(2, 0),
        panel_orient!(6, 2), panel_orient!(5, 2),
    ],
    // Panel 4.
    [
        panel_orient!(1, 0), panel_orient!(3, 0),
        panel_orient!(6, 1), panel_orient!(5, 3),
    ],
    // Panel 5 (south cap).
    [
        panel_orient!(2, 3), panel_orient!(4, 1),
        panel_orient!(1, 0), panel_orient!(3, 2),
    ],
    // Panel 6 (north cap).
    [
        panel_orient!(2, 1), panel_orient!(4, 3),
        panel_orient!(3, 2), panel_orient!(1, 0),
    ],
];

#[cfg(test)]
#[path = "./panel_tests.rs"]
mod tests;

//! Base space-filling tiles and integer matrix transforms.
//!
//! A curve is stored as a square visit-order matrix: entry `(i, j)` holds
//! the 1-based position of that cell along the curve. Three base tiles
//! exist, one per supported prime factor: Hilbert (2×2), Peano (3×3) and
//! the 5×5 "cinco" tile. Each comes in four orientations, classified by
//! where the curve enters (a main-diagonal corner) and exits (an
//! anti-diagonal corner).

use crate::rotation::Rotation;

// -----------------------------------------------------------------------------

/// A square integer matrix holding a curve visit order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Square {
    side: usize,
    values: Vec<i32>,
}

impl Square {
    /// Initializes a zeroed matrix.
    pub(crate) fn zeroed(side: usize) -> Self {
        Self {
            side,
            values: vec![0; side * side],
        }
    }

    pub(crate) fn from_rows<const N: usize>(rows: [[i32; N]; N]) -> Self {
        Self {
            side: N,
            values: rows.iter().flatten().copied().collect(),
        }
    }

    /// Returns the side length.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Returns the value at 1-based position `(i, j)`.
    #[must_use]
    pub fn get(&self, i: i32, j: i32) -> i32 {
        self.values[self.offset(i, j)]
    }

    pub(crate) fn set(&mut self, i: i32, j: i32, value: i32) {
        let offset = self.offset(i, j);
        self.values[offset] = value;
    }

    #[allow(clippy::cast_sign_loss)] // Asserted below.
    fn offset(&self, i: i32, j: i32) -> usize {
        debug_assert!(
            i >= 1 && j >= 1 && i as usize <= self.side
                && j as usize <= self.side,
            "position out of bounds"
        );
        (i as usize - 1) * self.side + (j as usize - 1)
    }

    /// Returns the matrix rotated by `turns` quarter turns
    /// counterclockwise.
    #[must_use]
    pub fn rot(&self, turns: u8) -> Self {
        #[allow(clippy::cast_possible_wrap)] // Sides are tiny.
        let n = self.side as i32;
        let rotation = Rotation::new_unchecked(turns % 4);
        let mut out = Self::zeroed(self.side);

        for i in 1..=n {
            for j in 1..=n {
                let (si, sj) = rotation.apply(n, i, j);
                out.set(i, j, self.get(si, sj));
            }
        }
        out
    }

    /// Returns the matrix flipped along the `i` axis (row order reversed).
    #[must_use]
    pub fn inv_x(&self) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let n = self.side as i32;
        let mut out = Self::zeroed(self.side);

        for i in 1..=n {
            for j in 1..=n {
                out.set(i, j, self.get(n + 1 - i, j));
            }
        }
        out
    }

    /// Returns the matrix flipped along the `j` axis (column order
    /// reversed).
    #[must_use]
    pub fn inv_y(&self) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let n = self.side as i32;
        let mut out = Self::zeroed(self.side);

        for i in 1..=n {
            for j in 1..=n {
                out.set(i, j, self.get(i, n + 1 - j));
            }
        }
        out
    }

    /// Returns cell positions ordered by visit index.
    pub(crate) fn positions(&self) -> Vec<(i32, i32)> {
        #[allow(clippy::cast_possible_wrap)]
        let n = self.side as i32;
        let mut out = vec![(0, 0); self.side * self.side];

        for i in 1..=n {
            for j in 1..=n {
                #[allow(clippy::cast_sign_loss)] // Visit indices are 1-based.
                let visit = self.get(i, j) as usize;
                out[visit - 1] = (i, j);
            }
        }
        out
    }
}

// -----------------------------------------------------------------------------

/// Curve entry corners sit on the main diagonal, exits on the
/// anti-diagonal; the four combinations give the four orientations of a
/// tile. Consecutive tiles of a composed curve stay adjacent exactly when
/// each tile's entry faces the incoming move and its exit the outgoing
/// one.
///
/// * orientation 0: enters at `(1, 1)`, exits at `(n, 1)`;
/// * orientation 1: enters at `(1, 1)`, exits at `(1, n)`;
/// * orientation 2: enters at `(n, n)`, exits at `(n, 1)`;
/// * orientation 3: enters at `(n, n)`, exits at `(1, n)`.
pub(crate) fn orientation_index(enters_high: bool, exits_east: bool) -> usize {
    usize::from(enters_high) * 2 + usize::from(exits_east)
}

/// Builds the four orientations of a base tile from its orientation 0:
/// the transpose keeps the entry and swaps the exit, the half-turns swap
/// the entry.
fn orientations(base: &Square) -> [Square; 4] {
    let transposed = base.rot(1).inv_x();
    [
        base.clone(),
        transposed.clone(),
        transposed.rot(2),
        base.rot(2),
    ]
}

/// The base tiles, one set of four orientations per prime factor.
pub(crate) struct BaseTiles {
    hilbert: [Square; 4],
    peano: [Square; 4],
    cinco: [Square; 4],
}

impl BaseTiles {
    pub(crate) fn new() -> Self {
        Self {
            hilbert: orientations(&Square::from_rows([
                [1, 2],
                [4, 3],
            ])),
            peano: orientations(&Square::from_rows([
                [1, 2, 3],
                [8, 7, 4],
                [9, 6, 5],
            ])),
            cinco: orientations(&Square::from_rows([
                [ 1,  8,  9, 10, 11],
                [ 2,  7,  6, 13, 12],
                [ 3,  4,  5, 14, 15],
                [24, 23, 20, 19, 16],
                [25, 22, 21, 18, 17],
            ])),
        }
    }

    /// Returns the tile for a supported prime factor, in the given
    /// orientation.
    pub(crate) fn get(&self, factor: u32, orientation: usize) -> &Square {
        match factor {
            2 => &self.hilbert[orientation],
            3 => &self.peano[orientation],
            5 => &self.cinco[orientation],
            _ => unreachable!("unsupported factor"),
        }
    }
}

#[cfg(test)]
#[path = "./tile_tests.rs"]
mod tests;

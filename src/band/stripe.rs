//! Band placement inside a two-panel stripe.

use crate::error::PartitionError;

/// Marks a cell not yet owned by any rank.
pub(crate) const EMPTY: i32 = -1;

// -----------------------------------------------------------------------------

/// Scratch buffer for the band search: a `2·ne × ne` box representing two
/// unfolded panels, filled in place with rank numbers as blocks are laid
/// out. Lives for a single partitioning pass over one stripe.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stripe {
    nx: i32,
    ny: i32,
    cells: Vec<i32>,
}

impl Stripe {
    /// Initializes an empty stripe for panels of side `ne`.
    #[must_use]
    pub fn new(ne: u32) -> Self {
        let side = ne as usize;
        #[allow(clippy::cast_possible_wrap)] // ne is far below i32::MAX.
        let ny = ne as i32;

        Self {
            nx: 2 * ny,
            ny,
            cells: vec![EMPTY; 2 * side * side],
        }
    }

    /// Returns the stripe length (two panel sides).
    #[must_use]
    pub const fn nx(&self) -> i32 {
        self.nx
    }

    /// Returns the stripe height (one panel side).
    #[must_use]
    pub const fn ny(&self) -> i32 {
        self.ny
    }

    /// Returns the rank owning cell `(x, y)` (1-based), or `-1`.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> i32 {
        self.cells[self.offset(x, y)]
    }

    fn set(&mut self, x: i32, y: i32, value: i32) {
        let offset = self.offset(x, y);
        self.cells[offset] = value;
    }

    #[allow(clippy::cast_sign_loss)] // Asserted below.
    fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            x >= 1 && x <= self.nx && y >= 1 && y <= self.ny,
            "stripe cell out of bounds"
        );
        (x as usize - 1) * self.ny as usize + (y as usize - 1)
    }

    /// Returns the number of unowned cells.
    #[must_use]
    pub fn empty_count(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)] // Bounded by 2·ne².
        let count =
            self.cells.iter().filter(|&&cell| cell == EMPTY).count() as u32;
        count
    }

    /// Returns the leftmost column still holding an unowned cell, if any.
    pub(crate) fn first_open_column(&self) -> Option<i32> {
        (1..=self.nx)
            .find(|&x| (1..=self.ny).any(|y| self.get(x, y) == EMPTY))
    }

    /// Fills up to `need` unowned cells with `rank`, column by column from
    /// the left, top to bottom. Returns the number of cells placed.
    ///
    /// This is the spill layout: the tail of a stripe and the head of the
    /// next one are consumed in plain column order, no band structure.
    pub(crate) fn fill_columns(&mut self, rank: u32, need: u32) -> u32 {
        #[allow(clippy::cast_possible_wrap)]
        let value = rank as i32;
        let mut left = need;

        for x in 1..=self.nx {
            for y in 1..=self.ny {
                if left == 0 {
                    return need;
                }
                if self.get(x, y) == EMPTY {
                    self.set(x, y, value);
                    left -= 1;
                }
            }
        }
        need - left
    }

    /// Number of unowned cells in columns `[i1, i2)`.
    fn capacity(&self, i1: i32, i2: i32) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let count = (i1..i2)
            .flat_map(|x| (1..=self.ny).map(move |y| self.get(x, y)))
            .filter(|&cell| cell == EMPTY)
            .count() as u32;
        count
    }

    /// Accumulates ranks from `start_rank` until they fill (or overflow)
    /// the band `[i1, i2)`. Returns `(end_rank, overflow)`, or `None` when
    /// the band cannot be completed (ranks exhausted, or overflow too
    /// large to fit the spill column).
    fn band_extent(
        &self,
        nelems: &[u32],
        start_rank: u32,
        i1: i32,
        i2: i32,
    ) -> Option<(u32, u32)> {
        let cap = self.capacity(i1, i2);
        let mut total = 0;
        let mut end_rank = start_rank;

        while (end_rank as usize) < nelems.len() && total < cap {
            total += nelems[end_rank as usize];
            end_rank += 1;
        }
        if total < cap {
            return None;
        }

        let overflow = total - cap;
        #[allow(clippy::cast_sign_loss)] // ny is positive.
        if overflow >= self.ny as u32 {
            return None;
        }
        Some((end_rank, overflow))
    }

    /// Lays ranks `start_rank..end_rank` into the band `[i1, i2)`: rows
    /// top to bottom, right to left within a row, the topmost `overflow`
    /// rows extended one column into `i2`.
    fn place_band(
        &mut self,
        nelems: &[u32],
        start_rank: u32,
        end_rank: u32,
        i1: i32,
        i2: i32,
        overflow: u32,
    ) {
        let mut rank = start_rank;
        let mut left = nelems[rank as usize];

        for y in 1..=self.ny {
            #[allow(clippy::cast_possible_wrap)]
            let hi = if y <= overflow as i32 { i2 } else { i2 - 1 };

            for x in (i1..=hi).rev() {
                if self.get(x, y) != EMPTY {
                    continue;
                }
                while left == 0 {
                    rank += 1;
                    if rank == end_rank {
                        return;
                    }
                    left = nelems[rank as usize];
                }
                #[allow(clippy::cast_possible_wrap)]
                self.set(x, y, rank as i32);
                left -= 1;
            }
        }
    }

    /// Mean perimeter/area over ranks `start_rank..end_rank` as currently
    /// placed: each cell side facing a different rank, an unowned cell or
    /// the outside counts toward the perimeter.
    fn mean_ratio(
        &self,
        nelems: &[u32],
        start_rank: u32,
        end_rank: u32,
        i1: i32,
        i2: i32,
    ) -> f64 {
        let mut total = 0.0;

        for rank in start_rank..end_rank {
            #[allow(clippy::cast_possible_wrap)]
            let value = rank as i32;
            let mut perimeter = 0_u32;

            // Placed cells all lie within the band plus its spill column.
            for x in i1..=i2.min(self.nx) {
                for y in 1..=self.ny {
                    if self.get(x, y) != value {
                        continue;
                    }
                    for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                        let (cx, cy) = (x + dx, y + dy);
                        let neighbor = if cx < 1
                            || cx > self.nx
                            || cy < 1
                            || cy > self.ny
                        {
                            EMPTY
                        } else {
                            self.get(cx, cy)
                        };
                        perimeter += u32::from(neighbor != value);
                    }
                }
            }
            total += f64::from(perimeter) / f64::from(nelems[rank as usize]);
        }
        total / f64::from(end_rank - start_rank)
    }

    /// Searches for the band starting at column `start_i` that minimizes
    /// the mean perimeter/area of its blocks, commits the winning layout,
    /// and returns `(next_rank, next_column)`.
    ///
    /// Candidate split columns are scanned in increasing order and a tie
    /// keeps the later (wider) band. Returns `Ok(None)` when no candidate
    /// can host a complete band.
    ///
    /// # Errors
    ///
    /// [`PartitionError::NprocTooSmall`] for fewer than 4 ranks: tiny runs
    /// are handled by the whole-panel special cases, not by the search.
    pub fn find_band(
        &mut self,
        nelems: &[u32],
        start_rank: u32,
        start_i: i32,
    ) -> Result<Option<(u32, i32)>, PartitionError> {
        #[allow(clippy::cast_possible_truncation)] // Checked at build time.
        let nproc = nelems.len() as u32;
        if nproc < 4 {
            return Err(PartitionError::NprocTooSmall(nproc));
        }

        let mut best: Option<(f64, u32, i32, u32)> = None;
        for i2 in (start_i + 1)..=self.nx {
            let Some((end_rank, overflow)) =
                self.band_extent(nelems, start_rank, start_i, i2)
            else {
                continue;
            };

            let mut trial = self.clone();
            trial.place_band(
                nelems, start_rank, end_rank, start_i, i2, overflow,
            );
            let score =
                trial.mean_ratio(nelems, start_rank, end_rank, start_i, i2);

            if best.map_or(true, |(top, ..)| score <= top) {
                best = Some((score, end_rank, i2, overflow));
            }
        }

        let Some((_, end_rank, i2, overflow)) = best else {
            return Ok(None);
        };
        self.place_band(nelems, start_rank, end_rank, start_i, i2, overflow);

        Ok(Some((end_rank, i2)))
    }
}

#[cfg(test)]
#[path = "./stripe_tests.rs"]
mod tests;

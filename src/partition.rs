//! Partitioning the cube across processes.

use crate::{
    band,
    error::PartitionError,
    field::{CubeCell, CubeField},
    metrics, sfc,
};

// -----------------------------------------------------------------------------

/// Partitioning strategy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[allow(clippy::exhaustive_enums)] // The two strategies of the library.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Space-filling curve over all six panels, sliced into contiguous
    /// chunks. Requires `ne` to factor into `{2, 3, 5}`.
    Sfc,
    /// Rectangular bands peeled off two-panel stripes, block shapes
    /// chosen by perimeter/area search. Works for any `ne`.
    Band,
}

// -----------------------------------------------------------------------------

/// A static assignment of every element to a process rank, with per-rank
/// 1-based local ids.
///
/// Ranks are balanced to within one element. Local ids number each rank's
/// elements `1..=nelems[rank]` in the canonical scan order (panel-major,
/// then `ej`, then `ei`), whatever the strategy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    nproc: u32,
    nelems: Vec<u32>,
    ranks: CubeField<u32>,
    lids: CubeField<u32>,
}

impl Partition {
    /// Computes a partition of the `6·ne²` elements over `nproc` ranks.
    ///
    /// # Errors
    ///
    /// - [`PartitionError::NprocTooSmall`] for `nproc = 0`;
    /// - [`PartitionError::NprocTooLarge`] when ranks outnumber elements;
    /// - [`PartitionError::UnfactorableNe`] from [`Method::Sfc`] when
    ///   `ne` has a prime factor outside `{2, 3, 5}`.
    ///
    /// # Example
    ///
    /// ```
    /// use cubo::{Method, Partition};
    ///
    /// let partition = Partition::new(Method::Sfc, 2, 8)?;
    /// assert_eq!(partition.nelems(), [3; 8]);
    /// # Ok::<(), cubo::error::PartitionError>(())
    /// ```
    pub fn new(
        method: Method,
        ne: u32,
        nproc: u32,
    ) -> Result<Self, PartitionError> {
        if nproc == 0 {
            return Err(PartitionError::NprocTooSmall(nproc));
        }
        if nproc > 6 * ne * ne {
            return Err(PartitionError::NprocTooLarge(nproc));
        }

        let (nelems, ranks) = match method {
            Method::Sfc => sfc::rank_map(ne, nproc)?,
            Method::Band => band::rank_map(ne, nproc)?,
        };
        let lids = assign_local_ids(&ranks, nproc);

        Ok(Self { nproc, nelems, ranks, lids })
    }

    /// Returns the number of ranks.
    #[must_use]
    pub const fn nproc(&self) -> u32 {
        self.nproc
    }

    /// Returns the element count per rank.
    #[must_use]
    pub fn nelems(&self) -> &[u32] {
        &self.nelems
    }

    /// Returns the rank owning each element.
    #[must_use]
    pub const fn rank_map(&self) -> &CubeField<u32> {
        &self.ranks
    }

    /// Returns the local id of each element within its rank.
    #[must_use]
    pub const fn local_ids(&self) -> &CubeField<u32> {
        &self.lids
    }

    /// Returns the elements owned by `rank`, ordered by local id.
    ///
    /// # Errors
    ///
    /// [`PartitionError::MissingLocalId`] if some local id in
    /// `1..=nelems[rank]` has no owning element (a broken rank/lid
    /// pairing in hand-modified maps).
    pub fn elem_coords(
        &self,
        rank: u32,
    ) -> Result<Vec<CubeCell>, PartitionError> {
        let count = self.nelems[rank as usize] as usize;
        let mut slots: Vec<Option<CubeCell>> = vec![None; count];

        for (cell, &owner) in self.ranks.cells() {
            if owner == rank {
                let lid = *self.lids.get(cell.coord, cell.panel) as usize;
                if (1..=count).contains(&lid) {
                    slots[lid - 1] = Some(cell);
                }
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                #[allow(clippy::cast_possible_truncation)] // ≤ nelems.
                let lid = index as u32 + 1;
                slot.ok_or(PartitionError::MissingLocalId { rank, lid })
            })
            .collect()
    }

    /// Mean and per-rank perimeter/area of this partition.
    #[must_use]
    pub fn perimeter_ratio(&self) -> metrics::PartitionCost {
        metrics::perimeter_ratio(&self.ranks, self.nproc)
    }

    /// Mean and per-rank communication/computation of this partition, for
    /// elements carrying an `ngq × ngq` quadrature grid.
    #[must_use]
    pub fn communication_ratio(&self, ngq: u32) -> metrics::PartitionCost {
        metrics::communication_ratio(&self.ranks, self.nproc, ngq)
    }

    /// Per-element coloring with no color shared across a rank boundary.
    #[must_use]
    pub fn color_map(&self) -> CubeField<u32> {
        metrics::color_map(&self.ranks, self.nproc)
    }
}

/// Numbers each rank's elements in canonical scan order.
fn assign_local_ids(ranks: &CubeField<u32>, nproc: u32) -> CubeField<u32> {
    let mut next = vec![1_u32; nproc as usize];
    let mut lids = CubeField::filled(ranks.ne(), 0);

    for (cell, &rank) in ranks.cells() {
        lids.set(cell.coord, cell.panel, next[rank as usize]);
        next[rank as usize] += 1;
    }
    lids
}

#[cfg(test)]
#[path = "./partition_tests.rs"]
mod tests;

//! Communication-cost metrics over a rank map, and domain coloring.
//!
//! Both metrics walk every element's four sides through the neighbor
//! algebra, so they apply to any rank map regardless of which partitioner
//! produced it.

use crate::{
    coord::{elem, ElemIJ},
    field::{CubeCell, CubeField},
};
use ahash::{HashSet, HashSetExt};

// -----------------------------------------------------------------------------

/// Work and exchange volume of one rank.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankCost {
    /// Owned volume: element count, or quadrature-point count.
    pub volume: u32,
    /// Exchanged surface: cross-rank edges, or halo points.
    pub surface: u32,
}

impl RankCost {
    /// Surface-to-volume ratio of this rank.
    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.surface) / f64::from(self.volume)
    }
}

/// Per-rank costs of a partition, with their mean ratio.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionCost {
    /// Mean of the per-rank surface/volume ratios.
    pub mean_ratio: f64,
    /// One entry per rank.
    pub per_rank: Vec<RankCost>,
}

impl PartitionCost {
    fn from_ranks(per_rank: Vec<RankCost>) -> Self {
        let total: f64 = per_rank.iter().map(|cost| cost.ratio()).sum();
        #[allow(clippy::cast_precision_loss)] // Rank counts are small.
        let mean_ratio = total / per_rank.len() as f64;

        Self { mean_ratio, per_rank }
    }

    /// Total surface over all ranks (total exchanged volume).
    #[must_use]
    pub fn total_surface(&self) -> u64 {
        self.per_rank.iter().map(|cost| u64::from(cost.surface)).sum()
    }
}

// -----------------------------------------------------------------------------

const SIDES: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rank owning the element one step in direction `(dx, dy)`.
///
/// One-step element neighbors always resolve: a step along a single axis
/// never lands in a corner region.
fn side_rank(ranks: &CubeField<u32>, cell: CubeCell, step: (i32, i32)) -> u32 {
    let shifted =
        ElemIJ::new(cell.coord.i + step.0, cell.coord.j + step.1);
    let nbr = elem::resolve(ranks.ne(), shifted, cell.panel)
        .expect("single-axis step cannot hit a corner");

    *ranks.get(nbr.coord, nbr.panel)
}

/// Per-rank perimeter/area of a rank map.
///
/// An element counts 1 toward its rank's volume; each of its four sides
/// facing an element of another rank counts 1 toward the surface.
///
/// # Example
///
/// ```
/// use cubo::{metrics, Method, Partition};
///
/// let partition = Partition::new(Method::Band, 10, 6)?;
/// let cost = metrics::perimeter_ratio(partition.rank_map(), 6);
/// assert_eq!(cost.per_rank[0].volume, 100);
/// # Ok::<(), cubo::error::PartitionError>(())
/// ```
#[must_use]
pub fn perimeter_ratio(ranks: &CubeField<u32>, nproc: u32) -> PartitionCost {
    let mut per_rank = vec![RankCost { volume: 0, surface: 0 }; nproc as usize];

    for (cell, &rank) in ranks.cells() {
        let cost = &mut per_rank[rank as usize];
        cost.volume += 1;
        for step in SIDES {
            cost.surface += u32::from(side_rank(ranks, cell, step) != rank);
        }
    }
    PartitionCost::from_ranks(per_rank)
}

/// Per-rank communication/computation of a rank map at the
/// quadrature-point level.
///
/// An element owns `ngq²` points; each side facing another rank exchanges
/// `ngq` halo points, and a point sitting on a corner where two such
/// sides meet is exchanged once, not twice.
#[must_use]
pub fn communication_ratio(
    ranks: &CubeField<u32>,
    nproc: u32,
    ngq: u32,
) -> PartitionCost {
    let mut per_rank = vec![RankCost { volume: 0, surface: 0 }; nproc as usize];
    // Side pairs sharing a corner point, as indices into `SIDES`.
    const CORNERS: [(usize, usize); 4] = [(0, 2), (2, 1), (1, 3), (3, 0)];

    for (cell, &rank) in ranks.cells() {
        let crossing = SIDES.map(|step| side_rank(ranks, cell, step) != rank);
        let sides = crossing.iter().filter(|&&cross| cross).count();
        let corners = CORNERS
            .iter()
            .filter(|&&(a, b)| crossing[a] && crossing[b])
            .count();

        let cost = &mut per_rank[rank as usize];
        cost.volume += ngq * ngq;
        #[allow(clippy::cast_possible_truncation)] // At most 4 sides.
        {
            cost.surface += ngq * sides as u32 - corners as u32;
        }
    }
    PartitionCost::from_ranks(per_rank)
}

/// Colors each rank so that no two ranks sharing an element edge get the
/// same color, greedily in ascending rank order, and paints every element
/// with its rank's color.
///
/// Colors are 1-based; the palette stays small on the block-shaped
/// domains both partitioners produce.
#[must_use]
pub fn color_map(ranks: &CubeField<u32>, nproc: u32) -> CubeField<u32> {
    // Rank adjacency from the edges of the rank map.
    let mut adjacent: Vec<HashSet<u32>> =
        (0..nproc).map(|_| HashSet::new()).collect();
    for (cell, &rank) in ranks.cells() {
        for step in SIDES {
            let other = side_rank(ranks, cell, step);
            if other != rank {
                adjacent[rank as usize].insert(other);
            }
        }
    }

    let mut colors = vec![0_u32; nproc as usize];
    for rank in 0..nproc as usize {
        let used: Vec<u32> = adjacent[rank]
            .iter()
            .filter(|&&other| (other as usize) < rank)
            .map(|&other| colors[other as usize])
            .collect();
        colors[rank] =
            (1..).find(|color| !used.contains(color)).expect("free color");
    }

    let mut field = CubeField::filled(ranks.ne(), 0);
    for (cell, &rank) in ranks.cells() {
        field.set(cell.coord, cell.panel, colors[rank as usize]);
    }
    field
}

#[cfg(test)]
#[path = "./metrics_tests.rs"]
mod tests;

//! Panel and global curve construction, and the SFC partitioner backend.

use super::tile::{orientation_index, BaseTiles, Square};
use crate::{
    coord::ElemIJ, error::PartitionError, field::CubeField, panel::Panel,
};

/// Splits `ne` into its ascending list of prime factors.
///
/// Only `{2, 3, 5}` are supported, one base tile each; anything else has
/// no curve and is rejected.
pub(crate) fn factorize(ne: u32) -> Result<Vec<u32>, PartitionError> {
    let mut rest = ne;
    let mut factors = Vec::new();

    for factor in [2, 3, 5] {
        while rest % factor == 0 {
            factors.push(factor);
            rest /= factor;
        }
    }
    if rest != 1 {
        return Err(PartitionError::UnfactorableNe(ne));
    }
    Ok(factors)
}

/// Builds the `ne × ne` visit order of one panel.
///
/// The curve is grown by recursive tile substitution, one level per prime
/// factor of `ne` (largest factor outermost). Children take the unique
/// orientation whose entry faces the incoming move and whose exit faces
/// the outgoing one, so the composed curve stays contiguous.
///
/// # Errors
///
/// [`PartitionError::UnfactorableNe`] if `ne` has a prime factor outside
/// `{2, 3, 5}`.
///
/// # Example
///
/// ```
/// let curve = cubo::sfc::panel_curve(4)?;
/// assert_eq!(curve.get(1, 1), 1);
/// assert_eq!(curve.get(4, 1), 16);
/// # Ok::<(), cubo::error::PartitionError>(())
/// ```
pub fn panel_curve(ne: u32) -> Result<Square, PartitionError> {
    let mut factors = factorize(ne)?;
    factors.reverse();

    let tiles = BaseTiles::new();
    let mut sfc = Square::zeroed(ne as usize);
    let mut next = 1;
    fill(&mut sfc, (1, 1), &factors, 0, &mut next, &tiles);

    Ok(sfc)
}

/// Recursively fills `sfc` over the region of side `∏factors` anchored at
/// `origin`, following the curve of `factors[0]` in the given orientation.
fn fill(
    sfc: &mut Square,
    origin: (i32, i32),
    factors: &[u32],
    orientation: usize,
    next: &mut i32,
    tiles: &BaseTiles,
) {
    let Some((&factor, rest)) = factors.split_first() else {
        sfc.set(origin.0, origin.1, *next);
        *next += 1;
        return;
    };

    let positions = tiles.get(factor, orientation).positions();
    let last = positions.len() - 1;
    #[allow(clippy::cast_possible_wrap)] // Factors are tiny.
    let sub = rest.iter().product::<u32>() as i32;

    for (k, &(pi, pj)) in positions.iter().enumerate() {
        // The entry corner faces the incoming move, the exit corner the
        // outgoing one; the curve endpoints inherit the parent's corners.
        let enters_high = if k == 0 {
            orientation >= 2
        } else {
            let (di, dj) = (pi - positions[k - 1].0, pj - positions[k - 1].1);
            di < 0 || dj < 0
        };
        let exits_east = if k == last {
            orientation % 2 == 1
        } else {
            let (di, dj) = (positions[k + 1].0 - pi, positions[k + 1].1 - pj);
            di < 0 || dj > 0
        };

        fill(
            sfc,
            (origin.0 + (pi - 1) * sub, origin.1 + (pj - 1) * sub),
            rest,
            orientation_index(enters_high, exits_east),
            next,
            tiles,
        );
    }
}

/// Assigns every element of the cube a global curve index in
/// `[1, 6·ne²]`.
///
/// The six panel copies are chained in the visit order `1, 2, 6, 4, 5, 3`;
/// each copy is flipped or rotated so that consecutive panels join where
/// the curve leaves one and enters the next, the caps being entered and
/// exited on their rotated shared edges.
///
/// # Errors
///
/// [`PartitionError::UnfactorableNe`] if `ne` has a prime factor outside
/// `{2, 3, 5}`.
pub fn global_curve(ne: u32) -> Result<CubeField<u32>, PartitionError> {
    let panel_sfc = panel_curve(ne)?;
    #[allow(clippy::cast_possible_wrap)]
    let n = ne as i32;

    let chain: [(u8, Square); 6] = [
        (1, panel_sfc.inv_y()),
        (2, panel_sfc.inv_y()),
        (6, panel_sfc.rot(2)),
        (4, panel_sfc.rot(3)),
        (5, panel_sfc.clone()),
        (3, panel_sfc),
    ];

    let mut gid = CubeField::filled(ne, 0);
    for (slot, (panel, visit)) in chain.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)] // Six slots.
        let offset = slot as u32 * ne * ne;
        let panel = Panel::new_unchecked(*panel);

        for ej in 1..=n {
            for ei in 1..=n {
                #[allow(clippy::cast_sign_loss)] // Visit order is 1-based.
                let index = visit.get(ei, ej) as u32;
                gid.set(ElemIJ::new(ei, ej), panel, offset + index);
            }
        }
    }
    Ok(gid)
}

/// SFC partitioner backend: slices the global curve into `nproc`
/// contiguous chunks, the `tot mod nproc` oversized ones first.
pub(crate) fn rank_map(
    ne: u32,
    nproc: u32,
) -> Result<(Vec<u32>, CubeField<u32>), PartitionError> {
    let gid = global_curve(ne)?;
    let total = 6 * ne * ne;
    debug_assert!(nproc >= 1 && nproc <= total, "nproc out of range");

    let base = total / nproc;
    let rem = total % nproc;
    let nelems = (0..nproc).map(|r| base + u32::from(r < rem)).collect();

    // Curve index of the first element owned by rank `rem`.
    let threshold = rem * (base + 1);
    let mut ranks = CubeField::filled(ne, 0);
    for (cell, &index) in gid.cells() {
        let along = index - 1;
        let rank = if along < threshold {
            along / (base + 1)
        } else {
            rem + (along - threshold) / base
        };
        ranks.set(cell.coord, cell.panel, rank);
    }

    Ok((nelems, ranks))
}

#[cfg(test)]
#[path = "./curve_tests.rs"]
mod tests;

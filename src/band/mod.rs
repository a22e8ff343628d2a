//! Band/stripe partitioning of the cube.
//!
//! The cube unfolds into three `2·ne × ne` stripes (north cap plus panel
//! 1, panels 2 and 3, panel 4 plus south cap), walked in that order. Each
//! stripe is peeled into rectangular bands of ranks by a perimeter/area
//! search; a rank straddling two stripes spills over in plain column
//! order.

mod stripe;

pub use stripe::Stripe;

use crate::{
    coord::ElemIJ, error::PartitionError, field::CubeField, panel::Panel,
};
use either::Either;

/// Number of stripes the cube unfolds into.
const NUM_STRIPES: usize = 3;

/// Band partitioner backend: balanced rank sizes (oversize last) plus the
/// rank map.
pub(crate) fn rank_map(
    ne: u32,
    nproc: u32,
) -> Result<(Vec<u32>, CubeField<u32>), PartitionError> {
    let total = 6 * ne * ne;
    debug_assert!(nproc >= 1 && nproc <= total, "nproc out of range");

    let (base, rem) = (total / nproc, total % nproc);
    let nelems: Vec<u32> =
        (0..nproc).map(|r| base + u32::from(r >= nproc - rem)).collect();

    let mut ranks = CubeField::filled(ne, 0);
    match nproc {
        1 => {}
        2 => assign_whole_panels(&mut ranks, &[&[6, 1, 2], &[3, 4, 5]]),
        3 => assign_whole_panels(&mut ranks, &[&[6, 1], &[2, 3], &[4, 5]]),
        _ => stripe_partition(ne, &nelems, &mut ranks)?,
    }

    Ok((nelems, ranks))
}

/// Small-run layout: whole panels per rank, following the unfolding order
/// (north cap first, then the belt, then the south cap).
fn assign_whole_panels(ranks: &mut CubeField<u32>, groups: &[&[u8]]) {
    #[allow(clippy::cast_possible_wrap)]
    let n = CubeField::ne(ranks) as i32;

    for (rank, panels) in groups.iter().enumerate() {
        for &panel in *panels {
            let panel = Panel::new_unchecked(panel);
            for ej in 1..=n {
                for ei in 1..=n {
                    #[allow(clippy::cast_possible_truncation)] // Tiny.
                    ranks.set(ElemIJ::new(ei, ej), panel, rank as u32);
                }
            }
        }
    }
}

/// General layout: walk the three stripes, carrying straddling ranks
/// across stripe boundaries.
fn stripe_partition(
    ne: u32,
    nelems: &[u32],
    ranks: &mut CubeField<u32>,
) -> Result<(), PartitionError> {
    let nproc = nelems.len();
    let mut rank = 0_u32;
    // Cells of `rank` already placed in a previous stripe.
    let mut spilled = 0_u32;

    for index in 0..NUM_STRIPES {
        let mut strip = Stripe::new(ne);

        loop {
            let open = strip.empty_count();
            if open == 0 {
                break;
            }
            debug_assert!((rank as usize) < nproc, "ranks exhausted early");
            let need = nelems[rank as usize] - spilled;

            // A band is only worth searching for when the next rank fits
            // strictly inside what is left of the stripe; otherwise the
            // remainder is consumed in column order.
            let action = if spilled > 0 || need >= open {
                Either::Right(need)
            } else {
                let start = strip.first_open_column().unwrap_or(1);
                strip
                    .find_band(nelems, rank, start)?
                    .map_or(Either::Right(need), Either::Left)
            };

            match action {
                Either::Left((next_rank, _)) => rank = next_rank,
                Either::Right(need) => {
                    let placed = strip.fill_columns(rank, need);
                    spilled += placed;
                    if spilled == nelems[rank as usize] {
                        rank += 1;
                        spilled = 0;
                    }
                }
            }
        }

        unfold(index, &strip, ranks);
    }
    Ok(())
}

/// Copies a filled stripe onto its two panels.
///
/// Stripe 0 runs down through the north cap into panel 1 (`x` against
/// `ej`), stripes 1 and 2 run eastward (`x` along `ei`).
fn unfold(index: usize, strip: &Stripe, ranks: &mut CubeField<u32>) {
    let n = strip.ny();

    for x in 1..=strip.nx() {
        for y in 1..=strip.ny() {
            let (panel, ei, ej) = match (index, x <= n) {
                (0, true) => (6_u8, y, n + 1 - x),
                (0, false) => (1, y, 2 * n + 1 - x),
                (1, true) => (2, x, y),
                (1, false) => (3, x - n, y),
                (2, true) => (4, x, y),
                (2, false) => (5, x - n, y),
                _ => unreachable!("stripe index out of range"),
            };

            #[allow(clippy::cast_sign_loss)] // Filled cells hold ranks.
            let value = strip.get(x, y) as u32;
            ranks.set(ElemIJ::new(ei, ej), Panel::new_unchecked(panel), value);
        }
    }
}

#[cfg(test)]
#[path = "./band_tests.rs"]
mod tests;

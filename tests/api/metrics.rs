use cubo::{metrics, CubeGrid, ElemIJ, Method, Partition};
use float_eq::assert_float_eq;

#[test]
fn perimeter_ratio_of_whole_panels() {
    let partition = Partition::new(Method::Band, 10, 6).expect("partition");
    let cost = partition.perimeter_ratio();

    assert_float_eq!(cost.mean_ratio, 0.4, abs <= 1e-12);
    for rank in &cost.per_rank {
        assert_eq!((rank.volume, rank.surface), (100, 40));
        assert_float_eq!(rank.ratio(), 0.4, abs <= 1e-12);
    }
}

#[test]
fn communication_ratio_shrinks_with_ngq() {
    let partition = Partition::new(Method::Sfc, 6, 10).expect("partition");

    let coarse = partition.communication_ratio(2);
    let fine = partition.communication_ratio(8);
    assert!(fine.mean_ratio < coarse.mean_ratio);
}

#[test]
fn free_functions_match_methods() {
    let partition = Partition::new(Method::Sfc, 6, 10).expect("partition");

    let from_method = partition.perimeter_ratio();
    let from_free = metrics::perimeter_ratio(partition.rank_map(), 10);
    assert_eq!(from_method, from_free);
}

#[test]
fn total_surface_sums_ranks() {
    let partition = Partition::new(Method::Band, 10, 7).expect("partition");
    let cost = partition.communication_ratio(4);

    let sum: u64 =
        cost.per_rank.iter().map(|rank| u64::from(rank.surface)).sum();
    assert_eq!(cost.total_surface(), sum);
    assert!(sum > 0);
}

#[test]
fn coloring_respects_adjacency() {
    let partition = Partition::new(Method::Band, 10, 14).expect("partition");
    let colors = partition.color_map();
    let grid = CubeGrid::new(10).expect("grid");

    for (cell, &color) in colors.cells() {
        assert!(color >= 1);
        let rank = *partition.rank_map().get(cell.coord, cell.panel);

        for step in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let shifted =
                ElemIJ::new(cell.coord.i + step.0, cell.coord.j + step.1);
            let nbr =
                grid.elem_neighbor(shifted, cell.panel).expect("neighbor");
            let nbr_rank = *partition.rank_map().get(nbr.coord, nbr.panel);

            if nbr_rank != rank {
                assert_ne!(
                    color,
                    *colors.get(nbr.coord, nbr.panel),
                    "ranks {rank} and {nbr_rank} share a color"
                );
            }
        }
    }
}

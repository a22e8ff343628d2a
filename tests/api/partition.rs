use cubo::{error::PartitionError, ElemIJ, Method, Panel, Partition};

#[test]
fn sfc_small_cube() {
    let partition = Partition::new(Method::Sfc, 2, 8).expect("partition");

    assert_eq!(partition.nproc(), 8);
    assert_eq!(partition.nelems(), [3; 8]);

    let panel = Panel::try_from(1).unwrap();
    let ranks = partition.rank_map();
    assert_eq!(*ranks.get(ElemIJ::new(1, 1), panel), 0);
    assert_eq!(*ranks.get(ElemIJ::new(2, 2), panel), 1);
}

#[test]
fn band_whole_panels() {
    let partition = Partition::new(Method::Band, 10, 6).expect("partition");

    assert_eq!(partition.nelems(), [100; 6]);
    for (panel, expected) in [(6, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]
    {
        let panel = Panel::try_from(panel).unwrap();
        let rank = partition.rank_map().get(ElemIJ::new(5, 5), panel);
        assert_eq!(*rank, expected);
    }
}

#[test]
fn local_ids_start_at_one() {
    let partition = Partition::new(Method::Band, 5, 4).expect("partition");

    for (cell, &lid) in partition.local_ids().cells() {
        let rank = *partition.rank_map().get(cell.coord, cell.panel);
        assert!(lid >= 1);
        assert!(lid <= partition.nelems()[rank as usize]);
    }
}

#[test]
fn elem_coords_follow_local_ids() {
    let partition = Partition::new(Method::Sfc, 4, 5).expect("partition");

    for rank in 0..partition.nproc() {
        let coords = partition.elem_coords(rank).expect("coords");
        assert_eq!(coords.len(), partition.nelems()[rank as usize] as usize);

        for (index, cell) in coords.iter().enumerate() {
            let owner = *partition.rank_map().get(cell.coord, cell.panel);
            let lid = *partition.local_ids().get(cell.coord, cell.panel);
            assert_eq!(owner, rank);
            assert_eq!(lid as usize, index + 1);
        }
    }
}

#[test]
fn validation() {
    assert_eq!(
        Partition::new(Method::Band, 3, 55),
        Err(PartitionError::NprocTooLarge(55))
    );
    assert_eq!(
        Partition::new(Method::Band, 3, 0),
        Err(PartitionError::NprocTooSmall(0))
    );
}

// The two strategies agree on sizes, never on layout authority: both must
// balance to within one element.
#[test]
fn strategies_balance() {
    for nproc in [1, 4, 9, 16] {
        let sfc = Partition::new(Method::Sfc, 6, nproc).expect("sfc");
        let band = Partition::new(Method::Band, 6, nproc).expect("band");

        for partition in [sfc, band] {
            let nelems = partition.nelems();
            assert_eq!(nelems.iter().sum::<u32>(), 216);
            let max = nelems.iter().max().unwrap();
            let min = nelems.iter().min().unwrap();
            assert!(max - min <= 1);
        }
    }
}

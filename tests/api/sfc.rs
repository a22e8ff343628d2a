use cubo::{error::PartitionError, sfc};

#[test]
fn panel_curve_endpoints() {
    let curve = sfc::panel_curve(4).expect("curve");

    assert_eq!(curve.side(), 4);
    assert_eq!(curve.get(1, 1), 1);
    assert_eq!(curve.get(4, 1), 16);
}

#[test]
fn unfactorable_ne() {
    assert_eq!(sfc::panel_curve(7), Err(PartitionError::UnfactorableNe(7)));
    assert_eq!(
        sfc::global_curve(22),
        Err(PartitionError::UnfactorableNe(22))
    );
}

#[test]
fn global_curve_covers_the_cube() {
    let gid = sfc::global_curve(6).expect("curve");
    let mut seen = vec![false; 6 * 6 * 6];

    for (_, &index) in gid.cells() {
        seen[(index - 1) as usize] = true;
    }
    assert!(seen.iter().all(|&cell| cell));
}

#[test]
fn matrix_transforms() {
    let curve = sfc::panel_curve(2).expect("curve");

    assert_eq!(curve.inv_x().get(1, 1), curve.get(2, 1));
    assert_eq!(curve.inv_y().get(1, 1), curve.get(1, 2));
    assert_eq!(curve.rot(2).get(1, 1), curve.get(2, 2));
}

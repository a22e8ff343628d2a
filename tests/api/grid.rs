use cubo::{CubeGrid, ElemIJ, GaussIJ, Panel, Rotation};

fn grid(ne: u32) -> CubeGrid {
    CubeGrid::new(ne).expect("valid grid")
}

#[test]
fn interior_is_identity() {
    let nbr = grid(6)
        .elem_neighbor(ElemIJ::new(3, 4), Panel::try_from(2).unwrap())
        .expect("interior");

    assert_eq!(nbr.coord, ElemIJ::new(3, 4));
    assert_eq!(u8::from(nbr.panel), 2);
    assert_eq!(nbr.rotation, Rotation::Identity);
}

#[test]
fn eastward_crossing() {
    let nbr = grid(6)
        .elem_neighbor(ElemIJ::new(7, 3), Panel::try_from(1).unwrap())
        .expect("east neighbor");

    assert_eq!(nbr.coord, ElemIJ::new(1, 3));
    assert_eq!(u8::from(nbr.panel), 2);
    assert_eq!(nbr.rotation, Rotation::Identity);
}

#[test]
fn cap_crossing_rotates() {
    let nbr = grid(6)
        .elem_neighbor(ElemIJ::new(1, 7), Panel::try_from(2).unwrap())
        .expect("north neighbor");

    assert_eq!(nbr.coord, ElemIJ::new(6, 1));
    assert_eq!(u8::from(nbr.panel), 6);
    assert_eq!(nbr.rotation, Rotation::ThreeQuarter);
}

#[test]
fn corners_are_undefined() {
    let grid = grid(6);
    for panel in Panel::iter() {
        assert!(grid.elem_neighbor(ElemIJ::new(0, 0), panel).is_none());
        assert!(grid.elem_neighbor(ElemIJ::new(7, 7), panel).is_none());
        assert!(grid.elem_neighbor(ElemIJ::new(0, 7), panel).is_none());
        assert!(grid.elem_neighbor(ElemIJ::new(7, 0), panel).is_none());
    }
}

#[test]
fn quadrature_crossing() {
    let nbr = grid(6)
        .gauss_neighbor(
            4,
            GaussIJ::new(8, 1),
            ElemIJ::new(6, 3),
            Panel::try_from(1).unwrap(),
        )
        .expect("east neighbor");

    assert_eq!(nbr.point, GaussIJ::new(4, 1));
    assert_eq!(nbr.elem, ElemIJ::new(1, 3));
    assert_eq!(u8::from(nbr.panel), 2);
}

#[test]
fn quadrature_corner_is_undefined() {
    let nbr = grid(6).gauss_neighbor(
        4,
        GaussIJ::new(0, 0),
        ElemIJ::new(1, 1),
        Panel::try_from(1).unwrap(),
    );
    assert!(nbr.is_none());
}

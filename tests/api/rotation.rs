use cubo::Rotation;

#[test]
fn apply() {
    assert_eq!(Rotation::Identity.apply(6, 2, 3), (2, 3));
    assert_eq!(Rotation::Quarter.apply(6, 2, 3), (3, 5));
    assert_eq!(Rotation::Half.apply(6, 2, 3), (5, 4));
    assert_eq!(Rotation::ThreeQuarter.apply(6, 2, 3), (4, 2));
}

#[test]
fn compose_wraps() {
    for r1 in Rotation::iter() {
        for r2 in Rotation::iter() {
            let turns = (r1.turns() + r2.turns()) % 4;
            assert_eq!(r1.compose(r2).turns(), turns);
        }
    }
}

#[test]
fn quotient() {
    assert_eq!(cubo::quotient(3, -5), -2);
    assert_eq!(cubo::quotient(3, 6), 2);
}

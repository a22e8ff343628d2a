use cubo::Panel;

#[test]
fn try_from() {
    assert!(Panel::try_from(0).is_err());
    assert!(Panel::try_from(1).is_ok());
    assert!(Panel::try_from(6).is_ok());
    assert!(Panel::try_from(7).is_err());
}

#[test]
fn iter() {
    let panels: Vec<u8> = Panel::iter().map(u8::from).collect();
    assert_eq!(panels, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn belt_and_caps() {
    assert!(Panel::try_from(1).unwrap().is_equatorial());
    assert!(Panel::try_from(4).unwrap().is_equatorial());
    assert!(Panel::try_from(5).unwrap().is_cap());
    assert!(Panel::try_from(6).unwrap().is_cap());
}

#[test]
fn display() {
    assert_eq!(Panel::try_from(3).unwrap().to_string(), "3");
}

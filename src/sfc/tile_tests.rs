use super::*;

fn rows(square: &Square) -> Vec<Vec<i32>> {
    #[allow(clippy::cast_possible_wrap)]
    let n = square.side() as i32;
    (1..=n)
        .map(|i| (1..=n).map(|j| square.get(i, j)).collect())
        .collect()
}

#[test]
fn rot_quarter_turns() {
    let arr = Square::from_rows([[1, 2], [3, 4]]);

    assert_eq!(rows(&arr.rot(1)), [[2, 4], [1, 3]]);
    assert_eq!(rows(&arr.rot(2)), [[4, 3], [2, 1]]);
    assert_eq!(rows(&arr.rot(3)), [[3, 1], [4, 2]]);

    let arr = Square::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

    assert_eq!(rows(&arr.rot(1)), [[3, 6, 9], [2, 5, 8], [1, 4, 7]]);
    assert_eq!(rows(&arr.rot(2)), [[9, 8, 7], [6, 5, 4], [3, 2, 1]]);
    assert_eq!(rows(&arr.rot(3)), [[7, 4, 1], [8, 5, 2], [9, 6, 3]]);
}

#[test]
fn flips() {
    let arr = Square::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

    assert_eq!(rows(&arr.inv_x()), [[7, 8, 9], [4, 5, 6], [1, 2, 3]]);
    assert_eq!(rows(&arr.inv_y()), [[3, 2, 1], [6, 5, 4], [9, 8, 7]]);
}

#[test]
fn hilbert_orientations() {
    let tiles = BaseTiles::new();

    assert_eq!(rows(tiles.get(2, 0)), [[1, 2], [4, 3]]);
    assert_eq!(rows(tiles.get(2, 1)), [[1, 4], [2, 3]]);
    assert_eq!(rows(tiles.get(2, 2)), [[3, 2], [4, 1]]);
    assert_eq!(rows(tiles.get(2, 3)), [[3, 4], [2, 1]]);
}

// Every orientation of every tile is a self-avoiding path with the entry
// on the main diagonal and the exit on the anti-diagonal, as its
// orientation index claims.
#[test]
fn orientation_endpoints() {
    let tiles = BaseTiles::new();

    for factor in [2, 3, 5] {
        for orientation in 0..4 {
            let tile = tiles.get(factor, orientation);
            let positions = tile.positions();
            #[allow(clippy::cast_possible_wrap)]
            let n = tile.side() as i32;

            for pair in positions.windows(2) {
                let (di, dj) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
                assert_eq!(di.abs() + dj.abs(), 1, "factor {factor}");
            }

            let entry = positions[0];
            let exit = positions[positions.len() - 1];
            let expected_entry =
                if orientation >= 2 { (n, n) } else { (1, 1) };
            let expected_exit =
                if orientation % 2 == 1 { (1, n) } else { (n, 1) };

            assert_eq!(entry, expected_entry, "factor {factor}");
            assert_eq!(exit, expected_exit, "factor {factor}");
            assert_eq!(
                orientation_index(orientation >= 2, orientation % 2 == 1),
                orientation
            );
        }
    }
}

use super::*;

#[test]
fn opposite_sides() {
    assert_eq!(Piece::Black.opposite(), Piece::White);
    assert_eq!(Piece::White.opposite(), Piece::Black);
}

#[test]
#[should_panic]
fn opposite_of_empty_panics() {
    let _ = Piece::Empty.opposite();
}

#[test]
fn square_round_trips() {
    assert_eq!(sq(0, 0), Some(0));
    assert_eq!(sq(7, 7), Some(63));
    assert_eq!(sq(8, 0), None);
    assert_eq!(sq(0, -1), None);

    for s in 0..64u8 {
        assert_eq!(sq(file_of(s), rank_of(s)), Some(s));
        assert_eq!(coord_to_sq(&sq_to_coord(s)), Some(s));
    }
    assert_eq!(sq_to_coord(0), "a1");
    assert_eq!(sq_to_coord(63), "h8");
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
    assert_eq!(coord_to_sq("a"), None);
}

#[test]
fn directions_pair_with_opposites() {
    for dir in 0..8 {
        let (df, dr) = DIRS[dir];
        let (of, or) = DIRS[opposite_dir(dir)];
        assert_eq!((df, dr), (-of, -or));
        assert_eq!(opposite_dir(opposite_dir(dir)), dir);
    }
}

#[test]
fn move_dest_steps_and_falls_off() {
    let a1 = coord_to_sq("a1").unwrap();
    // direction 1 is (+1, +1)
    assert_eq!(move_dest(a1, 1, 3), coord_to_sq("d4"));
    assert_eq!(move_dest(a1, 1, 8), None);
    assert_eq!(move_dest(a1, 4, 1), None); // off the bottom
}

#[test]
fn direction_between_requires_a_line() {
    let d4 = coord_to_sq("d4").unwrap();
    assert_eq!(direction_between(d4, coord_to_sq("d8").unwrap()), Some(0));
    assert_eq!(direction_between(d4, coord_to_sq("h8").unwrap()), Some(1));
    assert_eq!(direction_between(d4, coord_to_sq("d1").unwrap()), Some(4));
    assert_eq!(direction_between(d4, coord_to_sq("a4").unwrap()), Some(6));
    // knight-shaped offsets share no line
    assert_eq!(direction_between(d4, coord_to_sq("e6").unwrap()), None);
    assert_eq!(direction_between(d4, d4), None);
}

#[test]
fn adjacency_counts() {
    assert_eq!(adjacent(coord_to_sq("a1").unwrap()).count(), 3);
    assert_eq!(adjacent(coord_to_sq("a4").unwrap()).count(), 5);
    assert_eq!(adjacent(coord_to_sq("d4").unwrap()).count(), 8);
}

#[test]
fn move_length_is_chebyshev() {
    let mv = |a: &str, b: &str| Move::new(coord_to_sq(a).unwrap(), coord_to_sq(b).unwrap());
    assert_eq!(mv("a1", "a4").length(), 3);
    assert_eq!(mv("a1", "d1").length(), 3);
    assert_eq!(mv("a1", "d4").length(), 3);
    assert_eq!(mv("f3", "d5").length(), 2);
}

#[test]
fn move_display_and_equality() {
    let mv = Move::new(coord_to_sq("f3").unwrap(), coord_to_sq("d5").unwrap());
    assert_eq!(mv.to_string(), "f3-d5");
    assert_eq!(mv.capture().to_string(), "f3-d5");
    // the capture flag participates in equality
    assert_ne!(mv, mv.capture());
    assert_eq!(mv.capture(), mv.capture());
}

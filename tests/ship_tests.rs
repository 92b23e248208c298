use armada::{build_ship, Orientation, Position, Ship, ShipError, ShipKind};
use std::collections::HashSet;

fn coords(ship: &Ship) -> Vec<(i32, i32)> {
    ship.cells().iter().map(|p| (p.row(), p.column())).collect()
}

#[test]
fn test_orientation_from_char() {
    assert_eq!(Orientation::from_char('n'), Orientation::North);
    assert_eq!(Orientation::from_char('s'), Orientation::South);
    assert_eq!(Orientation::from_char('e'), Orientation::East);
    assert_eq!(Orientation::from_char('o'), Orientation::West);
    assert_eq!(Orientation::from_char('w'), Orientation::Unknown);
    assert_eq!(Orientation::from_char('N'), Orientation::Unknown);
    for o in Orientation::ALL {
        assert_eq!(Orientation::from_char(o.as_char()), o);
    }
}

#[test]
fn test_straight_hulls() -> Result<(), ShipError> {
    let frigate = Ship::new(ShipKind::Frigate, Orientation::North, Position::new(1, 2))?;
    assert_eq!(coords(&frigate), vec![(1, 2), (2, 2), (3, 2), (4, 2)]);

    let carrack = Ship::new(ShipKind::Carrack, Orientation::East, Position::new(5, 5))?;
    assert_eq!(coords(&carrack), vec![(5, 5), (5, 6), (5, 7)]);

    let sloop = Ship::new(ShipKind::Sloop, Orientation::West, Position::new(9, 9))?;
    assert_eq!(coords(&sloop), vec![(9, 9)]);
    Ok(())
}

#[test]
fn test_opposite_orientations_share_straight_shape() -> Result<(), ShipError> {
    let anchor = Position::new(3, 3);
    let north = Ship::new(ShipKind::Caravel, Orientation::North, anchor)?;
    let south = Ship::new(ShipKind::Caravel, Orientation::South, anchor)?;
    assert_eq!(north.cells(), south.cells());

    let east = Ship::new(ShipKind::Frigate, Orientation::East, anchor)?;
    let west = Ship::new(ShipKind::Frigate, Orientation::West, anchor)?;
    assert_eq!(east.cells(), west.cells());
    Ok(())
}

#[test]
fn test_galleon_east_footprint() -> Result<(), ShipError> {
    let galleon = Ship::new(ShipKind::Galleon, Orientation::East, Position::new(2, 2))?;
    let cells: HashSet<(i32, i32)> = coords(&galleon).into_iter().collect();
    let expected: HashSet<(i32, i32)> =
        [(2, 2), (3, 0), (3, 1), (3, 2), (4, 2)].into_iter().collect();
    assert_eq!(cells, expected);
    assert_eq!(galleon.size(), 5);
    Ok(())
}

#[test]
fn test_galleon_footprints_per_orientation() -> Result<(), ShipError> {
    let anchor = Position::new(0, 5);
    let expected = [
        (Orientation::North, vec![(0, 5), (0, 6), (0, 7), (1, 6), (2, 6)]),
        (Orientation::South, vec![(0, 5), (1, 5), (2, 4), (2, 5), (2, 6)]),
        (Orientation::East, vec![(0, 5), (1, 3), (1, 4), (1, 5), (2, 5)]),
        (Orientation::West, vec![(0, 5), (1, 5), (1, 6), (1, 7), (2, 5)]),
    ];
    for (orientation, cells) in expected {
        let galleon = Ship::new(ShipKind::Galleon, orientation, anchor)?;
        assert_eq!(coords(&galleon), cells, "{:?}", orientation);
    }
    Ok(())
}

#[test]
fn test_unknown_orientation_is_rejected() {
    for kind in ShipKind::ALL {
        let err = Ship::new(kind, Orientation::Unknown, Position::new(0, 0)).unwrap_err();
        assert_eq!(err, ShipError::InvalidOrientation { kind });
    }
}

#[test]
fn test_factory() {
    let ship = build_ship("galleon", Orientation::North, Position::new(0, 0))
        .unwrap()
        .unwrap();
    assert_eq!(ship.kind(), ShipKind::Galleon);
    assert_eq!(ship.category(), "Galleon");

    assert!(build_ship("submarine", Orientation::North, Position::new(0, 0))
        .unwrap()
        .is_none());
    // keys are case-sensitive
    assert!(build_ship("Galleon", Orientation::North, Position::new(0, 0))
        .unwrap()
        .is_none());
    // unknown kind wins over unknown orientation
    assert!(build_ship("raft", Orientation::Unknown, Position::new(0, 0))
        .unwrap()
        .is_none());
    assert!(build_ship("frigate", Orientation::Unknown, Position::new(0, 0)).is_err());
}

#[test]
fn test_bounding_box() -> Result<(), ShipError> {
    let galleon = Ship::new(ShipKind::Galleon, Orientation::South, Position::new(4, 4))?;
    assert_eq!(galleon.top_most(), 4);
    assert_eq!(galleon.bottom_most(), 6);
    assert_eq!(galleon.left_most(), 3);
    assert_eq!(galleon.right_most(), 5);
    Ok(())
}

#[test]
fn test_shoot_until_sunk() -> Result<(), ShipError> {
    let mut caravel = Ship::new(ShipKind::Caravel, Orientation::East, Position::new(1, 1))?;
    assert!(caravel.still_floating());

    caravel.shoot(&Position::new(0, 0));
    assert!(caravel.still_floating());
    assert!(caravel.cells().iter().all(|c| !c.is_hit()));

    caravel.shoot(&Position::new(1, 1));
    assert!(caravel.still_floating());
    caravel.shoot(&Position::new(1, 2));
    assert!(!caravel.still_floating());
    Ok(())
}

#[test]
fn test_occupies_and_proximity() -> Result<(), ShipError> {
    let carrack = Ship::new(ShipKind::Carrack, Orientation::North, Position::new(2, 2))?;
    assert!(carrack.occupies(&Position::new(4, 2)));
    assert!(!carrack.occupies(&Position::new(5, 2)));

    assert!(carrack.too_close_to_position(&Position::new(5, 3)));
    assert!(!carrack.too_close_to_position(&Position::new(6, 2)));

    let touching = Ship::new(ShipKind::Sloop, Orientation::North, Position::new(1, 1))?;
    let apart = Ship::new(ShipKind::Caravel, Orientation::North, Position::new(2, 4))?;
    assert!(carrack.too_close_to(&touching));
    assert!(touching.too_close_to(&carrack));
    assert!(!carrack.too_close_to(&apart));
    Ok(())
}

#[test]
fn test_display() -> Result<(), ShipError> {
    let ship = Ship::new(ShipKind::Frigate, Orientation::West, Position::new(3, 1))?;
    assert_eq!(ship.to_string(), "[Frigate o row 3 column 1]");
    Ok(())
}

#[test]
fn test_hull_past_coordinate_range() {
    let err = Ship::new(ShipKind::Caravel, Orientation::North, Position::new(i32::MAX, 0));
    assert_eq!(err, Err(ShipError::CoordinateOverflow { kind: ShipKind::Caravel }));

    let err = build_ship("frigate", Orientation::East, Position::new(0, i32::MAX - 2));
    assert_eq!(err, Err(ShipError::CoordinateOverflow { kind: ShipKind::Frigate }));

    // the east galleon reaches back two columns
    let err = Ship::new(ShipKind::Galleon, Orientation::East, Position::new(0, i32::MIN + 1));
    assert_eq!(err, Err(ShipError::CoordinateOverflow { kind: ShipKind::Galleon }));

    let corner = Ship::new(ShipKind::Sloop, Orientation::North, (i32::MAX, i32::MAX).into());
    assert!(corner.is_ok());
}

#[test]
fn test_proximity_at_coordinate_extremes() -> Result<(), ShipError> {
    let far = Ship::new(ShipKind::Sloop, Orientation::North, Position::new(i32::MIN, 0))?;
    let near_origin = Ship::new(ShipKind::Caravel, Orientation::East, Position::new(0, 0))?;
    assert!(!far.too_close_to(&near_origin));
    assert!(!near_origin.too_close_to_position(&Position::new(i32::MIN, 1)));
    Ok(())
}

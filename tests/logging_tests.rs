use armada::{init_logging, init_logging_with, Fleet, Orientation, Position, Ship, ShipKind};
use log::LevelFilter;

#[test]
fn test_logging_installs_once() {
    init_logging_with(LevelFilter::Trace);
    assert_eq!(log::max_level(), LevelFilter::Trace);

    // later installs are ignored
    init_logging();
    init_logging_with(LevelFilter::Error);
    assert_eq!(log::max_level(), LevelFilter::Trace);

    let mut fleet = Fleet::new();
    let sloop = Ship::new(ShipKind::Sloop, Orientation::North, Position::new(0, 0)).unwrap();
    assert!(fleet.add_ship(sloop).is_ok());
}

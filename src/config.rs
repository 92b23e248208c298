//! Board and fleet bounds.

use crate::common::RulesError;
use crate::ship::ShipKind;

pub const BOARD_SIZE: i32 = 10;
/// Largest board side [`Rules::checked`] accepts.
pub const MAX_BOARD_SIZE: i32 = 100;
pub const FLEET_SIZE: usize = 10;

/// Standard fleet composition, largest ships first.
pub const STANDARD_FLEET: [ShipKind; 11] = [
    ShipKind::Galleon,
    ShipKind::Frigate,
    ShipKind::Carrack,
    ShipKind::Carrack,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Sloop,
    ShipKind::Sloop,
    ShipKind::Sloop,
    ShipKind::Sloop,
];

/// Board and fleet bounds a [`Fleet`](crate::Fleet) enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Side of the square board; cells are indexed `0..board_size`.
    pub board_size: i32,
    /// Fleet capacity bound checked by `Fleet::add_ship`.
    pub fleet_size: usize,
}

impl Rules {
    pub const fn new(board_size: i32, fleet_size: usize) -> Self {
        Self {
            board_size,
            fleet_size,
        }
    }

    /// Like [`Rules::new`], refusing a board side outside
    /// `1..=MAX_BOARD_SIZE`.
    pub fn checked(board_size: i32, fleet_size: usize) -> Result<Self, RulesError> {
        if !(1..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(RulesError::BoardSize { size: board_size });
        }
        Ok(Self::new(board_size, fleet_size))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(BOARD_SIZE, FLEET_SIZE)
    }
}

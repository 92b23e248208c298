//! Common types for the engine: errors and shot outcomes.

use core::fmt;

use crate::ship::{Ship, ShipKind};

/// Classification of a single call to [`Game::fire`](crate::Game::fire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Target lies outside the accepted shot range.
    Invalid,
    /// Target was already fired at in this game.
    Repeated,
    /// Valid new shot that hit no ship.
    Miss,
    /// Hit a ship that is still floating.
    Hit,
    /// Hit and sank the ship at this index in the fleet.
    Sunk(usize),
}

impl ShotOutcome {
    /// Whether the shot landed on a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }

    /// Whether the shot was recorded in the shot history.
    pub fn is_recorded(&self) -> bool {
        !matches!(self, ShotOutcome::Invalid | ShotOutcome::Repeated)
    }
}

/// Hard failures while constructing a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// The orientation does not name a compass direction.
    InvalidOrientation { kind: ShipKind },
    /// Part of the hull would lie beyond the `i32` coordinate range.
    CoordinateOverflow { kind: ShipKind },
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidOrientation { kind } => {
                write!(f, "invalid orientation for the {}", kind.category())
            }
            ShipError::CoordinateOverflow { kind } => {
                write!(f, "the {} hull runs past the coordinate range", kind.category())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}

/// Reason a fleet refused a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The fleet already holds more ships than its capacity bound allows.
    FleetFull,
    /// Part of the hull lies outside the board.
    OutOfBounds,
    /// The hull overlaps or touches a ship already in the fleet.
    TooClose,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::FleetFull => write!(f, "fleet is full"),
            Rejection::OutOfBounds => write!(f, "ship lies outside the board"),
            Rejection::TooClose => write!(f, "ship is too close to another ship"),
        }
    }
}

/// Returned by [`Fleet::add_ship`](crate::Fleet::add_ship) when the ship is
/// refused. The ship is handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementError {
    reason: Rejection,
    ship: Ship,
}

impl PlacementError {
    pub(crate) fn new(reason: Rejection, ship: Ship) -> Self {
        Self { reason, ship }
    }

    pub fn reason(&self) -> Rejection {
        self.reason
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not place {}: {}", self.ship, self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// Refused board settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// The board side is not in `1..=MAX_BOARD_SIZE`.
    BoardSize { size: i32 },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::BoardSize { size } => write!(
                f,
                "board size {} is outside 1..={}",
                size,
                crate::config::MAX_BOARD_SIZE
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RulesError {}

/// Errors returned while building fleets automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// No acceptable placement was found for a ship of this kind.
    UnableToPlaceShip { kind: ShipKind },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::UnableToPlaceShip { kind } => {
                write!(f, "unable to place a {}", kind.category())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

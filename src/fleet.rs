//! Fleet of placed ships, enforcing board bounds and spacing on insertion.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::common::{FleetError, PlacementError, Rejection};
use crate::config::Rules;
use crate::position::Position;
use crate::ship::{Orientation, Ship, ShipKind};

const RANDOM_ATTEMPTS: usize = 100;

/// Ordered collection of ships accepted onto one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    rules: Rules,
    ships: Vec<Ship>,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fleet {
    /// Create an empty fleet on a standard board.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Create an empty fleet with explicit board and capacity bounds.
    pub fn with_rules(rules: Rules) -> Self {
        Fleet {
            rules,
            ships: Vec::new(),
        }
    }

    /// Build a fleet by placing every kind in `kinds` at random.
    pub fn random<R: Rng>(
        rng: &mut R,
        rules: Rules,
        kinds: &[ShipKind],
    ) -> Result<Self, FleetError> {
        let mut fleet = Fleet::with_rules(rules);
        for &kind in kinds {
            let ship = fleet.random_placement(rng, kind)?;
            fleet
                .add_ship(ship)
                .map_err(|_| FleetError::UnableToPlaceShip { kind })?;
        }
        Ok(fleet)
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Ships in insertion order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Try to add `ship` to the fleet.
    ///
    /// The capacity check is `len() <= fleet_size`, so a fleet accepts one
    /// ship beyond `fleet_size` before reporting [`Rejection::FleetFull`].
    /// On success every hull cell is marked occupied.
    pub fn add_ship(&mut self, mut ship: Ship) -> Result<(), PlacementError> {
        let rejection = if self.ships.len() > self.rules.fleet_size {
            Some(Rejection::FleetFull)
        } else if !self.is_inside_board(&ship) {
            Some(Rejection::OutOfBounds)
        } else if self.collision_risk(&ship) {
            Some(Rejection::TooClose)
        } else {
            None
        };
        if let Some(reason) = rejection {
            debug!("rejected {}: {}", ship, reason);
            return Err(PlacementError::new(reason, ship));
        }
        ship.occupy();
        debug!("accepted {}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Ships whose category matches exactly, in insertion order.
    pub fn ships_like(&self, category: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|ship| ship.category() == category)
            .collect()
    }

    /// Ships with at least one unhit cell.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|ship| ship.still_floating()).collect()
    }

    /// First ship, in insertion order, occupying `pos`.
    pub fn ship_at(&self, pos: &Position) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(pos))
    }

    /// Like [`ship_at`](Self::ship_at), also giving the ship's index.
    pub(crate) fn ship_at_mut(&mut self, pos: &Position) -> Option<(usize, &mut Ship)> {
        self.ships
            .iter_mut()
            .enumerate()
            .find(|(_, ship)| ship.occupies(pos))
    }

    /// Find a placement for `kind` that [`add_ship`](Self::add_ship) would
    /// accept. Tries random anchors first, then scans the whole board.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<Ship, FleetError> {
        let size = self.rules.board_size;
        if size > 0 {
            for _ in 0..RANDOM_ATTEMPTS {
                let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
                let anchor = Position::new(rng.random_range(0..size), rng.random_range(0..size));
                if let Some(ship) = self.candidate(kind, orientation, anchor) {
                    return Ok(ship);
                }
            }
        }
        for row in 0..size {
            for column in 0..size {
                for orientation in Orientation::ALL {
                    let anchor = Position::new(row, column);
                    if let Some(ship) = self.candidate(kind, orientation, anchor) {
                        return Ok(ship);
                    }
                }
            }
        }
        Err(FleetError::UnableToPlaceShip { kind })
    }

    fn candidate(
        &self,
        kind: ShipKind,
        orientation: Orientation,
        anchor: Position,
    ) -> Option<Ship> {
        let ship = Ship::new(kind, orientation, anchor).ok()?;
        (self.is_inside_board(&ship) && !self.collision_risk(&ship)).then_some(ship)
    }

    fn is_inside_board(&self, ship: &Ship) -> bool {
        let size = self.rules.board_size;
        ship.left_most() >= 0
            && ship.right_most() < size
            && ship.top_most() >= 0
            && ship.bottom_most() < size
    }

    fn collision_risk(&self, ship: &Ship) -> bool {
        self.ships.iter().any(|placed| placed.too_close_to(ship))
    }
}

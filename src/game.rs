//! Shot resolution and bookkeeping for one game against a fleet.

use alloc::vec::Vec;

use log::debug;

use crate::{common::ShotOutcome, fleet::Fleet, position::Position, ship::Ship};

/// Snapshot of the shot counters of a [`Game`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub shots: usize,
    pub hits: usize,
    pub invalid: usize,
    pub repeated: usize,
    pub sunk: usize,
    pub remaining: usize,
}

/// Shot resolution against a fleet.
///
/// `fire` is the only path that touches the shot history and counters.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: Fleet,
    shots: Vec<Position>,
    invalid: usize,
    repeated: usize,
    hits: usize,
    sunk: usize,
}

impl Game {
    /// Start a game against `fleet` with no shots fired.
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            invalid: 0,
            repeated: 0,
            hits: 0,
            sunk: 0,
        }
    }

    /// The fleet being fired upon.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Give back the fleet, ending the game.
    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    /// Fire at `pos` and return the ship this shot sank, if any.
    pub fn fire(&mut self, pos: Position) -> Option<&Ship> {
        match self.resolve(pos) {
            ShotOutcome::Sunk(index) => self.fleet.ships().get(index),
            _ => None,
        }
    }

    /// Fire at `pos` and classify the shot.
    ///
    /// Out-of-range and repeated shots only bump their counters. Every other
    /// shot is appended to the history before the fleet is consulted, so
    /// misses are recorded too.
    pub fn resolve(&mut self, pos: Position) -> ShotOutcome {
        if !self.valid_shot(&pos) {
            self.invalid += 1;
            debug!("invalid shot at {}", pos);
            return ShotOutcome::Invalid;
        }
        if self.repeated_shot(&pos) {
            self.repeated += 1;
            debug!("repeated shot at {}", pos);
            return ShotOutcome::Repeated;
        }
        self.shots.push(pos);

        let Some((index, ship)) = self.fleet.ship_at_mut(&pos) else {
            debug!("miss at {}", pos);
            return ShotOutcome::Miss;
        };
        ship.shoot(&pos);
        self.hits += 1;
        if ship.still_floating() {
            debug!("hit {} at {}", ship, pos);
            ShotOutcome::Hit
        } else {
            self.sunk += 1;
            debug!("sank {}", ship);
            ShotOutcome::Sunk(index)
        }
    }

    /// Valid shots in the order fired.
    pub fn shots(&self) -> &[Position] {
        &self.shots
    }

    pub fn invalid_shots(&self) -> usize {
        self.invalid
    }

    pub fn repeated_shots(&self) -> usize {
        self.repeated
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn sunk_ships(&self) -> usize {
        self.sunk
    }

    /// Ships still floating.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.floating_ships().len()
    }

    /// True once every ship in the fleet is sunk.
    pub fn is_over(&self) -> bool {
        self.remaining_ships() == 0
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            shots: self.shots.len(),
            hits: self.hits,
            invalid: self.invalid,
            repeated: self.repeated,
            sunk: self.sunk,
            remaining: self.remaining_ships(),
        }
    }

    // Accepts rows and columns up to and including `board_size`, one wider
    // than the fleet's placement bound.
    fn valid_shot(&self, pos: &Position) -> bool {
        let size = self.fleet.rules().board_size;
        pos.row() >= 0 && pos.row() <= size && pos.column() >= 0 && pos.column() <= size
    }

    fn repeated_shot(&self, pos: &Position) -> bool {
        self.shots.iter().any(|shot| shot == pos)
    }
}

//! Commonly used types and utilities for ease of import.

pub use crate::{build_ship, Fleet, Game, Orientation, Position, Rules, Ship, ShipKind, ShotOutcome};

#[cfg(feature = "std")]
pub use crate::{
    cli::{Session, Tokens},
    init_logging,
};

//! Ship definitions: orientations, the five hull kinds and their shapes.

use alloc::vec::Vec;
use core::fmt;

use log::trace;

use crate::common::ShipError;
use crate::position::Position;

/// Compass direction a ship is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    North,
    South,
    East,
    West,
    /// Unrecognised input; never a valid placement.
    Unknown,
}

impl Orientation {
    /// Parse the single-character form. Anything unrecognised is `Unknown`.
    pub fn from_char(ch: char) -> Self {
        match ch {
            'n' => Orientation::North,
            's' => Orientation::South,
            'e' => Orientation::East,
            'o' => Orientation::West,
            _ => Orientation::Unknown,
        }
    }

    /// The character this orientation is parsed from.
    pub fn as_char(&self) -> char {
        match self {
            Orientation::North => 'n',
            Orientation::South => 's',
            Orientation::East => 'e',
            Orientation::West => 'o',
            Orientation::Unknown => 'u',
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Orientation::Unknown
    }

    /// The four placeable orientations.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// Galleon hulls as (row, column) offsets from the anchor, one table per
// orientation.
const GALLEON_NORTH: [(i32, i32); 5] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const GALLEON_SOUTH: [(i32, i32); 5] = [(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)];
const GALLEON_EAST: [(i32, i32); 5] = [(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)];
const GALLEON_WEST: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)];

/// The closed set of hull kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    /// Length 1.
    Sloop,
    /// Length 2.
    Caravel,
    /// Length 3.
    Carrack,
    /// Length 4.
    Frigate,
    /// Five cells in a T/L pentomino.
    Galleon,
}

impl ShipKind {
    /// All kinds, largest first.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Galleon,
        ShipKind::Frigate,
        ShipKind::Carrack,
        ShipKind::Caravel,
        ShipKind::Sloop,
    ];

    /// Look up a kind by its factory key. Keys are case-sensitive.
    pub fn from_name(name: &str) -> Option<ShipKind> {
        ShipKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Factory key used by [`build_ship`].
    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Sloop => "sloop",
            ShipKind::Caravel => "caravel",
            ShipKind::Carrack => "carrack",
            ShipKind::Frigate => "frigate",
            ShipKind::Galleon => "galleon",
        }
    }

    /// Category reported by [`Ship::category`] and matched by
    /// `Fleet::ships_like`.
    pub fn category(&self) -> &'static str {
        match self {
            ShipKind::Sloop => "Sloop",
            ShipKind::Caravel => "Caravel",
            ShipKind::Carrack => "Carrack",
            ShipKind::Frigate => "Frigate",
            ShipKind::Galleon => "Galleon",
        }
    }

    /// Number of cells in the hull.
    pub fn size(&self) -> usize {
        match self {
            ShipKind::Sloop => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Compute the hull cells anchored at `anchor`.
    ///
    /// Straight kinds only use the orientation to pick an axis: north and
    /// south both run down the rows, east and west both run along the
    /// columns. The galleon uses a fixed table per orientation.
    pub fn hull(
        &self,
        orientation: Orientation,
        anchor: &Position,
    ) -> Result<Vec<Position>, ShipError> {
        if !orientation.is_known() {
            return Err(ShipError::InvalidOrientation { kind: *self });
        }
        let cells: Option<Vec<Position>> = match (self, orientation) {
            (ShipKind::Galleon, orientation) => {
                let table = match orientation {
                    Orientation::North => &GALLEON_NORTH,
                    Orientation::South => &GALLEON_SOUTH,
                    Orientation::East => &GALLEON_EAST,
                    _ => &GALLEON_WEST,
                };
                table.iter().map(|&(dr, dc)| anchor.offset(dr, dc)).collect()
            }
            (kind, Orientation::North | Orientation::South) => {
                (0..kind.size() as i32).map(|i| anchor.offset(i, 0)).collect()
            }
            (kind, _) => (0..kind.size() as i32).map(|i| anchor.offset(0, i)).collect(),
        };
        cells.ok_or(ShipError::CoordinateOverflow { kind: *self })
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// A ship with its hull computed from kind, orientation and anchor.
///
/// The hull is fixed at construction. Every derived query (bounding box,
/// occupancy, floating status) is answered from `cells` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    anchor: Position,
    cells: Vec<Position>,
}

impl Ship {
    /// Build a ship of `kind` at `anchor` facing `orientation`.
    ///
    /// Fails with [`ShipError::InvalidOrientation`] for
    /// [`Orientation::Unknown`], and with [`ShipError::CoordinateOverflow`]
    /// when the hull would leave the `i32` coordinate range. No ship is
    /// created in either case.
    pub fn new(
        kind: ShipKind,
        orientation: Orientation,
        anchor: Position,
    ) -> Result<Self, ShipError> {
        let cells = kind.hull(orientation, &anchor)?;
        trace!("built {} {} at {}", kind, orientation, anchor);
        Ok(Ship {
            kind,
            orientation,
            anchor,
            cells,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Reference position the hull was computed from.
    pub fn anchor(&self) -> &Position {
        &self.anchor
    }

    /// Hull cells in construction order.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn top_most(&self) -> i32 {
        self.cells.iter().map(Position::row).min().unwrap_or(self.anchor.row())
    }

    pub fn bottom_most(&self) -> i32 {
        self.cells.iter().map(Position::row).max().unwrap_or(self.anchor.row())
    }

    pub fn left_most(&self) -> i32 {
        self.cells
            .iter()
            .map(Position::column)
            .min()
            .unwrap_or(self.anchor.column())
    }

    pub fn right_most(&self) -> i32 {
        self.cells
            .iter()
            .map(Position::column)
            .max()
            .unwrap_or(self.anchor.column())
    }

    /// Whether some hull cell has the coordinates of `pos`.
    pub fn occupies(&self, pos: &Position) -> bool {
        self.cells.iter().any(|cell| cell == pos)
    }

    /// True while at least one hull cell is unhit.
    pub fn still_floating(&self) -> bool {
        self.cells.iter().any(|cell| !cell.is_hit())
    }

    /// Whether any cell of `other` touches or overlaps this hull.
    pub fn too_close_to(&self, other: &Ship) -> bool {
        other.cells.iter().any(|pos| self.too_close_to_position(pos))
    }

    /// Whether `pos` touches or overlaps this hull.
    pub fn too_close_to_position(&self, pos: &Position) -> bool {
        self.cells.iter().any(|cell| cell.is_adjacent_to(pos))
    }

    /// Mark the hull cell at `pos` as hit. Does nothing if `pos` is not part
    /// of this ship.
    pub fn shoot(&mut self, pos: &Position) {
        for cell in self.cells.iter_mut().filter(|cell| **cell == *pos) {
            cell.shoot();
        }
    }

    /// Mark every hull cell occupied once the ship is on a board.
    pub(crate) fn occupy(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.occupy();
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.category(), self.orientation, self.anchor)
    }
}

/// Build a ship from its factory key.
///
/// Returns `Ok(None)` when `name` is not one of the [`ShipKind`] keys, and
/// the construction error when the kind is known but the orientation is not.
pub fn build_ship(
    name: &str,
    orientation: Orientation,
    anchor: Position,
) -> Result<Option<Ship>, ShipError> {
    match ShipKind::from_name(name) {
        Some(kind) => Ship::new(kind, orientation, anchor).map(Some),
        None => Ok(None),
    }
}

#![cfg(feature = "std")]

//! Text rendering of boards and fleet listings. Pure projections: nothing
//! here mutates the engine.

use std::fmt::Write;

use crate::{fleet::Fleet, game::Game, position::Position, ship::Ship, ship::ShipKind};

const WATER: char = '.';
pub const SHOT_MARKER: char = 'X';
pub const HULL_MARKER: char = '#';

/// Project `positions` onto a `board_size` x `board_size` grid of `.`,
/// drawing each one as `marker`. Positions off the grid are skipped.
pub fn render_board<'a, I>(positions: I, marker: char, board_size: i32) -> Vec<Vec<char>>
where
    I: IntoIterator<Item = &'a Position>,
{
    let side = board_size.max(0) as usize;
    let mut grid = vec![vec![WATER; side]; side];
    for pos in positions {
        if let (Ok(r), Ok(c)) = (usize::try_from(pos.row()), usize::try_from(pos.column())) {
            if r < side && c < side {
                grid[r][c] = marker;
            }
        }
    }
    grid
}

/// One line per grid row.
pub fn format_board(grid: &[Vec<char>]) -> String {
    let mut out = String::with_capacity(grid.len() * (grid.len() + 1));
    for row in grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Board of every valid shot fired so far.
pub fn valid_shots_board(game: &Game) -> String {
    let size = game.fleet().rules().board_size;
    format_board(&render_board(game.shots(), SHOT_MARKER, size))
}

/// Board of every hull cell in the fleet.
pub fn fleet_board(fleet: &Fleet) -> String {
    let cells = fleet.ships().iter().flat_map(|ship| ship.cells());
    format_board(&render_board(cells, HULL_MARKER, fleet.rules().board_size))
}

fn list_ships<'a>(out: &mut String, ships: impl IntoIterator<Item = &'a Ship>) {
    for ship in ships {
        let _ = writeln!(out, "{}", ship);
    }
}

/// All ships, then floating ships, then ships grouped by category from the
/// largest kind down.
pub fn fleet_status(fleet: &Fleet) -> String {
    let mut out = String::new();
    list_ships(&mut out, fleet.ships());
    list_ships(&mut out, fleet.floating_ships());
    for kind in ShipKind::ALL {
        list_ships(&mut out, fleet.ships_like(kind.category()));
    }
    out
}

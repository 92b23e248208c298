#![cfg(feature = "std")]

//! Interactive text command loop driving a [`Game`].
//!
//! Input is a stream of whitespace-separated tokens. Ships are given as
//! `kind row column orientation`, positions as `row column`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{anyhow, Context};
use log::{debug, info};

use crate::{
    config::Rules,
    fleet::Fleet,
    game::Game,
    position::Position,
    ship::{build_ship, Orientation, Ship},
    ui,
};

/// Shots fired per `salvo` command.
pub const SHOTS_PER_SALVO: usize = 3;
/// Positions checked per ship in probe mode.
pub const PROBES_PER_SHIP: usize = 3;

const GOODBYE: &str = "Fair winds!";

/// Whitespace tokenizer over a buffered reader.
pub struct Tokens<B: BufRead> {
    input: B,
    pending: VecDeque<String>,
}

impl<B: BufRead> Tokens<B> {
    pub fn new(input: B) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token, treating end of input as an error.
    pub fn expect_token(&mut self, what: &str) -> anyhow::Result<String> {
        self.next_token()?
            .ok_or_else(|| anyhow!("unexpected end of input while reading {}", what))
    }

    pub fn expect_i32(&mut self, what: &str) -> anyhow::Result<i32> {
        let token = self.expect_token(what)?;
        token
            .parse()
            .with_context(|| format!("invalid {} '{}'", what, token))
    }
}

/// Commands understood by [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Read a new fleet and start a game against it.
    NewFleet,
    /// List the fleet.
    Status,
    /// Show the fleet's hulls on the board.
    Map,
    /// Fire [`SHOTS_PER_SALVO`] shots.
    Salvo,
    /// Show every valid shot fired.
    Shots,
    Quit,
}

impl Command {
    pub fn parse(word: &str) -> Option<Command> {
        match word {
            "new" => Some(Command::NewFleet),
            "status" => Some(Command::Status),
            "map" => Some(Command::Map),
            "salvo" => Some(Command::Salvo),
            "shots" => Some(Command::Shots),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Read `row column`.
pub fn read_position<B: BufRead>(tokens: &mut Tokens<B>) -> anyhow::Result<Position> {
    let row = tokens.expect_i32("row")?;
    let column = tokens.expect_i32("column")?;
    Ok(Position::new(row, column))
}

/// Read `kind row column orientation` and build the ship.
///
/// An unrecognised kind yields `Ok(None)`. A known kind with an
/// unrecognised orientation is an error.
pub fn read_ship<B: BufRead>(tokens: &mut Tokens<B>) -> anyhow::Result<Option<Ship>> {
    let kind = tokens.expect_token("ship kind")?;
    read_ship_of_kind(&kind, tokens)
}

fn read_ship_of_kind<B: BufRead>(
    kind: &str,
    tokens: &mut Tokens<B>,
) -> anyhow::Result<Option<Ship>> {
    let anchor = read_position(tokens)?;
    let orientation = tokens
        .expect_token("orientation")?
        .chars()
        .next()
        .map_or(Orientation::Unknown, Orientation::from_char);
    let ship = build_ship(kind, orientation, anchor)
        .with_context(|| format!("cannot build {} at {}", kind, anchor))?;
    Ok(ship)
}

/// Read ships until the fleet has taken `fleet_size + 1` of them, reporting
/// each rejection.
pub fn build_fleet<B: BufRead, W: Write>(
    tokens: &mut Tokens<B>,
    rules: Rules,
    out: &mut W,
) -> anyhow::Result<Fleet> {
    let mut fleet = Fleet::with_rules(rules);
    let mut added = 0;
    while added <= rules.fleet_size {
        match read_ship(tokens)? {
            Some(ship) => match fleet.add_ship(ship) {
                Ok(()) => added += 1,
                Err(err) => writeln!(out, "Could not place {}: {}", err.ship(), err.reason())?,
            },
            None => writeln!(out, "Unknown ship!")?,
        }
    }
    writeln!(out, "{} ships added successfully!", added)?;
    info!("fleet ready with {} ships", added);
    Ok(fleet)
}

/// Fire [`SHOTS_PER_SALVO`] shots read from `tokens`, announcing sinkings.
pub fn firing_round<B: BufRead, W: Write>(
    tokens: &mut Tokens<B>,
    game: &mut Game,
    out: &mut W,
) -> anyhow::Result<()> {
    for _ in 0..SHOTS_PER_SALVO {
        let pos = read_position(tokens)?;
        if let Some(ship) = game.fire(pos) {
            writeln!(out, "Sunk a {}!", ship.category())?;
        }
    }
    Ok(())
}

/// Read ships followed by [`PROBES_PER_SHIP`] positions each and report
/// whether the ship occupies each position. Runs until input ends.
pub fn probe<B: BufRead, W: Write>(tokens: &mut Tokens<B>, out: &mut W) -> anyhow::Result<()> {
    while let Some(kind) = tokens.next_token()? {
        let Some(ship) = read_ship_of_kind(&kind, tokens)? else {
            writeln!(out, "Unknown ship!")?;
            continue;
        };
        for _ in 0..PROBES_PER_SHIP {
            let pos = read_position(tokens)?;
            writeln!(out, "{} {}", pos, ship.occupies(&pos))?;
        }
    }
    Ok(())
}

/// State carried between commands: the rules new fleets are built with and
/// the current game, if any.
pub struct Session {
    rules: Rules,
    game: Option<Game>,
}

impl Session {
    pub fn new(rules: Rules) -> Self {
        Self { rules, game: None }
    }

    /// Start with a game already in progress.
    pub fn with_game(game: Game) -> Self {
        Self {
            rules: game.fleet().rules(),
            game: Some(game),
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Process commands until `quit` or end of input.
    pub fn run<B: BufRead, W: Write>(
        &mut self,
        tokens: &mut Tokens<B>,
        out: &mut W,
    ) -> anyhow::Result<()> {
        while let Some(word) = tokens.next_token()? {
            match Command::parse(&word) {
                Some(Command::Quit) => break,
                Some(command) => self.handle(command, tokens, out)?,
                None => writeln!(out, "Unknown command '{}', try again", word)?,
            }
        }
        writeln!(out, "{}", GOODBYE)?;
        Ok(())
    }

    /// Execute a single command, reading its arguments from `tokens`.
    pub fn handle<B: BufRead, W: Write>(
        &mut self,
        command: Command,
        tokens: &mut Tokens<B>,
        out: &mut W,
    ) -> anyhow::Result<()> {
        debug!("command {:?}", command);
        match command {
            Command::NewFleet => {
                let fleet = build_fleet(tokens, self.rules, out)?;
                self.game = Some(Game::new(fleet));
            }
            Command::Status => match &self.game {
                Some(game) => write!(out, "{}", ui::fleet_status(game.fleet()))?,
                None => writeln!(out, "No fleet yet.")?,
            },
            Command::Map => match &self.game {
                Some(game) => write!(out, "{}", ui::fleet_board(game.fleet()))?,
                None => writeln!(out, "No fleet yet.")?,
            },
            Command::Salvo => match &mut self.game {
                Some(game) => {
                    firing_round(tokens, game, out)?;
                    writeln!(
                        out,
                        "Hits: {} Invalid: {} Repeated: {} Remaining: {} ships.",
                        game.hits(),
                        game.invalid_shots(),
                        game.repeated_shots(),
                        game.remaining_ships()
                    )?;
                    if game.is_over() {
                        writeln!(out, "The whole fleet is sunk!")?;
                    }
                }
                None => writeln!(out, "No fleet yet.")?,
            },
            Command::Shots => match &self.game {
                Some(game) => write!(out, "{}", ui::valid_shots_board(game))?,
                None => writeln!(out, "No fleet yet.")?,
            },
            Command::Quit => {}
        }
        Ok(())
    }
}

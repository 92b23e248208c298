use std::io::{self, Write};

use anyhow::Context;
use armada::{
    cli::{self, Session, Tokens},
    init_logging, init_logging_with, Fleet, Game, Rules, BOARD_SIZE, FLEET_SIZE, STANDARD_FLEET,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side of the square board.
    #[arg(long, default_value_t = BOARD_SIZE)]
    board_size: i32,
    /// Fleet capacity bound.
    #[arg(long, default_value_t = FLEET_SIZE)]
    fleet_size: usize,
    /// Log at debug level, ignoring ARMADA_LOG.
    #[arg(long, short)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build fleets and fire salvoes from commands on stdin.
    Play {
        /// Start against a randomly placed standard fleet.
        #[arg(long)]
        random: bool,
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Read ships and report which probed positions they occupy.
    Probe,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging_with(log::LevelFilter::Debug);
    } else {
        init_logging();
    }
    let rules = Rules::checked(cli.board_size, cli.fleet_size).context("invalid --board-size")?;

    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Play {
        random: false,
        seed: None,
    }) {
        Commands::Play { random, seed } => {
            let mut session = if random {
                let mut rng = match seed {
                    Some(s) => SmallRng::seed_from_u64(s),
                    None => SmallRng::from_rng(&mut rand::rng()),
                };
                let fleet = Fleet::random(&mut rng, rules, &STANDARD_FLEET)
                    .context("could not place the standard fleet")?;
                writeln!(out, "{} ships placed at random.", fleet.len())?;
                Session::with_game(Game::new(fleet))
            } else {
                Session::new(rules)
            };
            session.run(&mut tokens, &mut out)?;
        }
        Commands::Probe => cli::probe(&mut tokens, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

use armada::{Fleet, Game, Position, Rules, ShotOutcome, STANDARD_FLEET};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;

/// Fleets retried with a derived seed before giving up.
const PLACEMENT_RETRIES: u64 = 16;

#[derive(Serialize)]
struct Report {
    seed: u64,
    ships: usize,
    shots: usize,
    hits: usize,
    misses: usize,
    sunk: usize,
    remaining: usize,
    /// Number of shots fired when the last ship went down.
    finished_after: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rules = Rules::default();

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut fleet = None;
    for attempt in 0..PLACEMENT_RETRIES {
        match Fleet::random(&mut rng, rules, &STANDARD_FLEET) {
            Ok(placed) => {
                fleet = Some(placed);
                break;
            }
            Err(err) => {
                log::debug!("attempt {}: {}", attempt, err);
                rng = SmallRng::seed_from_u64(seed.wrapping_add(attempt + 1));
            }
        }
    }
    let fleet = fleet.ok_or_else(|| anyhow::anyhow!("could not place a fleet from seed {}", seed))?;

    let mut targets: Vec<Position> = (0..rules.board_size)
        .flat_map(|r| (0..rules.board_size).map(move |c| Position::new(r, c)))
        .collect();
    targets.shuffle(&mut rng);

    let ships = fleet.len();
    let mut game = Game::new(fleet);
    let mut misses = 0;
    let mut finished_after = None;
    for target in targets {
        let outcome = game.resolve(target);
        if outcome.is_recorded() && !outcome.is_hit() {
            misses += 1;
        }
        if matches!(outcome, ShotOutcome::Sunk(_)) && game.is_over() {
            finished_after = Some(game.shots().len());
            break;
        }
    }

    let stats = game.stats();
    let report = Report {
        seed,
        ships,
        shots: stats.shots,
        hits: stats.hits,
        misses,
        sunk: stats.sunk,
        remaining: stats.remaining,
        finished_after,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

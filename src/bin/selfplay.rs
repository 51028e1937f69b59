//! Self-play CLI: runs first-match opponent against itself, headless.
//!
//! Useful for soak-testing the engine and for eyeballing win balance between
//! the seat that moves first and the one that doesn't.

use std::time::Instant;

use clap::Parser;
use rust_uno::core::ParticipantMap;
use rust_uno::{play_policy_turn, FirstMatch, GameBuilder, GameResult, Participant};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(about = "Play first-match opponents against each other")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game N uses seed + N. Random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon a game after this many turns
    #[arg(long, default_value = "1000")]
    max_turns: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show per-game results and the summary
    #[arg(long)]
    show_output: bool,
}

/// How one simulated game ended.
enum Finish {
    Won(Participant, u32),
    Abandoned(u32),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let start = Instant::now();
    let mut wins: ParticipantMap<u32> = ParticipantMap::default();
    let mut total_turns = 0u64;
    let mut abandoned = 0u32;
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };

        match run_game(seed, args.max_turns) {
            Ok(Finish::Won(winner, turns)) => {
                wins[winner] += 1;
                total_turns += u64::from(turns);
                info!(game = game_num, seed, %winner, turns, "game finished");
            }
            Ok(Finish::Abandoned(turns)) => {
                abandoned += 1;
                warn!(game = game_num, seed, turns, "game abandoned at turn limit");
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} (seed {}) failed: {}", game_num, seed, e);
            }
        }
    }

    if args.show_output {
        let finished = wins.iter().map(|(_, n)| *n).sum::<u32>();
        println!("\n=== Self-play Summary ===");
        println!("Games finished: {}/{}", finished, args.games);
        if abandoned > 0 {
            println!("Abandoned: {}", abandoned);
        }
        if errors > 0 {
            println!("Errors: {}", errors);
        }
        println!("Total time: {:?}", start.elapsed());
        if finished > 0 {
            println!("Average turns: {:.1}", total_turns as f64 / f64::from(finished));
            for (who, n) in wins.iter() {
                let rate = f64::from(*n) / f64::from(finished) * 100.0;
                println!("{}: wins={} ({:.1}%)", who, n, rate);
            }
        }
    }

    Ok(())
}

fn run_game(seed: u64, max_turns: u32) -> Result<Finish, Box<dyn std::error::Error>> {
    let mut state = GameBuilder::new().build(seed)?;

    while !state.is_over() {
        if state.turn_number() >= max_turns {
            state.quit();
            return Ok(Finish::Abandoned(state.turn_number()));
        }
        play_policy_turn(&mut state, &FirstMatch)?;
    }

    match state.result() {
        Some(GameResult::Winner(winner)) => Ok(Finish::Won(winner, state.turn_number())),
        _ => Ok(Finish::Abandoned(state.turn_number())),
    }
}

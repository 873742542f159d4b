use boxes::players::{score_moves, BotPlayer, GreedyPlayer, MinimaxPlayer, RandomPlayer};
use boxes::{Difficulty, Game, GameConfiguration, GamePhase, GameSummary, Outcome, Player};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Random,
    Greedy,
    Easy,
    Medium,
    Hard,
}

impl Opponent {
    fn bot(self) -> Box<dyn BotPlayer + Send + Sync> {
        match self {
            Opponent::Random => Box::new(RandomPlayer),
            Opponent::Greedy => Box::new(GreedyPlayer),
            Opponent::Easy => Box::new(MinimaxPlayer::new(Difficulty::Easy)),
            Opponent::Medium => Box::new(MinimaxPlayer::new(Difficulty::Medium)),
            Opponent::Hard => Box::new(MinimaxPlayer::new(Difficulty::Hard)),
        }
    }
}

/// Pit the machine opponent against a scripted bot in the human seat
#[derive(Debug, Parser)]
#[command(name = "simulate", version)]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    games: usize,

    #[arg(long, default_value_t = 3)]
    rows: usize,

    #[arg(long, default_value_t = 3)]
    cols: usize,

    /// Machine difficulty
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Bot playing the human seat
    #[arg(short, long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Base seed; game i uses seed + i
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[arg(short, long)]
    verbose: bool,

    /// Print each finished-game summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfiguration::new(args.rows, args.cols, args.difficulty);
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    println!("🎮 Boxes Game Simulation");
    println!("========================");
    println!("Configuration:");
    println!("  - Grid: {}", config.grid_label());
    println!("  - Machine difficulty: {}", args.difficulty);
    println!("  - Opponent: {:?}", args.opponent);
    println!("  - Number of games: {}", args.games);
    println!("  - Seed: {}", args.seed);

    let machine = MinimaxPlayer::new(args.difficulty);
    let opponent = args.opponent.bot();

    let results: Vec<Option<GameSummary>> = (0..args.games)
        .into_par_iter()
        .map(|i| {
            let seed = args.seed.wrapping_add(i as u64);
            simulate_single_game(&config, &machine, opponent.as_ref(), seed, args.verbose)
        })
        .collect();

    let mut machine_wins = 0;
    let mut opponent_wins = 0;
    let mut draws = 0;
    let mut completed = 0;
    for (i, summary) in results.iter().enumerate() {
        let Some(summary) = summary else {
            println!("  Game {} did not complete", i + 1);
            continue;
        };
        completed += 1;
        match summary.result {
            Outcome::Loss => machine_wins += 1,
            Outcome::Win => opponent_wins += 1,
            Outcome::Draw => draws += 1,
        }
        if args.json {
            match serde_json::to_string(summary) {
                Ok(line) => println!("{}", line),
                Err(e) => log::error!("Could not serialize summary: {}", e),
            }
        }
    }

    let rate = |count: usize| {
        if completed > 0 {
            (count as f64 / completed as f64) * 100.0
        } else {
            0.0
        }
    };
    println!("\n📊 Tournament Results:");
    println!("====================");
    println!("{}: {} wins ({:.1}%)", machine.name(), machine_wins, rate(machine_wins));
    println!("{}: {} wins ({:.1}%)", opponent.name(), opponent_wins, rate(opponent_wins));
    println!("Draws: {} ({:.1}%)", draws, rate(draws));
    println!("Completed games: {}/{}", completed, args.games);
}

/// Print the machine's ranked candidates without touching the game's rng.
fn print_ranking(game: &Game, machine: &MinimaxPlayer, seed: u64) {
    let mut preview_rng = XorShiftRng::seed_from_u64(seed ^ u64::MAX);
    let ranked = score_moves(game.state(), machine.config(), &mut preview_rng);
    println!("   📊 {} ranks {} moves:", machine.name(), ranked.len());
    for scored in ranked.iter().take(5) {
        println!("      {} {:.2}", scored.mv, scored.score);
    }
}

fn simulate_single_game(
    config: &GameConfiguration,
    machine: &MinimaxPlayer,
    opponent: &dyn BotPlayer,
    seed: u64,
    verbose: bool,
) -> Option<GameSummary> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let mut game = match Game::new(config.clone()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Could not create game: {}", e);
            return None;
        }
    };
    let first = game.start_with_coin_flip(&mut rng).ok()?;
    if verbose {
        println!("🏁 Seed {}: {:?} moves first", seed, first);
    }

    while game.phase() == GamePhase::InProgress {
        let player = game.current_turn()?;
        let turn = match player {
            Player::Machine => {
                if verbose {
                    print_ranking(&game, machine, seed);
                }
                game.play_machine_turn(&mut rng)
            }
            Player::Human => game.play_turn(Player::Human, opponent, &mut rng),
        };
        match turn {
            Ok(outcomes) if outcomes.is_empty() => {
                log::warn!("{:?} produced no move", player);
                return None;
            }
            Ok(outcomes) => {
                if verbose {
                    for outcome in &outcomes {
                        println!(
                            "   🤖 {:?} plays {} (+{})",
                            outcome.player, outcome.mv, outcome.captured
                        );
                    }
                }
            }
            Err(e) => {
                log::error!("Seed {}: {}", seed, e);
                return None;
            }
        }
    }

    if verbose {
        println!("{}", game.state());
    }
    game.summary()
}

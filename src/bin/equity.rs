//! Equity Binary
//!
//! `equity eq` prices hole cards against a partial board.
//! `equity deal` deals a hand of hold'em to the river.
//! `equity standard` spreads one or more plain packs among players.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use joker::DEFAULT_TRIALS;
use joker::Probability;
use joker::cards::Card;
use joker::cards::Hole;
use joker::dealing::Game;
use joker::dealing::Spread;
use joker::dealing::Standard;
use joker::dealing::Variant;
use joker::equity::Calculator;
use joker::equity::Execution;
use joker::evaluation::Strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
#[command(name = "equity", about = "Poker hand evaluation and equity")]
struct Args {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Win probabilities for each player's hole cards
    Eq {
        /// Hole cards, one flag per player (e.g. "As Ks")
        #[arg(short, long = "cards", required = true)]
        cards: Vec<String>,
        /// Known community cards (e.g. "Ad Kh 2c")
        #[arg(short, long, default_value = "")]
        board: String,
        /// Requested Monte Carlo trials
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
        simulations: usize,
        /// Hand evaluator: exhaustive or optimized
        #[arg(short, long, default_value_t = Strategy::Optimized)]
        strategy: Strategy,
        /// Run every trial on one thread
        #[arg(long)]
        sequential: bool,
        /// Seed the sampler for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Deal a hand from shuffle to river
    Deal {
        #[arg(short, long, default_value_t = 2)]
        players: usize,
        /// texas, omaha or short
        #[arg(short = 't', long, default_value_t = Variant::Texas)]
        variant: Variant,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal plain packs, jokers included unless told otherwise
    Standard {
        #[arg(short, long, default_value_t = 2)]
        players: usize,
        /// Packs shuffled together
        #[arg(short, long, default_value_t = 1)]
        decks: usize,
        /// Leave the two jokers out
        #[arg(long)]
        no_jokers: bool,
        /// Cards set aside before dealing
        #[arg(short, long, default_value_t = 0)]
        keep: usize,
        /// Cards per player; defaults to an even split of the rest
        #[arg(short = 'n', long)]
        cards: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, serde::Serialize)]
struct Report {
    board: String,
    trials: usize,
    players: Vec<Row>,
    tie: Probability,
}

#[derive(Debug, serde::Serialize)]
struct Row {
    hole: String,
    win: Probability,
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    joker::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    })?;
    match args.command {
        Command::Eq {
            cards,
            board,
            simulations,
            strategy,
            sequential,
            seed,
            json,
        } => {
            let holes = cards
                .iter()
                .map(|s| Hole::try_from(s.as_str()).with_context(|| format!("hole cards '{}'", s)))
                .collect::<anyhow::Result<Vec<Hole>>>()?;
            let board = Card::parse(&board).context("community cards")?;
            let execution = match sequential {
                true => Execution::Sequential,
                false => Execution::Auto,
            };
            let calculator =
                Calculator::new(holes, simulations, strategy, board).with_execution(execution);
            let probabilities = calculator.probabilities_with(&mut rng(seed))?;
            let report = Report {
                board: calculator.board().to_string(),
                trials: calculator.required(),
                players: calculator
                    .holes()
                    .iter()
                    .map(Hole::to_string)
                    .zip(probabilities.iter().copied())
                    .map(|(hole, win)| Row { hole, win })
                    .collect(),
                tie: probabilities.last().copied().unwrap_or_default(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            println!("board  {}", report.board);
            println!("trials {}", report.trials);
            for (i, row) in report.players.iter().enumerate() {
                println!("P{:<3}{:<16}{:>8.2}%", i + 1, row.hole, row.win * 100.);
            }
            println!("{:<20}{:>8.2}%", "tie", report.tie * 100.);
            if calculator.board().unknown() == 0 {
                print!("{}", calculator.showdown()?);
            }
        }
        Command::Deal {
            players,
            variant,
            seed,
        } => {
            let ref mut rng = rng(seed);
            let mut game = Game::<Standard>::new(variant, players);
            game.start(rng)?;
            game.deal_flop()?;
            game.deal_turn_or_river()?;
            game.deal_turn_or_river()?;
            println!("{}", variant);
            for (i, hand) in game.players().iter().enumerate() {
                println!("P{:<3}{}", i + 1, hand);
            }
            println!("board  {}", game.board());
            log::debug!("{:<32}{:<32}", "burned", game.muck().len());
        }
        Command::Standard {
            players,
            decks,
            no_jokers,
            keep,
            cards,
            seed,
        } => {
            let spread = Spread {
                players,
                decks,
                jokers: !no_jokers,
                keep,
                cards,
            };
            let deal = spread.deal(&mut rng(seed)).with_context(|| {
                format!(
                    "{} players x {} cards + {} kept from {} cards",
                    players,
                    spread.per_player(),
                    keep,
                    spread.deck().len()
                )
            })?;
            println!(
                "dealing {} cards to {} players (keeping {})",
                spread.per_player(),
                players,
                keep
            );
            if !deal.kept.is_empty() {
                let kept = deal.kept.iter().map(Card::to_string).collect::<Vec<_>>();
                println!("kept {}", kept.join(" "));
            }
            for (i, hand) in deal.hands.iter().enumerate() {
                println!("P{:<3}{}", i + 1, hand);
            }
        }
    }
    Ok(())
}

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_exhaustive,
        evaluating_river_optimized,
        sampling_flop_runouts,
        calculating_preflop_equity,
        calculating_turn_equity,
        dealing_texas_to_river,
}

fn river() -> (Vec<Card>, Vec<Card>) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut deck = Deck::new();
    deck.shuffle(rng);
    let cards = deck.cards();
    (cards[..2].to_vec(), cards[2..7].to_vec())
}

fn evaluating_river_exhaustive(c: &mut criterion::Criterion) {
    let (hole, board) = river();
    c.bench_function("evaluate 7 cards by brute force", |b| {
        b.iter(|| Exhaustive.evaluate(&hole, &board))
    });
}

fn evaluating_river_optimized(c: &mut criterion::Criterion) {
    let (hole, board) = river();
    c.bench_function("evaluate 7 cards by bitmask", |b| {
        b.iter(|| Optimized.evaluate(&hole, &board))
    });
}

fn sampling_flop_runouts(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let deck = Deck::new().excluding(&Card::parse("As Ks 2h 3h 4c 5c 6c").unwrap());
    c.bench_function("sample 990 distinct flop runouts", |b| {
        b.iter(|| deck.clone().sample(2, 990, rng).len())
    });
}

fn calculating_preflop_equity(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(2);
    let calculator = calculator(&["As Ks", "2h 3h"], "", 10_000);
    c.bench_function("calculate Preflop equity over 10k runouts", |b| {
        b.iter(|| calculator.probabilities_with(rng))
    });
}

fn calculating_turn_equity(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(3);
    let calculator = calculator(&["Ah Ad", "Kh Kd", "Qs Js"], "As Tc 2h 7d", 10_000);
    c.bench_function("calculate Turn equity, 3 players", |b| {
        b.iter(|| calculator.probabilities_with(rng))
    });
}

fn dealing_texas_to_river(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(4);
    let mut game = Game::<Standard>::new(Variant::Texas, 9);
    c.bench_function("deal 9-handed Texas to the river", |b| {
        b.iter(|| {
            game.start(rng)
                .and_then(|_| game.deal_flop())
                .and_then(|_| game.deal_turn_or_river())
                .and_then(|_| game.deal_turn_or_river())
        })
    });
}

fn calculator(holes: &[&str], board: &str, trials: usize) -> Calculator {
    Calculator::new(
        holes.iter().map(|h| Hole::try_from(*h).unwrap()).collect(),
        trials,
        Strategy::Optimized,
        Card::parse(board).unwrap(),
    )
}

use joker::cards::Card;
use joker::cards::Deck;
use joker::cards::Hole;
use joker::dealing::Game;
use joker::dealing::Standard;
use joker::dealing::Variant;
use joker::equity::Calculator;
use joker::evaluation::Evaluator;
use joker::evaluation::Exhaustive;
use joker::evaluation::Optimized;
use joker::evaluation::Strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;

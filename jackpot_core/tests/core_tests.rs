use jackpot_core::symbols::{CHERRY, GRAPES, SEVEN, WATERMELON};
use jackpot_core::{
    DrawSource, EntropySource, ProvablyFairRng, ScriptedSource, SpinEvaluator, SpinResult, Symbol,
    SymbolCatalog,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SPINS: usize = 100_000;
// chi-square, 3 degrees of freedom, p ~ 1e-5
const CHI_SQUARE_LIMIT: f64 = 25.0;

fn forced(glyphs: [&str; 3]) -> (SpinEvaluator, SpinResult) {
    let evaluator = SpinEvaluator::default();
    let symbols: Vec<Symbol> = glyphs.iter().copied().map(Symbol::from).collect();
    let mut source = ScriptedSource::of_symbols(evaluator.catalog(), &symbols).unwrap();
    let result = evaluator.spin(&mut source);
    (evaluator, result)
}

fn chi_square(counts: &[usize], total: usize) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

fn assert_uniform_per_reel(evaluator: &SpinEvaluator, mut next: impl FnMut() -> SpinResult) {
    let catalog = evaluator.catalog();
    let mut counts = vec![vec![0usize; catalog.len()]; 3];
    for _ in 0..SPINS {
        let result = next();
        for (reel, symbol) in result.symbols().iter().enumerate() {
            let index = catalog
                .symbols()
                .iter()
                .position(|s| s == symbol)
                .expect("drawn symbol belongs to the catalog");
            counts[reel][index] += 1;
        }
    }
    for (reel, reel_counts) in counts.iter().enumerate() {
        let stat = chi_square(reel_counts, SPINS);
        assert!(
            stat < CHI_SQUARE_LIMIT,
            "reel {reel} counts {reel_counts:?} chi-square {stat}"
        );
    }
}

#[test]
fn jackpot_scenario() {
    let (evaluator, result) = forced([SEVEN, SEVEN, SEVEN]);
    assert_eq!(evaluator.format(&result), "7️⃣ | 7️⃣ | 7️⃣");
    assert!(evaluator.is_jackpot(&result));
}

#[test]
fn consolation_scenario() {
    let (evaluator, result) = forced([CHERRY, GRAPES, WATERMELON]);
    assert_eq!(evaluator.format(&result), "🍒 | 🍇 | 🍉");
    assert!(!evaluator.is_jackpot(&result));
}

#[test]
fn two_sevens_are_not_enough() {
    let (evaluator, result) = forced([SEVEN, SEVEN, CHERRY]);
    assert!(!evaluator.is_jackpot(&result));
}

#[test]
fn entropy_spins_stay_in_catalog() {
    let evaluator = SpinEvaluator::default();
    let mut source = EntropySource::from_entropy();
    for _ in 0..1000 {
        let result = evaluator.spin(&mut source);
        assert_eq!(result.symbols().len(), 3);
        assert!(result
            .symbols()
            .iter()
            .all(|s| evaluator.catalog().contains(s)));
    }
}

#[test]
fn seeded_spins_are_uniform() {
    let evaluator = SpinEvaluator::default();
    let mut source = EntropySource::new(ChaCha8Rng::seed_from_u64(42));
    assert_uniform_per_reel(&evaluator, || evaluator.spin(&mut source));
}

#[test]
fn provably_fair_spins_are_uniform() {
    let evaluator = SpinEvaluator::default();
    let mut nonce = 0u64;
    assert_uniform_per_reel(&evaluator, || {
        nonce += 1;
        let mut rng = ProvablyFairRng::new("server", "client", nonce);
        evaluator.spin(&mut rng)
    });
}

#[test]
fn rng_repeatable() {
    let mut rng1 = ProvablyFairRng::new("s", "c", 42);
    let mut rng2 = ProvablyFairRng::new("s", "c", 42);
    let a: Vec<usize> = (0..10).map(|_| rng1.draw_index(7)).collect();
    let b: Vec<usize> = (0..10).map(|_| rng2.draw_index(7)).collect();
    assert_eq!(a, b);
}

#[test]
fn custom_catalog_jackpot() {
    let catalog = SymbolCatalog::with_jackpot(
        vec!["A".into(), "B".into(), "C".into()],
        &Symbol::from("A"),
    )
    .unwrap();
    let evaluator = SpinEvaluator::new(catalog);
    let result = evaluator.spin(&mut ScriptedSource::new([0, 0, 0]));
    assert_eq!(evaluator.format(&result), "A | A | A");
    assert!(evaluator.is_jackpot(&result));
}

proptest! {
    #[test]
    fn jackpot_iff_all_reels_hold_the_jackpot(indices in prop::array::uniform3(0usize..4)) {
        let evaluator = SpinEvaluator::default();
        let result = evaluator.spin(&mut ScriptedSource::new(indices));
        let jackpot = evaluator.catalog().jackpot_index();
        prop_assert_eq!(
            evaluator.is_jackpot(&result),
            indices.iter().all(|&i| i == jackpot)
        );
    }

    #[test]
    fn format_is_three_glyphs_between_pipes(indices in prop::array::uniform3(0usize..4)) {
        let evaluator = SpinEvaluator::default();
        let result = evaluator.spin(&mut ScriptedSource::new(indices));
        let glyphs: Vec<&str> = indices
            .iter()
            .map(|&i| evaluator.catalog().symbols()[i].as_str())
            .collect();
        let text = evaluator.format(&result);
        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert_eq!(text, format!("{} | {} | {}", glyphs[0], glyphs[1], glyphs[2]));
    }
}

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    rng::{DrawSource, ProvablyFairRng},
    symbols::{Symbol, SymbolCatalog},
};

pub const REELS: usize = 3;
pub const SEPARATOR: &str = " | ";

/// Symbols on the three reels, left to right in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SpinResult(pub [Symbol; REELS]);

impl SpinResult {
    pub fn symbols(&self) -> &[Symbol; REELS] {
        &self.0
    }
}

impl fmt::Display for SpinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "{a}{SEPARATOR}{b}{SEPARATOR}{c}")
    }
}

/// Draws and judges spins against one catalog.
#[derive(Debug, Clone, Default)]
pub struct SpinEvaluator {
    catalog: SymbolCatalog,
}

impl SpinEvaluator {
    pub fn new(catalog: SymbolCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Three independent uniform draws, with replacement.
    pub fn spin<S: DrawSource + ?Sized>(&self, source: &mut S) -> SpinResult {
        let len = self.catalog.len();
        let reels = std::array::from_fn(|_| {
            let index = source.draw_index(len);
            self.catalog.symbols()[index].clone()
        });
        let result = SpinResult(reels);
        debug!(%result, "spun reels");
        result
    }

    pub fn format(&self, result: &SpinResult) -> String {
        result.to_string()
    }

    pub fn is_jackpot(&self, result: &SpinResult) -> bool {
        let jackpot = self.catalog.jackpot();
        let hit = result.0.iter().all(|s| s == jackpot);
        debug!(hit, jackpot = %jackpot, "evaluated jackpot");
        hit
    }
}

/// Convenience: spin with a source derived from seeds.
pub fn spin_with_seeds(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    evaluator: &SpinEvaluator,
) -> SpinResult {
    let mut rng = ProvablyFairRng::new(server_seed, client_seed, nonce);
    evaluator.spin(&mut rng)
}

/// Verify that a revealed spin matches what the seeds produce.
pub fn verify_spin(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    evaluator: &SpinEvaluator,
    expected: &SpinResult,
) -> bool {
    spin_with_seeds(server_seed, client_seed, nonce, evaluator) == *expected
}

pub mod engine;
pub mod error;
pub mod rng;
pub mod symbols;

pub use crate::engine::{spin_with_seeds, verify_spin, SpinEvaluator, SpinResult, REELS, SEPARATOR};
pub use crate::error::{CatalogError, Result};
pub use crate::rng::{
    derive_floats, derive_hash_hex, DrawSource, EntropySource, ProvablyFairRng, ScriptedSource,
};
pub use crate::symbols::{Symbol, SymbolCatalog};

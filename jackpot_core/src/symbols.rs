use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// One glyph printed on a reel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

pub const CHERRY: &str = "🍒";
pub const GRAPES: &str = "🍇";
pub const WATERMELON: &str = "🍉";
pub const SEVEN: &str = "7️⃣";

/// Ordered, non-empty set of drawable symbols with one jackpot symbol.
///
/// Construction validates the catalog, so an evaluator holding one can
/// always draw.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
    jackpot: usize,
}

impl SymbolCatalog {
    pub fn new(symbols: Vec<Symbol>, jackpot: usize) -> Result<Self> {
        if symbols.is_empty() {
            return Err(CatalogError::Empty);
        }
        if jackpot >= symbols.len() {
            return Err(CatalogError::JackpotOutOfRange {
                index: jackpot,
                len: symbols.len(),
            });
        }
        for (index, symbol) in symbols.iter().enumerate() {
            if symbol.as_str().trim().is_empty() {
                return Err(CatalogError::BlankSymbol { index });
            }
            if symbols[..index].contains(symbol) {
                return Err(CatalogError::DuplicateSymbol(symbol.to_string()));
            }
        }
        Ok(Self { symbols, jackpot })
    }

    /// Catalog whose jackpot is the last entry.
    pub fn with_last_as_jackpot(symbols: Vec<Symbol>) -> Result<Self> {
        let last = symbols.len().checked_sub(1).ok_or(CatalogError::Empty)?;
        Self::new(symbols, last)
    }

    /// Catalog whose jackpot is named by glyph.
    pub fn with_jackpot(symbols: Vec<Symbol>, jackpot: &Symbol) -> Result<Self> {
        if symbols.is_empty() {
            return Err(CatalogError::Empty);
        }
        let index = symbols
            .iter()
            .position(|s| s == jackpot)
            .ok_or_else(|| CatalogError::UnknownJackpot(jackpot.to_string()))?;
        Self::new(symbols, index)
    }

    /// Cherry, grapes, watermelon and the seven, which pays.
    pub fn default_fruits() -> Self {
        Self {
            symbols: [CHERRY, GRAPES, WATERMELON, SEVEN]
                .into_iter()
                .map(Symbol::from)
                .collect(),
            jackpot: 3,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    // Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn jackpot(&self) -> &Symbol {
        &self.symbols[self.jackpot]
    }

    pub fn jackpot_index(&self) -> usize {
        self.jackpot
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::default_fruits()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("symbol catalog is empty")]
    Empty,
    #[error("jackpot index {index} out of range for catalog of {len} symbols")]
    JackpotOutOfRange { index: usize, len: usize },
    #[error("symbol at position {index} is blank")]
    BlankSymbol { index: usize },
    #[error("symbol {0:?} appears more than once in the catalog")]
    DuplicateSymbol(String),
    #[error("jackpot symbol {0:?} is not in the catalog")]
    UnknownJackpot(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

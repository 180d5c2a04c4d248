//! Errors raised while building channels and measuring their leakage.
use thiserror::Error;

use crate::Symbol;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChannelError {
    #[error("index {index} is out of range for an instance space of size {size}")]
    OutOfRange { index: usize, size: usize },

    #[error("symbol {symbol} is not in an alphabet of size {alphabet_size}")]
    SymbolOutOfRange { symbol: Symbol, alphabet_size: usize },

    #[error("invalid arity: {0}")]
    InvalidArity(String),

    #[error("symbols {symbols:?} are tied with {count} occurrences each")]
    AmbiguousTie { symbols: Vec<Symbol>, count: usize },

    #[error("instance space of {alphabet_size}^{length} instances overflows its indexes")]
    SpaceOverflow { length: usize, alphabet_size: usize },

    #[error("channel would have {rows} rows, more than the limit of {limit}")]
    TooLarge { rows: usize, limit: usize },

    #[error("decay must be in the open interval (0, 1), got {0}")]
    InvalidDecay(f64),

    #[error("observed outcome {0} has no column in the channel")]
    UnknownOutcome(String),

    #[error("random guessing error of the prior is 0")]
    DegeneratePrior,
}

pub type Result<T> = std::result::Result<T, ChannelError>;

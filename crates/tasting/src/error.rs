use thiserror::Error;

use crate::TastingState;

pub type TastingResult<T> = Result<T, TastingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TastingError {
    #[error("Cannot {operation} while tasting is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: TastingState,
    },

    #[error("Soup has not been finalized")]
    SoupNotFinalized,

    #[error("Taster not found: {0}")]
    UnknownTaster(String),
}

use thiserror::Error;

use soupkitchen_shared::PrepAction;

use crate::{CookingState, HeatPhase};

pub type CookingResult<T> = Result<T, CookingError>;

/// Why a cooking operation was ignored.
///
/// Every variant means the session was left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CookingError {
    #[error("Cannot {operation} while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: CookingState,
    },

    #[error("Cannot {operation} while the pot is {phase}")]
    InvalidHeatPhase {
        operation: &'static str,
        phase: HeatPhase,
    },

    #[error("No ingredient selected")]
    NoIngredientSelected,

    #[error("Ingredient {requested} is not the selected ingredient ({selected})")]
    SelectionMismatch { selected: String, requested: String },

    #[error("Ingredient not found: {0}")]
    UnknownIngredient(String),

    #[error("{0} does not ready an ingredient for the pot")]
    PrepNotReadying(PrepAction),
}

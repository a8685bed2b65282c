use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum IngredientCategory {
    #[default]
    Vegetable,
    Fruit,
    Protein,
    Seasoning,
    /// Event and unlockable ingredients. Adds no taste of its own.
    Special,
}

/// How far an ingredient instance has been processed.
///
/// Transitions only move forward: Raw, then Prepared, then Cooked.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum PreparationState {
    #[default]
    Raw,
    Prepared,
    Cooked,
}

impl PreparationState {
    pub fn nutrition_multiplier(&self) -> f32 {
        match self {
            PreparationState::Raw => 0.8,
            PreparationState::Prepared => 1.0,
            PreparationState::Cooked => 1.2,
        }
    }

    pub fn flavor_multiplier(&self) -> f32 {
        match self {
            PreparationState::Raw => 0.7,
            PreparationState::Prepared => 1.0,
            PreparationState::Cooked => 1.5,
        }
    }

    pub fn color_multiplier(&self) -> f32 {
        match self {
            PreparationState::Raw => 1.0,
            PreparationState::Prepared => 0.9,
            PreparationState::Cooked => 1.1,
        }
    }
}

/// Hands-on actions a player can perform on the selected ingredient.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum PrepAction {
    Wash,
    Cut,
    Peel,
    Boil,
    Mix,
    Season,
}

impl PrepAction {
    /// Whether the action leaves the ingredient ready to go into the pot.
    pub fn readies_ingredient(&self) -> bool {
        matches!(self, PrepAction::Wash | PrepAction::Cut | PrepAction::Peel)
    }
}

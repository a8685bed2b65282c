use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Steps of a cooking round.
///
/// A session leaves `Idle` once, loops from `SelectingIngredient` to
/// `Stirring` for every ingredient and ends in `Completed`.
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
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CookingState {
    #[default]
    Idle,
    SelectingIngredient,
    PreparingIngredient,
    AddingToSoup,
    AdjustingHeat,
    Stirring,
    Completed,
}

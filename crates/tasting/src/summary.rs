use serde::{Deserialize, Serialize};
use soupkitchen_cooking::Soup;

use crate::{ScoringStrategy, TasterReaction};

/// Everything worth keeping from a completed tasting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TastingSummary {
    pub soup: Soup,
    pub strategy: ScoringStrategy,
    pub cooking_score: u8,
    pub reactions: Vec<TasterReaction>,
    pub overall_rating: u8,
}

use serde::{Deserialize, Serialize};

/// Ingredient count above which extra ingredients stop earning points.
pub const COUNTED_INGREDIENT_CAP: usize = 3;
/// Share of the maximum cooking time after which the soup is overcooked.
pub const OVERCOOK_RATIO: f32 = 0.9;
pub const MAX_COOKING_SCORE: u8 = 5;

/// Snapshot of how a session went, handed to tasting.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CookingReport {
    pub finished: bool,
    pub ingredient_count: usize,
    pub elapsed: f32,
    pub min_cooking_time: f32,
    pub max_cooking_time: f32,
}

impl CookingReport {
    pub fn cooked_in_window(&self) -> bool {
        self.elapsed >= self.min_cooking_time
            && self.elapsed <= self.max_cooking_time * OVERCOOK_RATIO
    }

    /// Score in `0..=5`; zero until the soup is finished.
    pub fn cooking_score(&self) -> u8 {
        if !self.finished {
            return 0;
        }

        let mut score = 1 + self.ingredient_count.min(COUNTED_INGREDIENT_CAP) as u8;
        if self.cooked_in_window() {
            score += 1;
        }

        score.min(MAX_COOKING_SCORE)
    }
}

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use soupkitchen_catalog::IngredientCatalog;
use soupkitchen_shared::IngredientCategory;
use strum::VariantArray;

pub const BIG_LIKE: i8 = 2;
pub const LIKE: i8 = 1;
pub const NEUTRAL: i8 = 0;
pub const DISLIKE: i8 = -1;
pub const BIG_DISLIKE: i8 = -2;

/// What one taster likes and dislikes. Never changes while tasting.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PreferenceProfile {
    pub liked_ingredient_ids: BTreeSet<String>,
    pub disliked_ingredient_ids: BTreeSet<String>,
    pub liked_categories: BTreeSet<IngredientCategory>,
    /// Continuous preference per ingredient id, read clamped to `[-1, 1]`.
    pub preference_levels: BTreeMap<String, f32>,
}

impl PreferenceProfile {
    pub fn is_empty(&self) -> bool {
        self.liked_ingredient_ids.is_empty()
            && self.disliked_ingredient_ids.is_empty()
            && self.liked_categories.is_empty()
            && self.preference_levels.is_empty()
    }

    pub fn likes(&self, ingredient_id: &str) -> bool {
        self.liked_ingredient_ids.contains(ingredient_id)
    }

    pub fn dislikes(&self, ingredient_id: &str) -> bool {
        self.disliked_ingredient_ids.contains(ingredient_id)
    }

    pub fn likes_category(&self, category: IngredientCategory) -> bool {
        self.liked_categories.contains(&category)
    }

    /// Discrete preference from `-2` to `2`.
    ///
    /// The explicit lists win over category membership, and liking wins
    /// over disliking when an id is in both.
    pub fn preference(&self, ingredient_id: &str, category: Option<IngredientCategory>) -> i8 {
        if self.likes(ingredient_id) {
            BIG_LIKE
        } else if self.dislikes(ingredient_id) {
            BIG_DISLIKE
        } else if category.is_some_and(|c| self.likes_category(c)) {
            LIKE
        } else {
            NEUTRAL
        }
    }

    pub fn level_for(&self, ingredient_id: &str) -> Option<f32> {
        self.preference_levels
            .get(ingredient_id)
            .filter(|level| !level.is_nan())
            .map(|level| level.clamp(-1.0, 1.0))
    }

    /// Draws a random profile from the catalog: one to three liked
    /// ingredients, one or two disliked ones that are not liked, and one
    /// liked category.
    pub fn generate<R: Rng + ?Sized>(catalog: &IngredientCatalog, rng: &mut R) -> Self {
        let ids: Vec<&str> = catalog.ids().collect();
        let mut profile = PreferenceProfile::default();
        if ids.is_empty() {
            return profile;
        }

        let liked_count = rng.random_range(1..=3);
        profile.liked_ingredient_ids = ids
            .choose_multiple(rng, liked_count)
            .map(|id| id.to_string())
            .collect();

        let candidates: Vec<&str> = ids
            .iter()
            .copied()
            .filter(|id| !profile.likes(id))
            .collect();
        let disliked_count = rng.random_range(1..=2);
        profile.disliked_ingredient_ids = candidates
            .choose_multiple(rng, disliked_count)
            .map(|id| id.to_string())
            .collect();

        if let Some(category) = IngredientCategory::VARIANTS.choose(rng) {
            profile.liked_categories.insert(*category);
        }

        tracing::debug!(
            liked = ?profile.liked_ingredient_ids,
            disliked = ?profile.disliked_ingredient_ids,
            categories = ?profile.liked_categories,
            "Generated preferences"
        );

        profile
    }
}

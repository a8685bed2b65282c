use serde::{Deserialize, Serialize};
use soupkitchen_catalog::IngredientCatalog;
use soupkitchen_cooking::{CookingReport, Soup};
use soupkitchen_shared::Reaction;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::PreferenceProfile;

pub const NEUTRAL_SCORE: f32 = 2.5;
pub const IDEAL_THICKNESS: f32 = 0.5;
pub const THICKNESS_WEIGHT: f32 = 0.5;
pub const BALANCE_WEIGHT: f32 = 0.5;
pub const MAX_SCORE: f32 = 5.0;

pub const LIKED_INGREDIENT_POINTS: i32 = 2;
pub const DISLIKED_INGREDIENT_POINTS: i32 = -3;
pub const LIKED_CATEGORY_POINTS: i32 = 1;

/// Raw outcome of scoring one soup for one taster.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Verdict {
    pub score: f32,
    pub reaction: Reaction,
}

/// Scores a finished soup against one taster's preferences.
pub trait Scoring {
    fn verdict(
        &self,
        soup: &Soup,
        report: &CookingReport,
        preferences: &PreferenceProfile,
        catalog: &IngredientCatalog,
    ) -> Verdict;
}

/// Which scoring rule a tasting uses.
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
pub enum ScoringStrategy {
    /// Preference levels plus thickness and taste balance on a 0-5 scale.
    #[default]
    Continuous,
    /// Liked and disliked ingredient points plus the cooking score.
    Match,
}

impl Scoring for ScoringStrategy {
    fn verdict(
        &self,
        soup: &Soup,
        report: &CookingReport,
        preferences: &PreferenceProfile,
        catalog: &IngredientCatalog,
    ) -> Verdict {
        match self {
            ScoringStrategy::Continuous => {
                ContinuousScoring.verdict(soup, report, preferences, catalog)
            }
            ScoringStrategy::Match => MatchScoring.verdict(soup, report, preferences, catalog),
        }
    }
}

/// Starts from 2.5 and adds every matching preference, a thickness bonus
/// and a taste balance bonus, clamped to `[0, 5]`.
///
/// An ingredient counts once however many times it went in. Its weight is
/// the explicit preference level when the taster has one, otherwise the
/// discrete preference.
pub struct ContinuousScoring;

impl ContinuousScoring {
    pub fn preference_sum(
        soup: &Soup,
        preferences: &PreferenceProfile,
        catalog: &IngredientCatalog,
    ) -> f32 {
        soup.distinct_ingredient_ids()
            .into_iter()
            .map(|id| {
                preferences
                    .level_for(id)
                    .unwrap_or_else(|| preferences.preference(id, catalog.category_of(id)) as f32)
            })
            .sum()
    }

    pub fn thickness_factor(thickness: f32) -> f32 {
        1.0 - (thickness - IDEAL_THICKNESS).abs()
    }
}

impl Scoring for ContinuousScoring {
    fn verdict(
        &self,
        soup: &Soup,
        _report: &CookingReport,
        preferences: &PreferenceProfile,
        catalog: &IngredientCatalog,
    ) -> Verdict {
        let mut score = NEUTRAL_SCORE;
        score += Self::preference_sum(soup, preferences, catalog);
        score += Self::thickness_factor(soup.thickness) * THICKNESS_WEIGHT;
        score += soup.taste_profile.balance() * BALANCE_WEIGHT;
        let score = score.clamp(0.0, MAX_SCORE);

        Verdict {
            score,
            reaction: Reaction::from_continuous_score(score),
        }
    }
}

/// Sums ingredient points (duplicates count every time) and adds the
/// cooking score.
pub struct MatchScoring;

impl MatchScoring {
    pub fn match_score(
        soup: &Soup,
        preferences: &PreferenceProfile,
        catalog: &IngredientCatalog,
    ) -> i32 {
        soup.ingredient_ids
            .iter()
            .map(|id| {
                let mut points = 0;
                if preferences.likes(id) {
                    points += LIKED_INGREDIENT_POINTS;
                }
                if preferences.dislikes(id) {
                    points += DISLIKED_INGREDIENT_POINTS;
                }
                if catalog
                    .category_of(id)
                    .is_some_and(|c| preferences.likes_category(c))
                {
                    points += LIKED_CATEGORY_POINTS;
                }
                points
            })
            .sum()
    }
}

impl Scoring for MatchScoring {
    fn verdict(
        &self,
        soup: &Soup,
        report: &CookingReport,
        preferences: &PreferenceProfile,
        catalog: &IngredientCatalog,
    ) -> Verdict {
        let total = Self::match_score(soup, preferences, catalog) + report.cooking_score() as i32;

        Verdict {
            score: total as f32,
            reaction: Reaction::from_match_total(total),
        }
    }
}

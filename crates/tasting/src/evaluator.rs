use std::sync::Arc;

use serde::{Deserialize, Serialize};
use soupkitchen_catalog::IngredientCatalog;
use soupkitchen_cooking::{CookingReport, Soup, SoupScorer};
use soupkitchen_shared::Reaction;

use crate::{PreferenceProfile, Scoring, ScoringStrategy, Taster, feedback_tags};

/// One taster's verdict on one soup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReactionResult {
    pub reaction: Reaction,
    pub score: f32,
    pub feedback_tags: Vec<String>,
}

/// Turns a finished soup and a preference profile into a reaction.
///
/// Holds no mutable state; every call is independent.
#[derive(Clone, Debug)]
pub struct Evaluator {
    catalog: Arc<IngredientCatalog>,
    strategy: ScoringStrategy,
}

impl Evaluator {
    pub fn new(catalog: Arc<IngredientCatalog>, strategy: ScoringStrategy) -> Self {
        Evaluator { catalog, strategy }
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    pub fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    pub fn evaluate(
        &self,
        soup: &Soup,
        report: &CookingReport,
        preferences: &PreferenceProfile,
    ) -> ReactionResult {
        let verdict = self
            .strategy
            .verdict(soup, report, preferences, &self.catalog);

        ReactionResult {
            reaction: verdict.reaction,
            score: verdict.score,
            feedback_tags: feedback_tags(verdict.reaction, soup),
        }
    }
}

/// Fills a soup's character scores with one score per seated taster.
pub struct PanelScorer {
    evaluator: Evaluator,
    tasters: Vec<Taster>,
}

impl PanelScorer {
    pub fn new(evaluator: Evaluator, tasters: Vec<Taster>) -> Self {
        PanelScorer { evaluator, tasters }
    }
}

impl SoupScorer for PanelScorer {
    fn score(&self, soup: &Soup, report: &CookingReport) -> Vec<f32> {
        self.tasters
            .iter()
            .map(|taster| {
                self.evaluator
                    .strategy
                    .verdict(soup, report, &taster.preferences, &self.evaluator.catalog)
                    .score
            })
            .collect()
    }
}

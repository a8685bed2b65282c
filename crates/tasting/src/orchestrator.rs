use serde::{Deserialize, Serialize};
use soupkitchen_cooking::{CookingReport, Soup};
use soupkitchen_shared::Reaction;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{Evaluator, ReactionResult, Taster, TastingError, TastingResult, TastingSummary};

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
pub enum TastingState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// A reaction tagged with the taster it came from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TasterReaction {
    pub taster_id: String,
    pub taster_name: String,
    #[serde(flatten)]
    pub result: ReactionResult,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TastingEvent {
    TasterReacted {
        taster_id: String,
        reaction: Reaction,
        score: f32,
    },
    TastingCompleted {
        overall_rating: u8,
    },
}

/// Walks a panel of tasters through one soup, one taster per step.
pub struct TastingSession {
    evaluator: Evaluator,
    tasters: Vec<Taster>,
    state: TastingState,
    soup: Option<Soup>,
    report: CookingReport,
    reactions: Vec<TasterReaction>,
    events: Vec<TastingEvent>,
}

impl TastingSession {
    pub fn new(evaluator: Evaluator, tasters: Vec<Taster>) -> Self {
        TastingSession {
            evaluator,
            tasters,
            state: TastingState::NotStarted,
            soup: None,
            report: CookingReport::default(),
            reactions: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> TastingState {
        self.state
    }

    pub fn tasters(&self) -> &[Taster] {
        &self.tasters
    }

    pub fn reactions(&self) -> &[TasterReaction] {
        &self.reactions
    }

    pub fn soup(&self) -> Option<&Soup> {
        self.soup.as_ref()
    }

    pub fn report(&self) -> &CookingReport {
        &self.report
    }

    pub fn taster(&self, taster_id: &str) -> TastingResult<&Taster> {
        self.tasters
            .iter()
            .find(|t| t.id == taster_id)
            .ok_or_else(|| TastingError::UnknownTaster(taster_id.to_string()))
    }

    /// Reaction of one taster, once they have tasted.
    pub fn reaction_of(&self, taster_id: &str) -> TastingResult<Option<&TasterReaction>> {
        self.taster(taster_id)?;
        Ok(self.reactions.iter().find(|r| r.taster_id == taster_id))
    }

    /// Hands the accumulated change log to the caller.
    pub fn drain_events(&mut self) -> Vec<TastingEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serves a finished soup to the panel.
    ///
    /// An empty panel completes at once.
    pub fn start(&mut self, soup: Soup, report: CookingReport) -> TastingResult<()> {
        self.expect_state("start tasting", TastingState::NotStarted)?;
        if !report.finished {
            tracing::warn!(soup_id = %soup.id, "Tasting an unfinished soup");
            return Err(TastingError::SoupNotFinalized);
        }

        tracing::info!(
            soup_id = %soup.id,
            tasters = self.tasters.len(),
            strategy = %self.evaluator.strategy(),
            "Tasting started"
        );
        self.soup = Some(soup);
        self.report = report;
        self.state = TastingState::InProgress;

        if self.tasters.is_empty() {
            self.complete();
        }
        Ok(())
    }

    /// Lets the next taster taste. Returns their reaction.
    pub fn advance(&mut self) -> TastingResult<TasterReaction> {
        self.expect_state("advance tasting", TastingState::InProgress)?;

        let reaction = self.taste_next()?;
        if self.reactions.len() == self.tasters.len() {
            self.complete();
        }
        Ok(reaction)
    }

    /// Evaluates every remaining taster at once and completes the tasting.
    pub fn skip(&mut self) -> TastingResult<()> {
        self.expect_state("skip tasting", TastingState::InProgress)?;

        while self.reactions.len() < self.tasters.len() {
            self.taste_next()?;
        }
        self.complete();
        Ok(())
    }

    /// Clears all reactions so the same panel can taste again.
    pub fn reset(&mut self) {
        self.state = TastingState::NotStarted;
        self.soup = None;
        self.report = CookingReport::default();
        self.reactions.clear();
    }

    /// `round((cooking score + mean reaction value) / 2)` in `0..=5`, halves
    /// rounding to even.
    ///
    /// Zero until the tasting is completed with at least one taster.
    pub fn overall_rating(&self) -> u8 {
        if self.state != TastingState::Completed || self.reactions.is_empty() {
            return 0;
        }

        let total: u32 = self
            .reactions
            .iter()
            .map(|r| r.result.reaction.value() as u32)
            .sum();
        let mean = total as f32 / self.reactions.len() as f32;
        let rating = ((self.report.cooking_score() as f32 + mean) / 2.0).round_ties_even();

        rating.clamp(0.0, 5.0) as u8
    }

    pub fn summary(&self) -> Option<TastingSummary> {
        if self.state != TastingState::Completed {
            return None;
        }
        let soup = self.soup.clone()?;

        Some(TastingSummary {
            soup,
            strategy: self.evaluator.strategy(),
            cooking_score: self.report.cooking_score(),
            reactions: self.reactions.clone(),
            overall_rating: self.overall_rating(),
        })
    }

    fn taste_next(&mut self) -> TastingResult<TasterReaction> {
        let Some(soup) = self.soup.as_ref() else {
            return Err(TastingError::SoupNotFinalized);
        };
        let Some(taster) = self.tasters.get(self.reactions.len()) else {
            return Err(self.reject("advance tasting"));
        };

        let result = self
            .evaluator
            .evaluate(soup, &self.report, &taster.preferences);
        let reaction = TasterReaction {
            taster_id: taster.id.clone(),
            taster_name: taster.display_name().to_string(),
            result,
        };

        tracing::debug!(
            taster_id = %reaction.taster_id,
            reaction = %reaction.result.reaction,
            score = reaction.result.score,
            "Taster reacted"
        );
        self.events.push(TastingEvent::TasterReacted {
            taster_id: reaction.taster_id.clone(),
            reaction: reaction.result.reaction,
            score: reaction.result.score,
        });
        self.reactions.push(reaction.clone());
        Ok(reaction)
    }

    fn complete(&mut self) {
        self.state = TastingState::Completed;
        let overall_rating = self.overall_rating();
        tracing::info!(
            overall_rating,
            tasters = self.reactions.len(),
            "Tasting completed"
        );
        self.events
            .push(TastingEvent::TastingCompleted { overall_rating });
    }

    fn expect_state(&self, operation: &'static str, expected: TastingState) -> TastingResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.reject(operation))
        }
    }

    fn reject(&self, operation: &'static str) -> TastingError {
        tracing::warn!(operation, state = %self.state, "Invalid tasting transition");
        TastingError::InvalidTransition {
            operation,
            state: self.state,
        }
    }
}

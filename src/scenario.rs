use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use soupkitchen_catalog::IngredientCatalog;
use soupkitchen_cooking::{CookingError, CookingSession};
use soupkitchen_shared::{GameMode, PrepAction};
use soupkitchen_tasting::{
    Evaluator, PanelScorer, Taster, TastingSession, TastingState, TastingSummary, seat_tasters,
};

use crate::config::Config;

/// A scripted cooking session followed by a tasting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Used as the soup name when the steps never finalize.
    #[serde(default)]
    pub name: String,
    /// Overrides the configured game mode.
    #[serde(default)]
    pub game_mode: Option<GameMode>,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub tasters: Vec<Taster>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Select { ingredient: String },
    Deselect,
    Prepare { prep: PrepAction },
    Add { ingredient: String },
    Heat { level: f32 },
    Stir { count: u32 },
    /// Select, prepare, add, heat and stir in one go.
    Round {
        ingredient: String,
        #[serde(default = "default_prep")]
        prep: PrepAction,
        #[serde(default)]
        heat: f32,
        #[serde(default)]
        stirs: u32,
    },
    StartCooking,
    Tick { seconds: f32 },
    Temperature { level: f32 },
    FinishCooking,
    Finalize {
        #[serde(default)]
        name: String,
    },
    Reset,
}

fn default_prep() -> PrepAction {
    PrepAction::Wash
}

/// A step the cooking session turned down.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RejectedStep {
    pub index: usize,
    pub step: Step,
    pub reason: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScenarioOutcome {
    pub summary: TastingSummary,
    pub rejected_steps: Vec<RejectedStep>,
}

impl Scenario {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// Cooks the soup, seats the panel and lets every taster react.
    ///
    /// Rejected steps leave the session untouched and are reported in the
    /// outcome instead of aborting the run.
    pub fn run(
        &self,
        catalog: Arc<IngredientCatalog>,
        config: &Config,
    ) -> anyhow::Result<ScenarioOutcome> {
        let mut rng = match config.tasting.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mode = self.game_mode.unwrap_or(config.tasting.game_mode);
        let tasters = seat_tasters(&self.tasters, mode, &catalog, &mut rng);
        tracing::info!(
            scenario = %self.name,
            %mode,
            seated = tasters.len(),
            steps = self.steps.len(),
            "Running scenario"
        );

        let evaluator = Evaluator::new(catalog.clone(), config.tasting.strategy);
        let scorer = PanelScorer::new(evaluator.clone(), tasters.clone());
        let mut session = CookingSession::new(catalog, config.cooking.clone())
            .with_scorer(Arc::new(scorer));
        session
            .start()
            .context("Fresh cooking session refused to start")?;

        let mut rejected_steps = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            if let Err(e) = apply_step(&mut session, step) {
                rejected_steps.push(RejectedStep {
                    index,
                    step: step.clone(),
                    reason: e.to_string(),
                });
            }
        }

        if !session.is_finalized() {
            session
                .finalize_soup(&self.name)
                .context("Failed to finalize soup")?;
        }

        let soup = session.soup().clone();
        let mut tasting = TastingSession::new(evaluator, tasters);
        tasting
            .start(soup, session.report())
            .context("Failed to start tasting")?;
        if tasting.state() == TastingState::InProgress {
            tasting.skip().context("Failed to finish tasting")?;
        }

        let summary = tasting
            .summary()
            .context("Tasting did not complete")?;

        Ok(ScenarioOutcome {
            summary,
            rejected_steps,
        })
    }
}

fn apply_step(session: &mut CookingSession, step: &Step) -> Result<(), CookingError> {
    match step {
        Step::Select { ingredient } => session.select_ingredient(ingredient),
        Step::Deselect => session.deselect_ingredient(),
        Step::Prepare { prep } => session.perform_prep_action(*prep),
        Step::Add { ingredient } => session.add_ingredient_to_soup(ingredient),
        Step::Heat { level } => session.adjust_heat(*level),
        Step::Stir { count } => session.stir_soup(*count),
        Step::Round {
            ingredient,
            prep,
            heat,
            stirs,
        } => session.cook_round(ingredient, *prep, *heat, *stirs),
        Step::StartCooking => session.start_cooking(),
        Step::Tick { seconds } => {
            session.tick(*seconds);
            Ok(())
        }
        Step::Temperature { level } => session.set_temperature(*level),
        Step::FinishCooking => session.finish_cooking(),
        Step::Finalize { name } => session.finalize_soup(name).map(|_| ()),
        Step::Reset => {
            session.reset_soup();
            session.start()
        }
    }
}

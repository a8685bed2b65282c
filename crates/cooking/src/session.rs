use std::sync::Arc;

use serde::{Deserialize, Serialize};
use soupkitchen_catalog::{IngredientCatalog, IngredientInstance};
use soupkitchen_shared::{PrepAction, Rgba};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{
    CookTimer, CookingError, CookingEvent, CookingReport, CookingResult, CookingState, HeatPhase,
    PhaseChange, STIR_TIME_BONUS, Soup,
};

/// How the session decides the soup is done.
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
pub enum CookingMode {
    /// The player finalizes explicitly; the timer only feeds the cooking score.
    #[default]
    Staged,
    /// The timer reaching completion finalizes the soup, and stirring adds time.
    Timed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CookingConfig {
    pub mode: CookingMode,
    pub min_cooking_time: f32,
    pub max_cooking_time: f32,
    pub default_thickness: f32,
}

impl Default for CookingConfig {
    fn default() -> Self {
        CookingConfig {
            mode: CookingMode::default(),
            min_cooking_time: crate::DEFAULT_MIN_COOKING_TIME,
            max_cooking_time: crate::DEFAULT_MAX_COOKING_TIME,
            default_thickness: crate::DEFAULT_THICKNESS,
        }
    }
}

/// Computes one score per taster when a soup is finalized.
///
/// Implemented by the tasting layer so cooking never depends on it.
pub trait SoupScorer: Send + Sync {
    fn score(&self, soup: &Soup, report: &CookingReport) -> Vec<f32>;
}

/// One cooking session: a state machine over a single soup.
///
/// Misordered calls return an error and leave the session untouched.
pub struct CookingSession {
    catalog: Arc<IngredientCatalog>,
    config: CookingConfig,
    scorer: Option<Arc<dyn SoupScorer>>,
    state: CookingState,
    soup: Soup,
    selected: Option<IngredientInstance>,
    added: Vec<IngredientInstance>,
    heat_level: f32,
    timer: CookTimer,
    events: Vec<CookingEvent>,
}

impl CookingSession {
    pub fn new(catalog: Arc<IngredientCatalog>, config: CookingConfig) -> Self {
        let timer = CookTimer::new(config.min_cooking_time, config.max_cooking_time);
        let soup = Soup::with_thickness(config.default_thickness);

        CookingSession {
            catalog,
            config,
            scorer: None,
            state: CookingState::Idle,
            soup,
            selected: None,
            added: Vec::new(),
            heat_level: 0.0,
            timer,
            events: Vec::new(),
        }
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn SoupScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn set_scorer(&mut self, scorer: Arc<dyn SoupScorer>) {
        self.scorer = Some(scorer);
    }

    pub fn state(&self) -> CookingState {
        self.state
    }

    pub fn soup(&self) -> &Soup {
        &self.soup
    }

    pub fn config(&self) -> &CookingConfig {
        &self.config
    }

    pub fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    pub fn selected(&self) -> Option<&IngredientInstance> {
        self.selected.as_ref()
    }

    /// Instances already in the pot, in the order they went in.
    pub fn added_ingredients(&self) -> &[IngredientInstance] {
        &self.added
    }

    pub fn heat_level(&self) -> f32 {
        self.heat_level
    }

    pub fn timer(&self) -> &CookTimer {
        &self.timer
    }

    pub fn is_finalized(&self) -> bool {
        self.state == CookingState::Completed
    }

    /// Mean of the state-adjusted colours in the pot, fully opaque.
    pub fn average_color(&self) -> Rgba {
        Rgba::average_opaque(self.added.iter().map(IngredientInstance::color))
    }

    pub fn report(&self) -> CookingReport {
        CookingReport {
            finished: self.is_finalized(),
            ingredient_count: self.soup.ingredient_count(),
            elapsed: self.timer.elapsed(),
            min_cooking_time: self.timer.min_cooking_time(),
            max_cooking_time: self.timer.max_cooking_time(),
        }
    }

    pub fn cooking_score(&self) -> u8 {
        self.report().cooking_score()
    }

    /// Hands the accumulated change log to the caller.
    pub fn drain_events(&mut self) -> Vec<CookingEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn start(&mut self) -> CookingResult<()> {
        self.expect_state("start cooking", &[CookingState::Idle])?;
        self.transition(CookingState::SelectingIngredient);
        Ok(())
    }

    pub fn select_ingredient(&mut self, ingredient_id: &str) -> CookingResult<()> {
        self.expect_state("select an ingredient", &[CookingState::SelectingIngredient])?;

        let instance = self.catalog.instantiate(ingredient_id).map_err(|_| {
            tracing::warn!(ingredient_id, "Unknown ingredient");
            CookingError::UnknownIngredient(ingredient_id.to_string())
        })?;

        self.selected = Some(instance);
        self.events.push(CookingEvent::IngredientSelected {
            ingredient_id: ingredient_id.to_string(),
        });
        self.transition(CookingState::PreparingIngredient);
        Ok(())
    }

    /// Puts the selected ingredient back and returns to selection.
    pub fn deselect_ingredient(&mut self) -> CookingResult<()> {
        self.expect_state(
            "deselect an ingredient",
            &[CookingState::PreparingIngredient, CookingState::AddingToSoup],
        )?;

        let instance = self.selected.take().ok_or_else(|| {
            tracing::warn!("Deselect without a selected ingredient");
            CookingError::NoIngredientSelected
        })?;

        self.events.push(CookingEvent::IngredientDeselected {
            ingredient_id: instance.id().to_string(),
        });
        self.transition(CookingState::SelectingIngredient);
        Ok(())
    }

    /// Wash, cut and peel ready the ingredient for the pot; other actions
    /// are recorded but keep the session where it is.
    pub fn perform_prep_action(&mut self, action: PrepAction) -> CookingResult<()> {
        self.expect_state("prepare an ingredient", &[CookingState::PreparingIngredient])?;

        let Some(instance) = self.selected.as_mut() else {
            tracing::warn!(%action, "Prep action without a selected ingredient");
            return Err(CookingError::NoIngredientSelected);
        };

        if action.readies_ingredient() {
            instance.prepare();
        }

        self.events.push(CookingEvent::ActionPerformed {
            ingredient_id: instance.id().to_string(),
            action,
            preparation: instance.state(),
        });

        if action.readies_ingredient() {
            self.transition(CookingState::AddingToSoup);
        }
        Ok(())
    }

    pub fn add_ingredient_to_soup(&mut self, ingredient_id: &str) -> CookingResult<()> {
        self.expect_state("add an ingredient", &[CookingState::AddingToSoup])?;

        if !self.catalog.contains(ingredient_id) {
            tracing::warn!(ingredient_id, "Unknown ingredient");
            return Err(CookingError::UnknownIngredient(ingredient_id.to_string()));
        }

        match self.selected.as_ref() {
            None => {
                tracing::warn!(ingredient_id, "Add without a selected ingredient");
                return Err(CookingError::NoIngredientSelected);
            }
            Some(selected) if selected.id() != ingredient_id => {
                tracing::warn!(
                    ingredient_id,
                    selected = selected.id(),
                    "Added ingredient is not the selected one"
                );
                return Err(CookingError::SelectionMismatch {
                    selected: selected.id().to_string(),
                    requested: ingredient_id.to_string(),
                });
            }
            Some(_) => {}
        }

        let Some(mut instance) = self.selected.take() else {
            return Err(CookingError::NoIngredientSelected);
        };

        if self.timer.phase().is_heating() {
            instance.cook();
        }

        self.soup.add_ingredient(instance.definition());
        self.added.push(instance);

        if let Some(change) = self.timer.ingredient_added() {
            self.record_phase_change(change);
        }

        self.events.push(CookingEvent::IngredientAdded {
            ingredient_id: ingredient_id.to_string(),
            ingredient_count: self.soup.ingredient_count(),
        });
        tracing::debug!(
            ingredient_id,
            count = self.soup.ingredient_count(),
            "Ingredient added to soup"
        );

        self.transition(CookingState::AdjustingHeat);
        Ok(())
    }

    /// Records the heat level for this round. Out of range levels are clamped.
    pub fn adjust_heat(&mut self, level: f32) -> CookingResult<()> {
        self.expect_state("adjust the heat", &[CookingState::AdjustingHeat])?;

        self.heat_level = clamp_unit(level);
        self.events.push(CookingEvent::HeatAdjusted {
            level: self.heat_level,
        });
        self.transition(CookingState::Stirring);
        Ok(())
    }

    pub fn stir_soup(&mut self, count: u32) -> CookingResult<()> {
        self.expect_state("stir the soup", &[CookingState::Stirring])?;

        self.soup.stir(count);
        if self.config.mode == CookingMode::Timed {
            self.timer.bump(STIR_TIME_BONUS);
        }

        self.events.push(CookingEvent::Stirred {
            count,
            thickness: self.soup.thickness,
        });
        self.transition(CookingState::SelectingIngredient);
        Ok(())
    }

    /// Runs one full round for `ingredient_id`.
    ///
    /// The round is checked before anything moves, so a rejected round
    /// leaves the session where it was.
    pub fn cook_round(
        &mut self,
        ingredient_id: &str,
        action: PrepAction,
        heat: f32,
        stirs: u32,
    ) -> CookingResult<()> {
        self.expect_state("cook a round", &[CookingState::SelectingIngredient])?;
        if !self.catalog.contains(ingredient_id) {
            tracing::warn!(ingredient_id, "Unknown ingredient");
            return Err(CookingError::UnknownIngredient(ingredient_id.to_string()));
        }
        if !action.readies_ingredient() {
            tracing::warn!(ingredient_id, %action, "Round prep leaves the ingredient unready");
            return Err(CookingError::PrepNotReadying(action));
        }

        self.select_ingredient(ingredient_id)?;
        self.perform_prep_action(action)?;
        self.add_ingredient_to_soup(ingredient_id)?;
        self.adjust_heat(heat)?;
        self.stir_soup(stirs)
    }

    /// Names the soup, scores it for every taster and completes the session.
    ///
    /// Allowed from any state except `Completed`.
    pub fn finalize_soup(&mut self, name: &str) -> CookingResult<Soup> {
        if self.state == CookingState::Completed {
            return Err(self.reject("finalize the soup"));
        }

        let name = name.trim();
        if !name.is_empty() {
            self.soup.name = name.to_string();
        }
        self.soup.id = ulid::Ulid::new().to_string();
        self.selected = None;

        if let Some(change) = self.timer.finish() {
            self.record_phase_change(change);
        }

        self.transition(CookingState::Completed);

        if let Some(scorer) = self.scorer.as_ref() {
            self.soup.character_scores = scorer.score(&self.soup, &self.report());
        }

        self.events.push(CookingEvent::SoupFinalized {
            soup_id: self.soup.id.clone(),
            name: self.soup.name.clone(),
        });
        tracing::info!(
            soup_id = %self.soup.id,
            name = %self.soup.name,
            ingredients = self.soup.ingredient_count(),
            thickness = self.soup.thickness,
            "Soup finalized"
        );

        Ok(self.soup.clone())
    }

    /// Throws the soup away and goes back to `Idle`. Always succeeds.
    pub fn reset_soup(&mut self) {
        self.soup = Soup::with_thickness(self.config.default_thickness);
        self.selected = None;
        self.added.clear();
        self.heat_level = 0.0;
        self.timer.reset();

        self.events.push(CookingEvent::SoupReset);
        if self.state != CookingState::Idle {
            self.transition(CookingState::Idle);
        }
    }

    pub fn start_cooking(&mut self) -> CookingResult<()> {
        if self.state == CookingState::Completed {
            return Err(self.reject("start the timer"));
        }

        let change = self
            .timer
            .start()
            .ok_or_else(|| self.reject_phase("start the timer"))?;
        self.record_phase_change(change);
        Ok(())
    }

    /// Takes the pot off the heat. In timed mode this also finalizes the soup.
    pub fn finish_cooking(&mut self) -> CookingResult<()> {
        let change = self
            .timer
            .finish()
            .ok_or_else(|| self.reject_phase("finish cooking"))?;
        self.record_phase_change(change);

        if self.config.mode == CookingMode::Timed && self.state != CookingState::Completed {
            let name = self.soup.name.clone();
            self.finalize_soup(&name)?;
        }
        Ok(())
    }

    /// Advances the cooking clock by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if !self.timer.phase().is_heating() || dt.is_nan() || dt <= 0.0 {
            return;
        }

        let changes = self.timer.advance(dt);
        self.events.push(CookingEvent::CookingProgress {
            progress: self.timer.progress(),
        });

        let completed = changes.iter().any(|c| c.to == HeatPhase::Completed);
        for change in changes {
            self.record_phase_change(change);
        }

        if completed
            && self.config.mode == CookingMode::Timed
            && self.state != CookingState::Completed
        {
            let name = self.soup.name.clone();
            if let Err(e) = self.finalize_soup(&name) {
                tracing::warn!(error = %e, "Timed finalize failed");
            }
        }
    }

    /// Sets the cooking speed from a heat level in `[0, 1]`.
    pub fn set_temperature(&mut self, level: f32) -> CookingResult<()> {
        let speed = self
            .timer
            .set_temperature(level)
            .ok_or_else(|| self.reject_phase("set the temperature"))?;

        self.events.push(CookingEvent::TemperatureChanged { speed });
        tracing::debug!(level, speed, "Temperature changed");
        Ok(())
    }

    fn expect_state(
        &self,
        operation: &'static str,
        allowed: &[CookingState],
    ) -> CookingResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(self.reject(operation))
        }
    }

    fn reject(&self, operation: &'static str) -> CookingError {
        tracing::warn!(operation, state = %self.state, "Invalid cooking transition");
        CookingError::InvalidTransition {
            operation,
            state: self.state,
        }
    }

    fn reject_phase(&self, operation: &'static str) -> CookingError {
        let phase = self.timer.phase();
        tracing::warn!(operation, %phase, "Invalid heat phase");
        CookingError::InvalidHeatPhase { operation, phase }
    }

    fn transition(&mut self, to: CookingState) {
        let from = self.state;
        self.state = to;
        tracing::debug!(%from, %to, "Cooking state changed");
        self.events.push(CookingEvent::StateChanged { from, to });
    }

    fn record_phase_change(&mut self, change: PhaseChange) {
        self.events.push(CookingEvent::TimerPhaseChanged {
            from: change.from,
            to: change.to,
        });
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

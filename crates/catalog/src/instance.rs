use std::sync::Arc;

use soupkitchen_shared::{IngredientCategory, PreparationState, Rgba};

use crate::IngredientDefinition;

/// A concrete piece of an ingredient sitting in the selection pool or the pot.
#[derive(Clone, Debug)]
pub struct IngredientInstance {
    definition: Arc<IngredientDefinition>,
    state: PreparationState,
}

impl IngredientInstance {
    pub fn new(definition: Arc<IngredientDefinition>) -> Self {
        Self {
            definition,
            state: PreparationState::Raw,
        }
    }

    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn category(&self) -> IngredientCategory {
        self.definition.category
    }

    pub fn definition(&self) -> &IngredientDefinition {
        &self.definition
    }

    pub fn state(&self) -> PreparationState {
        self.state
    }

    /// Raw to Prepared. Returns false when the instance is past Raw.
    pub fn prepare(&mut self) -> bool {
        if self.state != PreparationState::Raw {
            return false;
        }

        self.transition(PreparationState::Prepared);
        true
    }

    /// Raw or Prepared to Cooked. Returns false when already cooked.
    pub fn cook(&mut self) -> bool {
        if self.state == PreparationState::Cooked {
            return false;
        }

        self.transition(PreparationState::Cooked);
        true
    }

    pub fn nutrition(&self) -> f32 {
        self.definition.nutrition_value * self.state.nutrition_multiplier()
    }

    pub fn flavor(&self) -> f32 {
        self.definition.flavor * self.state.flavor_multiplier()
    }

    pub fn color(&self) -> Rgba {
        self.definition
            .base_color
            .scale_rgb(self.state.color_multiplier())
    }

    fn transition(&mut self, next: PreparationState) {
        tracing::debug!(
            ingredient_id = %self.definition.id,
            from = %self.state,
            to = %next,
            "Ingredient state changed"
        );
        self.state = next;
    }
}

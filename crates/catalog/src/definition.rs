use serde::{Deserialize, Serialize};
use soupkitchen_shared::{IngredientCategory, Rgba};
use validator::Validate;

/// Static description of an ingredient kind, loaded once with the catalog.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IngredientDefinition {
    #[validate(length(min = 1))]
    pub id: String,
    /// Display name. Falls back to the id when empty.
    #[serde(default)]
    pub name: String,
    pub category: IngredientCategory,
    #[validate(nested)]
    pub base_color: Rgba,
    #[validate(range(min = 0.0))]
    pub nutrition_value: f32,
    #[validate(range(min = 0.0))]
    pub flavor: f32,
    /// Season and event tags, opaque to the engine.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl IngredientDefinition {
    pub fn new(
        id: impl Into<String>,
        category: IngredientCategory,
        base_color: Rgba,
        nutrition_value: f32,
        flavor: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category,
            base_color,
            nutrition_value,
            flavor,
            tags: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

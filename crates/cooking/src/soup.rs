use serde::{Deserialize, Serialize};
use soupkitchen_catalog::IngredientDefinition;
use soupkitchen_shared::{IngredientCategory, Rgba, TasteCategory, TasteProfile};

pub const DEFAULT_SOUP_NAME: &str = "New Soup";
pub const DEFAULT_THICKNESS: f32 = 0.2;
pub const MIN_STIRRED_THICKNESS: f32 = 0.1;
pub const MAX_THICKNESS: f32 = 1.0;
pub const STIR_THICKNESS_STEP: f32 = 0.05;
/// Weight given to a new ingredient's colour when blending it into the pot.
pub const COLOR_BLEND_WEIGHT: f32 = 0.3;

/// The soup being built during a cooking session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Soup {
    /// Empty until the soup is finalized.
    pub id: String,
    pub name: String,
    pub color: Rgba,
    pub thickness: f32,
    pub ingredient_ids: Vec<String>,
    pub taste_profile: TasteProfile,
    pub nutrition_value: f32,
    /// One score per taster, filled in at finalize.
    pub character_scores: Vec<f32>,
}

impl Default for Soup {
    fn default() -> Self {
        Soup::with_thickness(DEFAULT_THICKNESS)
    }
}

impl Soup {
    pub fn with_thickness(thickness: f32) -> Self {
        Soup {
            id: String::new(),
            name: DEFAULT_SOUP_NAME.to_string(),
            color: Rgba::TRANSPARENT,
            thickness: thickness.clamp(0.0, MAX_THICKNESS),
            ingredient_ids: Vec::new(),
            taste_profile: TasteProfile::default(),
            nutrition_value: 0.0,
            character_scores: Vec::new(),
        }
    }

    /// Folds an ingredient's colour, nutrition and taste into the soup.
    pub fn add_ingredient(&mut self, ingredient: &IngredientDefinition) {
        self.color = self.color.lerp(ingredient.base_color, COLOR_BLEND_WEIGHT);
        self.nutrition_value += ingredient.nutrition_value;

        for (taste, delta) in taste_delta(ingredient.category) {
            self.taste_profile.add(*taste, *delta);
        }

        self.ingredient_ids.push(ingredient.id.clone());
    }

    /// Thickens by one step per stir, staying within `[0.1, 1.0]`.
    pub fn stir(&mut self, count: u32) {
        self.thickness = (self.thickness + STIR_THICKNESS_STEP * count as f32)
            .clamp(MIN_STIRRED_THICKNESS, MAX_THICKNESS);
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredient_ids.len()
    }

    pub fn contains(&self, ingredient_id: &str) -> bool {
        self.ingredient_ids.iter().any(|id| id == ingredient_id)
    }

    /// Ingredient ids without repeats, in the order they first went in.
    pub fn distinct_ingredient_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.ingredient_ids.len());
        for id in &self.ingredient_ids {
            if !seen.contains(&id.as_str()) {
                seen.push(id);
            }
        }
        seen
    }
}

/// Fixed taste contribution of each ingredient category.
pub fn taste_delta(category: IngredientCategory) -> &'static [(TasteCategory, f32)] {
    match category {
        IngredientCategory::Vegetable => &[(TasteCategory::Umami, 0.2)],
        IngredientCategory::Fruit => &[(TasteCategory::Sweet, 0.3), (TasteCategory::Sour, 0.1)],
        IngredientCategory::Protein => &[(TasteCategory::Umami, 0.4)],
        IngredientCategory::Seasoning => &[(TasteCategory::Salty, 0.3)],
        IngredientCategory::Special => &[],
    }
}

use soupkitchen_shared::{IngredientCategory, Rgba};

use crate::IngredientDefinition;

use IngredientCategory::*;

/// `(id, name, category, rgb, nutrition, flavor)`
const STAPLES: [(&str, &str, IngredientCategory, [f32; 3], f32, f32); 30] = [
    ("carrot", "Carrot", Vegetable, [0.93, 0.53, 0.13], 1.2, 0.8),
    ("onion", "Onion", Vegetable, [0.95, 0.9, 0.75], 0.8, 1.1),
    ("potato", "Potato", Vegetable, [0.85, 0.75, 0.5], 1.5, 0.6),
    ("tomato", "Tomato", Vegetable, [0.9, 0.2, 0.15], 1.0, 1.0),
    ("broccoli", "Broccoli", Vegetable, [0.2, 0.6, 0.2], 1.6, 0.7),
    ("spinach", "Spinach", Vegetable, [0.15, 0.45, 0.15], 1.8, 0.5),
    ("pumpkin", "Pumpkin", Vegetable, [0.95, 0.6, 0.1], 1.3, 0.9),
    ("radish", "Radish", Vegetable, [0.95, 0.95, 0.9], 0.7, 0.8),
    ("cucumber", "Cucumber", Vegetable, [0.45, 0.7, 0.3], 0.5, 0.4),
    ("corn", "Corn", Vegetable, [0.98, 0.85, 0.25], 1.1, 1.0),
    ("apple", "Apple", Fruit, [0.85, 0.1, 0.1], 0.9, 1.2),
    ("banana", "Banana", Fruit, [0.98, 0.9, 0.35], 1.1, 1.1),
    ("strawberry", "Strawberry", Fruit, [0.9, 0.1, 0.25], 0.8, 1.3),
    ("orange", "Orange", Fruit, [1.0, 0.6, 0.0], 1.0, 1.2),
    ("grape", "Grape", Fruit, [0.45, 0.15, 0.5], 0.7, 1.1),
    ("pineapple", "Pineapple", Fruit, [0.98, 0.85, 0.3], 0.9, 1.4),
    ("chicken", "Chicken", Protein, [0.95, 0.85, 0.7], 2.0, 1.2),
    ("beef", "Beef", Protein, [0.6, 0.2, 0.15], 2.2, 1.5),
    ("egg", "Egg", Protein, [1.0, 0.9, 0.5], 1.8, 0.9),
    ("tofu", "Tofu", Protein, [0.98, 0.97, 0.9], 1.5, 0.5),
    ("shrimp", "Shrimp", Protein, [0.98, 0.55, 0.45], 1.7, 1.3),
    ("fish", "Fish", Protein, [0.8, 0.82, 0.85], 1.9, 1.2),
    ("cheese", "Cheese", Protein, [1.0, 0.85, 0.4], 1.4, 1.4),
    ("beans", "Beans", Protein, [0.55, 0.3, 0.2], 1.6, 0.7),
    ("salt", "Salt", Seasoning, [1.0, 1.0, 1.0], 0.0, 2.0),
    ("sugar", "Sugar", Seasoning, [1.0, 1.0, 0.98], 0.2, 2.0),
    ("soy_sauce", "Soy sauce", Seasoning, [0.25, 0.12, 0.05], 0.3, 1.8),
    ("miso", "Miso", Seasoning, [0.7, 0.5, 0.25], 0.6, 1.7),
    ("butter", "Butter", Seasoning, [1.0, 0.95, 0.6], 0.5, 1.5),
    ("olive_oil", "Olive oil", Seasoning, [0.75, 0.75, 0.2], 0.4, 1.2),
];

pub(crate) fn definitions() -> Vec<IngredientDefinition> {
    STAPLES
        .iter()
        .map(|(id, name, category, [r, g, b], nutrition, flavor)| {
            let mut definition = IngredientDefinition::new(
                *id,
                *category,
                Rgba::new(*r, *g, *b, 1.0),
                *nutrition,
                *flavor,
            );
            definition.name = name.to_string();
            definition
        })
        .collect()
}

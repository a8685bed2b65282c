//! Plain text rendering for the command line.

use std::fmt::{self, Write};

use soupkitchen_catalog::IngredientCatalog;

use crate::ScenarioOutcome;

pub fn catalog_table(catalog: &IngredientCatalog) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{:<14} {:<16} {:<10} {:>9} {:>7}",
        "ID", "NAME", "CATEGORY", "NUTRITION", "FLAVOR"
    )?;
    for ingredient in catalog.iter() {
        let category: &str = ingredient.category.as_ref();
        writeln!(
            out,
            "{:<14} {:<16} {:<10} {:>9.1} {:>7.1}",
            ingredient.id,
            ingredient.display_name(),
            category,
            ingredient.nutrition_value,
            ingredient.flavor
        )?;
    }
    Ok(out)
}

pub fn outcome_text(outcome: &ScenarioOutcome) -> Result<String, fmt::Error> {
    let summary = &outcome.summary;
    let soup = &summary.soup;
    let mut out = String::new();

    writeln!(out, "Soup: {} ({})", soup.name, soup.id)?;
    writeln!(out, "Ingredients: {}", soup.ingredient_ids.join(", "))?;
    writeln!(
        out,
        "Thickness: {:.2}  Nutrition: {:.1}",
        soup.thickness, soup.nutrition_value
    )?;
    writeln!(out, "Cooking score: {}", summary.cooking_score)?;

    for rejected in &outcome.rejected_steps {
        writeln!(out, "Skipped step {}: {}", rejected.index + 1, rejected.reason)?;
    }

    for reaction in &summary.reactions {
        writeln!(
            out,
            "{}: {} ({:.2}) [{}]",
            reaction.taster_name,
            reaction.result.reaction,
            reaction.result.score,
            reaction.result.feedback_tags.join(", ")
        )?;
    }

    writeln!(out, "Overall rating: {}/5", summary.overall_rating)?;
    Ok(out)
}

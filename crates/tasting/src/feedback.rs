use soupkitchen_cooking::Soup;
use soupkitchen_shared::{Reaction, TasteCategory};

pub const THICKNESS_HIGH: f32 = 0.7;
pub const THICKNESS_LOW: f32 = 0.3;
pub const MANY_INGREDIENTS: usize = 5;
pub const FEW_INGREDIENTS: usize = 3;
/// A taste must be stronger than this to be called out.
pub const DOMINANT_TASTE_THRESHOLD: f32 = 0.3;

/// Ordered feedback keys for a reaction: the reaction itself, then
/// thickness, ingredient count and dominant taste.
pub fn feedback_tags(reaction: Reaction, soup: &Soup) -> Vec<String> {
    let mut tags = vec![reaction.feedback_key().to_string()];

    let thickness = if soup.thickness > THICKNESS_HIGH {
        "feedback.thickness.high"
    } else if soup.thickness < THICKNESS_LOW {
        "feedback.thickness.low"
    } else {
        "feedback.thickness.good"
    };
    tags.push(thickness.to_string());

    let count = soup.ingredient_count();
    if count > MANY_INGREDIENTS {
        tags.push("feedback.ingredients.many".to_string());
    } else if count < FEW_INGREDIENTS {
        tags.push("feedback.ingredients.few".to_string());
    }

    if let Some(taste) = soup.taste_profile.dominant(DOMINANT_TASTE_THRESHOLD) {
        tags.push(taste_key(taste));
    }

    tags
}

fn taste_key(taste: TasteCategory) -> String {
    format!("feedback.taste.{taste}")
}

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Five-band verdict of a taster, best first.
///
/// Also known by the happiness scale: VeryHappy, Happy, Neutral, Unhappy,
/// VeryUnhappy. Both spellings parse.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Reaction {
    #[strum(to_string = "Love", serialize = "VeryHappy")]
    #[serde(alias = "VeryHappy")]
    Love,
    #[strum(to_string = "Like", serialize = "Happy")]
    #[serde(alias = "Happy")]
    Like,
    Neutral,
    #[strum(to_string = "Dislike", serialize = "Unhappy")]
    #[serde(alias = "Unhappy")]
    Dislike,
    #[strum(to_string = "Disgust", serialize = "VeryUnhappy")]
    #[serde(alias = "VeryUnhappy")]
    Disgust,
}

impl Reaction {
    /// Band for a continuous score on the 0-5 scale. Lower bounds are inclusive.
    pub fn from_continuous_score(score: f32) -> Self {
        if score >= 4.5 {
            Reaction::Love
        } else if score >= 3.5 {
            Reaction::Like
        } else if score >= 2.5 {
            Reaction::Neutral
        } else if score >= 1.5 {
            Reaction::Dislike
        } else {
            Reaction::Disgust
        }
    }

    /// Band for an integer match total. Lower bounds are inclusive.
    pub fn from_match_total(total: i32) -> Self {
        if total >= 6 {
            Reaction::Love
        } else if total >= 3 {
            Reaction::Like
        } else if total >= 0 {
            Reaction::Neutral
        } else if total >= -3 {
            Reaction::Dislike
        } else {
            Reaction::Disgust
        }
    }

    /// 5 for Love down to 1 for Disgust.
    pub fn value(&self) -> u8 {
        match self {
            Reaction::Love => 5,
            Reaction::Like => 4,
            Reaction::Neutral => 3,
            Reaction::Dislike => 2,
            Reaction::Disgust => 1,
        }
    }

    pub fn feedback_key(&self) -> &'static str {
        match self {
            Reaction::Love => "feedback.love",
            Reaction::Like => "feedback.like",
            Reaction::Neutral => "feedback.neutral",
            Reaction::Dislike => "feedback.dislike",
            Reaction::Disgust => "feedback.disgust",
        }
    }
}

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

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
pub enum GameMode {
    /// Free choice of ingredients, one to three tasters.
    #[default]
    FreePlay,
    Mission,
    Recipe,
    /// Cooperative play, always two tasters.
    ParentChild,
}

impl GameMode {
    /// Number of tasters seated in this mode, `None` when it is drawn at random.
    pub fn fixed_taster_count(&self) -> Option<usize> {
        match self {
            GameMode::Mission | GameMode::Recipe => Some(1),
            GameMode::ParentChild => Some(2),
            GameMode::FreePlay => None,
        }
    }
}

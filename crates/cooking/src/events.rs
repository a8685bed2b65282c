use serde::{Deserialize, Serialize};
use soupkitchen_shared::{PrepAction, PreparationState};

use crate::{CookingState, HeatPhase};

/// Change log of a cooking session, drained by the presentation layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CookingEvent {
    StateChanged {
        from: CookingState,
        to: CookingState,
    },
    IngredientSelected {
        ingredient_id: String,
    },
    IngredientDeselected {
        ingredient_id: String,
    },
    ActionPerformed {
        ingredient_id: String,
        action: PrepAction,
        preparation: PreparationState,
    },
    IngredientAdded {
        ingredient_id: String,
        ingredient_count: usize,
    },
    HeatAdjusted {
        level: f32,
    },
    Stirred {
        count: u32,
        thickness: f32,
    },
    TimerPhaseChanged {
        from: HeatPhase,
        to: HeatPhase,
    },
    CookingProgress {
        progress: f32,
    },
    TemperatureChanged {
        speed: f32,
    },
    SoupFinalized {
        soup_id: String,
        name: String,
    },
    SoupReset,
}

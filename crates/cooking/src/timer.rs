use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DEFAULT_MIN_COOKING_TIME: f32 = 10.0;
pub const DEFAULT_MAX_COOKING_TIME: f32 = 60.0;
/// Seconds added to the clock by one stir while the pot is on.
pub const STIR_TIME_BONUS: f32 = 2.0;

/// Where the pot is on the heat.
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
pub enum HeatPhase {
    #[default]
    Idle,
    Preparing,
    Cooking,
    Simmering,
    Completed,
}

impl HeatPhase {
    /// The clock only runs in these phases.
    pub fn is_heating(&self) -> bool {
        matches!(self, HeatPhase::Cooking | HeatPhase::Simmering)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: HeatPhase,
    pub to: HeatPhase,
}

/// Cooking clock driven by caller supplied time deltas.
#[derive(Clone, Debug, PartialEq)]
pub struct CookTimer {
    phase: HeatPhase,
    elapsed: f32,
    min_cooking_time: f32,
    max_cooking_time: f32,
    speed: f32,
}

impl Default for CookTimer {
    fn default() -> Self {
        CookTimer::new(DEFAULT_MIN_COOKING_TIME, DEFAULT_MAX_COOKING_TIME)
    }
}

impl CookTimer {
    pub fn new(min_cooking_time: f32, max_cooking_time: f32) -> Self {
        CookTimer {
            phase: HeatPhase::Idle,
            elapsed: 0.0,
            min_cooking_time,
            max_cooking_time,
            speed: 1.0,
        }
    }

    pub fn phase(&self) -> HeatPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn min_cooking_time(&self) -> f32 {
        self.min_cooking_time
    }

    pub fn max_cooking_time(&self) -> f32 {
        self.max_cooking_time
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Fraction of the maximum cooking time already spent, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.max_cooking_time <= 0.0 {
            return 0.0;
        }
        (self.elapsed / self.max_cooking_time).clamp(0.0, 1.0)
    }

    /// The first ingredient in the pot moves it from idle to preparing.
    pub fn ingredient_added(&mut self) -> Option<PhaseChange> {
        match self.phase {
            HeatPhase::Idle => Some(self.enter(HeatPhase::Preparing)),
            _ => None,
        }
    }

    /// Puts the pot on the heat and restarts the clock.
    pub fn start(&mut self) -> Option<PhaseChange> {
        match self.phase {
            HeatPhase::Idle | HeatPhase::Preparing => {
                self.elapsed = 0.0;
                Some(self.enter(HeatPhase::Cooking))
            }
            _ => None,
        }
    }

    /// Takes the pot off the heat, keeping the elapsed time.
    pub fn finish(&mut self) -> Option<PhaseChange> {
        if self.phase.is_heating() {
            Some(self.enter(HeatPhase::Completed))
        } else {
            None
        }
    }

    /// Advances the clock by `dt` seconds scaled by the current speed.
    ///
    /// Negative deltas are ignored. One tick can pass both thresholds.
    pub fn advance(&mut self, dt: f32) -> Vec<PhaseChange> {
        let mut changes = Vec::new();
        if !self.phase.is_heating() || dt.is_nan() || dt <= 0.0 {
            return changes;
        }

        self.elapsed += dt * self.speed;

        if self.phase == HeatPhase::Cooking && self.elapsed >= self.min_cooking_time {
            changes.push(self.enter(HeatPhase::Simmering));
        }
        if self.phase == HeatPhase::Simmering && self.elapsed >= self.max_cooking_time {
            changes.push(self.enter(HeatPhase::Completed));
        }

        changes
    }

    /// Adds time without checking thresholds; the next tick picks them up.
    pub fn bump(&mut self, seconds: f32) -> bool {
        if self.phase.is_heating() && seconds > 0.0 {
            self.elapsed += seconds;
            return true;
        }
        false
    }

    /// Maps a heat level in `[0, 1]` to a clock speed in `[0.5, 2.0]`.
    ///
    /// Only allowed while the pot is on; returns the new speed.
    pub fn set_temperature(&mut self, level: f32) -> Option<f32> {
        if !self.phase.is_heating() {
            return None;
        }
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
        self.speed = 0.5 + 1.5 * level;
        Some(self.speed)
    }

    pub fn reset(&mut self) {
        *self = CookTimer::new(self.min_cooking_time, self.max_cooking_time);
    }

    fn enter(&mut self, to: HeatPhase) -> PhaseChange {
        let change = PhaseChange {
            from: self.phase,
            to,
        };
        self.phase = to;
        tracing::debug!(from = %change.from, to = %change.to, elapsed = self.elapsed, "Heat phase changed");
        change
    }
}

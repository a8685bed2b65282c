use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// The fixed set of taste categories tracked on a soup.
///
/// Declaration order is the iteration order everywhere, which is what
/// breaks ties when looking for the dominant taste.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TasteCategory {
    Sweet,
    Sour,
    Salty,
    Bitter,
    Umami,
}

impl TasteCategory {
    pub const COUNT: usize = 5;

    fn index(self) -> usize {
        self as usize
    }
}

/// Taste intensities, each kept in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TasteLevels", into = "TasteLevels")]
pub struct TasteProfile {
    levels: [f32; TasteCategory::COUNT],
}

impl TasteProfile {
    pub fn get(&self, taste: TasteCategory) -> f32 {
        self.levels[taste.index()]
    }

    pub fn set(&mut self, taste: TasteCategory, value: f32) {
        self.levels[taste.index()] = value.clamp(0.0, 1.0);
    }

    pub fn add(&mut self, taste: TasteCategory, delta: f32) {
        let current = self.get(taste);
        self.set(taste, current + delta);
    }

    /// Iterates `(taste, intensity)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TasteCategory, f32)> + '_ {
        TasteCategory::VARIANTS
            .iter()
            .map(move |taste| (*taste, self.get(*taste)))
    }

    pub fn mean(&self) -> f32 {
        self.levels.iter().sum::<f32>() / TasteCategory::COUNT as f32
    }

    /// `1 - mean absolute deviation` of the intensities.
    ///
    /// A perfectly even profile (including an empty one) scores 1.0.
    pub fn balance(&self) -> f32 {
        let mean = self.mean();
        let deviation: f32 = self.levels.iter().map(|v| (v - mean).abs()).sum();
        1.0 - deviation / TasteCategory::COUNT as f32
    }

    /// The strongest taste if it is above `threshold`.
    ///
    /// Ties go to the category declared first.
    pub fn dominant(&self, threshold: f32) -> Option<TasteCategory> {
        let mut dominant = None;
        let mut max = 0.0_f32;
        for (taste, value) in self.iter() {
            if value > max {
                max = value;
                dominant = Some(taste);
            }
        }

        if max > threshold { dominant } else { None }
    }
}

/// Named-field form used on the wire.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct TasteLevels {
    #[serde(default)]
    sweet: f32,
    #[serde(default)]
    sour: f32,
    #[serde(default)]
    salty: f32,
    #[serde(default)]
    bitter: f32,
    #[serde(default)]
    umami: f32,
}

impl From<TasteLevels> for TasteProfile {
    fn from(levels: TasteLevels) -> Self {
        let mut profile = TasteProfile::default();
        profile.set(TasteCategory::Sweet, levels.sweet);
        profile.set(TasteCategory::Sour, levels.sour);
        profile.set(TasteCategory::Salty, levels.salty);
        profile.set(TasteCategory::Bitter, levels.bitter);
        profile.set(TasteCategory::Umami, levels.umami);
        profile
    }
}

impl From<TasteProfile> for TasteLevels {
    fn from(profile: TasteProfile) -> Self {
        TasteLevels {
            sweet: profile.get(TasteCategory::Sweet),
            sour: profile.get(TasteCategory::Sour),
            salty: profile.get(TasteCategory::Salty),
            bitter: profile.get(TasteCategory::Bitter),
            umami: profile.get(TasteCategory::Umami),
        }
    }
}

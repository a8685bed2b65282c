use serde::{Deserialize, Serialize};

use crate::PreferenceProfile;

/// A character who tastes the soup.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Taster {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preferences: PreferenceProfile,
}

impl Taster {
    pub fn new(id: impl Into<String>, preferences: PreferenceProfile) -> Self {
        Taster {
            id: id.into(),
            preferences,
            ..Default::default()
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

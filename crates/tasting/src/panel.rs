use rand::Rng;
use soupkitchen_catalog::IngredientCatalog;
use soupkitchen_shared::GameMode;

use crate::{PreferenceProfile, Taster};

pub const MAX_FREE_PLAY_TASTERS: usize = 3;

/// How many tasters sit at the table for `mode`.
pub fn panel_size<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> usize {
    mode.fixed_taster_count()
        .unwrap_or_else(|| rng.random_range(1..=MAX_FREE_PLAY_TASTERS))
}

/// Seats tasters from the roster in order, as many as the mode allows.
///
/// Tasters with an empty preference profile get a generated one.
pub fn seat_tasters<R: Rng + ?Sized>(
    roster: &[Taster],
    mode: GameMode,
    catalog: &IngredientCatalog,
    rng: &mut R,
) -> Vec<Taster> {
    let size = panel_size(mode, rng).min(roster.len());
    if size < roster.len() {
        tracing::debug!(%mode, seated = size, roster = roster.len(), "Panel is smaller than roster");
    }

    roster
        .iter()
        .take(size)
        .cloned()
        .map(|mut taster| {
            if taster.preferences.is_empty() {
                taster.preferences = PreferenceProfile::generate(catalog, rng);
            }
            taster
        })
        .collect()
}

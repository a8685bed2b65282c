use std::sync::Arc;

use soupkitchen_catalog::IngredientCatalog;
use soupkitchen_cooking::{
    CookingConfig, CookingError, CookingEvent, CookingMode, CookingReport, CookingSession,
    CookingState, HeatPhase, Soup, SoupScorer,
};
use soupkitchen_shared::{PrepAction, PreparationState, Rgba, TasteCategory};

fn catalog() -> Arc<IngredientCatalog> {
    Arc::new(IngredientCatalog::builtin())
}

fn started(config: CookingConfig) -> CookingSession {
    let mut session = CookingSession::new(catalog(), config);
    session.start().unwrap();
    session
}

struct FixedScorer(Vec<f32>);

impl SoupScorer for FixedScorer {
    fn score(&self, soup: &Soup, report: &CookingReport) -> Vec<f32> {
        assert!(report.finished, "Scorer only runs on a finished soup");
        assert_eq!(report.ingredient_count, soup.ingredient_count());
        self.0.clone()
    }
}

#[test]
fn test_session_starts_idle_with_default_soup() {
    let session = CookingSession::new(catalog(), CookingConfig::default());
    assert_eq!(session.state(), CookingState::Idle);
    assert_eq!(session.soup(), &Soup::default());
    assert_eq!(session.cooking_score(), 0);
}

#[test]
fn test_misordered_calls_leave_session_untouched() {
    let mut session = started(CookingConfig::default());
    let before = session.soup().clone();

    assert!(matches!(
        session.stir_soup(3),
        Err(CookingError::InvalidTransition { state: CookingState::SelectingIngredient, .. })
    ));
    assert!(session.adjust_heat(0.5).is_err());
    assert!(session.add_ingredient_to_soup("carrot").is_err());
    assert!(session.perform_prep_action(PrepAction::Cut).is_err());
    assert!(session.deselect_ingredient().is_err());
    assert!(session.start().is_err(), "Already started");

    assert_eq!(session.soup(), &before);
    assert_eq!(session.state(), CookingState::SelectingIngredient);
}

#[test]
fn test_rejected_round_leaves_session_untouched() {
    let mut session = started(CookingConfig::default());
    session.drain_events();

    assert_eq!(
        session.cook_round("carrot", PrepAction::Boil, 0.5, 2),
        Err(CookingError::PrepNotReadying(PrepAction::Boil))
    );
    assert_eq!(
        session.cook_round("unicorn", PrepAction::Cut, 0.5, 2),
        Err(CookingError::UnknownIngredient("unicorn".to_string()))
    );
    assert_eq!(session.state(), CookingState::SelectingIngredient);
    assert!(session.selected().is_none());
    assert_eq!(session.soup(), &Soup::default());
    assert!(session.drain_events().is_empty());

    session.cook_round("onion", PrepAction::Cut, 0.5, 2).unwrap();
    assert_eq!(session.soup().ingredient_ids, vec!["onion".to_string()]);
}

#[test]
fn test_round_mid_selection_is_rejected() {
    let mut session = started(CookingConfig::default());
    session.select_ingredient("carrot").unwrap();

    assert!(matches!(
        session.cook_round("onion", PrepAction::Cut, 0.5, 2),
        Err(CookingError::InvalidTransition { state: CookingState::PreparingIngredient, .. })
    ));
    assert_eq!(session.selected().map(|i| i.id()), Some("carrot"));
}

#[test]
fn test_unknown_ingredient_is_rejected() {
    let mut session = started(CookingConfig::default());
    assert_eq!(
        session.select_ingredient("dragon_fruit"),
        Err(CookingError::UnknownIngredient("dragon_fruit".to_string()))
    );
    assert_eq!(session.state(), CookingState::SelectingIngredient);
    assert!(session.selected().is_none());
}

#[test]
fn test_adding_a_different_ingredient_than_selected() {
    let mut session = started(CookingConfig::default());
    session.select_ingredient("carrot").unwrap();
    session.perform_prep_action(PrepAction::Wash).unwrap();

    let result = session.add_ingredient_to_soup("apple");
    assert_eq!(
        result,
        Err(CookingError::SelectionMismatch {
            selected: "carrot".to_string(),
            requested: "apple".to_string(),
        })
    );
    assert_eq!(session.state(), CookingState::AddingToSoup);
    assert!(session.soup().ingredient_ids.is_empty());
}

#[test]
fn test_deselect_returns_to_selection() {
    let mut session = started(CookingConfig::default());
    session.select_ingredient("onion").unwrap();
    session.perform_prep_action(PrepAction::Peel).unwrap();
    session.deselect_ingredient().unwrap();

    assert_eq!(session.state(), CookingState::SelectingIngredient);
    assert!(session.selected().is_none());
    assert!(session.soup().ingredient_ids.is_empty());
}

#[test]
fn test_carrot_and_apple_soup() {
    let mut session = started(CookingConfig::default());
    session.cook_round("carrot", PrepAction::Cut, 0.5, 3).unwrap();
    session.cook_round("apple", PrepAction::Peel, 0.5, 3).unwrap();

    let soup = session.soup();
    assert_eq!(soup.ingredient_ids, vec!["carrot".to_string(), "apple".to_string()]);
    assert!((soup.thickness - 0.5).abs() < 1e-6);
    assert!((soup.taste_profile.get(TasteCategory::Umami) - 0.2).abs() < 1e-6);
    assert!((soup.taste_profile.get(TasteCategory::Sweet) - 0.3).abs() < 1e-6);
    assert!((soup.taste_profile.get(TasteCategory::Sour) - 0.1).abs() < 1e-6);
    assert_eq!(soup.taste_profile.get(TasteCategory::Salty), 0.0);

    let expected_nutrition: f32 = ["carrot", "apple"]
        .iter()
        .map(|id| session.catalog().get(id).unwrap().nutrition_value)
        .sum();
    assert!((soup.nutrition_value - expected_nutrition).abs() < 1e-5);
}

#[test]
fn test_attributes_stay_in_range_for_any_ingredient_sequence() {
    let catalog = catalog();
    let ids: Vec<String> = catalog.ids().map(str::to_string).collect();
    let mut session = CookingSession::new(catalog, CookingConfig::default());
    session.start().unwrap();

    for id in ids.iter().cycle().take(90) {
        session.cook_round(id, PrepAction::Wash, 0.9, 4).unwrap();
        let soup = session.soup();
        assert!((0.0..=1.0).contains(&soup.thickness));
        for (taste, value) in soup.taste_profile.iter() {
            assert!((0.0..=1.0).contains(&value), "{taste} out of range: {value}");
        }
    }
}

#[test]
fn test_stirring_is_monotonic_and_floored() {
    let config = CookingConfig {
        default_thickness: 0.0,
        ..CookingConfig::default()
    };
    let mut session = started(config);
    let mut last = 0.0;
    for stirs in [0, 1, 5, 0, 20, 3] {
        session.cook_round("potato", PrepAction::Peel, 0.3, stirs).unwrap();
        let thickness = session.soup().thickness;
        assert!(thickness >= 0.1, "Stirring never drops below 0.1");
        assert!(thickness >= last, "Thickness went down after {stirs} stirs");
        assert!(thickness <= 1.0);
        last = thickness;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn test_reset_twice_gives_same_default_soup() {
    let mut session = started(CookingConfig::default());
    session.cook_round("tofu", PrepAction::Cut, 0.4, 2).unwrap();
    session.finalize_soup("Tofu Soup").unwrap();

    session.reset_soup();
    let first = session.soup().clone();
    session.reset_soup();

    assert_eq!(session.soup(), &first);
    assert_eq!(first, Soup::default());
    assert_eq!(session.state(), CookingState::Idle);
    assert_eq!(session.timer().phase(), HeatPhase::Idle);
    assert!(session.added_ingredients().is_empty());
}

#[test]
fn test_finalize_names_and_scores_soup() {
    let mut session = started(CookingConfig::default())
        .with_scorer(Arc::new(FixedScorer(vec![4.0, 1.5])));
    session.cook_round("chicken", PrepAction::Wash, 0.6, 1).unwrap();

    let soup = session.finalize_soup("  Chicken Broth ").unwrap();
    assert_eq!(soup.name, "Chicken Broth");
    assert!(!soup.id.is_empty());
    assert_eq!(soup.character_scores, vec![4.0, 1.5]);
    assert_eq!(session.state(), CookingState::Completed);
    assert_eq!(session.soup(), &soup);

    assert!(
        session.finalize_soup("Again").is_err(),
        "A finished soup cannot be finalized twice"
    );
    assert_eq!(session.soup().name, "Chicken Broth");
}

#[test]
fn test_finalize_keeps_default_name_when_blank() {
    let mut session = started(CookingConfig::default());
    let soup = session.finalize_soup("   ").unwrap();
    assert_eq!(soup.name, "New Soup");
    assert!(soup.character_scores.is_empty());
    assert_eq!(session.cooking_score(), 1, "Finished empty soup gets the base point");
}

#[test]
fn test_finalize_mid_round() {
    let mut session = started(CookingConfig::default());
    session.select_ingredient("miso").unwrap();
    session.finalize_soup("").unwrap();
    assert!(session.selected().is_none());
    assert!(session.soup().ingredient_ids.is_empty());
}

#[test]
fn test_instances_track_preparation() {
    let mut session = started(CookingConfig::default());
    session.cook_round("carrot", PrepAction::Cut, 0.5, 1).unwrap();
    session.start_cooking().unwrap();
    session.cook_round("beef", PrepAction::Wash, 0.5, 1).unwrap();

    let states: Vec<PreparationState> = session
        .added_ingredients()
        .iter()
        .map(|i| i.state())
        .collect();
    assert_eq!(states, vec![PreparationState::Prepared, PreparationState::Cooked]);
}

#[test]
fn test_average_color_is_opaque() {
    let mut session = started(CookingConfig::default());
    session.cook_round("carrot", PrepAction::Cut, 0.5, 1).unwrap();
    session.cook_round("pumpkin", PrepAction::Peel, 0.5, 1).unwrap();

    let color = session.average_color();
    assert_eq!(color.a, 1.0);
    assert_ne!(color, Rgba::TRANSPARENT);
}

#[test]
fn test_timer_scores_window_bonus() {
    let mut session = started(CookingConfig::default());
    session.cook_round("egg", PrepAction::Wash, 0.5, 1).unwrap();
    session.cook_round("corn", PrepAction::Wash, 0.5, 1).unwrap();
    session.cook_round("salt", PrepAction::Wash, 0.5, 1).unwrap();
    assert_eq!(session.timer().phase(), HeatPhase::Preparing);

    session.start_cooking().unwrap();
    session.tick(5.0);
    assert_eq!(session.timer().phase(), HeatPhase::Cooking);
    session.tick(10.0);
    assert_eq!(session.timer().phase(), HeatPhase::Simmering);

    session.finalize_soup("Egg Drop").unwrap();
    assert_eq!(session.timer().phase(), HeatPhase::Completed);
    assert_eq!(session.cooking_score(), 5);
}

#[test]
fn test_timed_mode_finalizes_when_timer_completes() {
    let config = CookingConfig {
        mode: CookingMode::Timed,
        min_cooking_time: 2.0,
        max_cooking_time: 4.0,
        ..CookingConfig::default()
    };
    let mut session = started(config);
    session.cook_round("fish", PrepAction::Wash, 0.5, 0).unwrap();
    session.start_cooking().unwrap();
    session.set_temperature(1.0).unwrap();

    session.tick(1.0);
    assert_eq!(session.state(), CookingState::SelectingIngredient);
    session.tick(1.0);

    assert_eq!(session.state(), CookingState::Completed);
    assert!(!session.soup().id.is_empty());
    assert_eq!(session.soup().name, "New Soup");
}

#[test]
fn test_timer_operations_reject_wrong_phase() {
    let mut session = started(CookingConfig::default());
    assert!(matches!(
        session.finish_cooking(),
        Err(CookingError::InvalidHeatPhase { phase: HeatPhase::Idle, .. })
    ));
    assert!(session.set_temperature(0.5).is_err());

    session.tick(100.0);
    assert_eq!(session.timer().elapsed(), 0.0);
}

#[test]
fn test_events_are_drained_in_order() {
    let mut session = started(CookingConfig::default());
    session.drain_events();

    session.select_ingredient("apple").unwrap();
    session.perform_prep_action(PrepAction::Peel).unwrap();
    session.add_ingredient_to_soup("apple").unwrap();

    let events = session.drain_events();
    assert!(matches!(events[0], CookingEvent::IngredientSelected { .. }));
    assert!(events.contains(&CookingEvent::IngredientAdded {
        ingredient_id: "apple".to_string(),
        ingredient_count: 1,
    }));
    assert!(events.contains(&CookingEvent::TimerPhaseChanged {
        from: HeatPhase::Idle,
        to: HeatPhase::Preparing,
    }));
    assert_eq!(
        events.last(),
        Some(&CookingEvent::StateChanged {
            from: CookingState::AddingToSoup,
            to: CookingState::AdjustingHeat,
        })
    );
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_progress_events_while_cooking() {
    let mut session = started(CookingConfig::default());
    session.start_cooking().unwrap();
    session.drain_events();

    session.tick(30.0);
    let events = session.drain_events();
    assert_eq!(events[0], CookingEvent::CookingProgress { progress: 0.5 });
}

#[test]
fn test_event_serializes_with_type_tag() {
    let json = serde_json::to_value(CookingEvent::HeatAdjusted { level: 0.5 }).unwrap();
    assert_eq!(json["type"], "heat_adjusted");
    assert_eq!(json["level"], 0.5);
}

use soupkitchen_catalog::{CatalogError, IngredientCatalog, IngredientDefinition};
use soupkitchen_shared::{IngredientCategory, PreparationState, Rgba};

fn record(id: &str, category: IngredientCategory) -> IngredientDefinition {
    IngredientDefinition::new(id, category, Rgba::new(0.5, 0.5, 0.5, 1.0), 1.0, 1.0)
}

#[test]
fn test_builtin_catalog_has_thirty_staples() {
    let catalog = IngredientCatalog::builtin();

    assert_eq!(catalog.len(), 30);
    assert_eq!(catalog.by_category(IngredientCategory::Vegetable).count(), 10);
    assert_eq!(catalog.by_category(IngredientCategory::Fruit).count(), 6);
    assert_eq!(catalog.by_category(IngredientCategory::Protein).count(), 8);
    assert_eq!(catalog.by_category(IngredientCategory::Seasoning).count(), 6);
    assert_eq!(catalog.by_category(IngredientCategory::Special).count(), 0);
}

#[test]
fn test_builtin_categories_come_from_explicit_table() {
    let catalog = IngredientCatalog::builtin();

    // Boundary kinds of each group, where an ordinal mapping would be fragile
    assert_eq!(catalog.category_of("corn"), Some(IngredientCategory::Vegetable));
    assert_eq!(catalog.category_of("apple"), Some(IngredientCategory::Fruit));
    assert_eq!(catalog.category_of("pineapple"), Some(IngredientCategory::Fruit));
    assert_eq!(catalog.category_of("chicken"), Some(IngredientCategory::Protein));
    assert_eq!(catalog.category_of("beans"), Some(IngredientCategory::Protein));
    assert_eq!(catalog.category_of("salt"), Some(IngredientCategory::Seasoning));
    assert_eq!(catalog.category_of("dragon_fruit"), None);
}

#[test]
fn test_listing_preserves_load_order() {
    let catalog = IngredientCatalog::from_records(vec![
        record("zucchini", IngredientCategory::Vegetable),
        record("anchovy", IngredientCategory::Protein),
        record("mint", IngredientCategory::Seasoning),
    ])
    .unwrap();

    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["zucchini", "anchovy", "mint"]);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let result = IngredientCatalog::from_records(vec![
        record("carrot", IngredientCategory::Vegetable),
        record("carrot", IngredientCategory::Fruit),
    ]);

    assert!(matches!(result, Err(CatalogError::DuplicateIngredient(id)) if id == "carrot"));
}

#[test]
fn test_negative_nutrition_is_rejected() {
    let mut bad = record("ghost_pepper", IngredientCategory::Seasoning);
    bad.nutrition_value = -1.0;

    let result = IngredientCatalog::from_records(vec![bad]);
    assert!(matches!(result, Err(CatalogError::InvalidIngredient { id, .. }) if id == "ghost_pepper"));
}

#[test]
fn test_color_out_of_range_is_rejected() {
    let mut bad = record("neon_kale", IngredientCategory::Vegetable);
    bad.base_color = Rgba::new(2.0, 0.0, 0.0, 1.0);

    assert!(IngredientCatalog::from_records(vec![bad]).is_err());
}

#[test]
fn test_empty_id_is_rejected() {
    let result = IngredientCatalog::from_records(vec![record("", IngredientCategory::Fruit)]);
    assert!(matches!(result, Err(CatalogError::InvalidIngredient { .. })));
}

#[test]
fn test_from_json_records() {
    let json = r#"[
        {
            "id": "leek",
            "name": "Leek",
            "category": "Vegetable",
            "base_color": { "r": 0.6, "g": 0.8, "b": 0.4, "a": 1.0 },
            "nutrition_value": 1.1,
            "flavor": 0.9,
            "tags": ["winter"]
        },
        {
            "id": "star_candy",
            "category": "Special",
            "base_color": { "r": 1.0, "g": 0.9, "b": 0.2, "a": 1.0 },
            "nutrition_value": 0.0,
            "flavor": 2.5
        }
    ]"#;

    let catalog = IngredientCatalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);

    let leek = catalog.get("leek").unwrap();
    assert_eq!(leek.display_name(), "Leek");
    assert_eq!(leek.tags, vec!["winter".to_string()]);

    let candy = catalog.get("star_candy").unwrap();
    assert_eq!(candy.category, IngredientCategory::Special);
    assert_eq!(candy.display_name(), "star_candy");
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let result = IngredientCatalog::from_json("[{ \"id\": 3 }]");
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_instantiate_spawns_raw_instance() {
    let catalog = IngredientCatalog::builtin();

    let carrot = catalog.instantiate("carrot").unwrap();
    assert_eq!(carrot.state(), PreparationState::Raw);
    assert_eq!(carrot.category(), IngredientCategory::Vegetable);

    let missing = catalog.instantiate("unicorn");
    assert!(matches!(missing, Err(CatalogError::UnknownIngredient(id)) if id == "unicorn"));
}

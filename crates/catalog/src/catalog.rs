use std::collections::HashMap;
use std::sync::Arc;

use soupkitchen_shared::IngredientCategory;
use validator::Validate;

use crate::{CatalogError, CatalogResult, IngredientDefinition, IngredientInstance};

/// Read-only registry of every ingredient kind available in a session.
///
/// Keeps the load order so listings are stable.
#[derive(Clone, Debug, Default)]
pub struct IngredientCatalog {
    definitions: Vec<Arc<IngredientDefinition>>,
    index: HashMap<String, usize>,
}

impl IngredientCatalog {
    /// Builds a catalog, rejecting invalid records and duplicate ids.
    pub fn from_records(records: Vec<IngredientDefinition>) -> CatalogResult<Self> {
        let mut catalog = IngredientCatalog::default();

        for record in records {
            record
                .validate()
                .map_err(|source| CatalogError::InvalidIngredient {
                    id: record.id.clone(),
                    source,
                })?;

            if catalog.index.contains_key(&record.id) {
                return Err(CatalogError::DuplicateIngredient(record.id));
            }

            catalog
                .index
                .insert(record.id.clone(), catalog.definitions.len());
            catalog.definitions.push(Arc::new(record));
        }

        tracing::debug!(count = catalog.definitions.len(), "Ingredient catalog loaded");

        Ok(catalog)
    }

    /// Parses a JSON array of ingredient records.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let records: Vec<IngredientDefinition> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The thirty kitchen staples every session starts with.
    pub fn builtin() -> Self {
        Self::from_records(crate::builtin::definitions())
            .unwrap_or_else(|e| unreachable!("builtin catalog is valid: {e}"))
    }

    pub fn get(&self, id: &str) -> Option<&Arc<IngredientDefinition>> {
        self.index.get(id).map(|i| &self.definitions[*i])
    }

    /// Like [`IngredientCatalog::get`] but reports unknown ids as an error.
    pub fn require(&self, id: &str) -> CatalogResult<Arc<IngredientDefinition>> {
        self.get(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownIngredient(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn category_of(&self, id: &str) -> Option<IngredientCategory> {
        self.get(id).map(|d| d.category)
    }

    /// Spawns a fresh raw instance of `id`.
    pub fn instantiate(&self, id: &str) -> CatalogResult<IngredientInstance> {
        self.require(id).map(IngredientInstance::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<IngredientDefinition>> {
        self.definitions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.id.as_str())
    }

    pub fn by_category(
        &self,
        category: IngredientCategory,
    ) -> impl Iterator<Item = &Arc<IngredientDefinition>> {
        self.definitions
            .iter()
            .filter(move |d| d.category == category)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

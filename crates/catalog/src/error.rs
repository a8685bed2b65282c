use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid ingredient '{id}': {source}")]
    InvalidIngredient {
        id: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Duplicate ingredient id: {0}")]
    DuplicateIngredient(String),

    #[error("Ingredient not found: {0}")]
    UnknownIngredient(String),

    #[error("Failed to parse ingredient records: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Catalog error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog or looking up categories
#[derive(Error, Debug)]
pub enum MenuError {
    /// No category carries the requested id
    #[error("Category not found: '{id}'")]
    NotFound { id: String },

    /// No item with that name exists in the category
    #[error("Item '{name}' not found in category '{category}'")]
    ItemNotFound { category: String, name: String },

    /// A category was declared with an empty id
    #[error("Category at position {position} has an empty id")]
    EmptyCategoryId { position: usize },

    /// A category tried to use the id reserved for the synthetic union tab
    #[error("Category id '{id}' is reserved for the synthetic all-items category")]
    ReservedCategoryId { id: String },

    /// Two categories share an id
    #[error("Duplicate category id '{id}'")]
    DuplicateCategoryId { id: String },

    /// An item was declared without a name
    #[error("Item at position {position} in category '{category}' has an empty name")]
    EmptyItemName { category: String, position: usize },

    /// Failed to read the catalog file
    #[error("Failed to read catalog from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog YAML could not be parsed
    #[error("Failed to parse catalog YAML")]
    Parse {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Catalog JSON could not be parsed
    #[error("Failed to parse catalog JSON")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl MenuError {
    /// Whether the error comes from a lookup miss rather than a broken catalog
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MenuError::NotFound { .. } | MenuError::ItemNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

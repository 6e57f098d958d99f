//! Catalog file parsing and validation
//!
//! Catalogs are static YAML or JSON files. Parsing is followed by a
//! validation pass that enforces the category id invariants; anything
//! softer, such as duplicate item names, only warns.

use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use super::{Catalog, ALL_CATEGORY_ID};
use crate::error::{MenuError, Result};

/// On-disk catalog encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => CatalogFormat::Json,
            _ => CatalogFormat::Yaml,
        }
    }
}

impl Catalog {
    /// Parse and validate a catalog from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_yaml_ng::from_str(content).map_err(|source| MenuError::Parse { source })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|source| MenuError::Json { source })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog in the given format
    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self> {
        match format {
            CatalogFormat::Yaml => Self::from_yaml(content),
            CatalogFormat::Json => Self::from_json(content),
        }
    }

    /// Load a catalog from a file path; the extension selects the format
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = CatalogFormat::from_path(path);
        debug!(path = %path.display(), ?format, "Parsing catalog file");
        Self::parse(&content, format)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml_ng::to_string(self).context("Failed to serialize catalog")
    }

    /// Check the catalog invariants
    ///
    /// Category ids must be non-empty, unique and never the reserved
    /// `"all"` id. Item names must be non-empty. Duplicate item names
    /// inside a category are allowed and only logged.
    pub fn validate(&self) -> Result<()> {
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for (position, category) in self.categories.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(MenuError::EmptyCategoryId { position });
            }
            if category.id == ALL_CATEGORY_ID {
                return Err(MenuError::ReservedCategoryId {
                    id: category.id.clone(),
                });
            }
            if !seen_ids.insert(category.id.as_str()) {
                return Err(MenuError::DuplicateCategoryId {
                    id: category.id.clone(),
                });
            }

            let mut seen_names: HashSet<&str> = HashSet::new();
            for (item_position, item) in category.items.iter().enumerate() {
                if item.name.trim().is_empty() {
                    return Err(MenuError::EmptyItemName {
                        category: category.id.clone(),
                        position: item_position,
                    });
                }
                if !seen_names.insert(item.name.as_str()) {
                    warn!(
                        category = %category.id,
                        item = %item.name,
                        "Duplicate item name within category"
                    );
                }
            }
        }

        Ok(())
    }
}

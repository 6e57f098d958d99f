//! Catalog Store - read-only lookups over a loaded catalog

use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::{Catalog, Category, MenuItem, Restaurant, ALL_CATEGORY_ID, ALL_CATEGORY_NAME};
use crate::dietary::DietaryTagIndex;
use crate::error::{MenuError, Result};
use crate::query::{filter_items, MenuQuery};

/// A category selector as shown in the tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl CategoryTab<'_> {
    /// Whether this is the synthetic all-items tab
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

impl Catalog {
    /// Restaurant display metadata
    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Resolve a stored category by id
    ///
    /// The synthetic `"all"` id is never stored, so it resolves to
    /// `NotFound` here; the query engine owns that union.
    pub fn get_category(&self, id: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| MenuError::NotFound { id: id.to_string() })
    }

    /// Stored categories in catalog order
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Tab bar entries: the synthetic all-items tab, then each category
    pub fn tabs(&self) -> Vec<CategoryTab<'_>> {
        std::iter::once(CategoryTab {
            id: ALL_CATEGORY_ID,
            name: ALL_CATEGORY_NAME,
        })
        .chain(self.categories.iter().map(|category| CategoryTab {
            id: &category.id,
            name: &category.name,
        }))
        .collect()
    }

    /// Every item, category by category, in catalog order
    pub fn all_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }

    /// Get total number of categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Get total number of items across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Find an item by name (case-insensitive) for the detail view
    ///
    /// With `"all"` every category is searched in order and the first
    /// match wins.
    pub fn find_item(&self, category_id: &str, name: &str) -> Result<&MenuItem> {
        let wanted = name.trim().to_lowercase();
        let matches = |item: &&MenuItem| item.name.to_lowercase() == wanted;

        let found = if category_id == ALL_CATEGORY_ID {
            self.all_items().find(matches)
        } else {
            self.get_category(category_id)?.items.iter().find(matches)
        };

        found.ok_or_else(|| MenuError::ItemNotFound {
            category: category_id.to_string(),
            name: name.to_string(),
        })
    }
}

/// A loaded catalog together with its dietary tag index
///
/// The index is derived once here because the catalog never changes
/// after load.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    catalog: Catalog,
    dietary_tags: DietaryTagIndex,
}

impl MenuCatalog {
    /// Wrap an already validated catalog
    pub fn new(catalog: Catalog) -> Self {
        let dietary_tags = DietaryTagIndex::build(&catalog);
        Self {
            catalog,
            dietary_tags,
        }
    }

    /// Load, validate and index a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = Catalog::from_file(path)?;
        let menu = Self::new(catalog);
        info!(
            path = %path.display(),
            categories = menu.catalog.category_count(),
            items = menu.catalog.item_count(),
            dietary_tags = menu.dietary_tags.len(),
            "Loaded menu catalog"
        );
        Ok(menu)
    }

    /// Access the underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Distinct dietary tags across the catalog, first-seen order
    pub fn dietary_tags(&self) -> &DietaryTagIndex {
        &self.dietary_tags
    }

    /// Evaluate a query against the catalog
    pub fn filter(&self, query: &MenuQuery) -> Vec<&MenuItem> {
        filter_items(
            &self.catalog,
            query.category.as_str(),
            &query.search,
            &query.dietary,
        )
    }
}

impl From<Catalog> for MenuCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

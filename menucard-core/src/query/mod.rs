//! Query Engine - the visible item list for a category, search text and
//! dietary filter set
//!
//! The engine is stateless: every call recomputes from the immutable
//! catalog. Filters compose by intersection and only ever remove items,
//! so the candidate order established by category resolution survives.

mod state;

pub use state::BrowseState;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, MenuItem, ALL_CATEGORY_ID};

/// Which categories contribute candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    /// The synthetic union of every category in catalog order
    #[default]
    All,
    /// A single stored category
    Id(String),
}

impl CategorySelection {
    pub fn parse(id: &str) -> Self {
        if id == ALL_CATEGORY_ID {
            CategorySelection::All
        } else {
            CategorySelection::Id(id.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORY_ID,
            CategorySelection::Id(id) => id,
        }
    }
}

impl From<String> for CategorySelection {
    fn from(id: String) -> Self {
        CategorySelection::parse(&id)
    }
}

impl From<&str> for CategorySelection {
    fn from(id: &str) -> Self {
        CategorySelection::parse(id)
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        selection.as_str().to_string()
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete query: category selection, search text, dietary tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuQuery {
    pub category: CategorySelection,

    #[serde(default)]
    pub search: String,

    /// Tags an item must all carry
    #[serde(default)]
    pub dietary: Vec<String>,
}

impl MenuQuery {
    /// Query showing everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, id: impl Into<CategorySelection>) -> Self {
        self.category = id.into();
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn dietary<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Evaluate against a catalog
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuItem> {
        filter_items(catalog, self.category.as_str(), &self.search, &self.dietary)
    }
}

/// Compute the visible items for a query
///
/// 1. `"all"` yields every category's items in catalog order; any other
///    id yields that category's items, or nothing if no category matches.
/// 2. Non-blank search text keeps items whose name or description contains
///    it, case-insensitively.
/// 3. Non-empty dietary filters keep items carrying every requested tag.
///
/// An empty result is a normal outcome, never an error.
pub fn filter_items<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    category_id: &str,
    search_text: &str,
    dietary_filters: &[S],
) -> Vec<&'a MenuItem> {
    let candidates = resolve_candidates(catalog, category_id);
    let needle = normalize_search(search_text);

    let items: Vec<&MenuItem> = candidates
        .into_iter()
        .filter(|item| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(item, needle))
        })
        .filter(|item| item.has_all_tags(dietary_filters))
        .collect();

    debug!(
        category = category_id,
        search = search_text,
        dietary_filters = dietary_filters.len(),
        results = items.len(),
        "Evaluated menu query"
    );

    items
}

/// Candidate set before text and dietary filtering
fn resolve_candidates<'a>(catalog: &'a Catalog, category_id: &str) -> Vec<&'a MenuItem> {
    if category_id == ALL_CATEGORY_ID {
        return catalog.all_items().collect();
    }

    match catalog.get_category(category_id) {
        Ok(category) => category.items.iter().collect(),
        // A stale or mistyped tab id shows no items rather than failing
        Err(_) => {
            debug!(category = category_id, "Unknown category, no candidates");
            Vec::new()
        }
    }
}

/// Lowercased search needle; `None` when the text is blank
///
/// Surrounding whitespace only decides whether a search applies. A
/// non-blank needle is matched exactly as typed.
fn normalize_search(search_text: &str) -> Option<String> {
    if search_text.trim().is_empty() {
        None
    } else {
        Some(search_text.to_lowercase())
    }
}

/// Substring match on name or description; `needle` is already lowercase
fn matches_search(item: &MenuItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle) || item.description.to_lowercase().contains(needle)
}

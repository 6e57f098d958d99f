//! Caller-owned browse state
//!
//! Holds the selected tab, the search box and the active dietary
//! toggles for one browsing session. The engine never stores this;
//! each session keeps its own and passes it in on every evaluation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{filter_items, CategorySelection, MenuQuery};
use crate::catalog::{Catalog, MenuItem};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseState {
    active_category: CategorySelection,
    search_text: String,
    dietary_filters: Vec<String>,
}

impl BrowseState {
    /// Fresh session: all items, no search, no dietary filters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> &CategorySelection {
        &self.active_category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Active dietary filters in the order they were switched on
    pub fn dietary_filters(&self) -> &[String] {
        &self.dietary_filters
    }

    pub fn select_category(&mut self, id: impl Into<CategorySelection>) {
        self.active_category = id.into();
        trace!(category = %self.active_category, "Selected category");
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Switch a dietary filter off if active, otherwise on
    ///
    /// Returns whether the filter is active afterwards.
    pub fn toggle_dietary(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.dietary_filters.iter().position(|t| t == tag) {
            self.dietary_filters.remove(pos);
            trace!(tag, "Dietary filter off");
            false
        } else {
            self.dietary_filters.push(tag.to_string());
            trace!(tag, "Dietary filter on");
            true
        }
    }

    pub fn is_dietary_active(&self, tag: &str) -> bool {
        self.dietary_filters.iter().any(|t| t == tag)
    }

    /// Clear the search text and dietary filters; the tab stays selected
    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.dietary_filters.clear();
    }

    /// Whether any search text or dietary filter narrows the view
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty() || !self.dietary_filters.is_empty()
    }

    /// Snapshot the state as a query value
    pub fn to_query(&self) -> MenuQuery {
        MenuQuery {
            category: self.active_category.clone(),
            search: self.search_text.clone(),
            dietary: self.dietary_filters.clone(),
        }
    }

    /// Items visible under the current state
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuItem> {
        filter_items(
            catalog,
            self.active_category.as_str(),
            &self.search_text,
            &self.dietary_filters,
        )
    }
}

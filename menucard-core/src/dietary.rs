//! Dietary Tag Index and badge styling
//!
//! The index is the set of distinct dietary tags across every item in
//! the catalog. It keeps first-seen order (category order, then item
//! order, then tag order) so filter controls render reproducibly.

use std::collections::HashSet;

use serde::Serialize;
use tracing::trace;

use crate::catalog::Catalog;

/// Distinct dietary tags in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DietaryTagIndex {
    tags: Vec<String>,
}

impl DietaryTagIndex {
    /// Walk every item of every category and collect its tags once
    pub fn build(catalog: &Catalog) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut tags = Vec::new();

        for item in catalog.all_items() {
            for tag in &item.dietary {
                // Blank tags carry no meaning for a filter toggle
                if tag.is_empty() {
                    continue;
                }
                if seen.insert(tag.as_str()) {
                    tags.push(tag.clone());
                }
            }
        }

        trace!(count = tags.len(), "Built dietary tag index");
        Self { tags }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a DietaryTagIndex {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Compute the dietary tag index for a catalog
pub fn all_dietary_tags(catalog: &Catalog) -> DietaryTagIndex {
    DietaryTagIndex::build(catalog)
}

/// Display colour of a dietary badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Green,
    Emerald,
    Blue,
    Red,
    Gray,
}

impl BadgeStyle {
    /// Colour name used in JSON output and legends
    pub fn color_name(&self) -> &'static str {
        match self {
            BadgeStyle::Green => "green",
            BadgeStyle::Emerald => "emerald",
            BadgeStyle::Blue => "blue",
            BadgeStyle::Red => "red",
            BadgeStyle::Gray => "gray",
        }
    }
}

/// Badge style for a dietary tag; unknown tags get gray
pub fn badge_style(tag: &str) -> BadgeStyle {
    match tag {
        "vegetarian" => BadgeStyle::Green,
        "vegan" => BadgeStyle::Emerald,
        "gluten-free" => BadgeStyle::Blue,
        "spicy" => BadgeStyle::Red,
        _ => BadgeStyle::Gray,
    }
}

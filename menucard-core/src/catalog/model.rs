//! Catalog data model
//!
//! Mirrors the catalog file layout: restaurant metadata plus an ordered
//! list of categories, each holding an ordered list of items.

use serde::{Deserialize, Serialize};

/// Opening hours shown when the catalog does not declare any
pub const DEFAULT_HOURS: &str = "Open Daily: 11:30 AM - 10:00 PM";

/// The full static menu dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Restaurant display metadata
    pub restaurant: Restaurant,

    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Restaurant metadata; opaque display strings, never validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,

    /// WiFi network name
    #[serde(default)]
    pub wifi: String,

    /// Opening hours line
    #[serde(default)]
    pub hours: Option<String>,

    /// Allergy and pricing notice printed under the menu
    #[serde(default)]
    pub notice: Option<String>,
}

/// A named grouping of menu items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, distinct from the display name
    pub id: String,

    /// Display name
    pub name: String,

    /// Items in stored order
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A single dish on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Pre-formatted display price, e.g. "$24"
    pub price: String,

    /// Dietary tags such as "vegetarian" or "gluten-free"
    #[serde(default)]
    pub dietary: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,

    /// Image reference; `None` means the item has no picture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Restaurant {
    /// Opening hours, falling back to the house default
    pub fn hours_display(&self) -> &str {
        self.hours.as_deref().unwrap_or(DEFAULT_HOURS)
    }
}

impl MenuItem {
    /// Whether the item carries the given dietary tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary.iter().any(|t| t == tag)
    }

    /// Whether the item carries every tag in `tags`
    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|tag| self.has_tag(tag.as_ref()))
    }

    /// Dietary tags as a comma-separated string
    pub fn dietary_display(&self) -> String {
        self.dietary.join(", ")
    }

    /// Truncate description to first line
    pub fn short_description(&self) -> &str {
        self.description
            .lines()
            .next()
            .unwrap_or(&self.description)
            .trim()
    }
}

impl Category {
    /// Number of items stored in this category
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

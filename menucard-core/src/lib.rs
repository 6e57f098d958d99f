//! Menucard core library exports

pub mod catalog;
pub mod config;
pub mod dietary;
pub mod error;
pub mod query;

pub use catalog::{Catalog, Category, MenuCatalog, MenuItem, Restaurant, ALL_CATEGORY_ID};
pub use dietary::{all_dietary_tags, badge_style, BadgeStyle, DietaryTagIndex};
pub use error::{MenuError, Result};
pub use query::{filter_items, BrowseState, CategorySelection, MenuQuery};

//! Menucard Catalog - static menu data and category lookups
//!
//! This module owns the restaurant's menu as loaded from a catalog file
//! and answers category lookups. The catalog is read-only after load.
//!
//! # Overview
//!
//! ```text
//! menu.yaml / menu.json
//!     │
//!     ▼
//! Catalog::from_file      ← parse + validate (unique ids, reserved "all")
//!     │
//!     ▼
//! MenuCatalog             ← catalog + dietary tag index computed once
//!     │
//!     ├── get_category / list_categories / tabs
//!     └── query::filter_items → visible item list
//! ```

mod loader;
mod model;
mod store;

pub use loader::CatalogFormat;
pub use model::{Catalog, Category, MenuItem, Restaurant, DEFAULT_HOURS};
pub use store::{CategoryTab, MenuCatalog};

/// Reserved id of the synthetic category that unions every stored category
pub const ALL_CATEGORY_ID: &str = "all";

/// Display name of the synthetic all-items tab
pub const ALL_CATEGORY_NAME: &str = "All Items";

//! Shared fixtures for menucard-core integration tests

#![allow(dead_code)]

use anyhow::Result;
use menucard_core::{Catalog, Category, MenuItem, Restaurant};
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn item(name: &str, description: &str, price: &str, dietary: &[&str]) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        dietary: dietary.iter().map(|t| t.to_string()).collect(),
        ingredients: None,
        image: None,
    }
}

pub fn category(id: &str, name: &str, items: Vec<MenuItem>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

pub fn restaurant() -> Restaurant {
    Restaurant {
        name: "Trattoria Bella".to_string(),
        tagline: "Authentic Italian Cuisine".to_string(),
        phone: "(555) 123-4567".to_string(),
        address: "123 Main Street".to_string(),
        wifi: "Bella-Guest".to_string(),
        hours: None,
        notice: None,
    }
}

/// A small Italian menu with overlapping dietary tags
pub fn trattoria() -> Catalog {
    Catalog {
        restaurant: restaurant(),
        categories: vec![
            category(
                "starters",
                "Starters",
                vec![
                    item(
                        "Bruschetta",
                        "Grilled bread topped with tomato, garlic and basil",
                        "$9",
                        &["vegetarian", "vegan"],
                    ),
                    item(
                        "Arancini",
                        "Crispy risotto balls with mozzarella",
                        "$11",
                        &["vegetarian"],
                    ),
                    item(
                        "Calamari Fritti",
                        "Fried squid with spicy tomato dip",
                        "$14",
                        &["spicy"],
                    ),
                ],
            ),
            category(
                "mains",
                "Main Courses",
                vec![
                    item(
                        "Spaghetti Carbonara",
                        "Egg yolk, pecorino and guanciale",
                        "$24",
                        &[],
                    ),
                    item(
                        "Margherita Pizza",
                        "San Marzano tomato, mozzarella and basil",
                        "$20",
                        &["vegetarian"],
                    ),
                    item(
                        "Penne Arrabbiata",
                        "Penne in a fiery tomato sauce",
                        "$18",
                        &["vegetarian", "vegan", "spicy"],
                    ),
                    item(
                        "Risotto ai Funghi",
                        "Arborio rice with wild mushrooms",
                        "$22",
                        &["vegetarian", "gluten-free"],
                    ),
                ],
            ),
            category(
                "desserts",
                "Desserts",
                vec![
                    item(
                        "Tiramisu",
                        "Espresso-soaked ladyfingers with mascarpone",
                        "$10",
                        &["vegetarian"],
                    ),
                    item(
                        "Panna Cotta",
                        "Vanilla cream with berry compote",
                        "$9",
                        &["vegetarian", "gluten-free"],
                    ),
                ],
            ),
        ],
    }
}

/// Write a catalog to `dir/name` as YAML and return the path
pub fn write_catalog(dir: &Path, name: &str, catalog: &Catalog) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, catalog.to_yaml()?)?;
    Ok(path)
}

pub fn names(items: &[&MenuItem]) -> Vec<String> {
    items.iter().map(|i| i.name.clone()).collect()
}

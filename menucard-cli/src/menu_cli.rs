//! Menucard CLI commands
//!
//! Presentation layer over the core engine: restaurant info, category
//! tabs, the dietary filter legend, the filtered item list and the item
//! detail view.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::{Color, Colorize};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use menucard_core::config::CatalogSource;
use menucard_core::{badge_style, BadgeStyle, BrowseState, MenuCatalog, MenuItem, ALL_CATEGORY_ID};

#[derive(Subcommand, Debug)]
pub enum MenuCommand {
    /// Show restaurant name, contact details and opening hours
    Info,

    /// List category tabs with their item counts
    Categories {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List every dietary tag present on the menu
    Tags {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the items visible for a category, search text and dietary filters
    Browse {
        /// Category id, or "all" for every category
        #[clap(long, short, default_value = ALL_CATEGORY_ID)]
        category: String,

        /// Case-insensitive text matched against name and description
        #[clap(long, short, default_value = "")]
        search: String,

        /// Dietary tag the item must carry (repeatable or comma-separated)
        #[clap(long = "diet", short = 'd', value_delimiter = ',')]
        dietary: Vec<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the full detail of a single item
    Show {
        /// Category id, or "all" to search every category
        category: String,

        /// Item name (case-insensitive)
        name: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Load and validate the catalog, then report what it contains
    Validate {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

impl MenuCommand {
    pub fn execute(self, menu: &MenuCatalog, source: &CatalogSource) -> Result<()> {
        match self {
            MenuCommand::Info => execute_info(menu),
            MenuCommand::Categories { json } => execute_categories(menu, json),
            MenuCommand::Tags { json } => execute_tags(menu, json),
            MenuCommand::Browse {
                category,
                search,
                dietary,
                json,
            } => execute_browse(menu, &category, &search, &dietary, json),
            MenuCommand::Show {
                category,
                name,
                json,
            } => execute_show(menu, &category, &name, json),
            MenuCommand::Validate { json } => execute_validate(menu, source, json),
        }
    }
}

fn execute_info(menu: &MenuCatalog) -> Result<()> {
    let restaurant = menu.catalog().restaurant();

    println!("{}", restaurant.name);
    if !restaurant.tagline.is_empty() {
        println!("{}", restaurant.tagline);
    }
    println!();
    println!("Phone:   {}", restaurant.phone);
    println!("Address: {}", restaurant.address);
    println!("WiFi:    {}", restaurant.wifi);
    println!("Hours:   {}", restaurant.hours_display());

    if let Some(notice) = &restaurant.notice {
        println!();
        println!("{notice}");
    }

    Ok(())
}

/// Table row for category tabs
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Items")]
    items: usize,
}

fn execute_categories(menu: &MenuCatalog, json_output: bool) -> Result<()> {
    let catalog = menu.catalog();

    let rows: Vec<CategoryRow> = catalog
        .tabs()
        .into_iter()
        .map(|tab| {
            let items = if tab.is_all() {
                catalog.item_count()
            } else {
                catalog.get_category(tab.id).map(|c| c.len()).unwrap_or(0)
            };
            CategoryRow {
                id: tab.id.to_string(),
                name: tab.name.to_string(),
                items,
            }
        })
        .collect();

    if json_output {
        let json_rows: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.id,
                    "name": row.name,
                    "items": row.items,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_rows)?);
        return Ok(());
    }

    println!("{}", render_table(&rows));
    Ok(())
}

fn execute_tags(menu: &MenuCatalog, json_output: bool) -> Result<()> {
    let tags = menu.dietary_tags();

    if json_output {
        let json_tags: Vec<serde_json::Value> = tags
            .iter()
            .map(|tag| {
                serde_json::json!({
                    "tag": tag,
                    "badge": badge_style(tag).color_name(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("No dietary tags on this menu.");
        return Ok(());
    }

    println!("Dietary preferences:\n");
    for tag in tags {
        println!("  {}", badge(tag));
    }
    Ok(())
}

/// Table row for browse results
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Dietary")]
    dietary: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn execute_browse(
    menu: &MenuCatalog,
    category: &str,
    search: &str,
    dietary: &[String],
    json_output: bool,
) -> Result<()> {
    let mut state = BrowseState::new();
    state.select_category(category);
    state.set_search(search);
    for tag in dietary {
        if !state.is_dietary_active(tag) {
            state.toggle_dietary(tag);
        }
    }

    let items = state.visible_items(menu.catalog());

    if json_output {
        let output = serde_json::json!({
            "query": state.to_query(),
            "items": items,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if category != ALL_CATEGORY_ID {
        if let Ok(found) = menu.catalog().get_category(category) {
            println!("{}\n", found.name);
        }
    }

    if items.is_empty() {
        println!("No items match your search");
        if state.has_active_filters() {
            println!("Clear filters: drop --search and --diet to see every item");
        }
        return Ok(());
    }

    let rows: Vec<ItemRow> = items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            price: item.price.clone(),
            dietary: item.dietary_display(),
            description: truncate(item.short_description(), 50),
        })
        .collect();

    println!("{}", render_table(&rows));
    println!("\n{} item(s)", items.len());
    Ok(())
}

fn execute_show(
    menu: &MenuCatalog,
    category: &str,
    name: &str,
    json_output: bool,
) -> Result<()> {
    let item = menu
        .catalog()
        .find_item(category, name)
        .with_context(|| format!("Cannot show '{name}'"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(item)?);
        return Ok(());
    }

    print_item_detail(item);
    Ok(())
}

fn print_item_detail(item: &MenuItem) {
    println!();
    println!("{}", item.name);
    if !item.description.is_empty() {
        println!("{}", item.description);
    }

    if let Some(ingredients) = &item.ingredients {
        println!();
        println!("Ingredients: {ingredients}");
    }

    if !item.dietary.is_empty() {
        let badges: Vec<String> = item.dietary.iter().map(|tag| badge(tag)).collect();
        println!();
        println!("Dietary: {}", badges.join(" "));
    }

    if let Some(image) = &item.image {
        println!("Image:   {image}");
    }

    println!();
    println!("{:>40}", item.price);
}

fn execute_validate(menu: &MenuCatalog, source: &CatalogSource, json_output: bool) -> Result<()> {
    let catalog = menu.catalog();

    if json_output {
        let output = serde_json::json!({
            "valid": true,
            "path": source.path.display().to_string(),
            "source": source.kind.to_string(),
            "restaurant": catalog.restaurant().name,
            "categories": catalog.category_count(),
            "items": catalog.item_count(),
            "dietary_tags": menu.dietary_tags(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "✅ Catalog is valid: {} (from {})",
        source.path.display(),
        source.kind
    );
    println!("Restaurant:   {}", catalog.restaurant().name);
    println!("Categories:   {}", catalog.category_count());
    println!("Items:        {}", catalog.item_count());
    println!("Dietary tags: {}", menu.dietary_tags().len());
    Ok(())
}

fn render_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Terminal colour for a dietary badge
fn badge_color(style: BadgeStyle) -> Color {
    match style {
        BadgeStyle::Green => Color::Green,
        BadgeStyle::Emerald => Color::BrightGreen,
        BadgeStyle::Blue => Color::Blue,
        BadgeStyle::Red => Color::Red,
        BadgeStyle::Gray => Color::BrightBlack,
    }
}

/// `[tag]` coloured by its badge style; plain when colouring is off
fn badge(tag: &str) -> String {
    format!("[{tag}]")
        .color(badge_color(badge_style(tag)))
        .to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

//! Dispenser status tool.
//!
//! Pulls every collection from the configured backend and prints what the
//! dispenser currently knows: ingredients, cocktails, and which slot holds
//! what.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use barkeep::{App, Settings};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // RUST_LOG controls the level (e.g. RUST_LOG=debug)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let settings = Settings::from_env()?;
    info!(backend = settings.backend_url(), "barkeep starting");

    let app = App::new(&settings)?;
    app.refresh_all().await;

    println!("backend: {}", settings.backend_url());

    println!("ingredients: {}", app.ingredients.len());
    for ingredient in app.ingredients.all() {
        println!(
            "  [{}] {} ({}%)",
            ingredient.id, ingredient.name, ingredient.alcohol_percentage
        );
    }

    println!("cocktails: {}", app.cocktails.len());
    for cocktail in app.cocktails.all() {
        let names: Vec<&str> = cocktail.ingredients.iter().map(|i| i.name.as_str()).collect();
        println!("  [{}] {} ({})", cocktail.id, cocktail.name, names.join(", "));
    }

    println!("slots: {}", app.slots.len());
    for slot in app.slots.all() {
        // Resolve the assignment through the ingredient cache.
        let label = match slot.ingredient_id {
            Some(id) => app
                .ingredients
                .get(id)
                .map(|i| i.name)
                .unwrap_or_else(|| format!("unknown ingredient {}", id)),
            None => "empty".to_string(),
        };
        println!("  slot {}: {}", slot.id, label);
    }

    Ok(())
}

//! CLI command implementations

mod buy;
mod list;
mod read;
mod show;
mod support;

pub use buy::buy;
pub use list::{genres, list};
pub use read::read;
pub use show::show;
pub use support::support;

use anyhow::{Context, Result};
use pageturn_core::{Catalog, StarRating};
use std::path::Path;

/// Load the catalog file if one was given, otherwise the built-in books
pub async fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .await
            .with_context(|| format!("Failed to load catalog: {}", path.display())),
        None => Ok(Catalog::seeded()),
    }
}

/// Render star slots, e.g. `★★★★☆`
fn stars(rating: &StarRating) -> String {
    let mut out = "★".repeat(usize::from(rating.filled));
    out.push_str(&"☆".repeat(usize::from(rating.empty)));
    out
}

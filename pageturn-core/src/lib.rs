//! Pageturn Core Library
//!
//! This crate provides the catalog, browse filtering, reader stub and simulated
//! commerce flow behind the BookVault storefront demo. Pages are computed as
//! serializable view models (see [`views`]) that the server and CLI render.

pub mod browse;
pub mod catalog;
pub mod chrome;
pub mod error;
pub mod purchase;
pub mod reader;
pub mod route;
pub mod support;
pub mod types;
pub mod views;

pub use browse::{BrowseResult, BrowseState, SortMode};
pub use catalog::Catalog;
pub use error::{CatalogError, PageturnError, ParseError, Result, SupportError};
pub use reader::{ReaderSettings, ReadingProgress};
pub use route::Route;
pub use types::{Book, Format, Notification, NotificationLevel, Price, StarRating};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_lookup() {
        let catalog = Catalog::seeded();
        let book = catalog.get_book_by_id("shadows-city").unwrap();
        assert_eq!(book.title, "Shadows in the City");
        assert_eq!(book.author, "Marcus Detective");
    }
}

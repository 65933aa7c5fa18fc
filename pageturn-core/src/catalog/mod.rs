//! The in-memory catalog store
//!
//! A catalog is built once (from the seed or a JSON file), validated, and then
//! only read. Lookups return borrowed books in insertion order.

mod seed;

use crate::error::{CatalogError, Result};
use crate::types::Book;
use std::collections::HashSet;
use std::path::Path;

/// Read-only collection of books
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range fields
    pub fn new(books: Vec<Book>) -> Result<Self> {
        validate(&books)?;
        Ok(Self { books })
    }

    /// The built-in storefront catalog
    pub fn seeded() -> Self {
        Self {
            books: seed::books(),
        }
    }

    /// Parse a JSON array of books
    pub fn from_json(json: &str) -> Result<Self> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        Self::new(books)
    }

    /// Load a catalog file
    pub async fn load(path: &Path) -> Result<Self> {
        let data = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), books = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Find the book with exactly this id
    pub fn get_book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// All books whose genre matches, ignoring case
    pub fn get_books_by_genre(&self, genre: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.matches_genre(genre))
            .collect()
    }

    /// Distinct genre labels in first-seen order
    pub fn genres(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.books
            .iter()
            .filter(|book| seen.insert(book.genre.to_lowercase()))
            .map(|book| book.genre.as_str())
            .collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

fn validate(books: &[Book]) -> std::result::Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for book in books {
        if book.id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if !ids.insert(book.id.as_str()) {
            return Err(CatalogError::DuplicateId(book.id.clone()));
        }
        if !(0.0..=5.0).contains(&book.rating) {
            return Err(CatalogError::InvalidRating {
                id: book.id.clone(),
                rating: book.rating,
            });
        }
        if !book.price.is_valid() {
            return Err(CatalogError::InvalidPrice {
                id: book.id.clone(),
            });
        }
        if book.pages == 0 {
            return Err(CatalogError::ZeroPages(book.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageturnError;

    #[test]
    fn test_seed_passes_validation() {
        let seeded = Catalog::seeded();
        let rebuilt = Catalog::new(seeded.books().to_vec()).unwrap();
        assert_eq!(rebuilt, seeded);
        assert_eq!(seeded.len(), 4);
    }

    #[test]
    fn test_get_book_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.get_book_by_id("quantum-frontier").map(|b| b.title.as_str()),
            Some("Quantum Frontier")
        );
        assert!(catalog.get_book_by_id("missing-book").is_none());
        // Ids are exact keys, not case-insensitive
        assert!(catalog.get_book_by_id("Quantum-Frontier").is_none());
    }

    #[test]
    fn test_get_books_by_genre() {
        let catalog = Catalog::seeded();
        let scifi = catalog.get_books_by_genre("science fiction");
        assert_eq!(scifi.len(), 1);
        assert_eq!(scifi[0].id, "quantum-frontier");
        assert!(catalog.get_books_by_genre("fantasy").is_empty());
    }

    #[test]
    fn test_genres_in_insertion_order() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.genres(),
            vec!["Mystery", "Romance", "Science Fiction", "Business"]
        );
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut books = Catalog::seeded().books().to_vec();
        books.push(books[0].clone());
        let err = Catalog::new(books).unwrap_err();
        assert!(matches!(
            err,
            PageturnError::Catalog(CatalogError::DuplicateId(id)) if id == "shadows-city"
        ));
    }

    #[test]
    fn test_rejects_invalid_fields() {
        let base = Catalog::seeded().books()[0].clone();

        let mut book = base.clone();
        book.rating = 5.5;
        assert!(matches!(
            Catalog::new(vec![book]),
            Err(PageturnError::Catalog(CatalogError::InvalidRating { .. }))
        ));

        let mut book = base.clone();
        book.price.hardcopy = -2.0;
        assert!(matches!(
            Catalog::new(vec![book]),
            Err(PageturnError::Catalog(CatalogError::InvalidPrice { .. }))
        ));

        let mut book = base.clone();
        book.pages = 0;
        assert!(matches!(
            Catalog::new(vec![book]),
            Err(PageturnError::Catalog(CatalogError::ZeroPages(_)))
        ));

        let mut book = base;
        book.id.clear();
        assert!(matches!(
            Catalog::new(vec![book]),
            Err(PageturnError::Catalog(CatalogError::EmptyId))
        ));
    }

    #[test]
    fn test_from_json_round_trip() {
        let seeded = Catalog::seeded();
        let json = serde_json::to_string(seeded.books()).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), seeded);
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(PageturnError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let seeded = Catalog::seeded();
        let books = &seeded.books()[..2];
        tokio::fs::write(&path, serde_json::to_string_pretty(books).unwrap())
            .await
            .unwrap();

        let catalog = Catalog::load(&path).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get_book_by_id("hearts-entwined").is_some());

        let missing = Catalog::load(&dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(PageturnError::Io(_))));
    }
}

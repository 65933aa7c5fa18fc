//! Catalog browsing: search text and genre selection
//!
//! [`BrowseState`] is an immutable snapshot of the browse controls. Every
//! change produces a new snapshot; applying one to a [`Catalog`] yields the
//! books to display in catalog order.

use crate::catalog::Catalog;
use crate::error::ParseError;
use crate::types::Book;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Genre selector value that disables genre filtering
pub const ALL_GENRES: &str = "all";

/// Genre selector options on the browse page, in display order
pub const BROWSE_GENRES: [&str; 5] = [
    ALL_GENRES,
    "mystery",
    "romance",
    "science fiction",
    "business",
];

/// Sort selector on the browse page
///
/// Kept as view state only: no mode reorders results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Featured,
    Rating,
    Trending,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Featured, SortMode::Rating, SortMode::Trending];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::Rating => "rating",
            SortMode::Trending => "trending",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Featured => "Featured",
            SortMode::Rating => "Top Rated",
            SortMode::Trending => "Trending",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "featured" => Ok(SortMode::Featured),
            "rating" => Ok(SortMode::Rating),
            "trending" => Ok(SortMode::Trending),
            _ => Err(ParseError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Label for a genre selector value ("all" shows as "All Books")
pub fn genre_label(genre: &str) -> &str {
    if genre.eq_ignore_ascii_case(ALL_GENRES) {
        "All Books"
    } else {
        genre
    }
}

/// Snapshot of the browse controls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseState {
    search: String,
    genre: String,
    sort: SortMode,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            search: String::new(),
            genre: ALL_GENRES.to_string(),
            sort: SortMode::default(),
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_genre(self, genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_sort(self, sort: SortMode) -> Self {
        Self { sort, ..self }
    }

    /// Clear search and genre, as the empty-state action does; sort is kept
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            sort: self.sort,
            ..Self::default()
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Whether a genre other than "all" is selected
    pub fn has_genre_filter(&self) -> bool {
        !self.genre.eq_ignore_ascii_case(ALL_GENRES)
    }

    /// Whether a book passes both the search and the genre predicate
    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.search.to_lowercase();
        self.matches_lowered(book, &needle)
    }

    fn matches_lowered(&self, book: &Book, needle: &str) -> bool {
        let matches_search = needle.is_empty() || book.matches_search(needle);
        let matches_genre = !self.has_genre_filter() || book.matches_genre(&self.genre);
        matches_search && matches_genre
    }

    /// Filter the catalog, keeping catalog order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> BrowseResult<'a> {
        let needle = self.search.to_lowercase();
        let books: Vec<&Book> = catalog
            .iter()
            .filter(|book| self.matches_lowered(book, &needle))
            .collect();

        tracing::trace!(
            search = %self.search,
            genre = %self.genre,
            sort = %self.sort,
            matched = books.len(),
            "Applied browse filter"
        );

        BrowseResult {
            books,
            sort: self.sort,
        }
    }
}

/// Message shown in place of an empty result grid
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
    pub action: &'static str,
}

pub const NO_BOOKS_FOUND: EmptyState = EmptyState {
    title: "No books found",
    hint: "Try adjusting your search terms or browse different genres",
    action: "Browse All Books",
};

/// Books selected by a browse snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseResult<'a> {
    pub books: Vec<&'a Book>,
    pub sort: SortMode,
}

impl<'a> BrowseResult<'a> {
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// "Showing N books"
    pub fn summary(&self) -> String {
        format!("Showing {} books", self.books.len())
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.is_empty().then_some(NO_BOOKS_FOUND)
    }
}

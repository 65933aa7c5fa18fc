//! Browse page and genre page

use super::BookCard;
use crate::browse::{genre_label, BrowseResult, BrowseState, EmptyState, SortMode, BROWSE_GENRES};
use crate::catalog::Catalog;
use crate::types::Highlight;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats: [Highlight; 3],
    pub call_to_action: &'static str,
}

pub const HERO: Hero = Hero {
    title: "Discover Your Next Great Read",
    subtitle: "Immerse yourself in worlds of wonder. From thrilling mysteries to heartwarming romances, find books that will captivate your imagination and expand your horizons.",
    stats: [
        Highlight::new("10,000+", "Digital Books"),
        Highlight::new("50,000+", "Happy Readers"),
        Highlight::new("24/7", "Access"),
    ],
    call_to_action: "Start Reading Today",
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Newsletter {
    pub title: &'static str,
    pub blurb: &'static str,
    pub perks: [&'static str; 2],
}

pub const NEWSLETTER: Newsletter = Newsletter {
    title: "Never Miss a Great Book",
    blurb: "Get personalized book recommendations and exclusive deals delivered to your inbox.",
    perks: ["Weekly recommendations", "Exclusive deals"],
};

/// One button of a selector row
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The catalog browse page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeView {
    pub hero: Hero,
    pub search: String,
    pub genres: Vec<SelectorOption>,
    pub sort_modes: Vec<SelectorOption>,
    pub summary: String,
    pub books: Vec<BookCard>,
    pub empty_state: Option<EmptyState>,
    pub newsletter: Newsletter,
}

impl HomeView {
    pub fn build(catalog: &Catalog, state: &BrowseState) -> Self {
        let result = state.apply(catalog);

        let genres = BROWSE_GENRES
            .iter()
            .map(|genre| SelectorOption {
                value: genre.to_string(),
                label: genre_label(genre).to_string(),
                selected: genre.eq_ignore_ascii_case(state.genre()),
            })
            .collect();

        let sort_modes = SortMode::ALL
            .iter()
            .map(|mode| SelectorOption {
                value: mode.as_str().to_string(),
                label: mode.label().to_string(),
                selected: *mode == state.sort(),
            })
            .collect();

        Self {
            hero: HERO,
            search: state.search().to_string(),
            genres,
            sort_modes,
            summary: result.summary(),
            books: cards(&result),
            empty_state: result.empty_state(),
            newsletter: NEWSLETTER,
        }
    }
}

/// Books of a single genre, reached through `/genre/:genre`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreView {
    pub genre: String,
    pub summary: String,
    pub books: Vec<BookCard>,
    pub empty_state: Option<EmptyState>,
}

impl GenreView {
    pub fn build(catalog: &Catalog, genre: &str) -> Self {
        let result = BrowseState::new().with_genre(genre).apply(catalog);
        Self {
            genre: genre.to_string(),
            summary: result.summary(),
            books: cards(&result),
            empty_state: result.empty_state(),
        }
    }
}

fn cards(result: &BrowseResult<'_>) -> Vec<BookCard> {
    result.books.iter().map(|book| BookCard::from(*book)).collect()
}

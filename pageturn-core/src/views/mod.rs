//! Page view models
//!
//! Each storefront page is computed from the catalog and the page's local
//! state into a serializable view. Pages that depend on a book id resolve to
//! either a view or a redirect.

mod detail;
mod home;
mod reader;
mod support;

pub use detail::{resolve_detail, BookDetailView, BundleOffer, LoyaltyOffer, Offers, STATIC_OFFERS};
pub use home::{GenreView, Hero, HomeView, Newsletter, SelectorOption};
pub use reader::{resolve_reader, ProgressView, ReaderView};
pub use support::SupportView;

use crate::route::Route;
use crate::types::{Book, Price, StarRating};
use serde::Serialize;

/// Outcome of resolving a page that needs a catalog entry
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Render(T),
    Redirect(Route),
}

impl<T> Resolution<T> {
    pub fn into_view(self) -> Option<T> {
        match self {
            Resolution::Render(view) => Some(view),
            Resolution::Redirect(_) => None,
        }
    }

    /// Transform a rendered view, passing redirects through
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Render(view) => Resolution::Render(f(view)),
            Resolution::Redirect(route) => Resolution::Redirect(route),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect(_))
    }
}

/// Compact book tile used on the browse and genre pages
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover: String,
    pub description: String,
    pub rating: f64,
    pub reviews: u32,
    pub stars: StarRating,
    pub price: Price,
    pub href: Route,
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            cover: book.cover.clone(),
            description: book.description.clone(),
            rating: book.rating,
            reviews: book.reviews,
            stars: book.star_rating(),
            price: book.price,
            href: Route::book(book.id.clone()),
        }
    }
}

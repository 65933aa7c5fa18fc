//! Book detail page

use super::Resolution;
use crate::catalog::Catalog;
use crate::route::Route;
use crate::types::{
    mock_reviews, rating_distribution, Book, Format, RatingShare, Review, StarRating,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BundleOffer {
    pub description: &'static str,
    pub list_price: &'static str,
    pub bundle_price: &'static str,
    pub savings: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LoyaltyOffer {
    pub earn: &'static str,
    pub rule: &'static str,
    pub progress: u8,
    pub remaining: &'static str,
}

/// "Special Offers" panel; fixed display copy, not derived from the book
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Offers {
    pub bundle: BundleOffer,
    pub loyalty: LoyaltyOffer,
}

pub const STATIC_OFFERS: Offers = Offers {
    bundle: BundleOffer {
        description: "Get this book + 2 more from the same author",
        list_price: "$54.97",
        bundle_price: "$39.99",
        savings: "Save 27%",
    },
    loyalty: LoyaltyOffer {
        earn: "Earn 25 points with this purchase",
        rule: "100 points = $10 off your next order",
        progress: 65,
        remaining: "You're 35 points away from your next reward!",
    },
};

/// Everything the detail page shows for one book
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookDetailView {
    pub book: Book,
    pub stars: StarRating,
    pub selected_format: Format,
    pub selected_price: f64,
    pub author_initials: String,
    pub reviews: Vec<Review>,
    pub rating_distribution: [RatingShare; 5],
    pub offers: Offers,
    pub reader_href: Route,

    /// Heart toggle in the header; page-local, never stored
    pub wishlisted: bool,
}

impl BookDetailView {
    pub fn build(book: &Book, format: Format) -> Self {
        Self {
            book: book.clone(),
            stars: book.star_rating(),
            selected_format: format,
            selected_price: book.price_for(format),
            author_initials: book.author_initials(),
            reviews: mock_reviews(),
            rating_distribution: rating_distribution(),
            offers: STATIC_OFFERS,
            reader_href: Route::reader(book.id.clone()),
            wishlisted: false,
        }
    }

    #[must_use]
    pub fn toggle_wishlist(self) -> Self {
        Self {
            wishlisted: !self.wishlisted,
            ..self
        }
    }
}

/// Resolve `/book/:id`; unknown ids redirect to the catalog root
pub fn resolve_detail(catalog: &Catalog, id: &str, format: Format) -> Resolution<BookDetailView> {
    match catalog.get_book_by_id(id) {
        Some(book) => Resolution::Render(BookDetailView::build(book, format)),
        None => {
            tracing::debug!(id, "Unknown book id, redirecting to catalog");
            Resolution::Redirect(Route::Home)
        }
    }
}

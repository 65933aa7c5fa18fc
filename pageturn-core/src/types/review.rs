//! Static review content shown on the detail page
//!
//! Reviews are display content only; they are the same for every book and do
//! not feed into `Book::rating`.

use super::StarRating;
use serde::Serialize;

/// A reader review
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Review {
    pub id: u32,
    pub author: &'static str,
    pub rating: u8,
    pub stars: StarRating,
    pub comment: &'static str,
    pub date: &'static str,
    pub verified: bool,
}

/// Share of reviews at a given star level
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RatingShare {
    pub stars: u8,
    pub percent: u8,
}

pub fn mock_reviews() -> Vec<Review> {
    vec![
        review(
            1,
            "Sarah M.",
            5,
            "Absolutely captivating! Couldn't put it down.",
            "2 weeks ago",
            true,
        ),
        review(
            2,
            "Mike R.",
            4,
            "Great storytelling and character development.",
            "1 month ago",
            true,
        ),
        review(
            3,
            "Emma L.",
            5,
            "This book changed my perspective completely.",
            "3 weeks ago",
            false,
        ),
    ]
}

/// Rating breakdown, highest star level first
pub fn rating_distribution() -> [RatingShare; 5] {
    [5, 4, 3, 2, 1].map(|stars| RatingShare {
        stars,
        percent: match stars {
            5 => 75,
            4 => 20,
            _ => 5,
        },
    })
}

fn review(
    id: u32,
    author: &'static str,
    rating: u8,
    comment: &'static str,
    date: &'static str,
    verified: bool,
) -> Review {
    Review {
        id,
        author,
        rating,
        stars: StarRating::whole(rating),
        comment,
        date,
        verified,
    }
}

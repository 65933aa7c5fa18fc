//! Star rating display

use serde::Serialize;

/// Number of star slots shown next to a rating
pub const STAR_SLOTS: u8 = 5;

/// Filled and empty star slots derived from a decimal rating
///
/// Partial stars are not drawn: a 4.8 rating fills four slots.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StarRating {
    pub value: f64,
    pub filled: u8,
    pub empty: u8,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let filled = if rating.is_finite() {
            rating.floor().clamp(0.0, f64::from(STAR_SLOTS)) as u8
        } else {
            0
        };
        Self {
            value: rating,
            filled,
            empty: STAR_SLOTS - filled,
        }
    }

    /// Whole-star rating, as given by individual reviews
    pub fn whole(stars: u8) -> Self {
        Self::from_rating(f64::from(stars))
    }
}

//! The Book record and its pricing

use super::StarRating;
use crate::error::ParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single catalog entry
///
/// Books are seeded once and never mutated. Field names serialize in
/// camelCase so catalog files keep the storefront's mock-data shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique key, also used in `/book/:id` and `/reader/:id`
    pub id: String,

    pub title: String,
    pub author: String,
    pub price: Price,

    /// Average rating in `0.0..=5.0`
    pub rating: f64,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Cover image reference
    pub cover: String,

    /// Free-text category label, compared case-insensitively
    pub genre: String,

    pub description: String,
    pub published_date: NaiveDate,
    pub pages: u32,
    pub isbn: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub author_bio: String,
    pub quotes: Vec<String>,
    pub benefits: Vec<String>,
}

impl Book {
    /// Whether this book's genre equals `genre`, ignoring case
    pub fn matches_genre(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }

    /// Whether an already-lowercased needle occurs in the title or author
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.author.to_lowercase().contains(needle_lower)
    }

    /// Filled/empty star slots for this book's rating
    pub fn star_rating(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }

    /// Author initials for the avatar fallback ("Dr. Alex Nova" -> "DAN")
    pub fn author_initials(&self) -> String {
        self.author
            .split(' ')
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Price for the given purchase format
    pub fn price_for(&self, format: Format) -> f64 {
        self.price.for_format(format)
    }
}

/// Digital and print prices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub digital: f64,
    pub hardcopy: f64,
}

impl Price {
    pub fn new(digital: f64, hardcopy: f64) -> Self {
        Self { digital, hardcopy }
    }

    pub fn for_format(&self, format: Format) -> f64 {
        match format {
            Format::Digital => self.digital,
            Format::Hardcopy => self.hardcopy,
        }
    }

    /// Both prices finite and non-negative
    pub fn is_valid(&self) -> bool {
        [self.digital, self.hardcopy]
            .iter()
            .all(|p| p.is_finite() && *p >= 0.0)
    }
}

/// Purchase format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Digital,
    Hardcopy,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Digital => "digital",
            Format::Hardcopy => "hardcopy",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "digital" => Ok(Format::Digital),
            "hardcopy" | "print" => Ok(Format::Hardcopy),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

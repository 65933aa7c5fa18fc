//! Core types for the storefront catalog

mod book;
mod highlight;
mod notification;
mod rating;
mod review;

pub use book::{Book, Format, Price};
pub use highlight::Highlight;
pub use notification::{Notification, NotificationLevel};
pub use rating::StarRating;
pub use review::{mock_reviews, rating_distribution, RatingShare, Review};

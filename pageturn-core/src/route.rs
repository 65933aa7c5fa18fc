//! Client-side route table
//!
//! Routes render to and parse from URL paths. Path parameters are
//! percent-encoded on output and decoded on input.

use serde::{Serialize, Serializer};
use std::fmt;

/// Footer/account links that have no backing view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InertPage {
    Profile,
    Orders,
    Wishlist,
    Privacy,
    Terms,
}

impl InertPage {
    pub const ALL: [InertPage; 5] = [
        InertPage::Profile,
        InertPage::Orders,
        InertPage::Wishlist,
        InertPage::Privacy,
        InertPage::Terms,
    ];

    pub fn segment(&self) -> &'static str {
        match self {
            InertPage::Profile => "profile",
            InertPage::Orders => "orders",
            InertPage::Wishlist => "wishlist",
            InertPage::Privacy => "privacy",
            InertPage::Terms => "terms",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.segment() == segment)
    }
}

/// A navigable location in the storefront
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Book(String),
    Reader(String),
    Support,
    Genre(String),
    Inert(InertPage),
}

impl Route {
    /// Parse a path such as `/book/quantum-frontier`
    ///
    /// Query strings and trailing slashes are ignored; unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["support"] => Some(Route::Support),
            ["book", id] => decode(id).map(Route::Book),
            ["reader", id] => decode(id).map(Route::Reader),
            ["genre", genre] => decode(genre).map(Route::Genre),
            [segment] => InertPage::from_segment(segment).map(Route::Inert),
            _ => None,
        }
    }

    /// Whether this route has a view behind it
    pub fn has_view(&self) -> bool {
        !matches!(self, Route::Inert(_))
    }

    pub fn book(id: impl Into<String>) -> Self {
        Route::Book(id.into())
    }

    pub fn reader(id: impl Into<String>) -> Self {
        Route::Reader(id.into())
    }

    pub fn genre(genre: impl Into<String>) -> Self {
        Route::Genre(genre.into())
    }
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment)
        .ok()
        .map(|s| s.into_owned())
        .filter(|s| !s.is_empty())
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Book(id) => write!(f, "/book/{}", urlencoding::encode(id)),
            Route::Reader(id) => write!(f, "/reader/{}", urlencoding::encode(id)),
            Route::Support => f.write_str("/support"),
            Route::Genre(genre) => write!(f, "/genre/{}", urlencoding::encode(genre)),
            Route::Inert(page) => write!(f, "/{}", page.segment()),
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_views() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/support/"), Some(Route::Support));
        assert_eq!(
            Route::parse("/book/shadows-city"),
            Some(Route::book("shadows-city"))
        );
        assert_eq!(
            Route::parse("/reader/quantum-frontier?page=3"),
            Some(Route::reader("quantum-frontier"))
        );
        assert_eq!(
            Route::parse("/genre/science%20fiction"),
            Some(Route::genre("science fiction"))
        );
    }

    #[test]
    fn test_parse_inert_and_unknown() {
        for page in InertPage::ALL {
            let route = Route::parse(&format!("/{}", page.segment())).unwrap();
            assert!(!route.has_view());
        }
        assert_eq!(Route::parse("/checkout"), None);
        assert_eq!(Route::parse("/book"), None);
        assert_eq!(Route::parse("/book/a/b"), None);
    }

    #[test]
    fn test_display_encodes_segments() {
        assert_eq!(Route::genre("science fiction").to_string(), "/genre/science%20fiction");
        assert_eq!(Route::reader("hearts-entwined").to_string(), "/reader/hearts-entwined");
        assert_eq!(Route::Inert(InertPage::Terms).to_string(), "/terms");

        let route = Route::genre("sci-fi & more");
        assert_eq!(Route::parse(&route.to_string()), Some(route));
    }

    #[test]
    fn test_serializes_as_path() {
        let json = serde_json::to_string(&Route::book("shadows-city")).unwrap();
        assert_eq!(json, "\"/book/shadows-city\"");
    }
}

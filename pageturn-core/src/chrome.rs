//! Shared page chrome: top navigation and footer

use crate::route::{InertPage, Route};
use chrono::Datelike;
use serde::Serialize;

pub const BRAND: &str = "BookVault";

/// Mock cart badge count shown in the navigation bar
pub const MOCK_CART_ITEMS: u32 = 3;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavLink {
    fn new(label: &'static str, href: impl ToString) -> Self {
        Self {
            label,
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenreLink {
    pub name: &'static str,
    pub description: &'static str,
    pub href: String,
}

/// Top navigation bar
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Navigation {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub genres: Vec<GenreLink>,
    pub search_placeholder: &'static str,
    pub cart_items: u32,
}

/// Menu label, description and the genre it links to
///
/// Fiction and Bestsellers match no catalog genre and land on the empty state.
const NAV_GENRES: [(&str, &str, &str); 6] = [
    ("Fiction", "Literary novels and stories", "fiction"),
    ("Mystery", "Thrillers and detective stories", "mystery"),
    ("Romance", "Love stories and romantic fiction", "romance"),
    ("Sci-Fi", "Science fiction and fantasy", "science fiction"),
    ("Business", "Self-help and business books", "business"),
    ("Bestsellers", "Top trending books", "bestsellers"),
];

impl Default for Navigation {
    fn default() -> Self {
        Self {
            brand: BRAND,
            links: vec![
                NavLink::new("Home", Route::Home),
                NavLink::new("Support", Route::Support),
            ],
            genres: NAV_GENRES
                .iter()
                .map(|&(name, description, genre)| GenreLink {
                    name,
                    description,
                    href: Route::genre(genre).to_string(),
                })
                .collect(),
            search_placeholder: "Search books, authors, genres...",
            cart_items: MOCK_CART_ITEMS,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

/// Site footer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Footer {
    pub newsletter_title: &'static str,
    pub newsletter_blurb: &'static str,
    pub brand: &'static str,
    pub about: &'static str,
    pub trust: [&'static str; 3],
    pub groups: Vec<LinkGroup>,
    pub contact: ContactInfo,
    pub copyright: String,
    pub legal: Vec<NavLink>,
    pub tagline: &'static str,
}

impl Footer {
    /// Footer with the copyright line for `year`
    pub fn for_year(year: i32) -> Self {
        Self {
            newsletter_title: "Stay Updated",
            newsletter_blurb: "Get the latest book releases, exclusive deals, and reading recommendations delivered to your inbox.",
            brand: BRAND,
            about: "Your premier destination for digital and physical books. Discover, read, and collect from our vast library of literature.",
            trust: ["Secure payments", "Worldwide shipping", "24/7 digital access"],
            groups: vec![
                LinkGroup {
                    title: "Explore",
                    links: vec![
                        NavLink::new("Browse Books", Route::Home),
                        NavLink::new("Fiction", Route::genre("fiction")),
                        NavLink::new("Mystery & Thriller", Route::genre("mystery")),
                        NavLink::new("Romance", Route::genre("romance")),
                        NavLink::new("Science Fiction", Route::genre("science fiction")),
                        NavLink::new("Business & Self-Help", Route::genre("business")),
                    ],
                },
                LinkGroup {
                    title: "Account",
                    links: vec![
                        NavLink::new("My Library", Route::Inert(InertPage::Profile)),
                        NavLink::new("Order History", Route::Inert(InertPage::Orders)),
                        NavLink::new("Wishlist", Route::Inert(InertPage::Wishlist)),
                        NavLink::new("Help Center", Route::Support),
                        NavLink::new("Contact Us", "/support/contact"),
                        NavLink::new("Shipping Info", "/support/shipping"),
                    ],
                },
            ],
            contact: ContactInfo {
                email: "support@bookvault.com",
                phone: "1-800-BOOKS-24",
                location: "New York, NY",
            },
            copyright: format!("\u{a9} {year} {BRAND}. All rights reserved."),
            legal: vec![
                NavLink::new("Privacy Policy", Route::Inert(InertPage::Privacy)),
                NavLink::new("Terms of Service", Route::Inert(InertPage::Terms)),
            ],
            tagline: "Trusted by 50,000+ readers worldwide",
        }
    }

    /// Footer for the current calendar year
    pub fn current() -> Self {
        Self::for_year(chrono::Utc::now().year())
    }
}

/// Navigation and footer together, as served to clients
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Chrome {
    pub navigation: Navigation,
    pub footer: Footer,
}

impl Chrome {
    pub fn current() -> Self {
        Self {
            navigation: Navigation::default(),
            footer: Footer::current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_navigation_genre_links() {
        let nav = Navigation::default();
        let hrefs: Vec<&str> = nav.genres.iter().map(|g| g.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/genre/fiction",
                "/genre/mystery",
                "/genre/romance",
                "/genre/science%20fiction",
                "/genre/business",
                "/genre/bestsellers"
            ]
        );
        assert_eq!(nav.cart_items, 3);
    }

    #[test]
    fn test_science_fiction_links_reach_catalog() {
        let catalog = Catalog::seeded();
        let nav = Navigation::default();
        let footer = Footer::for_year(2024);
        let hrefs = [
            nav.genres[3].href.as_str(),
            footer.groups[0].links[4].href.as_str(),
        ];
        for href in hrefs {
            let Some(Route::Genre(genre)) = Route::parse(href) else {
                panic!("not a genre link: {}", href);
            };
            let ids: Vec<&str> = catalog
                .get_books_by_genre(&genre)
                .iter()
                .map(|b| b.id.as_str())
                .collect();
            assert_eq!(ids, vec!["quantum-frontier"]);
        }
    }

    #[test]
    fn test_footer_copyright_year() {
        let footer = Footer::for_year(2031);
        assert_eq!(footer.copyright, "\u{a9} 2031 BookVault. All rights reserved.");
        assert_eq!(footer.legal[0].href, "/privacy");
        assert_eq!(footer.groups[1].links[0].href, "/profile");
    }

    #[test]
    fn test_footer_account_links_are_inert() {
        let footer = Footer::for_year(2024);
        let account = &footer.groups[1];
        let inert: Vec<&str> = account
            .links
            .iter()
            .filter(|link| Route::parse(&link.href).is_some_and(|r| !r.has_view()))
            .map(|link| link.label)
            .collect();
        assert_eq!(inert, vec!["My Library", "Order History", "Wishlist"]);
        assert!(Route::parse("/support/contact").is_none());
    }
}

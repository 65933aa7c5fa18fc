//! Snapshot tests for view model serialization
//!
//! Clients consume these shapes directly, so field names and order are pinned.

use pageturn_core::purchase::add_to_cart;
use pageturn_core::views::{BookCard, STATIC_OFFERS};
use pageturn_core::{Catalog, Format};

#[test]
fn test_book_card_snapshot() {
    let catalog = Catalog::seeded();
    let card = BookCard::from(catalog.get_book_by_id("quantum-frontier").unwrap());

    insta::assert_json_snapshot!(card, @r###"
    {
      "id": "quantum-frontier",
      "title": "Quantum Frontier",
      "author": "Dr. Alex Nova",
      "genre": "Science Fiction",
      "cover": "/assets/book-scifi.jpg",
      "description": "A mind-bending journey through space and time as humanity discovers the secrets of quantum manipulation and interdimensional travel.",
      "rating": 4.4,
      "reviews": 1923,
      "stars": {
        "value": 4.4,
        "filled": 4,
        "empty": 1
      },
      "price": {
        "digital": 14.99,
        "hardcopy": 27.99
      },
      "href": "/book/quantum-frontier"
    }
    "###);
}

#[test]
fn test_static_offers_snapshot() {
    insta::assert_json_snapshot!(STATIC_OFFERS, @r###"
    {
      "bundle": {
        "description": "Get this book + 2 more from the same author",
        "list_price": "$54.97",
        "bundle_price": "$39.99",
        "savings": "Save 27%"
      },
      "loyalty": {
        "earn": "Earn 25 points with this purchase",
        "rule": "100 points = $10 off your next order",
        "progress": 65,
        "remaining": "You're 35 points away from your next reward!"
      }
    }
    "###);
}

#[test]
fn test_cart_notification_snapshot() {
    let catalog = Catalog::seeded();
    let book = catalog.get_book_by_id("hearts-entwined").unwrap();
    let notification = add_to_cart(book, Format::Digital);

    insta::assert_json_snapshot!(notification, @r###"
    {
      "level": "success",
      "message": "Hearts Entwined (digital) added to cart!"
    }
    "###);
}

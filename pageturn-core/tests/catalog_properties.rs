//! Property tests for catalog lookup and genre filtering
//!
//! These exercise the catalog through its public API with generated ids and
//! genre spellings, against both the seed and synthetic catalogs.

use pageturn_core::{Book, BrowseState, Catalog};
use proptest::prelude::*;

/// Seed books re-keyed and re-labelled to build arbitrary catalogs
fn synthetic_catalog(genres: &[String]) -> Catalog {
    let template = Catalog::seeded().books()[0].clone();
    let books: Vec<Book> = genres
        .iter()
        .enumerate()
        .map(|(i, genre)| Book {
            id: format!("book-{i}"),
            genre: genre.clone(),
            ..template.clone()
        })
        .collect();
    Catalog::new(books).unwrap()
}

/// Flip the case of every other character
fn scramble_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[test]
fn test_every_seed_id_resolves_to_itself() {
    let catalog = Catalog::seeded();
    for book in &catalog {
        let found = catalog.get_book_by_id(&book.id).unwrap();
        assert_eq!(found.id, book.id);
        assert_eq!(catalog.iter().filter(|b| b.id == book.id).count(), 1);
    }
}

#[test]
fn test_genre_examples() {
    let catalog = Catalog::seeded();
    let scifi = catalog.get_books_by_genre("science fiction");
    assert!(scifi.iter().any(|b| b.id == "quantum-frontier"));
    assert!(catalog.get_books_by_genre("fantasy").is_empty());
}

proptest! {
    #[test]
    fn prop_absent_ids_are_not_found(id in "[a-z0-9-]{1,24}") {
        let catalog = Catalog::seeded();
        prop_assume!(catalog.iter().all(|b| b.id != id));
        prop_assert!(catalog.get_book_by_id(&id).is_none());
    }

    #[test]
    fn prop_genre_lookup_is_exact_and_complete(
        genres in proptest::collection::vec("[a-zA-Z]{1,6}( [a-zA-Z]{1,6})?", 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let catalog = synthetic_catalog(&genres);
        let wanted = scramble_case(pick.get::<String>(&genres));
        let found = catalog.get_books_by_genre(&wanted);

        prop_assert!(found.iter().all(|b| b.genre.to_lowercase() == wanted.to_lowercase()));
        let expected = catalog
            .iter()
            .filter(|b| b.genre.to_lowercase() == wanted.to_lowercase())
            .count();
        prop_assert_eq!(found.len(), expected);
        prop_assert!(expected >= 1);
    }

    #[test]
    fn prop_genre_filter_agrees_with_lookup(
        genres in proptest::collection::vec("[a-c]{1,2}", 1..10),
        wanted in "[a-cA-C]{1,2}",
    ) {
        let catalog = synthetic_catalog(&genres);
        let via_browse: Vec<&str> = BrowseState::new()
            .with_genre(wanted.clone())
            .apply(&catalog)
            .books
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        let via_lookup: Vec<&str> = catalog
            .get_books_by_genre(&wanted)
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        prop_assert_eq!(via_browse, via_lookup);
    }
}

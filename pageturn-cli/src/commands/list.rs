//! List, search and genre commands

use super::stars;
use anyhow::{Context, Result};
use pageturn_core::browse::genre_label;
use pageturn_core::views::BookCard;
use pageturn_core::{BrowseState, Catalog, SortMode};

/// Print the books matching a search and genre filter
pub fn list(catalog: &Catalog, search: &str, genre: &str, sort: &str, json: bool) -> Result<()> {
    let sort: SortMode = sort
        .parse()
        .with_context(|| format!("Invalid sort mode: {}", sort))?;

    let state = BrowseState::new()
        .with_search(search)
        .with_genre(genre)
        .with_sort(sort);
    let result = state.apply(catalog);
    tracing::debug!(
        search,
        genre,
        sort = sort.as_str(),
        matched = result.len(),
        "Browsed catalog"
    );

    if json {
        let cards: Vec<BookCard> = result.books.iter().copied().map(BookCard::from).collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("{} ({}, {})", result.summary(), genre_label(state.genre()), sort.label());
    if let Some(empty) = result.empty_state() {
        println!();
        println!("{}", empty.title);
        println!("{}", empty.hint);
        return Ok(());
    }

    for book in &result.books {
        println!(
            "{:<20} {:<24} {:<18} {:<16} ${:>6.2}  {} {:.1}",
            book.id,
            book.title,
            book.author,
            book.genre,
            book.price.digital,
            stars(&book.star_rating()),
            book.rating
        );
    }

    Ok(())
}

/// Print each genre with its number of books
pub fn genres(catalog: &Catalog) -> Result<()> {
    for genre in catalog.genres() {
        let count = catalog.get_books_by_genre(genre).len();
        println!("{:<20} {}", genre, count);
    }
    Ok(())
}

//! Show command implementation

use super::stars;
use anyhow::{Context, Result};
use pageturn_core::views::resolve_detail;
use pageturn_core::{Catalog, Format};

/// Print the detail page of a book
pub fn show(catalog: &Catalog, id: &str, format: &str, json: bool) -> Result<()> {
    let format: Format = format
        .parse()
        .with_context(|| format!("Invalid format: {}", format))?;

    let view = resolve_detail(catalog, id, format)
        .into_view()
        .with_context(|| format!("Book not found: {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let book = &view.book;
    println!("Title:       {}", book.title);
    println!("Author:      {} ({})", book.author, view.author_initials);
    println!("Genre:       {}", book.genre);
    println!(
        "Rating:      {} {:.1} ({} reviews)",
        stars(&view.stars),
        book.rating,
        book.reviews
    );
    println!("Price:       ${:.2} ({})", view.selected_price, view.selected_format);
    println!("Published:   {}", book.published_date.format("%B %-d, %Y"));
    println!("Pages:       {}", book.pages);
    println!("ISBN:        {}", book.isbn);
    if !book.tags.is_empty() {
        println!("Tags:        {}", book.tags.join(", "));
    }

    println!();
    println!("{}", book.description);
    println!();
    println!("{}", book.summary);

    if !book.benefits.is_empty() {
        println!();
        println!("Why read it:");
        for benefit in &book.benefits {
            println!("  - {}", benefit);
        }
    }

    if !book.quotes.is_empty() {
        println!();
        for quote in &book.quotes {
            println!("  \"{}\"", quote);
        }
    }

    println!();
    println!("About the author: {}", book.author_bio);

    println!();
    println!("Reviews:");
    for review in &view.reviews {
        let verified = if review.verified { " (verified)" } else { "" };
        println!(
            "  {} {}{}, {}",
            stars(&review.stars),
            review.author,
            verified,
            review.date
        );
        println!("    {}", review.comment);
    }

    println!();
    println!("Read it: {}", view.reader_href);

    Ok(())
}

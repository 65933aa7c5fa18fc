//! Read command implementation

use anyhow::{Context, Result};
use pageturn_core::views::resolve_reader;
use pageturn_core::{Catalog, ReaderSettings};

/// Print the reader page for a book
pub fn read(catalog: &Catalog, id: &str, page: u32, font_size: u32) -> Result<()> {
    // Out-of-range sizes clamp to the nearest allowed size.
    let settings =
        ReaderSettings::default().with_font_size(u8::try_from(font_size).unwrap_or(u8::MAX));
    let view = resolve_reader(catalog, id, Some(page), settings)
        .into_view()
        .with_context(|| format!("Book not found: {}", id))?;

    tracing::debug!(
        book = %view.book_id,
        page = view.progress.current_page,
        font_size = view.settings.font_size,
        "Opened reader"
    );

    println!("{} by {}", view.title, view.author);
    println!();
    println!("{}", view.content.chapter_label);
    println!("{}", view.content.chapter_title);
    println!();
    for paragraph in view.content.paragraphs {
        println!("{}", paragraph);
        println!();
    }

    println!("{}  |  {}", view.progress.label, view.progress.complete);
    println!("{}", view.content.notice);

    Ok(())
}

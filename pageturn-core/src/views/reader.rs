//! Reader page

use super::Resolution;
use crate::catalog::Catalog;
use crate::reader::{ReaderContent, ReaderSettings, ReadingProgress, STUB_CONTENT};
use crate::route::Route;
use serde::Serialize;

/// Progress figures shown in the reader header and footer
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressView {
    pub current_page: u32,
    pub total_pages: u32,
    pub percent: f64,
    pub label: String,
    pub complete: String,
    pub can_advance: bool,
    pub can_retreat: bool,
}

impl From<ReadingProgress> for ProgressView {
    fn from(progress: ReadingProgress) -> Self {
        Self {
            current_page: progress.current_page(),
            total_pages: progress.total_pages(),
            percent: progress.progress_percent(),
            label: format!(
                "Page {} of {}",
                progress.current_page(),
                progress.total_pages()
            ),
            complete: format!("{}% complete", progress.rounded_percent()),
            can_advance: progress.can_advance(),
            can_retreat: progress.can_retreat(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReaderView {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub progress: ProgressView,
    pub settings: ReaderSettings,
    pub content: ReaderContent,
}

/// Resolve `/reader/:id` at `page` (clamped; page 1 when absent)
pub fn resolve_reader(
    catalog: &Catalog,
    id: &str,
    page: Option<u32>,
    settings: ReaderSettings,
) -> Resolution<ReaderView> {
    let Some(book) = catalog.get_book_by_id(id) else {
        tracing::debug!(id, "Unknown book id, redirecting to catalog");
        return Resolution::Redirect(Route::Home);
    };

    let progress = ReadingProgress::for_book(book).jump_to(page.unwrap_or(1));
    Resolution::Render(ReaderView {
        book_id: book.id.clone(),
        title: book.title.clone(),
        author: book.author.clone(),
        progress: progress.into(),
        settings: settings.with_font_size(settings.font_size),
        content: STUB_CONTENT,
    })
}

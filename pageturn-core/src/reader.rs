//! Simulated reader: page progress, display settings and stub content
//!
//! Progress is not persisted; every reader session starts on page 1. The
//! content is the same hardcoded passage for every book.

use crate::types::Book;
use serde::Serialize;

pub const FONT_SIZE_MIN: u8 = 12;
pub const FONT_SIZE_MAX: u8 = 24;
pub const FONT_SIZE_DEFAULT: u8 = 16;

/// Current page within a fixed page count
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReadingProgress {
    current_page: u32,
    total_pages: u32,
}

impl ReadingProgress {
    /// Start on page 1 of `total_pages` (at least one page)
    pub fn new(total_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages.max(1),
        }
    }

    /// Progress through `book`, starting on page 1
    pub fn for_book(book: &Book) -> Self {
        Self::new(book.pages)
    }

    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            current_page: self.current_page.saturating_add(1).min(self.total_pages),
            ..self
        }
    }

    #[must_use]
    pub fn retreat(self) -> Self {
        Self {
            current_page: self.current_page.saturating_sub(1).max(1),
            ..self
        }
    }

    /// Move to `page`, clamped to the valid range
    #[must_use]
    pub fn jump_to(self, page: u32) -> Self {
        Self {
            current_page: page.clamp(1, self.total_pages),
            ..self
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn can_advance(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn can_retreat(&self) -> bool {
        self.current_page > 1
    }

    pub fn progress_percent(&self) -> f64 {
        f64::from(self.current_page) / f64::from(self.total_pages) * 100.0
    }

    /// Percentage for the "N% complete" label
    pub fn rounded_percent(&self) -> u32 {
        self.progress_percent().round() as u32
    }
}

/// Reader display toggles
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReaderSettings {
    pub font_size: u8,
    pub dark_mode: bool,
    pub bookmarked: bool,
    pub show_controls: bool,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            dark_mode: false,
            bookmarked: false,
            show_controls: true,
        }
    }
}

impl ReaderSettings {
    #[must_use]
    pub fn with_font_size(self, size: u8) -> Self {
        Self {
            font_size: size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            ..self
        }
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        self.with_font_size(self.font_size.saturating_add(1))
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        self.with_font_size(self.font_size.saturating_sub(1))
    }

    #[must_use]
    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_bookmark(self) -> Self {
        Self {
            bookmarked: !self.bookmarked,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_controls(self) -> Self {
        Self {
            show_controls: !self.show_controls,
            ..self
        }
    }
}

/// The passage shown by the reader
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReaderContent {
    pub chapter_label: &'static str,
    pub chapter_title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub notice: &'static str,
}

const PARAGRAPHS: &[&str] = &[
    "Detective Sarah Chen stared at the evidence board, her coffee growing cold as the pieces of the puzzle slowly began to align. The warehouse fire, the missing persons reports, the encrypted files\u{2014}they weren't separate incidents as she'd initially thought.",
    "A soft knock interrupted her concentration. \"Detective Chen?\" Officer Martinez peered around the door. \"You've been here all night. Maybe you should\u{2014}\"",
    "\"Martinez, look at this.\" Sarah's voice cut through the early morning silence of the precinct. She pointed to a series of photographs pinned to the board. \"What do you see in these crime scenes?\"",
    "Martinez approached cautiously, studying the images. \"Standard warehouse district. Nothing unusual except for the\u{2014}\" He stopped mid-sentence, his eyes widening. \"The symbols. They're all there, aren't they?\"",
    "Sarah nodded grimly. \"Every single location. And they're not random graffiti like we initially thought. They're signatures. Someone is marking their territory, and it's bigger than we imagined.\"",
    "The detective pulled out her phone and scrolled to a message that had arrived during the night. The sender was anonymous, but the content made her blood run cold: \"You're getting closer, Detective. But are you prepared for what you'll find?\"",
    "Sarah's hands trembled slightly as she set down the phone. After fifteen years on the force, she thought she'd seen everything. But this case was different. This case was personal. And somewhere in the shadows of the city, someone was watching, waiting for her next move.",
];

pub const STUB_CONTENT: ReaderContent = ReaderContent {
    chapter_label: "Chapter 12",
    chapter_title: "The Discovery",
    paragraphs: PARAGRAPHS,
    notice: "Content protected \u{2022} No copying or downloading allowed",
};

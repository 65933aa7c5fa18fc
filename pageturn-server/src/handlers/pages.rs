//! Page view handlers

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use pageturn_core::chrome::Chrome;
use pageturn_core::views::{
    resolve_detail, resolve_reader, GenreView, HomeView, Resolution, SupportView,
};
use pageturn_core::{BrowseState, Format, ReaderSettings, SortMode};
use serde::{Deserialize, Serialize};

/// Query parameters for the browse page
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Search text matched against title and author
    pub search: Option<String>,

    /// Genre selector value ("all" when absent)
    pub genre: Option<String>,

    /// Sort selector value
    pub sort: Option<String>,
}

/// Catalog browse page
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Json<HomeView>, (StatusCode, String)> {
    let mut browse = BrowseState::new();
    if let Some(search) = query.search {
        browse = browse.with_search(search);
    }
    if let Some(genre) = query.genre.filter(|g| !g.is_empty()) {
        browse = browse.with_genre(genre);
    }
    if let Some(sort) = query.sort {
        let sort: SortMode = sort
            .parse()
            .map_err(|e: pageturn_core::ParseError| (StatusCode::BAD_REQUEST, e.to_string()))?;
        browse = browse.with_sort(sort);
    }

    Ok(Json(HomeView::build(&state.catalog, &browse)))
}

/// Books of one genre
pub async fn genre(State(state): State<AppState>, Path(genre): Path<String>) -> Json<GenreView> {
    Json(GenreView::build(&state.catalog, &genre))
}

/// Query parameters for the detail page
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    /// Selected purchase format (digital when absent)
    pub format: Option<String>,

    #[serde(default)]
    pub wishlisted: bool,
}

/// Parse an optional format parameter
pub(crate) fn parse_format(format: Option<&str>) -> Result<Format, (StatusCode, String)> {
    match format {
        Some(f) => f
            .parse()
            .map_err(|e: pageturn_core::ParseError| (StatusCode::BAD_REQUEST, e.to_string())),
        None => Ok(Format::default()),
    }
}

/// Book detail page; unknown ids redirect to the catalog root
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Response, (StatusCode, String)> {
    let format = parse_format(query.format.as_deref())?;
    let resolution = resolve_detail(&state.catalog, &id, format).map(|view| {
        if query.wishlisted {
            view.toggle_wishlist()
        } else {
            view
        }
    });
    Ok(render(resolution))
}

/// Query parameters for the reader
#[derive(Debug, Deserialize)]
pub struct ReaderQuery {
    pub page: Option<u32>,
    pub font_size: Option<u32>,
    #[serde(default)]
    pub dark: bool,
    #[serde(default)]
    pub bookmarked: bool,
    pub controls: Option<bool>,
}

/// Reader stub; unknown ids redirect to the catalog root
pub async fn reader(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ReaderQuery>,
) -> Response {
    let defaults = ReaderSettings::default();
    let settings = ReaderSettings {
        dark_mode: query.dark,
        bookmarked: query.bookmarked,
        show_controls: query.controls.unwrap_or(defaults.show_controls),
        ..defaults
    }
    .with_font_size(
        query
            .font_size
            .map_or(defaults.font_size, |size| u8::try_from(size).unwrap_or(u8::MAX)),
    );

    render(resolve_reader(&state.catalog, &id, query.page, settings))
}

/// Support and FAQ page
pub async fn support_page() -> Json<SupportView> {
    Json(SupportView::default())
}

/// Navigation bar and footer
pub async fn chrome() -> Json<Chrome> {
    Json(Chrome::current())
}

fn render<T: Serialize>(resolution: Resolution<T>) -> Response {
    match resolution {
        Resolution::Render(view) => Json(view).into_response(),
        Resolution::Redirect(route) => Redirect::to(&route.to_string()).into_response(),
    }
}

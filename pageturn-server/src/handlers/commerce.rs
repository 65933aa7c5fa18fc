//! Simulated commerce actions

use super::pages::parse_format;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use pageturn_core::purchase::{self, PurchaseOutcome, TransitionInfo};
use pageturn_core::{Book, Notification};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query parameters for format-aware actions
#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    pub format: Option<String>,
}

/// Notification plus an optional pending reader transition
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionInfo>,
}

/// Add a book to the (mock) cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    let format = parse_format(query.format.as_deref())?;
    let book = find_book(&state, &book_id)?;

    Ok(Json(ActionResponse {
        notification: purchase::add_to_cart(book, format),
        transition: None,
    }))
}

/// "Buy Now" from the detail page
pub async fn buy_now(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    let format = parse_format(query.format.as_deref())?;
    let book = find_book(&state, &book_id)?;

    let outcome = purchase::buy_now(book, format, state.navigator());
    Ok(Json(respond(&state, outcome)))
}

/// Quick-buy from a book card
pub async fn quick_buy(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<ActionResponse>, (StatusCode, String)> {
    let book = find_book(&state, &book_id)?;

    let outcome = purchase::quick_buy(book, state.navigator());
    Ok(Json(respond(&state, outcome)))
}

/// Cancel a pending reader transition
pub async fn cancel_purchase(
    State(state): State<AppState>,
    Path(ticket): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let ticket = Uuid::parse_str(&ticket)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid ticket".to_string()))?;

    match state.cancel(ticket).await {
        Some(true) => Ok(StatusCode::NO_CONTENT),
        // Fired between lookup and cancel; nothing left pending.
        Some(false) | None => Err((
            StatusCode::NOT_FOUND,
            "No pending transition".to_string(),
        )),
    }
}

fn find_book<'a>(state: &'a AppState, id: &str) -> Result<&'a Book, (StatusCode, String)> {
    state.catalog.get_book_by_id(id).ok_or_else(|| {
        tracing::debug!(book = %id, "Action on unknown book");
        (StatusCode::NOT_FOUND, "Book not found".to_string())
    })
}

fn respond(state: &AppState, outcome: PurchaseOutcome) -> ActionResponse {
    ActionResponse {
        notification: outcome.notification,
        transition: outcome.transition.map(|t| state.track(t)),
    }
}

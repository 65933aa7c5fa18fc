//! Support contact form

use axum::{http::StatusCode, Json};
use pageturn_core::support::ContactForm;
use pageturn_core::Notification;

/// Accept a contact form submission
///
/// Nothing is delivered anywhere; a valid form only produces the
/// confirmation notification.
pub async fn contact(
    Json(mut form): Json<ContactForm>,
) -> Result<Json<Notification>, (StatusCode, Json<Notification>)> {
    form.submit().map(Json).map_err(|e| {
        tracing::debug!("Rejected contact form: {}", e);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Notification::error(e.to_string())),
        )
    })
}

//! Server-Sent Events handler for delayed transitions

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// SSE endpoint: tells clients when a purchase opens the reader
pub async fn sync_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();
    let stream = BroadcastStream::new(rx);

    let event_stream = stream.filter_map(|result| match result {
        Ok(event) => Some(Ok(to_event(event))),
        Err(_) => None, // Lagged, skip
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}

fn to_event(event: ServerEvent) -> Event {
    let (event_type, data) = event_payload(event);
    Event::default().event(event_type).data(data.to_string())
}

/// SSE event name and JSON data for a server event
fn event_payload(event: ServerEvent) -> (&'static str, serde_json::Value) {
    match event {
        ServerEvent::Navigate { ticket, to } => (
            "navigate",
            serde_json::json!({ "ticket": ticket, "to": to }),
        ),
        ServerEvent::PurchaseCancelled { ticket } => (
            "purchase_cancelled",
            serde_json::json!({ "ticket": ticket }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_navigate_event() {
        let ticket = Uuid::new_v4();
        let (name, data) = event_payload(ServerEvent::Navigate {
            ticket,
            to: "/reader/shadows-city".to_string(),
        });

        assert_eq!(name, "navigate");
        assert_eq!(
            data,
            serde_json::json!({ "ticket": ticket.to_string(), "to": "/reader/shadows-city" })
        );
    }

    #[test]
    fn test_purchase_cancelled_event() {
        let ticket = Uuid::new_v4();
        let (name, data) = event_payload(ServerEvent::PurchaseCancelled { ticket });

        assert_eq!(name, "purchase_cancelled");
        assert_eq!(data.to_string(), format!(r#"{{"ticket":"{}"}}"#, ticket));
    }
}

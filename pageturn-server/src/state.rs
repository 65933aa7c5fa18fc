//! Application state

use crate::config::ServerConfig;
use pageturn_core::purchase::{Navigator, PendingTransition, TransitionInfo};
use pageturn_core::{Catalog, Route};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Pending purchase transitions keyed by ticket
type PendingMap = Arc<Mutex<HashMap<Uuid, PendingTransition>>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog served by every page
    pub catalog: Arc<Catalog>,

    pub config: Arc<ServerConfig>,

    /// Delayed reader transitions that can still be cancelled
    pub pending: PendingMap,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<ServerEvent>,
}

/// Server-sent events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// A purchase delay elapsed; the client should open `to`
    Navigate { ticket: Uuid, to: String },

    /// A pending transition was cancelled
    PurchaseCancelled { ticket: Uuid },
}

impl AppState {
    /// Create application state, loading the configured catalog if any
    pub async fn new(config: ServerConfig) -> Self {
        let catalog = match &config.catalog_path {
            Some(path) => match Catalog::load(path).await {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::warn!(
                        "Failed to load catalog from {}, using built-in catalog: {}",
                        path.display(),
                        e
                    );
                    Catalog::seeded()
                }
            },
            None => Catalog::seeded(),
        };
        tracing::info!("Serving {} books", catalog.len());
        Self::with_catalog(catalog, config)
    }

    /// Create state around an already-built catalog
    pub fn with_catalog(catalog: Catalog, config: ServerConfig) -> Self {
        let (event_tx, _) = broadcast::channel(100);
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            pending: Arc::new(Mutex::new(HashMap::new())),
            event_tx,
        }
    }

    /// Navigator that reports fired transitions over SSE
    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::new(BroadcastNavigator {
            pending: self.pending.clone(),
            event_tx: self.event_tx.clone(),
        })
    }

    /// Keep a transition alive until it fires or is cancelled
    pub fn track(&self, transition: PendingTransition) -> TransitionInfo {
        let info = transition.info();
        if !transition.is_finished() {
            lock(&self.pending).insert(info.ticket, transition);
        }
        info
    }

    /// Cancel a pending transition
    ///
    /// Returns `None` for unknown tickets, otherwise whether the transition
    /// was stopped before firing.
    pub async fn cancel(&self, ticket: Uuid) -> Option<bool> {
        let transition = lock(&self.pending).remove(&ticket)?;
        let cancelled = transition.cancel().await;
        if cancelled {
            self.broadcast(ServerEvent::PurchaseCancelled { ticket });
        }
        Some(cancelled)
    }

    /// Number of transitions still waiting
    pub fn pending_count(&self) -> usize {
        lock(&self.pending).len()
    }

    /// Subscribe to server events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }
}

fn lock(
    pending: &Mutex<HashMap<Uuid, PendingTransition>>,
) -> MutexGuard<'_, HashMap<Uuid, PendingTransition>> {
    pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct BroadcastNavigator {
    pending: PendingMap,
    event_tx: broadcast::Sender<ServerEvent>,
}

impl Navigator for BroadcastNavigator {
    fn navigate(&self, ticket: Uuid, route: Route) {
        // Already fired; nothing left to cancel.
        lock(&self.pending).remove(&ticket);
        let _ = self.event_tx.send(ServerEvent::Navigate {
            ticket,
            to: route.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageturn_core::purchase;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::with_catalog(Catalog::seeded(), ServerConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_transition_is_broadcast() {
        let state = state();
        let mut rx = state.subscribe();
        let book = state.catalog.get_book_by_id("shadows-city").unwrap().clone();

        let outcome = purchase::quick_buy(&book, state.navigator());
        let info = state.track(outcome.transition.unwrap());
        assert_eq!(state.pending_count(), 1);

        tokio::time::sleep(purchase::QUICK_BUY_DELAY + Duration::from_millis(1)).await;

        assert_eq!(
            rx.recv().await.unwrap(),
            ServerEvent::Navigate {
                ticket: info.ticket,
                to: "/reader/shadows-city".to_string(),
            }
        );
        assert_eq!(state.pending_count(), 0);
        assert_eq!(state.cancel(info.ticket).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_transition_never_navigates() {
        let state = state();
        let mut rx = state.subscribe();
        let book = state.catalog.get_book_by_id("quantum-frontier").unwrap().clone();

        let outcome = purchase::purchase_digital(&book, state.navigator());
        let info = state.track(outcome.transition.unwrap());

        assert_eq!(state.cancel(info.ticket).await, Some(true));
        tokio::time::sleep(purchase::BUY_NOW_DELAY * 2).await;

        assert_eq!(
            rx.recv().await.unwrap(),
            ServerEvent::PurchaseCancelled { ticket: info.ticket }
        );
        assert!(rx.try_recv().is_err());
    }
}

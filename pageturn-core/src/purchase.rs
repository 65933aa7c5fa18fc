//! Simulated commerce: cart, buy-now and quick-buy
//!
//! No transaction happens anywhere. Each action returns a notification, and
//! digital purchases additionally schedule a [`PendingTransition`] to the
//! reader. The transition is owned by the view that started it: dropping or
//! cancelling it before the delay elapses means the [`Navigator`] is never
//! called.
//!
//! Scheduling spawns a tokio task, so these functions must be called from
//! within a tokio runtime.

use crate::route::Route;
use crate::types::{Book, Format, Notification};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Delay between a card quick-buy and opening the reader
pub const QUICK_BUY_DELAY: Duration = Duration::from_millis(1500);

/// Delay between "Buy Now" and opening the reader
pub const BUY_NOW_DELAY: Duration = Duration::from_millis(2000);

/// Receives transitions once their delay has elapsed
pub trait Navigator: Send + Sync {
    fn navigate(&self, ticket: Uuid, route: Route);
}

/// A delayed navigation that can still be called off
#[derive(Debug)]
pub struct PendingTransition {
    ticket: Uuid,
    target: Route,
    delay: Duration,
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<bool>,
}

impl PendingTransition {
    /// Navigate to `target` after `delay` unless cancelled first
    pub fn schedule(target: Route, delay: Duration, navigator: Arc<dyn Navigator>) -> Self {
        let ticket = Uuid::new_v4();
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let route = target.clone();

        let handle = tokio::spawn(async move {
            // A dropped sender also resolves the receiver, so dropping the
            // transition cancels it.
            let fired = tokio::select! {
                biased;
                _ = cancel_rx => false,
                _ = tokio::time::sleep(delay) => true,
            };
            if fired {
                tracing::debug!(%ticket, %route, "Transition fired");
                navigator.navigate(ticket, route);
            } else {
                tracing::debug!(%ticket, %route, "Transition cancelled");
            }
            fired
        });

        Self {
            ticket,
            target,
            delay,
            cancel: Some(cancel_tx),
            handle,
        }
    }

    pub fn ticket(&self) -> Uuid {
        self.ticket
    }

    pub fn target(&self) -> &Route {
        &self.target
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the transition has either fired or been cancelled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Call the transition off
    ///
    /// Returns `true` if it was cancelled, `false` if it had already fired.
    pub async fn cancel(mut self) -> bool {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
        match (&mut self.handle).await {
            Ok(fired) => !fired,
            Err(_) => true,
        }
    }

    /// Wait for the transition to resolve; `true` if it fired
    pub async fn wait(mut self) -> bool {
        (&mut self.handle).await.unwrap_or(false)
    }

    /// Summary suitable for serializing to a client
    pub fn info(&self) -> TransitionInfo {
        TransitionInfo {
            ticket: self.ticket,
            redirect_to: self.target.clone(),
            delay_ms: self.delay.as_millis() as u64,
        }
    }
}

/// Client-facing description of a pending transition
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransitionInfo {
    pub ticket: Uuid,
    pub redirect_to: Route,
    pub delay_ms: u64,
}

/// Result of a purchase action
#[derive(Debug)]
pub struct PurchaseOutcome {
    pub notification: Notification,
    pub transition: Option<PendingTransition>,
}

/// "Add to Cart": notification only, nothing is stored
pub fn add_to_cart(book: &Book, format: Format) -> Notification {
    tracing::info!(book = %book.id, %format, "Added to cart");
    Notification::success(format!("{} ({}) added to cart!", book.title, format))
}

/// "Buy Now" on the detail page
///
/// Digital purchases open the reader after [`BUY_NOW_DELAY`]; hardcopy
/// purchases only notify.
pub fn buy_now(book: &Book, format: Format, navigator: Arc<dyn Navigator>) -> PurchaseOutcome {
    tracing::info!(book = %book.id, %format, "Checkout started");
    let notification = Notification::success(format!(
        "Proceeding to checkout for {} ({})",
        book.title, format
    ));
    let transition = (format == Format::Digital).then(|| {
        PendingTransition::schedule(Route::reader(book.id.clone()), BUY_NOW_DELAY, navigator)
    });
    PurchaseOutcome {
        notification,
        transition,
    }
}

/// Buy the digital edition and open the reader after a delay
pub fn purchase_digital(book: &Book, navigator: Arc<dyn Navigator>) -> PurchaseOutcome {
    buy_now(book, Format::Digital, navigator)
}

/// Quick-buy button on a book card
pub fn quick_buy(book: &Book, navigator: Arc<dyn Navigator>) -> PurchaseOutcome {
    tracing::info!(book = %book.id, "Quick-buy");
    PurchaseOutcome {
        notification: Notification::success("Digital copy purchased! Opening reader..."),
        transition: Some(PendingTransition::schedule(
            Route::reader(book.id.clone()),
            QUICK_BUY_DELAY,
            navigator,
        )),
    }
}

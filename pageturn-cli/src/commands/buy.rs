//! Buy command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pageturn_core::purchase::{self, Navigator};
use pageturn_core::{Catalog, Format, Route};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Prints where a fired transition would take the user
struct TerminalNavigator(mpsc::UnboundedSender<Route>);

impl Navigator for TerminalNavigator {
    fn navigate(&self, ticket: Uuid, route: Route) {
        tracing::debug!(%ticket, %route, "Navigating");
        let _ = self.0.send(route);
    }
}

/// Simulate a purchase and wait for the reader transition
///
/// Ctrl-C during the wait cancels the transition.
pub async fn buy(catalog: &Catalog, id: &str, format: &str, quick: bool) -> Result<()> {
    let format: Format = format
        .parse()
        .with_context(|| format!("Invalid format: {}", format))?;
    let book = catalog
        .get_book_by_id(id)
        .with_context(|| format!("Book not found: {}", id))?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let navigator: Arc<dyn Navigator> = Arc::new(TerminalNavigator(tx));
    let outcome = if quick {
        purchase::quick_buy(book, navigator)
    } else {
        purchase::buy_now(book, format, navigator)
    };

    println!("{}", outcome.notification.message);

    let Some(transition) = outcome.transition else {
        return Ok(());
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!(
        "Opening reader in {} ms (Ctrl-C to cancel)...",
        transition.delay().as_millis()
    ));

    tokio::select! {
        route = rx.recv() => {
            match route {
                Some(route) => pb.finish_with_message(format!("Opening reader: {}", route)),
                None => pb.finish_with_message("Transition ended without navigating"),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            let cancelled = transition.cancel().await;
            if cancelled {
                pb.finish_with_message("Purchase transition cancelled");
            } else {
                pb.finish_with_message("Reader was already opening");
            }
        }
    }

    Ok(())
}

//! Debounced search controller.
//!
//! Collapses rapid edits of the search field into a single fetch
//! trigger: each edit cancels the pending timer and arms a new one, and
//! only a timer that survives the full quiet period emits a query.
//! Every emitted query carries a monotonic sequence number so the
//! dashboard can drop responses superseded by a newer search.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Quiet period before an edit triggers a fetch.
pub const QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// A fetch trigger emitted after the quiet period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Monotonically increasing; higher means newer.
    pub seq: u64,
    /// The latest text value at the time the timer was armed.
    pub city: String,
}

/// Owns the single pending debounce timer.
///
/// The timer is exclusively owned and replaced, never accumulated: an
/// edit aborts whatever was pending before arming the next one, so at
/// most one timer exists at any moment.
#[derive(Debug)]
pub struct SearchController {
    quiet_period: Duration,
    next_seq: u64,
    tx: mpsc::UnboundedSender<SearchQuery>,
    pending: Option<JoinHandle<()>>,
}

impl SearchController {
    pub fn new(tx: mpsc::UnboundedSender<SearchQuery>) -> Self {
        Self::with_quiet_period(tx, QUIET_PERIOD)
    }

    pub fn with_quiet_period(tx: mpsc::UnboundedSender<SearchQuery>, quiet_period: Duration) -> Self {
        Self { quiet_period, next_seq: 0, tx, pending: None }
    }

    /// Handle one edit of the search field.
    ///
    /// Must run inside a tokio runtime. Empty and whitespace-only text
    /// cancels any pending timer without arming a new one.
    pub fn on_edit(&mut self, text: &str) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let city = text.trim().to_string();
        if city.is_empty() {
            return;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        let quiet_period = self.quiet_period;
        let tx = self.tx.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            debug!(%city, seq, "quiet period elapsed, triggering fetch");
            // The receiver may be gone during shutdown; nothing to do then.
            let _ = tx.send(SearchQuery { seq, city });
        }));
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_collapse_into_one_fetch_with_the_last_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut controller = SearchController::new(tx);

        controller.on_edit("k");
        controller.on_edit("ka");
        controller.on_edit("kathmandu");

        let query = rx.recv().await.unwrap();
        assert_eq!(query.city, "kathmandu");

        tokio::time::advance(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut controller = SearchController::new(tx);

        controller.on_edit("");
        controller.on_edit("   ");

        tokio::time::advance(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_field_cancels_a_pending_fetch() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut controller = SearchController::new(tx);

        controller.on_edit("pokhara");
        controller.on_edit("");

        tokio::time::advance(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_fire_separately_with_increasing_seq() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut controller = SearchController::new(tx);

        controller.on_edit("pokhara");
        let first = rx.recv().await.unwrap();
        assert_eq!(first.city, "pokhara");

        controller.on_edit("biratnagar");
        let second = rx.recv().await.unwrap();
        assert_eq!(second.city, "biratnagar");

        assert!(second.seq > first.seq);
    }

    #[tokio::test(start_paused = true)]
    async fn input_is_trimmed_before_fetching() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut controller = SearchController::new(tx);

        controller.on_edit("  kathmandu  ");
        let query = rx.recv().await.unwrap();
        assert_eq!(query.city, "kathmandu");
    }
}

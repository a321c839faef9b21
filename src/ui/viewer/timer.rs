// SPDX-License-Identifier: MPL-2.0
//! Cancellable flip-completion timers.
//!
//! A flip request schedules exactly one completion. The completion is not a
//! callback into the viewer: the timer hands back a [`FlipTicket`], and the
//! owner delivers it as a message. The viewer only honours a ticket it issued
//! itself while it is still alive, so a ticket that outlives its viewer is
//! inert.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Identity of one viewer instance. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewerId(u64);

impl ViewerId {
    /// Allocates a fresh id.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Proof that a specific flip of a specific viewer has finished animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipTicket {
    pub viewer: ViewerId,
    pub sequence: u64,
}

/// Scheduler for the single outstanding flip completion of a viewer.
pub trait FlipTimer {
    /// Delivers `ticket` once `delay` has elapsed. Replaces any ticket still
    /// pending.
    fn schedule(&mut self, ticket: FlipTicket, delay: Duration);

    /// Drops the pending ticket, if any. It will never be delivered.
    fn cancel(&mut self);
}

/// Timer backed by a Tokio task that sends the ticket on a channel.
///
/// Must be used from within a Tokio runtime. Cancelling or dropping the timer
/// aborts the sleeping task.
#[derive(Debug)]
pub struct TokioFlipTimer {
    sender: UnboundedSender<FlipTicket>,
    task: Option<JoinHandle<()>>,
}

impl TokioFlipTimer {
    #[must_use]
    pub fn new(sender: UnboundedSender<FlipTicket>) -> Self {
        Self { sender, task: None }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl FlipTimer for TokioFlipTimer {
    fn schedule(&mut self, ticket: FlipTicket, delay: Duration) {
        self.cancel();
        let sender = self.sender.clone();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone when the whole page was torn down.
            let _ = sender.send(ticket);
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioFlipTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Timer driven by a simulated clock.
///
/// Time only moves when [`ManualFlipTimer::advance`] is called, which makes
/// flip sequences fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct ManualFlipTimer {
    now: Duration,
    pending: Option<(FlipTicket, Duration)>,
}

impl ManualFlipTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward and returns the ticket that came due, if any.
    pub fn advance(&mut self, by: Duration) -> Option<FlipTicket> {
        self.now = self.now.saturating_add(by);
        match self.pending {
            Some((ticket, due)) if due <= self.now => {
                self.pending = None;
                Some(ticket)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending(&self) -> Option<FlipTicket> {
        self.pending.map(|(ticket, _)| ticket)
    }
}

impl FlipTimer for ManualFlipTimer {
    fn schedule(&mut self, ticket: FlipTicket, delay: Duration) {
        self.pending = Some((ticket, self.now.saturating_add(delay)));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn ticket(sequence: u64) -> FlipTicket {
        FlipTicket {
            viewer: ViewerId::next(),
            sequence,
        }
    }

    #[test]
    fn viewer_ids_are_unique() {
        let a = ViewerId::next();
        let b = ViewerId::next();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }

    #[test]
    fn manual_timer_fires_only_once_due() {
        let mut timer = ManualFlipTimer::new();
        let t = ticket(1);
        timer.schedule(t, Duration::from_millis(700));

        assert_eq!(timer.advance(Duration::from_millis(699)), None);
        assert_eq!(timer.advance(Duration::from_millis(1)), Some(t));
        assert_eq!(timer.advance(Duration::from_secs(5)), None);
    }

    #[test]
    fn manual_timer_cancel_drops_ticket() {
        let mut timer = ManualFlipTimer::new();
        timer.schedule(ticket(1), Duration::from_millis(700));
        timer.cancel();
        assert!(timer.pending().is_none());
        assert_eq!(timer.advance(Duration::from_secs(1)), None);
    }

    #[test]
    fn manual_timer_schedule_replaces_pending() {
        let mut timer = ManualFlipTimer::new();
        timer.schedule(ticket(1), Duration::from_millis(700));
        let second = ticket(2);
        timer.schedule(second, Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(100)), Some(second));
    }

    #[test]
    fn manual_clock_saturates_instead_of_overflowing() {
        let mut timer = ManualFlipTimer::new();
        timer.advance(Duration::from_millis(1));
        let t = ticket(1);
        timer.schedule(t, Duration::from_millis(700));

        assert_eq!(timer.advance(Duration::MAX), Some(t));
        assert_eq!(timer.now(), Duration::MAX);
        assert_eq!(timer.advance(Duration::MAX), None);

        let late = ticket(2);
        timer.schedule(late, Duration::from_secs(1));
        assert_eq!(timer.pending(), Some(late));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_delivers_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioFlipTimer::new(tx);
        let start = tokio::time::Instant::now();
        let t = ticket(7);

        timer.schedule(t, Duration::from_millis(700));
        let delivered = rx.recv().await.expect("ticket should be delivered");

        assert_eq!(delivered, t);
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioFlipTimer::new(tx);

        timer.schedule(ticket(1), Duration::from_millis(700));
        timer.cancel();
        assert!(!timer.is_pending());

        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(received.is_err(), "cancelled ticket must not arrive");
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_drop_aborts_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioFlipTimer::new(tx.clone());
        timer.schedule(ticket(1), Duration::from_millis(700));
        drop(timer);

        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(received.is_err(), "ticket of a dropped timer must not arrive");
        drop(tx);
    }
}

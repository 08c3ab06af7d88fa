//! Autosave scheduler
//!
//! A single-slot debounce: a burst of edit events collapses into one save
//! after a quiet period. Only the most recent arm survives; re-arming aborts
//! the pending slot, so repeated arming can never produce two fires. This is
//! the one timing-sensitive piece of the editor and the usual source of
//! duplicate-write or lost-write bugs when the slot is not exclusive.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::util::lock;

/// Quiet period between the last edit and the autosave fire.
pub const QUIET_PERIOD: Duration = Duration::from_secs(10);

/// Process-wide debounce slot: at most one live timer at any instant.
///
/// The slot is identity-less; only armed/idle matters, not which edit armed
/// it. Must be used from within a Tokio runtime.
#[derive(Debug)]
pub struct AutosaveScheduler {
    quiet_period: Duration,
    slot: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AutosaveScheduler {
    fn default() -> Self {
        Self::new(QUIET_PERIOD)
    }
}

impl AutosaveScheduler {
    #[must_use]
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            slot: Mutex::new(None),
        }
    }

    /// Cancel any pending timer and start a new one; `on_fire` runs exactly
    /// once after the quiet period unless the slot is re-armed or cleared
    /// first.
    pub fn arm<F>(&self, on_fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let quiet_period = self.quiet_period;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            on_fire.await;
        });

        let mut slot = lock(&self.slot);
        if let Some(pending) = slot.replace(handle) {
            pending.abort();
        }
    }

    /// Clear the slot without re-arming. Used when the draft is replaced so
    /// a stale timer cannot fire against the wrong draft.
    pub fn clear(&self) {
        if let Some(pending) = lock(&self.slot).take() {
            pending.abort();
        }
    }

    /// Whether a timer is currently pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        lock(&self.slot)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for AutosaveScheduler {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    fn arm_counting(scheduler: &AutosaveScheduler, fires: &Arc<AtomicUsize>) {
        let fires = Arc::clone(fires);
        scheduler.arm(async move {
            fires.fetch_add(1, Ordering::SeqCst);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn fires_exactly_once_after_quiet_period() {
        let scheduler = AutosaveScheduler::new(QUIET_PERIOD);
        let fires = counter();

        arm_counting(&scheduler, &fires);
        assert!(scheduler.is_armed());

        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(10)).await;
        assert_eq!(fires.load(Ordering::SeqCst), 1);

        // Slot returned to idle; nothing else fires later.
        tokio::time::sleep(QUIET_PERIOD * 3).await;
        assert_eq!(fires.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_arming_collapses_to_one_fire() {
        let scheduler = AutosaveScheduler::new(QUIET_PERIOD);
        let fires = counter();

        // A typing burst: re-arm every two seconds, never letting the quiet
        // period elapse.
        for _ in 0..5 {
            arm_counting(&scheduler, &fires);
            tokio::time::sleep(Duration::from_secs(2)).await;
        }
        assert_eq!(fires.load(Ordering::SeqCst), 0);

        tokio::time::sleep(QUIET_PERIOD).await;
        assert_eq!(fires.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_after_fire_starts_a_fresh_cycle() {
        let scheduler = AutosaveScheduler::new(QUIET_PERIOD);
        let fires = counter();

        arm_counting(&scheduler, &fires);
        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(10)).await;
        assert_eq!(fires.load(Ordering::SeqCst), 1);

        arm_counting(&scheduler, &fires);
        tokio::time::sleep(QUIET_PERIOD + Duration::from_millis(10)).await;
        assert_eq!(fires.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_prevents_a_pending_fire() {
        let scheduler = AutosaveScheduler::new(QUIET_PERIOD);
        let fires = counter();

        arm_counting(&scheduler, &fires);
        tokio::time::sleep(Duration::from_secs(5)).await;
        scheduler.clear();
        assert!(!scheduler.is_armed());

        tokio::time::sleep(QUIET_PERIOD * 2).await;
        assert_eq!(fires.load(Ordering::SeqCst), 0);
    }
}

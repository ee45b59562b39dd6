//! Transient, auto-dismissing acknowledgments.
//!
//! The notifier owns a [`ToastState`] and at most one pending dismiss. The
//! dismiss is a deferred call driven by [`Notifier::tick`]: the event loop
//! passes the current instant on every iteration, and the toast closes itself
//! once its deadline has passed. Cancelling the deadline (on [`Notifier::close`]
//! or [`Notifier::teardown`]) guarantees it can never fire later.

use std::time::{Duration, Instant};

use crate::constants::DEFAULT_TOAST_DURATION;

/// What the toast widget renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Whether the toast is currently shown
    pub visible: bool,
    /// Message text (kept after closing so a fade-out could still read it)
    pub message: String,
}

/// Single-shot deferred call that can be cancelled before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingDismiss {
    due: Instant,
}

impl PendingDismiss {
    fn is_due(self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Toast controller.
#[derive(Debug, Clone)]
pub struct Notifier {
    state: ToastState,
    pending: Option<PendingDismiss>,
    default_duration: Duration,
}

impl Notifier {
    /// Creates a hidden notifier using `default_duration` for [`Notifier::show`].
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            state: ToastState::default(),
            pending: None,
            default_duration,
        }
    }

    /// Shows `message` for the default duration.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.show_for(message, self.default_duration, now);
    }

    /// Shows `message` and (re)starts the countdown.
    ///
    /// Showing while already visible replaces the message and restarts the
    /// single countdown rather than stacking a second one.
    pub fn show_for(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.state.message = message.into();
        self.state.visible = true;
        self.pending = Some(PendingDismiss {
            due: now + duration,
        });
        tracing::debug!(message = %self.state.message, ?duration, "toast shown");
    }

    /// Hides the toast immediately and cancels any pending dismiss.
    pub fn close(&mut self) {
        self.pending = None;
        if self.state.visible {
            tracing::debug!("toast closed");
        }
        self.state.visible = false;
    }

    /// Fires the pending dismiss if its deadline has passed.
    ///
    /// Returns true when this call closed the toast.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.is_due(now) => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Cancels the pending dismiss without touching visibility.
    ///
    /// Called when the view holding the toast goes away.
    pub fn teardown(&mut self) {
        self.pending = None;
    }

    /// Current toast state.
    #[must_use]
    pub const fn state(&self) -> &ToastState {
        &self.state
    }

    /// Whether the toast is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.state.visible
    }

    /// Whether a dismiss is scheduled.
    #[must_use]
    pub const fn has_pending_dismiss(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_default_duration_is_three_seconds() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show("saved", start);
        assert!(!notifier.tick(start + 2999 * MS));
        assert!(notifier.tick(start + 3000 * MS));
    }

    #[test]
    fn test_show_then_auto_dismiss() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show("Saved", start);

        assert!(notifier.is_visible());
        assert_eq!(notifier.state().message, "Saved");

        assert!(!notifier.tick(start + 2999 * MS));
        assert!(notifier.is_visible());

        assert!(notifier.tick(start + 3000 * MS));
        assert!(!notifier.is_visible());
        assert!(!notifier.has_pending_dismiss());
    }

    #[test]
    fn test_close_cancels_pending_dismiss() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show("Saved", start);
        notifier.close();

        assert!(!notifier.is_visible());
        assert!(!notifier.has_pending_dismiss());
        // a later tick must not fire anything
        assert!(!notifier.tick(start + 10_000 * MS));
    }

    #[test]
    fn test_reshow_restarts_single_countdown() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show("first", start);
        notifier.show("second", start + 2000 * MS);

        assert_eq!(notifier.state().message, "second");
        // the first deadline has passed but was replaced
        assert!(!notifier.tick(start + 3500 * MS));
        assert!(notifier.is_visible());
        assert!(notifier.tick(start + 5000 * MS));
    }

    #[test]
    fn test_custom_duration() {
        let start = Instant::now();
        let mut notifier = Notifier::new(Duration::from_millis(500));
        notifier.show_for("quick", 100 * MS, start);
        assert!(!notifier.tick(start + 99 * MS));
        assert!(notifier.tick(start + 100 * MS));
    }

    #[test]
    fn test_teardown_prevents_late_dismiss() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show("bye", start);
        notifier.teardown();
        assert!(!notifier.tick(start + 5000 * MS));
        assert!(!notifier.has_pending_dismiss());
    }
}

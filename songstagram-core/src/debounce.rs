use std::time::{Duration, Instant};

/// Generic quiescence window for debounced input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Window used by the explore search box.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Trailing-edge debounce. Every `input` replaces the pending value and
/// restarts the window; the value is released by `poll` once the window has
/// elapsed without further input.
///
/// The caller owns the clock, so the same state works under a real timer or
/// in tests.
#[derive(Debug)]
pub struct Debounce<T> {
    duration: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn trailing(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    pub fn input(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.duration));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_releases_after_quiet_window() {
        let start = Instant::now();
        let mut debounce = Debounce::trailing(SEARCH_DEBOUNCE);
        debounce.input("ra", start);

        assert_eq!(debounce.poll(start + 249 * MS), None);
        assert_eq!(debounce.poll(start + 250 * MS), Some("ra"));
        assert_eq!(debounce.poll(start + 500 * MS), None);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_new_input_supersedes_pending() {
        let start = Instant::now();
        let mut debounce = Debounce::trailing(SEARCH_DEBOUNCE);
        debounce.input("r", start);
        debounce.input("ra", start + 200 * MS);
        debounce.input("rad", start + 400 * MS);

        assert_eq!(debounce.deadline(), Some(start + 650 * MS));
        assert_eq!(debounce.poll(start + 600 * MS), None);
        assert_eq!(debounce.poll(start + 650 * MS), Some("rad"));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debounce = Debounce::trailing(DEFAULT_DEBOUNCE);
        debounce.input(1, start);
        debounce.cancel();
        assert_eq!(debounce.deadline(), None);
        assert_eq!(debounce.poll(start + DEFAULT_DEBOUNCE), None);
    }
}

/// Identity of one open period of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenToken(u64);

/// Tracks open/close transitions of a modal.
///
/// Every false -> true transition starts a new instance; closing also bumps
/// the generation, so results of work started by an earlier instance can be
/// recognised as stale and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTracker {
    is_open: bool,
    generation: u64,
}

impl OpenTracker {
    /// Feeds the current `is_open` value. Returns a token only on the
    /// transition to open.
    pub fn observe(&mut self, is_open: bool) -> Option<OpenToken> {
        let transition = is_open != self.is_open;
        self.is_open = is_open;
        if !transition {
            return None;
        }
        self.generation += 1;
        is_open.then_some(OpenToken(self.generation))
    }

    pub fn is_current(&self, token: OpenToken) -> bool {
        self.is_open && self.generation == token.0
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Token of the instance that is open right now, if any. Work started
    /// later than the open transition (a submit) keys its result on this.
    pub fn current(&self) -> Option<OpenToken> {
        self.is_open.then_some(OpenToken(self.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_issued_only_on_open_transition() {
        let mut tracker = OpenTracker::default();
        assert!(tracker.observe(false).is_none());
        let first = tracker.observe(true).unwrap();
        assert!(tracker.observe(true).is_none());
        assert!(tracker.is_current(first));
        assert!(tracker.observe(false).is_none());
        assert!(!tracker.is_open());
    }

    #[test]
    fn test_stale_instance_is_not_current() {
        let mut tracker = OpenTracker::default();
        let first = tracker.observe(true).unwrap();
        tracker.observe(false);
        assert!(!tracker.is_current(first));

        let second = tracker.observe(true).unwrap();
        assert_ne!(first, second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_submit_started_before_reopen_is_stale() {
        let mut tracker = OpenTracker::default();
        assert_eq!(tracker.current(), None);

        let opened = tracker.observe(true).unwrap();
        let submit = tracker.current().unwrap();
        assert_eq!(opened, submit);

        // closed mid-request, then another record opened
        tracker.observe(false);
        assert_eq!(tracker.current(), None);
        let reopened = tracker.observe(true).unwrap();

        assert!(!tracker.is_current(submit));
        assert!(tracker.is_current(reopened));
        assert_eq!(tracker.current(), Some(reopened));
    }
}

//! Transient roster highlight armed on each commit

use std::time::{Duration, Instant};

/// How long the highlight stays on after a commit
pub const DEFAULT_HIGHLIGHT: Duration = Duration::from_millis(1400);

/// Identifies one arming of the highlight. A newer arming makes older tokens stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightToken(u64);

/// A timed flag. Set on commit, cleared by its own timer or superseded by the next commit.
#[derive(Debug, Clone)]
pub struct Highlight {
    duration: Duration,
    generation: u64,
    deadline: Option<Instant>,
}

impl Default for Highlight {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT)
    }
}

impl Highlight {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            deadline: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Activate until `now + duration`, superseding any earlier arming
    pub fn arm(&mut self, now: Instant) -> HighlightToken {
        self.generation += 1;
        self.deadline = Some(now + self.duration);
        HighlightToken(self.generation)
    }

    /// Clear if `token` is still current. Returns whether anything was cleared.
    pub fn clear(&mut self, token: HighlightToken) -> bool {
        if token.0 != self.generation || self.deadline.is_none() {
            return false;
        }
        self.deadline = None;
        true
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }
}

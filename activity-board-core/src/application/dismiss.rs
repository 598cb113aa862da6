use crate::domain::NoticeId;
use std::time::Duration;

/// Schedules the automatic dismissal of a notice.
///
/// Scheduling replaces (and cancels) any dismissal still pending. When the
/// delay elapses the surface sends `BoardCommand::DismissNotice(notice)`.
pub trait DismissScheduler {
    fn schedule(&mut self, notice: NoticeId, after: Duration);

    /// Drop the pending dismissal, if any
    fn cancel(&mut self);
}

/// Remembers the pending dismissal and fires it on demand.
///
/// Used where no event loop drives timers: tests and one-shot commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualDismissScheduler {
    pending: Option<(NoticeId, Duration)>,
    cancelled: usize,
}

impl ManualDismissScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<(NoticeId, Duration)> {
        self.pending
    }

    /// How many pending dismissals were cancelled or superseded
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Take the pending dismissal as if its delay had elapsed
    pub fn fire(&mut self) -> Option<NoticeId> {
        self.pending.take().map(|(id, _)| id)
    }
}

impl DismissScheduler for ManualDismissScheduler {
    fn schedule(&mut self, notice: NoticeId, after: Duration) {
        if self.pending.replace((notice, after)).is_some() {
            self.cancelled += 1;
        }
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancelled += 1;
        }
    }
}

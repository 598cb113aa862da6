use activity_board_core::application::DismissScheduler;
use activity_board_core::NoticeId;
use gloo_timers::callback::Timeout;
use std::time::Duration;
use yew::Callback;

/// Dismisses notices with a browser timeout.
///
/// Holds at most one [`Timeout`]; replacing or dropping it cancels the
/// callback.
pub struct TimeoutScheduler {
    pending: Option<Timeout>,
    on_expire: Callback<NoticeId>,
}

impl TimeoutScheduler {
    pub fn new(on_expire: Callback<NoticeId>) -> Self {
        Self {
            pending: None,
            on_expire,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl DismissScheduler for TimeoutScheduler {
    fn schedule(&mut self, notice: NoticeId, after: Duration) {
        let on_expire = self.on_expire.clone();
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || on_expire.emit(notice));

        if let Some(previous) = self.pending.replace(timeout) {
            previous.cancel();
        }
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

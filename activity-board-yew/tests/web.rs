#![cfg(target_arch = "wasm32")]

use activity_board_core::{DismissScheduler, NoticeKind};
use activity_board_core::domain::NoticeSlot;
use activity_board_yew::TimeoutScheduler;
use std::time::Duration;
use wasm_bindgen_test::*;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_scheduler_keeps_one_pending_timeout() {
    let mut slot = NoticeSlot::new();
    let first = slot.show(NoticeKind::Success, "Signed up");
    let second = slot.show(NoticeKind::Error, "Activity full");

    let mut scheduler = TimeoutScheduler::new(Callback::noop());
    scheduler.schedule(first, Duration::from_secs(5));
    scheduler.schedule(second, Duration::from_secs(5));
    assert!(scheduler.is_pending());

    scheduler.cancel();
    assert!(!scheduler.is_pending());
}

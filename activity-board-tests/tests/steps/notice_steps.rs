use activity_board_tests::BoardWorld;
use cucumber::then;
use cucumber::when;
use std::time::Duration;

#[when("the dismissal timer fires")]
fn dismissal_fires(world: &mut BoardWorld) {
    let id = world
        .controller
        .scheduler_mut()
        .fire()
        .expect("No dismissal scheduled");
    world.controller.dismiss_notice(id);
}

#[when(expr = "the dismissal of message {int} fires late")]
fn stale_dismissal_fires(world: &mut BoardWorld, index: usize) {
    let ids = world.controller.target().notice_ids();
    let id = *ids
        .get(index - 1)
        .unwrap_or_else(|| panic!("Only {} messages were shown", ids.len()));
    world.controller.dismiss_notice(id);
}

#[then(expr = "the message {string} is shown as {string}")]
fn message_shown(world: &mut BoardWorld, text: String, style: String) {
    let notice = world.view().notice.as_ref().expect("No message shown");
    assert_eq!(notice.text, text);
    assert_eq!(notice.kind.css_class(), style);
}

#[then("no message is shown")]
fn no_message(world: &mut BoardWorld) {
    assert!(world.view().notice.is_none());
}

#[then(expr = "a dismissal is scheduled after {int} seconds")]
fn dismissal_scheduled(world: &mut BoardWorld, seconds: u64) {
    let (_, after) = world
        .controller
        .scheduler()
        .pending()
        .expect("No dismissal scheduled");
    assert_eq!(after, Duration::from_secs(seconds));
}

#[then(expr = "{int} earlier dismissal(s) was/were superseded")]
fn dismissals_superseded(world: &mut BoardWorld, count: usize) {
    assert_eq!(world.controller.scheduler().cancelled(), count);
}

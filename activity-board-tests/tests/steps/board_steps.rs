use activity_board_core::application::Listing;
use activity_board_core::{Activity, BoardCommand, FilterCriteria, SortKey};
use activity_board_tests::BoardWorld;
use cucumber::{given, then, when};
use futures::executor::block_on;

fn names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn current_criteria(world: &BoardWorld) -> FilterCriteria {
    world.controller.board().criteria().clone()
}

// ===== Given Steps =====

#[given(expr = "the server offers {string} in {string} on {string} for {int} students")]
fn server_offers(
    world: &mut BoardWorld,
    name: String,
    category: String,
    schedule: String,
    max: u32,
) {
    world.server.add_activity(
        &name,
        Activity::new(format!("{} activity", name), category, schedule, max),
    );
}

#[given(expr = "{string} is signed up for {string}")]
fn participant_signed_up(world: &mut BoardWorld, email: String, name: String) {
    let mut state = world.server.state();
    let activity = state
        .activities
        .get(&name)
        .cloned()
        .unwrap_or_else(|| panic!("Activity '{}' not found", name));
    state.activities.insert(name, activity.with_participant(email));
}

#[given("the server is unreachable")]
fn server_unreachable(world: &mut BoardWorld) {
    world.server.state().offline = true;
}

#[given(expr = "the server will reject the next action with {string}")]
fn server_rejects_next(world: &mut BoardWorld, detail: String) {
    world.server.state().reject_next = Some(detail);
}

#[given("the board has loaded")]
fn board_has_loaded(world: &mut BoardWorld) {
    block_on(world.controller.execute(BoardCommand::Refresh));
}

// ===== When Steps =====

#[when("the board loads")]
fn board_loads(world: &mut BoardWorld) {
    block_on(world.controller.fetch_snapshot());
}

#[when(expr = "I filter by category {string}")]
fn filter_by_category(world: &mut BoardWorld, category: String) {
    let criteria = current_criteria(world).with_category(category);
    block_on(world.controller.execute(BoardCommand::ChangeCriteria(criteria)));
}

#[when(expr = "I search for {string}")]
fn search_for(world: &mut BoardWorld, search: String) {
    let criteria = current_criteria(world).with_search(search);
    world.controller.change_criteria(criteria);
}

#[when(expr = "I sort by {string}")]
fn sort_by(world: &mut BoardWorld, sort: String) {
    let sort_key: SortKey = sort.parse().unwrap_or_default();
    let criteria = current_criteria(world).with_sort_key(sort_key);
    world.controller.change_criteria(criteria);
}

#[when(expr = "I enter the email {string} and select {string}")]
fn fill_form(world: &mut BoardWorld, email: String, activity: String) {
    block_on(async {
        world.controller.execute(BoardCommand::EditEmail(email)).await;
        world
            .controller
            .execute(BoardCommand::SelectActivity(activity))
            .await;
    });
}

#[when("I submit the signup form")]
fn submit_form(world: &mut BoardWorld) {
    let sent = block_on(world.controller.submit_form());
    assert!(sent, "Signup form was incomplete");
}

#[when(expr = "I remove {string} from {string}")]
fn remove_participant(world: &mut BoardWorld, email: String, name: String) {
    let request = world
        .view()
        .card(&name)
        .and_then(|card| card.participants.iter().find(|p| p.email == email))
        .map(|participant| participant.remove.clone())
        .unwrap_or_else(|| panic!("'{}' is not listed under '{}'", email, name));

    block_on(world.controller.execute(BoardCommand::Perform(request)));
}

#[when(expr = "I sign up {string} for {string}")]
fn sign_up_directly(world: &mut BoardWorld, email: String, name: String) {
    block_on(world.controller.handle_signup(&name, &email));
}

// ===== Then Steps =====

#[then(expr = "the list shows {string}")]
fn list_shows(world: &mut BoardWorld, expected: String) {
    let shown: Vec<String> = world
        .view()
        .cards()
        .iter()
        .map(|card| card.name.clone())
        .collect();
    assert_eq!(shown, names(&expected));
}

#[then(expr = "the list shows the placeholder {string}")]
fn list_placeholder(world: &mut BoardWorld, text: String) {
    assert_eq!(world.view().listing.placeholder(), Some(text.as_str()));
}

#[then(expr = "the activity selector offers {string}")]
fn selector_offers(world: &mut BoardWorld, expected: String) {
    assert_eq!(world.view().activity_options, names(&expected));
}

#[then("the activity selector is empty")]
fn selector_empty(world: &mut BoardWorld) {
    assert!(world.view().activity_options.is_empty());
}

#[then(expr = "the category filter offers {string}")]
fn category_filter_offers(world: &mut BoardWorld, expected: String) {
    assert_eq!(world.view().category_options, names(&expected));
}

#[then(expr = "{string} shows {string}")]
fn card_availability(world: &mut BoardWorld, name: String, availability: String) {
    let card = world
        .view()
        .card(&name)
        .unwrap_or_else(|| panic!("Activity '{}' not listed", name));
    assert_eq!(card.availability_text(), availability);
}

#[then(expr = "the last request was {string}")]
fn last_request(world: &mut BoardWorld, expected: String) {
    assert_eq!(world.last_request(), Some(expected));
}

#[then(expr = "the server received {string}")]
fn server_received(world: &mut BoardWorld, expected: String) {
    let requests = world.server.requests();
    assert!(
        requests.contains(&expected),
        "{} not in {:?}",
        expected,
        requests
    );
}

#[then(expr = "the activities were fetched {int} time(s)")]
fn fetch_count(world: &mut BoardWorld, count: usize) {
    assert_eq!(world.server.list_calls(), count);
}

#[then(expr = "{string} is listed as a participant of {string}")]
fn is_participant(world: &mut BoardWorld, email: String, name: String) {
    let card = world
        .view()
        .card(&name)
        .unwrap_or_else(|| panic!("Activity '{}' not listed", name));
    assert!(card.participants.iter().any(|p| p.email == email));
}

#[then(expr = "{string} is not listed as a participant of {string}")]
fn is_not_participant(world: &mut BoardWorld, email: String, name: String) {
    let card = world
        .view()
        .card(&name)
        .unwrap_or_else(|| panic!("Activity '{}' not listed", name));
    assert!(!card.participants.iter().any(|p| p.email == email));
}

#[then("the signup form is empty")]
fn form_empty(world: &mut BoardWorld) {
    let form = &world.view().form;
    assert!(form.email.is_empty());
    assert!(form.activity.is_empty());
}

#[then(expr = "the signup form still holds {string} and {string}")]
fn form_kept(world: &mut BoardWorld, email: String, activity: String) {
    let form = &world.view().form;
    assert_eq!(form.email, email);
    assert_eq!(form.activity, activity);
}

#[then("the snapshot is unchanged")]
fn snapshot_unchanged(world: &mut BoardWorld) {
    let frames = &world.controller.target().frames;
    let cards_of = |index: usize| match &frames[index].listing {
        Listing::Cards(cards) => cards.clone(),
        _ => Vec::new(),
    };
    let first_loaded = frames
        .iter()
        .position(|frame| matches!(frame.listing, Listing::Cards(_)))
        .expect("No loaded frame");
    assert_eq!(cards_of(first_loaded), cards_of(frames.len() - 1));
}

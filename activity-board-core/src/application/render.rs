use crate::application::api::ActionRequest;
use crate::application::board::{ActionPhase, ActivityBoard, LoadState};
use crate::application::form::SignupForm;
use crate::domain::{Activity, FilterCriteria, Notice};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_MATCHES_TEXT: &str = "No activities match your filters.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const SELECT_PROMPT_TEXT: &str = "-- Select an activity --";

/// One roster entry with its removal action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub email: String,
    pub remove: ActionRequest,
}

/// One activity as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub category: String,
    pub schedule: String,
    /// Not clamped, negative when overbooked
    pub spots_left: i64,
    pub participants: Vec<ParticipantEntry>,
}

impl ActivityCard {
    fn new(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            category: activity.category.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantEntry {
                    email: email.clone(),
                    remove: ActionRequest::unregister(name, email.clone()),
                })
                .collect(),
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Loading,
    Failed,
    NoMatches,
    Cards(Vec<ActivityCard>),
}

impl Listing {
    /// Placeholder text, if the list area shows one
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Listing::Loading => Some(LOADING_TEXT),
            Listing::Failed => Some(LOAD_FAILED_TEXT),
            Listing::NoMatches => Some(NO_MATCHES_TEXT),
            Listing::Cards(_) => None,
        }
    }
}

/// Render model of the whole widget.
///
/// The list and the activity selector come from the same derived view, so
/// they always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub listing: Listing,
    /// Activity selector entries (the prompt entry is not included)
    pub activity_options: Vec<String>,
    /// Category filter entries (the "all" entry is not included)
    pub category_options: Vec<String>,
    pub criteria: FilterCriteria,
    pub notice: Option<Notice>,
    pub form: SignupForm,
    pub busy: bool,
}

impl BoardView {
    pub fn project(board: &ActivityBoard) -> Self {
        let (listing, activity_options) = match board.load_state() {
            LoadState::Loading => (Listing::Loading, Vec::new()),
            LoadState::Failed { .. } => (Listing::Failed, Vec::new()),
            LoadState::Ready => {
                let view = board.view();
                if view.is_empty() {
                    (Listing::NoMatches, Vec::new())
                } else {
                    let cards: Vec<ActivityCard> = view
                        .iter()
                        .map(|(name, activity)| ActivityCard::new(name, activity))
                        .collect();
                    let options = cards.iter().map(|card| card.name.clone()).collect();
                    (Listing::Cards(cards), options)
                }
            }
        };

        Self {
            listing,
            activity_options,
            category_options: board.store().snapshot().categories(),
            criteria: board.criteria().clone(),
            notice: board.notice().current().cloned(),
            form: board.form().clone(),
            busy: matches!(board.phase(), ActionPhase::Pending(_)),
        }
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.listing {
            Listing::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }
}

/// Something that can draw a [`BoardView`] (DOM, terminal, test recorder)
pub trait RenderTarget {
    /// Replace whatever was drawn before with `view`
    fn render(&mut self, view: &BoardView);
}

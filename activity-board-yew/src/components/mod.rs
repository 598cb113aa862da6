//! UI components for the activity board

mod activity_card;
mod activity_list;
mod filter_bar;
mod message_area;
mod signup_panel;
pub use activity_card::ActivityCardView;
pub use activity_list::ActivityList;
pub use filter_bar::FilterBar;
pub use message_area::MessageArea;
pub use signup_panel::SignupPanel;

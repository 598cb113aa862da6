use super::ActivityCardView;
use activity_board_core::application::Listing;
use activity_board_core::ActionRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub listing: Listing,
    pub on_unregister: Callback<ActionRequest>,
}

/// Displays the derived view, or the placeholder standing in for it
#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let content = match &props.listing {
        Listing::Cards(cards) => cards
            .iter()
            .map(|card| {
                html! {
                    <ActivityCardView
                        key={card.name.clone()}
                        card={card.clone()}
                        on_unregister={props.on_unregister.clone()}
                    />
                }
            })
            .collect::<Html>(),
        other => html! {
            <p class="activities-placeholder">{other.placeholder().unwrap_or_default()}</p>
        },
    };

    html! {
        <div id="activities-list">
            {content}
        </div>
    }
}

use activity_board_core::application::{ActivityCard, NO_PARTICIPANTS_TEXT};
use activity_board_core::ActionRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardViewProps {
    pub card: ActivityCard,
    pub on_unregister: Callback<ActionRequest>,
}

/// One activity with its roster
#[function_component(ActivityCardView)]
pub fn activity_card_view(props: &ActivityCardViewProps) -> Html {
    let card = &props.card;

    html! {
        <div class="activity-card">
            <h4>{&card.name}</h4>
            <p>{&card.description}</p>
            <p class="activity-card__category"><strong>{"Category: "}</strong>{&card.category}</p>
            <p><strong>{"Schedule: "}</strong>{&card.schedule}</p>
            <p><strong>{"Availability: "}</strong>{card.availability_text()}</p>

            <div class="participants-section">
                <h5>{"Participants"}</h5>
                {if card.participants.is_empty() {
                    html! {
                        <p class="no-participants">{NO_PARTICIPANTS_TEXT}</p>
                    }
                } else {
                    html! {
                        <ul class="participants-list">
                            {for card.participants.iter().map(|participant| {
                                let on_click = {
                                    let request = participant.remove.clone();
                                    let on_unregister = props.on_unregister.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_unregister.emit(request.clone());
                                    })
                                };

                                html! {
                                    <li>
                                        <span class="participant-email">{&participant.email}</span>
                                        <button
                                            class="delete-btn"
                                            title="Unregister"
                                            onclick={on_click}
                                        >
                                            {"🗑️"}
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
            </div>
        </div>
    }
}

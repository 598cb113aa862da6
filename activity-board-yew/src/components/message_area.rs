use activity_board_core::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageAreaProps {
    pub notice: Option<Notice>,
}

#[function_component(MessageArea)]
pub fn message_area(props: &MessageAreaProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div id="message" class={classes!("message", notice.kind.css_class())}>
                {&notice.text}
            </div>
        },
        None => html! {
            <div id="message" class="message hidden"></div>
        },
    }
}

use activity_board_core::application::{SignupForm, SELECT_PROMPT_TEXT};
use activity_board_core::ActionRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignupPanelProps {
    pub form: SignupForm,
    /// Activity names offered by the selector
    pub options: Vec<String>,
    #[prop_or_default]
    pub busy: bool,
    pub on_email: Callback<String>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<ActionRequest>,
}

#[function_component(SignupPanel)]
pub fn signup_panel(props: &SignupPanelProps) -> Html {
    let on_email = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let on_select = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    let on_submit_form = {
        let form = props.form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submission() {
                Some(request) => on_submit.emit(request),
                None => tracing::debug!("Signup form incomplete"),
            }
        })
    };

    html! {
        <form id="signup-form" class={classes!(props.busy.then_some("pending"))} onsubmit={on_submit_form}>
            <div class="form-group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@school.edu"
                    value={props.form.email.clone()}
                    oninput={on_email}
                />
            </div>
            <div class="form-group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" required=true onchange={on_select}>
                    <option value="" selected={props.form.activity.is_empty()}>{SELECT_PROMPT_TEXT}</option>
                    {for props.options.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == props.form.activity}>
                            {name}
                        </option>
                    })}
                </select>
            </div>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}

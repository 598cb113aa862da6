use crate::components::{ActivityList, FilterBar, MessageArea, SignupPanel};
use crate::config::AppConfig;
use crate::hooks::use_board;
use crate::providers::BoardProvider;
use activity_board_core::{ActionRequest, BoardCommand, FilterCriteria};
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

/// Board wired to the commands of the provider
#[function_component(BoardScreen)]
pub fn board_screen() -> Html {
    let board = use_board();
    let view = board.view.clone();

    let on_criteria = {
        let send = board.send.clone();
        Callback::from(move |criteria: FilterCriteria| {
            send.emit(BoardCommand::ChangeCriteria(criteria));
        })
    };

    let on_email = {
        let send = board.send.clone();
        Callback::from(move |email: String| send.emit(BoardCommand::EditEmail(email)))
    };

    let on_select = {
        let send = board.send.clone();
        Callback::from(move |name: String| send.emit(BoardCommand::SelectActivity(name)))
    };

    let on_action = {
        let send = board.send.clone();
        Callback::from(move |request: ActionRequest| {
            tracing::info!("📤 {} {} for {}", request.kind, request.activity, request.email);
            send.emit(BoardCommand::Perform(request));
        })
    };

    html! {
        <main class="activity-board">
            <section id="activities-container">
                <h3>{"Available Activities"}</h3>
                <FilterBar
                    criteria={view.criteria.clone()}
                    categories={view.category_options.clone()}
                    on_change={on_criteria}
                />
                <ActivityList listing={view.listing.clone()} on_unregister={on_action.clone()} />
            </section>

            <section id="signup-container">
                <h3>{"Sign Up for an Activity"}</h3>
                <SignupPanel
                    form={view.form.clone()}
                    options={view.activity_options.clone()}
                    busy={view.busy}
                    on_email={on_email}
                    on_select={on_select}
                    on_submit={on_action}
                />
                <MessageArea notice={view.notice.clone()} />
            </section>
        </main>
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    tracing::debug!("API base URL: {:?}", props.config.api_base_url);

    html! {
        <div class="app">
            <BoardProvider config={props.config.clone()}>
                <BoardScreen />
            </BoardProvider>
        </div>
    }
}

use crate::adapters::{GlooTransport, TimeoutScheduler};
use crate::config::AppConfig;
use crate::hooks::BoardContext;
use activity_board_core::application::effects;
use activity_board_core::{
    ActivitiesClient, ActivityBoard, BoardCommand, BoardEvent, BoardView, DismissScheduler, NoticeId,
};
use std::rc::Rc;
use yew::prelude::*;

type Client = ActivitiesClient<GlooTransport>;

#[derive(Properties, PartialEq)]
pub struct BoardProviderProps {
    pub config: AppConfig,
    pub children: Children,
}

/// Reducer state wrapping the board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    board: ActivityBoard,
}

impl BoardState {
    pub fn board(&self) -> &ActivityBoard {
        &self.board
    }
}

impl Reducible for BoardState {
    type Action = BoardEvent;

    fn reduce(self: Rc<Self>, event: BoardEvent) -> Rc<Self> {
        let mut board = self.board.clone();
        board.apply(event);
        Rc::new(Self { board })
    }
}

fn run_command(dispatcher: UseReducerDispatcher<BoardState>, api: Rc<Client>, command: BoardCommand) {
    if let Some(event) = command.immediate_event() {
        dispatcher.dispatch(event);
        return;
    }

    match command {
        BoardCommand::Refresh => {
            wasm_bindgen_futures::spawn_local(async move {
                tracing::info!("🔄 Fetching activities");
                dispatcher.dispatch(effects::load_snapshot(api.as_ref()).await);
            });
        }
        BoardCommand::Perform(request) => {
            dispatcher.dispatch(BoardEvent::ActionStarted(request.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                let replied = effects::send_action(api.as_ref(), request).await;
                let refresh = replied.needs_refresh();
                dispatcher.dispatch(replied);

                if refresh {
                    dispatcher.dispatch(effects::load_snapshot(api.as_ref()).await);
                }
            });
        }
        _ => {}
    }
}

/// Owns the board, talks to the backend and exposes a [`BoardContext`]
#[function_component(BoardProvider)]
pub fn board_provider(props: &BoardProviderProps) -> Html {
    let state = use_reducer(BoardState::default);

    let api = use_memo(props.config.api_base_url.clone(), |base_url| {
        ActivitiesClient::new(GlooTransport::new(), base_url.clone())
    });

    let scheduler = {
        let dispatcher = state.dispatcher();
        use_mut_ref(move || {
            TimeoutScheduler::new(Callback::from(move |id: NoticeId| {
                dispatcher.dispatch(BoardEvent::NoticeExpired(id));
            }))
        })
    };

    let send = {
        let dispatcher = state.dispatcher();
        let api = api.clone();
        Callback::from(move |command: BoardCommand| {
            run_command(dispatcher.clone(), api.clone(), command);
        })
    };

    {
        let send = send.clone();
        use_effect_with((), move |_| {
            send.emit(BoardCommand::Refresh);
            || ()
        });
    }

    // A new notice id means a new message: (re)start its dismissal.
    {
        let notice_id = state.board().notice().current().map(|notice| notice.id);
        let dismiss_after = props.config.dismiss_after;
        let scheduler = scheduler.clone();
        use_effect_with(notice_id, move |notice_id| {
            if let Some(id) = *notice_id {
                scheduler.borrow_mut().schedule(id, dismiss_after);
            }
            || ()
        });
    }

    {
        let scheduler = scheduler.clone();
        use_effect_with((), move |_| move || scheduler.borrow_mut().cancel());
    }

    let context = BoardContext {
        view: Rc::new(BoardView::project(state.board())),
        send,
    };

    html! {
        <ContextProvider<BoardContext> {context}>
            {props.children.clone()}
        </ContextProvider<BoardContext>>
    }
}

// src/main.rs
mod api;
mod board;
mod components;
mod config;
mod error;
mod message;
mod models;

use gloo::console::{error, log};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use api::Action;
use board::{Board, BoardAction, LoadState};
use components::{ActivityList, SignupForm};
use config::BoardConfig;
use message::MessageBanner;

const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

fn main() {
    yew::Renderer::<App>::new().render();
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| BoardConfig::load());
    let board = use_reducer(Board::default);

    // One pending hide per notice; the cleanup drops (and cancels) the old one.
    {
        let dispatcher = board.dispatcher();
        let ttl = config.message_ttl_ms;
        use_effect_with(board.generation, move |generation: &u64| {
            let generation = *generation;
            let hide = (generation > 0).then(|| {
                Timeout::new(ttl, move || dispatcher.dispatch(BoardAction::Expire(generation)))
            });
            move || drop(hide)
        });
    }

    let refresh = {
        let dispatcher = board.dispatcher();
        let api_base = config.api_base.clone();
        Callback::from(move |()| {
            let dispatcher = dispatcher.clone();
            let api_base = api_base.clone();
            spawn_local(async move {
                match api::fetch_activities(&api_base).await {
                    Ok(activities) => {
                        log!(format!("Loaded {} activities", activities.len()));
                        dispatcher.dispatch(BoardAction::Fetched(activities));
                    }
                    Err(e) => {
                        error!(format!("Error fetching activities: {e}"));
                        dispatcher.dispatch(BoardAction::FetchFailed);
                    }
                }
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let run_action = {
        let api_base = config.api_base.clone();
        let dispatcher = board.dispatcher();
        let refresh = refresh.clone();
        Callback::from(move |(action, activity, address): (Action, String, String)| {
            let api_base = api_base.clone();
            let dispatcher = dispatcher.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = api::post_action(&api_base, action, &activity, &address).await;
                if let Err(e) = &result {
                    error!(format!("{} {e}", action.log_label()));
                }
                let outcome = api::settle(action, &result);
                let refetch = outcome.refresh;
                dispatcher.dispatch(BoardAction::Settled(outcome));
                if refetch {
                    refresh.emit(());
                }
            });
        })
    };

    let on_submit = {
        let run_action = run_action.clone();
        let email = board.email.clone();
        let selected = board.selected.clone();
        Callback::from(move |()| {
            run_action.emit((Action::Signup, selected.clone(), email.clone()));
        })
    };

    let on_unregister = {
        let run_action = run_action.clone();
        Callback::from(move |(activity, address): (String, String)| {
            run_action.emit((Action::Unregister, activity, address));
        })
    };

    let on_email = {
        let dispatcher = board.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(BoardAction::Email(value)))
    };

    let on_select = {
        let dispatcher = board.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(BoardAction::Select(value)))
    };

    html! {
        <>
            <header>
                <h1>{"Mergington High School"}</h1>
                <h2>{"Extracurricular Activities"}</h2>
            </header>
            <main>
                <section id="activities-container">
                    <h3>{"Available Activities"}</h3>
                    <div id="activities-list">
                        {
                            match &board.load {
                                LoadState::Loading => html! { <p>{"Loading activities..."}</p> },
                                LoadState::Failed => html! { <p>{ LOAD_FAILED }</p> },
                                LoadState::Loaded(activities) => html! {
                                    <ActivityList activities={activities.clone()} {on_unregister} />
                                },
                            }
                        }
                    </div>
                </section>
                <section id="signup-container">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <SignupForm
                        names={board.names.clone()}
                        email={board.email.clone()}
                        selected={board.selected.clone()}
                        {on_email}
                        {on_select}
                        {on_submit}
                    />
                    <MessageBanner notice={board.notice.clone()} />
                </section>
            </main>
        </>
    }
}

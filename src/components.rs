use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Activities, Activity};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,
    /// Emits `(activity name, participant email)`.
    pub on_unregister: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let ActivityCardProps {
        name,
        activity,
        on_unregister,
    } = props;

    let participants = if activity.participants.is_empty() {
        html! { <p><em>{ NO_PARTICIPANTS }</em></p> }
    } else {
        html! {
            <div class="participants">
                <h5>{"Current Participants:"}</h5>
                <ul>
                    { for activity.participants.iter().map(|email| {
                        let onclick = {
                            let on_unregister = on_unregister.clone();
                            let name = name.to_string();
                            let email = email.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_unregister.emit((name.clone(), email.clone()))
                            })
                        };
                        html! {
                            <li>
                                <span>{ email.clone() }</span>
                                <span class="delete-participant" title="Remove participant" {onclick}>
                                    {"×"}
                                </span>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        }
    };

    html! {
        <div class="activity-card">
            <h4>{ name.to_string() }</h4>
            <p>{ activity.description.clone() }</p>
            <p><strong>{"Schedule:"}</strong>{ format!(" {}", activity.schedule) }</p>
            <p>
                <strong>{"Availability:"}</strong>
                { format!(" {} spots left", activity.spots_left()) }
            </p>
            { participants }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub activities: Activities,
    pub on_unregister: Callback<(String, String)>,
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    html! {
        <>
            { for props.activities.iter().map(|(name, activity)| html! {
                <ActivityCard
                    key={name.to_string()}
                    name={AttrValue::from(name.to_string())}
                    activity={activity.clone()}
                    on_unregister={props.on_unregister.clone()}
                />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub names: Vec<String>,
    pub email: String,
    pub selected: String,
    pub on_email: Callback<String>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let oninput = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={props.email.clone()}
                    {oninput}
                />
            </div>
            <div class="form-group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" required=true {onchange}>
                    <option value="" selected={props.selected.is_empty()}>{ SELECT_PLACEHOLDER }</option>
                    { for props.names.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == props.selected}>{ name.clone() }</option>
                    }) }
                </select>
            </div>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}

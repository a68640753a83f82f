use gloo_net::http::Request;
use serde::Deserialize;
use urlencoding::encode;

use crate::error::Result;
use crate::message::Notice;
use crate::models::Activities;

pub const ACTIVITIES_PATH: &str = "/activities";

const FALLBACK_DETAIL: &str = "An error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Signup,
    Unregister,
}

impl Action {
    fn segment(self) -> &'static str {
        match self {
            Action::Signup => "signup",
            Action::Unregister => "unregister",
        }
    }

    fn success_fallback(self) -> &'static str {
        match self {
            Action::Signup => "Signed up successfully",
            Action::Unregister => "Successfully unregistered from activity",
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            Action::Signup => "Failed to sign up. Please try again.",
            Action::Unregister => "Failed to unregister. Please try again.",
        }
    }

    pub fn log_label(self) -> &'static str {
        match self {
            Action::Signup => "Error signing up:",
            Action::Unregister => "Error unregistering:",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ActionBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionReply {
    pub ok: bool,
    pub body: ActionBody,
}

/// What the board should do once an action settles.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub notice: Notice,
    pub refresh: bool,
    pub reset_form: bool,
}

pub fn activities_url(api_base: &str) -> String {
    format!("{api_base}{ACTIVITIES_PATH}")
}

pub fn action_url(api_base: &str, action: Action, activity: &str, email: &str) -> String {
    format!(
        "{api_base}{ACTIVITIES_PATH}/{}/{}?email={}",
        encode(activity),
        action.segment(),
        encode(email)
    )
}

pub async fn fetch_activities(api_base: &str) -> Result<Activities> {
    let resp = Request::get(&activities_url(api_base)).send().await?;
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn post_action(
    api_base: &str,
    action: Action,
    activity: &str,
    email: &str,
) -> Result<ActionReply> {
    let resp = Request::post(&action_url(api_base, action, activity, email))
        .send()
        .await?;
    let ok = resp.ok();
    let text = resp.text().await?;
    let body = serde_json::from_str(&text)?;
    Ok(ActionReply { ok, body })
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

pub fn settle(action: Action, result: &Result<ActionReply>) -> Outcome {
    match result {
        Ok(reply) if reply.ok => Outcome {
            notice: Notice::success(
                non_empty(&reply.body.message).unwrap_or(action.success_fallback()),
            ),
            refresh: true,
            reset_form: action == Action::Signup,
        },
        Ok(reply) => Outcome {
            notice: Notice::error(non_empty(&reply.body.detail).unwrap_or(FALLBACK_DETAIL)),
            refresh: false,
            reset_form: false,
        },
        Err(_) => Outcome {
            notice: Notice::error(action.failure_text()),
            refresh: false,
            reset_form: false,
        },
    }
}

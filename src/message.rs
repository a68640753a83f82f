use yew::prelude::*;

pub const MESSAGE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub notice: Option<Notice>,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div id="message" class={notice.severity.css_class()}>{ notice.text.clone() }</div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(notice: Option<Notice>) -> String {
        yew::ServerRenderer::<MessageBanner>::with_props(move || MessageBannerProps { notice })
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn severity_maps_to_css_class() {
        assert_eq!(Severity::Success.css_class(), "success");
        assert_eq!(Severity::Error.css_class(), "error");
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[tokio::test]
    async fn shows_text_with_severity_class() {
        let html = render(Some(Notice::error("Already signed up"))).await;
        assert!(html.contains(r#"class="error""#), "{html}");
        assert!(html.contains("Already signed up"), "{html}");
    }

    #[tokio::test]
    async fn hidden_without_notice() {
        let html = render(None).await;
        assert!(html.contains(r#"class="hidden""#), "{html}");
    }
}

use super::HStack;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NotificationKind {
    #[default]
    Danger,
    Warning,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Danger => "is-danger",
            NotificationKind::Warning => "is-warning",
        }
    }
}

/// A static banner in place of a region's content
#[inline_props]
pub fn Notification<'a>(cx: Scope<'a>, kind: NotificationKind, content: &'a str) -> Element<'a> {
    let class = kind.class();
    cx.render(rsx!(
        div { class: "notification {class}", "{content}" }
    ))
}

/// A small box that displays an error until it is dismissed
#[inline_props]
pub fn ErrorBox<'a>(cx: Scope<'a>, content: String, onclick: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        div { class: "error-box notification is-danger",
            HStack {
                div { class: "grow", "{content}" }
                button {
                    class: "delete",
                    r#type: "button",
                    title: "Dismiss",
                    onclick: move |_| onclick.call(())
                }
            }
        }
    ))
}

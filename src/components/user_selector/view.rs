use dioxus::prelude::*;

use crate::components::board::{Action, ViewStore};
use crate::environment::model::Author;
use crate::loc;

#[inline_props]
pub fn UserSelectorView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    let active = if store.users.is_open { "is-active" } else { "" };
    let label = store.users.label();
    cx.render(rsx!(
        div { class: "dropdown {active}",
            div { class: "dropdown-trigger",
                button {
                    class: "button",
                    r#type: "button",
                    title: loc!("Select a user"),
                    onclick: move |_| store.send(Action::ToggleDropdown),
                    onblur: move |_| store.send(Action::CloseDropdown),
                    span { "{label}" }
                }
            }
            div { class: "dropdown-menu",
                div { class: "dropdown-content",
                    for author in store.users.authors.value().into_iter().flatten() {
                        AuthorItem { key: "{author.id}", store: store, author: author }
                    }
                }
            }
        }
    ))
}

/// Selection happens on mouse down so it lands before the trigger blurs
#[inline_props]
fn AuthorItem<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, author: &'a Author) -> Element<'a> {
    let active = if store.users.is_selected(author.id) {
        "is-active"
    } else {
        ""
    };
    cx.render(rsx!(
        a {
            class: "dropdown-item {active}",
            onmousedown: move |_| store.send(Action::SelectAuthor((*author).clone())),
            "{author.name}"
        }
    ))
}

use dioxus::prelude::*;

use crate::components::board::{Action, ViewStore};
use crate::environment::model::Post;
use crate::loc;
use crate::view_model::{posts_region, PostsRegion};
use crate::widgets::*;

#[inline_props]
pub fn PostsRegionView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    match posts_region(&store.users, &store.posts) {
        PostsRegion::NoAuthor => cx.render(rsx!(p { loc!("No user selected") })),
        PostsRegion::Loading => cx.render(rsx!(CenteredSpinner {})),
        PostsRegion::Error => cx.render(rsx!(Notification {
            kind: NotificationKind::Danger,
            content: loc!("Something went wrong!")
        })),
        PostsRegion::NoPosts => cx.render(rsx!(Notification {
            kind: NotificationKind::Warning,
            content: loc!("No posts yet")
        })),
        PostsRegion::Table => cx.render(rsx!(PostsTable { store: store })),
    }
}

#[inline_props]
fn PostsTable<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(
        div {
            p { class: "title", loc!("Posts:") }
            table { class: "table",
                thead {
                    tr {
                        th { "#" }
                        th { loc!("Title") }
                        th {}
                    }
                }
                tbody {
                    for post in store.posts.posts.value().into_iter().flatten() {
                        PostRow { key: "{post.id}", store: store, post: post }
                    }
                }
            }
        }
    ))
}

#[inline_props]
fn PostRow<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, post: &'a Post) -> Element<'a> {
    let label = store.button_label(post.id);
    let light = if store.is_open(post.id) {
        ""
    } else {
        "is-light"
    };
    cx.render(rsx!(
        tr {
            td { "{post.id}" }
            td { "{post.title}" }
            td {
                button {
                    class: "button is-link {light}",
                    r#type: "button",
                    onclick: move |_| store.send(Action::TogglePost((*post).clone())),
                    "{label}"
                }
            }
        }
    ))
}

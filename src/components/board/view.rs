use dioxus::prelude::*;

use super::reducer::{BoardState, ViewStore};
use crate::components::post_details::PostDetailsView;
use crate::components::posts_list::PostsRegionView;
use crate::components::user_selector::UserSelectorView;
use crate::environment::Environment;
use crate::loc;
use crate::view_model::{users_region, UsersRegion};
use crate::widgets::*;

#[inline_props]
pub fn BoardApp<'a>(cx: Scope<'a>, environment: &'a UseState<Environment>) -> Element<'a> {
    log::trace!("rerender board-app");
    let view_store: ViewStore = navicula::root(cx, &[], environment.get(), BoardState::default);
    cx.render(rsx!(MainComponent {
        store: view_store
    }))
}

#[inline_props]
fn MainComponent<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    if users_region(&store.users) == UsersRegion::Error {
        return cx.render(rsx!(
            div { class: "board",
                Notification {
                    kind: NotificationKind::Danger,
                    content: loc!("Unable to load users")
                }
            }
        ));
    }
    let sidebar = if store.open_post().is_some() {
        "open"
    } else {
        ""
    };
    cx.render(rsx!(
        HStack { class: "board",
            VStack { class: "board-main box grow",
                div { class: "block", UserSelectorView { store: store } }
                div { class: "block", PostsRegionView { store: store } }
            }
            div { class: "sidebar box {sidebar}",
                store.details.is_some().then(|| rsx!(PostDetailsView { store: store }))
            }
        }
    ))
}

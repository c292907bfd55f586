use dioxus::prelude::*;

use crate::components::board::{Action, ViewStore};
use crate::components::comment_form::CommentFormView;
use crate::environment::model::Comment;
use crate::loc;
use crate::view_model::{comments_region, shows_write_button, CommentsRegion};
use crate::widgets::*;

#[inline_props]
pub fn PostDetailsView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    let Some(details) = store.details.as_ref() else {
        return cx.render(rsx!(div {}))
    };
    let post = &details.post;
    cx.render(rsx!(
        VStack { class: "post-details",
            div { class: "block",
                h2 { class: "title", "#{post.id}: {post.title}" }
                p { "{post.body}" }
            }
            div { class: "block",
                {
                    match comments_region(&details.comments) {
                        CommentsRegion::Loading => rsx!(CenteredSpinner {}),
                        CommentsRegion::Error => rsx!(Notification {
                            kind: NotificationKind::Danger,
                            content: loc!("Something went wrong")
                        }),
                        CommentsRegion::NoComments => rsx!(p { class: "title", loc!("No comments yet") }),
                        CommentsRegion::List => rsx!(CommentsList { store: store }),
                    }
                }
                details.delete_error.then(|| rsx!(ErrorBox {
                    content: loc!("Unable to delete comment").to_string(),
                    onclick: move |_| store.send(Action::ClearDeleteError)
                }))
                shows_write_button(details).then(|| rsx!(
                    button {
                        class: "button is-link",
                        r#type: "button",
                        onclick: move |_| store.send(Action::OpenComposer),
                        loc!("Write a comment")
                    }
                ))
            }
            details.composer_open.then(|| rsx!(CommentFormView { store: store }))
        }
    ))
}

#[inline_props]
fn CommentsList<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    let Some(comments) = store.details.as_ref().and_then(|d| d.comments.value()) else {
        return cx.render(rsx!(div {}))
    };
    cx.render(rsx!(
        p { class: "title", loc!("Comments:") }
        for comment in comments.iter() {
            CommentView { key: "{comment.id}", store: store, comment: comment }
        }
    ))
}

#[inline_props]
fn CommentView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, comment: &'a Comment) -> Element<'a> {
    let deleting = store
        .details
        .as_ref()
        .map_or(false, |details| details.is_deleting(comment.id));
    cx.render(rsx!(
        article { class: "message",
            div { class: "message-header",
                a {
                    title: "{comment.email}",
                    onclick: move |_| store.send(Action::OpenEmail(comment.email.clone())),
                    "{comment.name}"
                }
                button {
                    class: "delete",
                    r#type: "button",
                    title: loc!("Delete"),
                    disabled: "{deleting}",
                    onclick: move |_| store.send(Action::DeleteComment(comment.id))
                }
            }
            div { class: "message-body", "{comment.body}" }
        }
    ))
}

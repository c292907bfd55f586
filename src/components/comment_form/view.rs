use dioxus::prelude::*;
use strum::IntoEnumIterator;

use super::FieldState;
use crate::components::board::{Action, ViewStore};
use crate::environment::types::FormField;
use crate::loc;
use crate::widgets::*;

#[inline_props]
pub fn CommentFormView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>) -> Element<'a> {
    let Some(form) = store.details.as_ref().map(|d| &d.form) else {
        return cx.render(rsx!(div {}))
    };
    let loading = if form.submitting { "is-loading" } else { "" };
    let disabled = form.submitting;
    cx.render(rsx!(
        div { class: "block comment-form",
            for field in FormField::iter() {
                FieldView { key: "{field}", store: store, field: field, state: form.field(field) }
            }
            div { class: "field is-grouped",
                button {
                    class: "button is-link {loading}",
                    r#type: "button",
                    disabled: "{disabled}",
                    onclick: move |_| store.send(Action::SubmitComment),
                    loc!("Add")
                }
                button {
                    class: "button is-link is-light",
                    r#type: "button",
                    onclick: move |_| store.send(Action::ClearForm),
                    loc!("Clear")
                }
            }
            form.submission_error.then(|| rsx!(Notification {
                kind: NotificationKind::Danger,
                content: loc!("Something went wrong!")
            }))
        }
    ))
}

#[inline_props]
fn FieldView<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    field: FormField,
    state: &'a FieldState,
) -> Element<'a> {
    let field = *field;
    let danger = if state.invalid { "is-danger" } else { "" };
    let label = field.label();
    let placeholder = field.placeholder();
    let message = field.error_message();
    let value = &state.value;
    cx.render(rsx!(
        div { class: "field",
            label { class: "label", "{label}" }
            {
                if field == FormField::Body {
                    rsx!(textarea {
                        class: "textarea {danger}",
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: move |evt| store.send(Action::UpdateField(field, evt.value.clone()))
                    })
                } else {
                    rsx!(input {
                        class: "input {danger}",
                        r#type: "text",
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: move |evt| store.send(Action::UpdateField(field, evt.value.clone()))
                    })
                }
            }
            state.invalid.then(|| rsx!(p { class: "help is-danger", "{message}" }))
        }
    ))
}

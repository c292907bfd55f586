use dioxus::prelude::*;

use crate::loc;

/// Indeterminate progress, described by `title` for hover and screen readers
#[inline_props]
pub fn Spinner<'a>(cx: Scope<'a>, title: Option<&'a str>) -> Element<'a> {
    let title = title.unwrap_or(loc!("Loading"));
    cx.render(rsx!(div { class: "loader m-2", title: "{title}" }))
}

/// A spinner that takes the remaining space of its region
pub fn CenteredSpinner(cx: Scope) -> Element {
    cx.render(rsx!(
        div { class: "hstack grow centered",
            Spinner {}
        }
    ))
}

use dioxus::prelude::*;

/// Column layout. Extra classes are appended to `vstack`.
#[inline_props]
pub fn VStack<'a>(cx: Scope<'a>, class: Option<&'a str>, children: Element<'a>) -> Element<'a> {
    let extra = class.unwrap_or_default();
    cx.render(rsx!(div { class: "vstack {extra}", children }))
}

/// Row layout. Extra classes are appended to `hstack`.
#[inline_props]
pub fn HStack<'a>(cx: Scope<'a>, class: Option<&'a str>, children: Element<'a>) -> Element<'a> {
    let extra = class.unwrap_or_default();
    cx.render(rsx!(div { class: "hstack {extra}", children }))
}

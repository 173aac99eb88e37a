use dioxus::prelude::*;

/// Top-of-page band holding a [`PageTitle`] and, optionally, [`PageActions`].
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "ef-page-header", {children} }
    }
}

/// The page's `h1`.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "ef-page-title", {children} }
    }
}

/// Right-aligned slot for the page's primary actions.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "ef-page-actions", {children} }
    }
}

use dioxus::prelude::*;

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered surface grouping related content. Compose with [`CardHeader`],
/// [`CardContent`] and [`CardFooter`].
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("ef-card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged, {children} }
    }
}

/// Title block at the top of a card.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("ef-card-header", attributes);

    rsx! {
        div { ..merged, {children} }
    }
}

/// Card heading, rendered as an `h3`.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("ef-card-title", attributes);

    rsx! {
        h3 { ..merged, {children} }
    }
}

/// Muted line under the card title.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("ef-card-description", attributes);

    rsx! {
        p { ..merged, {children} }
    }
}

/// Body of the card.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("ef-card-content", attributes);

    rsx! {
        div { ..merged, {children} }
    }
}

/// Bottom strip of the card, usually holding actions.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("ef-card-footer", attributes);

    rsx! {
        div { ..merged, {children} }
    }
}

use dioxus::prelude::*;

/// Pulsing placeholder block shown while a resource loads. Size it from the
/// call site with a `style` or `class` attribute.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ef-skeleton", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { aria_hidden: true, ..merged }
    }
}

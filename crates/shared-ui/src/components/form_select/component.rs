use dioxus::prelude::*;

/// Labelled native `select`.
///
/// Children are plain `option { value: "...", "Label" }` elements; mark the
/// current one with `selected`. Extra attributes land on the `select` itself.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Fires when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Text rendered above the field; empty string renders no label.
    #[props(default)]
    label: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ef-form-select", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "ef-form-select-wrapper",
            if !label.is_empty() {
                label { class: "ef-form-select-label", "{label}" }
            }
            select {
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..merged,
                {children}
            }
        }
    }
}

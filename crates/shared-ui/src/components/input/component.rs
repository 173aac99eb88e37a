use dioxus::prelude::*;

/// Labelled single-line text input.
///
/// Extra attributes (e.g. `name`, `autocomplete`) land on the inner `input`
/// element. The label is skipped when empty.
#[component]
pub fn Input(
    /// Controlled value.
    #[props(default)]
    value: String,
    /// Fires on every keystroke with the new value.
    #[props(default)]
    on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    /// Text rendered above the field; empty string renders no label.
    #[props(default)]
    label: String,
    /// The `type` attribute ("text", "email", "password", ...).
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ef-input", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "ef-input-wrapper",
            if !label.is_empty() {
                label { class: "ef-input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

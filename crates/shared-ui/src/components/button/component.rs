use dioxus::prelude::*;

/// Button emphasis, from solid call-to-action down to borderless.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    /// Solid accent background. One per view, ideally.
    #[default]
    Primary,
    /// Muted solid background for secondary actions.
    Secondary,
    /// Red solid background for deletions and other irreversible actions.
    Destructive,
    /// Border only, transparent background.
    Outline,
    /// No border, no background. For icon buttons and inline actions.
    Ghost,
}

impl ButtonVariant {
    fn modifier(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "ef-button ef-button--primary",
            ButtonVariant::Secondary => "ef-button ef-button--secondary",
            ButtonVariant::Destructive => "ef-button ef-button--destructive",
            ButtonVariant::Outline => "ef-button ef-button--outline",
            ButtonVariant::Ghost => "ef-button ef-button--ghost",
        }
    }
}

/// Themed button. Extra attributes (e.g. `type: "submit"`) pass through to
/// the underlying `button` element.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", variant.modifier(), None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

use dioxus::prelude::*;

/// Badge tint. `Primary`/`Secondary` for neutral labels, `Destructive` for
/// alerts, `Outline` for low-emphasis states.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn modifier(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "ef-badge ef-badge--primary",
            BadgeVariant::Secondary => "ef-badge ef-badge--secondary",
            BadgeVariant::Destructive => "ef-badge ef-badge--destructive",
            BadgeVariant::Outline => "ef-badge ef-badge--outline",
        }
    }
}

/// Small inline pill for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", variant.modifier(), None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged, {children} }
    }
}

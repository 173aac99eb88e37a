//! Thin styling layer over the primitive toast stack. State handling
//! (queueing, timeouts, dismissal) stays in `dioxus_primitives`; this module
//! only attaches the theme class and stylesheet.

use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{consume_toast, use_toast, ToastOptions, ToastType, Toasts};

/// Mount once near the app root; provides the toast context and styles.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// A single themed toast. Normally rendered by the provider, not directly.
#[component]
pub fn Toast(mut props: prim::ToastProps) -> Element {
    let theme = Attribute::new("class", "ef-toast", None, false);
    props.attributes.insert(0, theme);

    rsx! {
        prim::Toast { ..props }
    }
}

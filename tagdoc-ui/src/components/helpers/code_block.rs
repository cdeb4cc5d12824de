//! Dark code listing

use dioxus::prelude::*;

/// Preformatted markup on a dark background, with an optional caption
#[component]
pub fn CodeBlock(code: String, #[props(default)] caption: Option<String>) -> Element {
    rsx! {
        div { class: "bg-gray-900 text-green-400 p-4 rounded overflow-x-auto",
            if let Some(caption) = caption {
                div { class: "text-sm text-gray-300 mb-2", "{caption}" }
            }
            pre { class: "text-sm",
                code { "{code}" }
            }
        }
    }
}

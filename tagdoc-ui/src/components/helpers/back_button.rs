//! Back button component

use dioxus::prelude::*;

/// Chevron button that steps back in navigation history
#[component]
pub fn BackButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "flex items-center gap-2 text-gray-600 hover:text-gray-900 transition-colors",
            "data-testid": "back-button",
            onclick: move |_| on_click.call(()),
            svg {
                class: "w-5 h-5",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M15 19l-7-7 7-7",
                }
            }
            "Назад"
        }
    }
}

//! Page container component

use dioxus::prelude::*;

/// Centered column for the detail page body
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        main { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8", {children} }
    }
}

//! App layout view component
//!
//! Page chrome shared by both views: a light background, the routed content
//! and the site footer.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    footer_lines: Vec<String>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50 flex flex-col",
            div { class: "flex-1", {children} }
            SiteFooter { lines: footer_lines }
        }
    }
}

#[component]
pub fn SiteFooter(lines: Vec<String>) -> Element {
    rsx! {
        footer { class: "bg-white border-t mt-16",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div { class: "text-center text-gray-500",
                    for (i , line) in lines.iter().enumerate() {
                        p { key: "{i}", class: if i > 0 { "mt-2" }, "{line}" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use tagdoc_common::Category;

#[component]
pub fn CategoryBadge(category: Category) -> Element {
    rsx! {
        span { class: "inline-block bg-blue-100 text-blue-800 px-2 py-1 rounded text-xs",
            "{category}"
        }
    }
}

//! Tag card component - pure view with callbacks

use crate::components::helpers::CategoryBadge;
use dioxus::prelude::*;
use tagdoc_common::text::{attribute_count_label, truncate_chars};
use tagdoc_common::TagRecord;

/// Summary card for one tag in the listing grid
///
/// Navigation is handled via on_open callback, not direct router calls.
#[component]
pub fn TagCard(
    record: &'static TagRecord,
    /// Characters of description to show before truncating
    description_chars: usize,
    on_open: EventHandler<&'static str>,
) -> Element {
    let name = record.name;
    let description = truncate_chars(record.description, description_chars).into_owned();
    let attributes = attribute_count_label(record.attributes.len());

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md p-6 hover:shadow-lg transition-shadow",
            "data-testid": "tag-card",
            div { class: "flex items-center justify-between mb-3",
                h3 { class: "text-xl font-bold text-gray-900", "{name}" }
                CategoryBadge { category: record.category }
            }
            p {
                class: "text-gray-600 mb-4",
                title: "{record.description}",
                "{description}"
            }
            div { class: "flex items-center justify-between",
                div { class: "text-sm text-gray-500", "{attributes}" }
                button {
                    class: "bg-green-600 text-white px-4 py-2 rounded hover:bg-green-700 transition-colors text-sm",
                    onclick: move |_| on_open.call(name),
                    "Изучить"
                }
            }
        }
    }
}

//! Tag detail view component - pure rendering, no routing

use super::attribute_list::AttributeList;
use super::preview::InteractivePreview;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::{CategoryBadge, CodeBlock};
use dioxus::prelude::*;
use tagdoc_common::{catalog, DetailState, FieldValue, TagRecord};

/// What the detail route shows for a given tag name
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailLookup {
    Found(&'static TagRecord),
    NotFound,
}

impl DetailLookup {
    pub fn resolve(name: &str) -> Self {
        match catalog().by_name(name) {
            Some(record) => DetailLookup::Found(record),
            None => DetailLookup::NotFound,
        }
    }
}

/// Label of the button that shows or hides the interactive example
pub fn toggle_label(open: bool) -> &'static str {
    if open {
        "Скрыть"
    } else {
        "Попробуй изменить"
    }
}

/// Full description of one tag plus its interactive example
///
/// The interactive block starts hidden; `detail` carries the toggle flag and
/// the live field values, owned by the page.
#[component]
pub fn TagDetailView(
    record: &'static TagRecord,
    detail: DetailState,
    on_toggle: EventHandler<()>,
    on_field_change: EventHandler<(&'static str, FieldValue)>,
) -> Element {
    let open = detail.is_interactive_open();
    let label = toggle_label(open);

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-6", "data-testid": "tag-detail",
            div { class: "mb-6",
                h2 { class: "text-2xl font-bold mb-2", "{record.name}" }
                p { class: "text-gray-600 mb-4", "{record.description}" }
                CategoryBadge { category: record.category }
            }

            div { class: "mb-6",
                h3 { class: "text-lg font-semibold mb-3", "Атрибуты:" }
                AttributeList { attributes: record.attributes.clone() }
            }

            div { class: "mb-6",
                h3 { class: "text-lg font-semibold mb-3", "Пример кода:" }
                CodeBlock { code: record.example.to_string() }
            }

            div {
                Button {
                    variant: ButtonVariant::Success,
                    size: ButtonSize::Medium,
                    aria_pressed: open,
                    onclick: move |_| on_toggle.call(()),
                    "{label}"
                }
                if open {
                    div { class: "mt-4",
                        h3 { class: "text-lg font-semibold mb-3", "Интерактивный пример:" }
                        InteractivePreview {
                            preview: detail.preview().cloned(),
                            on_field_change,
                        }
                    }
                }
            }
        }
    }
}

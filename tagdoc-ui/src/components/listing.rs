//! Listing view component - pure rendering over a catalog selection
//!
//! Accepts `ReadStore<ListingState>` and reads the selected filter through
//! its lens; the catalog itself is static.

use crate::components::category_filter::CategoryFilterBar;
use crate::components::tag_card::TagCard;
use crate::stores::listing::{ListingState, ListingStateStoreExt};
use dioxus::prelude::*;
use tagdoc_common::{catalog, Catalog, CategoryFilter, TagRecord};

/// Cards for the selected filter; `None` when the category has no tags
pub fn visible_records(catalog: &Catalog, selected: CategoryFilter) -> Option<Vec<&TagRecord>> {
    let records = catalog.by_category(selected);
    (!records.is_empty()).then_some(records)
}

#[component]
pub fn ListingView(
    state: ReadStore<ListingState>,
    title: String,
    subtitle: String,
    description_chars: usize,
    on_select_category: EventHandler<CategoryFilter>,
    // Navigation callback - called with the tag name when a card is opened
    on_open_tag: EventHandler<&'static str>,
) -> Element {
    let selected = *state.selected().read();
    let body = match visible_records(catalog(), selected) {
        None => rsx! {
            div { class: "text-center py-12",
                p { class: "text-gray-500 text-lg", "В этой категории пока нет тегов" }
            }
        },
        Some(records) => rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for record in records {
                    TagCard {
                        key: "{record.name}",
                        record,
                        description_chars,
                        on_open: on_open_tag,
                    }
                }
            }
        },
    };

    rsx! {
        header { class: "bg-white shadow-sm",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6",
                div { class: "text-center",
                    h1 { class: "text-4xl font-bold text-gray-900 mb-4", "{title}" }
                    p { class: "text-xl text-gray-600 max-w-3xl mx-auto", "{subtitle}" }
                }
            }
        }
        main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
            CategoryFilterBar {
                options: catalog().list_categories(),
                selected,
                on_select: on_select_category,
            }
            {body}
        }
    }
}

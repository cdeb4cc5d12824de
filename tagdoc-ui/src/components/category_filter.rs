//! Category filter bar - a row of pills where exactly one is selected

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use tagdoc_common::CategoryFilter;

/// Variant for a filter pill given the current selection
pub fn pill_variant(filter: CategoryFilter, selected: CategoryFilter) -> ButtonVariant {
    if filter == selected {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    }
}

#[component]
pub fn CategoryFilterBar(
    options: Vec<CategoryFilter>,
    selected: CategoryFilter,
    on_select: EventHandler<CategoryFilter>,
) -> Element {
    rsx! {
        div { class: "mb-8",
            div { class: "flex flex-wrap gap-2 justify-center", "data-testid": "category-filter",
                for filter in options {
                    Button {
                        key: "{filter}",
                        variant: pill_variant(filter, selected),
                        size: ButtonSize::Pill,
                        aria_pressed: filter == selected,
                        onclick: move |_| on_select.call(filter),
                        "{filter}"
                    }
                }
            }
        }
    }
}

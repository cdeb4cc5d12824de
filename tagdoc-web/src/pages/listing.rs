use crate::config::AppConfig;
use crate::Route;
use dioxus::prelude::*;
use tagdoc_common::CategoryFilter;
use tagdoc_ui::stores::{ListingState, ListingStateStoreExt};
use tagdoc_ui::ListingView;
use tracing::debug;

#[component]
pub fn Listing(category: Option<String>) -> Element {
    let config: AppConfig = use_context();
    let initial = config.initial_filter(category.as_deref());
    let state = use_store(move || ListingState { selected: initial });

    rsx! {
        ListingView {
            state,
            title: config.title,
            subtitle: config.subtitle,
            description_chars: config.card_description_chars,
            on_select_category: move |filter: CategoryFilter| {
                debug!("Selected category {}", filter);
                state.selected().set(filter);
            },
            on_open_tag: move |tag: &'static str| {
                navigator().push(Route::TagDetail { tag: tag.to_string() });
            },
        }
    }
}

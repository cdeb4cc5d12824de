use crate::Route;
use dioxus::prelude::*;
use tagdoc_common::{DetailState, FieldValue, TagRecord};
use tagdoc_ui::{DetailHeaderBar, DetailLookup, PageContainer, TagDetailView, TagNotFoundView};
use tracing::warn;

#[component]
pub fn TagDetail(tag: String) -> Element {
    match DetailLookup::resolve(&tag) {
        DetailLookup::Found(record) => rsx! {
            TagDetailPage { key: "{record.name}", record }
        },
        DetailLookup::NotFound => {
            warn!("Unknown tag requested: {}", tag);
            rsx! {
                TagNotFoundView {
                    name: tag,
                    on_home: move |_| {
                        navigator().push(Route::Listing { category: None });
                    },
                }
            }
        }
    }
}

/// Owns the detail state for one record; keyed by tag name so moving to a
/// different tag starts from that tag's defaults
#[component]
fn TagDetailPage(record: &'static TagRecord) -> Element {
    let mut detail = use_signal(|| DetailState::new(record));

    rsx! {
        DetailHeaderBar {
            on_back: move |_| navigator().go_back(),
            on_home: move |_| {
                navigator().push(Route::Listing { category: None });
            },
        }
        PageContainer {
            TagDetailView {
                record,
                detail: detail(),
                on_toggle: move |_| detail.write().toggle_interactive(),
                on_field_change: move |(key, value): (&'static str, FieldValue)| {
                    detail.write().update_field(key, value);
                },
            }
        }
    }
}

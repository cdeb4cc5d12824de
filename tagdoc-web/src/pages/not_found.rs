use crate::Route;
use dioxus::prelude::*;
use tagdoc_ui::TagNotFoundView;
use tracing::warn;

/// Catch-all for paths outside the listing and detail routes
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    warn!("No route for /{}", path);

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            TagNotFoundView {
                name: path,
                on_home: move |_| {
                    navigator().push(Route::Listing { category: None });
                },
            }
        }
    }
}

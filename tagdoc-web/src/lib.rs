pub mod config;
pub mod pages;

use config::AppConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Listing, PageNotFound, TagDetail};
use tagdoc_common::catalog;
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/?:category")]
    Listing { category: Option<String> },
    #[route("/tags/:tag")]
    TagDetail { tag: String },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppConfig::default);
    use_hook(|| info!("tagdoc started with {} tags", catalog().len()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

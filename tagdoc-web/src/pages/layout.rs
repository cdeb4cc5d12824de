use crate::config::AppConfig;
use crate::Route;
use dioxus::prelude::*;
use tagdoc_ui::AppLayoutView;

#[component]
pub fn AppLayout() -> Element {
    let config: AppConfig = use_context();

    rsx! {
        AppLayoutView { footer_lines: config.footer_lines, Outlet::<Route> {} }
    }
}

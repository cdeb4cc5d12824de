use crate::components::helpers::BackButton;
use dioxus::prelude::*;

/// Top bar of the detail page: history back on the left, home on the right
#[component]
pub fn DetailHeaderBar(on_back: EventHandler<()>, on_home: EventHandler<()>) -> Element {
    rsx! {
        header { class: "bg-white shadow-sm",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4",
                div { class: "flex items-center justify-between",
                    BackButton { on_click: on_back }
                    button {
                        class: "text-blue-600 hover:text-blue-800 transition-colors",
                        onclick: move |_| on_home.call(()),
                        "Главная"
                    }
                }
            }
        }
    }
}

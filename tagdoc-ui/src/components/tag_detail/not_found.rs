use dioxus::prelude::*;

/// Fallback for a tag name the catalog does not know
#[component]
pub fn TagNotFoundView(name: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center",
            "data-testid": "tag-not-found",
            div { class: "text-center",
                h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Тег не найден" }
                p { class: "text-gray-600 mb-6", "Тег \"{name}\" не существует в нашей базе." }
                button {
                    class: "bg-blue-600 text-white px-6 py-3 rounded hover:bg-blue-700 transition-colors",
                    onclick: move |_| on_home.call(()),
                    "Вернуться на главную"
                }
            }
        }
    }
}

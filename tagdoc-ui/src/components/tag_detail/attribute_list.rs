use dioxus::prelude::*;
use tagdoc_common::AttributeDescriptor;

/// Attribute rows: name chip, description and optional usage example
#[component]
pub fn AttributeList(attributes: Vec<AttributeDescriptor>) -> Element {
    rsx! {
        div { class: "space-y-2",
            for attr in attributes {
                div {
                    key: "{attr.name}",
                    class: "flex items-start gap-3 p-3 bg-gray-50 rounded",
                    code { class: "font-mono text-sm bg-white px-2 py-1 rounded border",
                        "{attr.name}"
                    }
                    div { class: "flex-1",
                        p { class: "text-sm text-gray-700", "{attr.description}" }
                        if let Some(example) = attr.example {
                            code { class: "text-xs text-gray-500 block mt-1", "Пример: {example}" }
                        }
                    }
                }
            }
        }
    }
}

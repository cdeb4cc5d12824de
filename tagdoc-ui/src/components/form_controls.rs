//! Labelled form controls used by the interactive examples
//!
//! Every control reports raw input upward; parsing and validation belong to
//! the caller.

use dioxus::prelude::*;
use tagdoc_common::Choice;

const LABEL_CLASS: &str = "block text-sm font-medium mb-1";
const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded";

/// `(value, label)` pairs for every option of a [`Choice`]
pub fn choice_options<C: Choice>() -> Vec<(&'static str, &'static str)> {
    C::OPTIONS.iter().map(|o| (o.as_str(), o.label())).collect()
}

/// Single-line text input with a label
#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            input {
                r#type: "text",
                class: INPUT_CLASS,
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Multi-line text input with a label
#[component]
pub fn TextAreaField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    /// Tailwind height class
    #[props(default = "h-24")]
    height: &'static str,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            textarea {
                class: "{INPUT_CLASS} {height} resize-none",
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Numeric input; `min`/`max` are advisory only
#[component]
pub fn NumberField(
    label: &'static str,
    value: u32,
    on_input: EventHandler<String>,
    #[props(default)] min: Option<u32>,
    #[props(default)] max: Option<u32>,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            input {
                r#type: "number",
                class: "px-3 py-1 border rounded",
                value: "{value}",
                min: min.map(|m| m.to_string()),
                max: max.map(|m| m.to_string()),
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Native `<select>` over a fixed option list
#[component]
pub fn SelectField(
    label: &'static str,
    value: &'static str,
    options: Vec<(&'static str, &'static str)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            select {
                class: "w-full px-3 py-1 border rounded",
                value,
                onchange: move |e| on_change.call(e.value()),
                for (option_value , option_label) in options {
                    option {
                        value: option_value,
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

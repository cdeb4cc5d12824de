//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Blue background - for navigation and selection
    Primary,
    /// Green background - for "try it" style actions
    Success,
    /// White with a border - for unselected choices
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            ButtonVariant::Success => "bg-green-600 hover:bg-green-700 text-white",
            ButtonVariant::Outline => {
                "bg-white hover:bg-gray-100 text-gray-700 border border-gray-300"
            }
        }
    }
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Pill-shaped, text-sm
    Pill,
    /// Standard padding
    Medium,
}

fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let shape = match size {
        ButtonSize::Pill => "px-4 py-2 rounded-full text-sm font-medium",
        ButtonSize::Medium => "px-4 py-2 rounded",
    };
    format!(
        "inline-flex items-center gap-2 transition-colors {shape} {}",
        variant.class()
    )
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = button_class(variant, size);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_classes_differ_by_variant() {
        let selected = button_class(ButtonVariant::Primary, ButtonSize::Pill);
        let unselected = button_class(ButtonVariant::Outline, ButtonSize::Pill);
        assert_ne!(selected, unselected);
        assert!(selected.contains("rounded-full"));
        assert!(selected.contains("bg-blue-600"));
        assert!(unselected.contains("border"));
    }
}

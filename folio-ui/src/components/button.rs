//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled background - for the committing action
    Primary,
    /// Outline only - for discarding actions
    Clear,
}

/// Labelled button with consistent styling and an HTML `type` pass-through
/// (`submit`/`reset` for form-driven actions).
#[component]
pub fn Button(
    title: String,
    variant: ButtonVariant,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Clear => "button--clear",
    };

    rsx! {
        button {
            class: "button {variant_class}",
            r#type,
            onclick: move |e| {
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            "{title}"
        }
    }
}

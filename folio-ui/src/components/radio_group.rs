//! Grouped-radio pick-one control.

use dioxus::prelude::*;

use crate::article_props::ParamOption;

/// Radio buttons over a fixed option list.
///
/// Same contract as `Select`: shows `selected`, calls `on_change` when the
/// user picks a different option.
#[component]
pub fn RadioGroup(
    title: String,
    /// HTML radio group name, shared by all inputs of this field
    name: String,
    selected: ParamOption,
    options: &'static [ParamOption],
    on_change: EventHandler<ParamOption>,
) -> Element {
    rsx! {
        div { class: "radio-group",
            div { class: "field-title", "{title}" }
            div { class: "radio-group__items",
                for option in options.iter().copied() {
                    label { key: "{option.value}", class: "radio-group__item",
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{option.value}",
                            checked: option == selected,
                            onchange: move |_| on_change.call(option),
                        }
                        span { "{option.label}" }
                    }
                }
            }
        }
    }
}

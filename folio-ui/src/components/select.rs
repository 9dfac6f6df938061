//! Dropdown pick-one control over a fixed option list.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::article_props::ParamOption;
use crate::outside_click::use_outside_click;

/// Counter for generating unique select element ids
static SELECT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Dropdown select: a trigger showing the current option and, while open,
/// the full option list below it.
///
/// The list closes when an option is picked and on any pointer-down outside
/// the control. `on_change` fires only when the picked option differs from
/// `selected`.
#[component]
pub fn Select(
    /// Field caption above the control
    #[props(default)]
    title: Option<String>,
    selected: ParamOption,
    options: &'static [ParamOption],
    on_change: EventHandler<ParamOption>,
    /// Render each option row in the font family its value names
    #[props(default)]
    font_preview: bool,
) -> Element {
    let mut is_open = use_signal(|| false);

    let select_id = use_hook(|| {
        let id = SELECT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("select-{id}")
    });

    use_outside_click(
        select_id.clone(),
        is_open.into(),
        EventHandler::new(move |_| is_open.set(false)),
    );

    rsx! {
        div { id: "{select_id}", class: "select",
            if let Some(title) = title {
                div { class: "field-title", "{title}" }
            }
            button {
                r#type: "button",
                class: "select__trigger",
                class: if is_open() { "select__trigger--open" },
                onclick: move |_| {
                    let open = is_open();
                    is_open.set(!open);
                },
                span { class: "select__value", "{selected.label}" }
                span { class: "select__chevron", "▾" }
            }
            if is_open() {
                ul { class: "select__options", role: "listbox",
                    for option in options.iter().copied() {
                        li {
                            key: "{option.value}",
                            class: "select__option",
                            class: if option == selected { "select__option--active" },
                            style: if font_preview { "font-family: {option.value};" },
                            role: "option",
                            onclick: move |_| {
                                is_open.set(false);
                                if option != selected {
                                    on_change.call(option);
                                }
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

//! Round toggle button sitting on the panel edge.

use dioxus::prelude::*;

/// Opens and closes the params panel; the arrow flips with the panel.
#[component]
pub fn ArrowButton(is_open: ReadSignal<bool>, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "arrow-button",
            class: if is_open() { "arrow-button--open" },
            aria_label: if is_open() { "Закрыть параметры статьи" } else { "Открыть параметры статьи" },
            onclick: move |e| onclick.call(e),
            span { class: "arrow-button__icon", "➔" }
        }
    }
}

//! Collapsible side panel for picking article typography and layout.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use tracing::debug;

use crate::article_props::{
    ArticleField, ArticleState, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, DEFAULT_ARTICLE_STATE,
    FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
use crate::components::{ArrowButton, Button, ButtonVariant, RadioGroup, Select, Separator};
use crate::outside_click::use_outside_click;

/// Counter for generating unique panel root ids
static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Side panel holding a local draft of the article options.
///
/// `article_state` seeds the draft once at mount; afterwards the parent
/// only hears back through `on_state_change`, which fires on the apply and
/// reset actions and nowhere else. Opens expanded, collapses on the arrow
/// button or on a pointer-down outside the panel.
#[component]
pub fn ArticleParamsForm(
    article_state: ArticleState,
    on_state_change: EventHandler<ArticleState>,
) -> Element {
    let mut is_open = use_signal(|| true);
    let mut form_state = use_signal(move || article_state);

    let panel_id = use_hook(|| {
        let id = PANEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("article-params-{id}")
    });

    use_outside_click(
        panel_id.clone(),
        is_open.into(),
        EventHandler::new(move |_| is_open.set(false)),
    );

    let apply = move |event: FormEvent| {
        event.prevent_default();
        on_state_change.call(form_state());
    };

    let reset = move |_| {
        form_state.set(DEFAULT_ARTICLE_STATE);
        on_state_change.call(DEFAULT_ARTICLE_STATE);
    };

    rsx! {
        div { id: "{panel_id}", class: "article-params",
            ArrowButton {
                is_open,
                onclick: move |_| {
                    let open = is_open();
                    debug!("params panel toggle, open={open}");
                    is_open.set(!open);
                },
            }
            aside {
                class: "article-params__panel",
                class: if is_open() { "article-params__panel--open" },
                form { class: "article-params__form", onsubmit: apply,
                    h2 { class: "article-params__heading", "Задайте параметры" }
                    Select {
                        title: "Шрифт",
                        selected: form_state().font_family,
                        options: FONT_FAMILY_OPTIONS,
                        font_preview: true,
                        on_change: move |option| {
                            form_state.set(form_state().with(ArticleField::FontFamily, option));
                        },
                    }
                    RadioGroup {
                        title: "Размер шрифта",
                        name: "font-size",
                        selected: form_state().font_size,
                        options: FONT_SIZE_OPTIONS,
                        on_change: move |option| {
                            form_state.set(form_state().with(ArticleField::FontSize, option));
                        },
                    }
                    Select {
                        title: "Цвет шрифта",
                        selected: form_state().font_color,
                        options: FONT_COLORS,
                        on_change: move |option| {
                            form_state.set(form_state().with(ArticleField::FontColor, option));
                        },
                    }
                    Separator {}
                    Select {
                        title: "Цвет фона",
                        selected: form_state().background_color,
                        options: BACKGROUND_COLORS,
                        on_change: move |option| {
                            form_state.set(form_state().with(ArticleField::BackgroundColor, option));
                        },
                    }
                    Select {
                        title: "Ширина контента",
                        selected: form_state().content_width,
                        options: CONTENT_WIDTH_OPTIONS,
                        on_change: move |option| {
                            form_state.set(form_state().with(ArticleField::ContentWidth, option));
                        },
                    }
                    div { class: "article-params__actions",
                        Button {
                            title: "Сбросить",
                            variant: ButtonVariant::Clear,
                            r#type: "reset",
                            onclick: reset,
                        }
                        Button {
                            title: "Применить",
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                        }
                    }
                }
            }
        }
    }
}

//! Demo article styled by the applied customizer state.

use dioxus::prelude::*;
use folio_ui::ArticleState;

/// Article preview. Typography and layout come from the applied state as
/// inline CSS, so only an apply/reset in the panel changes how it reads.
#[component]
pub fn Article(state: ArticleState) -> Element {
    let surface_style = format!("background-color: {};", state.background_color.value);
    let body_style = format!(
        "font-family: {}; font-size: {}; color: {}; max-width: {};",
        state.font_family.value,
        state.font_size.value,
        state.font_color.value,
        state.content_width.value,
    );

    rsx! {
        main { class: "article-surface", style: "{surface_style}",
            article { class: "article", style: "{body_style}",
                h1 { class: "article__title", "Типографика и выразительность текста" }
                p {
                    "Выбор шрифта задаёт голос статьи раньше, чем читатель успевает "
                    "вникнуть в её содержание. Гротески звучат ровно и деловито, "
                    "антиквы добавляют тексту интонацию, а акцидентные начертания "
                    "берегут для заголовков."
                }
                p {
                    "Кегль и ширина колонки работают в паре: крупному размеру нужна "
                    "широкая полоса, иначе строки рвутся слишком часто. Узкая колонка "
                    "с умеренным кеглем читается спокойнее всего."
                }
                h2 { class: "article__subtitle", "Цвет и фон" }
                p {
                    "Контраст между цветом текста и фоном определяет, как долго глаз "
                    "выдерживает чтение. Панель слева позволяет подобрать сочетание и "
                    "сразу увидеть результат: изменения применяются только по кнопке, "
                    "так что с вариантами можно экспериментировать свободно."
                }
            }
        }
    }
}

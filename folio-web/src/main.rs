//! folio web app: an article preview with the params side panel.
//!
//! Owns the authoritative article state and passes it down with a setter;
//! the panel commits its draft back through that setter on apply/reset.

mod article;

use article::Article;
use dioxus::prelude::*;
use folio_ui::{ArticleParamsForm, DEFAULT_ARTICLE_STATE};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
fn App() -> Element {
    let mut article_state = use_signal(|| DEFAULT_ARTICLE_STATE);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app",
            ArticleParamsForm {
                article_state: article_state(),
                on_state_change: move |state| article_state.set(state),
            }
            Article { state: article_state() }
        }
    }
}

fn main() {
    dioxus::launch(App);
}

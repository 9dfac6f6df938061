//! folio-ui - option model and view components for the article customizer.
//!
//! Pure, props-based components plus the document-listener plumbing they
//! share. The authoritative article state lives in the embedding app; the
//! panel only drafts against it.

pub mod article_props;
pub mod components;
pub mod dom;
pub mod outside_click;

pub use article_props::{
    ArticleField, ArticleState, ParamOption, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS,
    DEFAULT_ARTICLE_STATE, FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
pub use components::*;

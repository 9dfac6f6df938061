//! Shared UI components

pub mod arrow_button;
pub mod article_params_form;
pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;

pub use arrow_button::ArrowButton;
pub use article_params_form::ArticleParamsForm;
pub use button::{Button, ButtonVariant};
pub use radio_group::RadioGroup;
pub use select::Select;
pub use separator::Separator;

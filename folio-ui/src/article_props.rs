//! Option model for the article customizer.
//!
//! Every control in the params panel picks one entry out of a closed,
//! compile-time list. The chosen entries form an [`ArticleState`], a plain
//! value type the embedding app owns and the panel drafts against.

/// One selectable entry in a fixed option list.
///
/// `value` is the literal CSS value the option stands for (font stack,
/// pixel size, hex color, pixel width); `label` is what the user sees.
/// Two options are the same selection exactly when their values are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The five article parameters, each holding one entry of its option list.
///
/// A `Copy` value type: updates go through [`ArticleState::with`] and
/// produce a new record instead of mutating in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleState {
    pub font_family: ParamOption,
    pub font_size: ParamOption,
    pub font_color: ParamOption,
    pub background_color: ParamOption,
    pub content_width: ParamOption,
}

/// Names one field of [`ArticleState`] for [`ArticleState::with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleState {
    /// Returns a copy with `field` replaced by `option`; the other four
    /// fields carry over unchanged.
    #[must_use]
    pub fn with(self, field: ArticleField, option: ParamOption) -> Self {
        match field {
            ArticleField::FontFamily => Self { font_family: option, ..self },
            ArticleField::FontSize => Self { font_size: option, ..self },
            ArticleField::FontColor => Self { font_color: option, ..self },
            ArticleField::BackgroundColor => Self { background_color: option, ..self },
            ArticleField::ContentWidth => Self { content_width: option, ..self },
        }
    }
}

impl Default for ArticleState {
    fn default() -> Self {
        DEFAULT_ARTICLE_STATE
    }
}

pub const FONT_FAMILY_OPTIONS: &[ParamOption] = &[
    ParamOption { value: "'Open Sans', sans-serif", label: "Open Sans" },
    ParamOption { value: "'Ubuntu', sans-serif", label: "Ubuntu" },
    ParamOption { value: "'Cormorant Garamond', serif", label: "Cormorant Garamond" },
    ParamOption { value: "'Days One', sans-serif", label: "Days One" },
    ParamOption { value: "'Merriweather', serif", label: "Merriweather" },
];

pub const FONT_SIZE_OPTIONS: &[ParamOption] = &[
    ParamOption { value: "18px", label: "18px" },
    ParamOption { value: "25px", label: "25px" },
    ParamOption { value: "38px", label: "38px" },
];

pub const FONT_COLORS: &[ParamOption] = &[
    ParamOption { value: "#000000", label: "Черный" },
    ParamOption { value: "#FFFFFF", label: "Белый" },
    ParamOption { value: "#C4C4C4", label: "Серый" },
    ParamOption { value: "#FD24AF", label: "Розовый" },
    ParamOption { value: "#38D9A9", label: "Мятный" },
];

pub const BACKGROUND_COLORS: &[ParamOption] = &[
    ParamOption { value: "#FFFFFF", label: "Белый" },
    ParamOption { value: "#000000", label: "Черный" },
    ParamOption { value: "#591DEB", label: "Фиолетовый" },
    ParamOption { value: "#38D9A9", label: "Зеленый" },
    ParamOption { value: "#FFF4DB", label: "Желтый" },
];

pub const CONTENT_WIDTH_OPTIONS: &[ParamOption] = &[
    ParamOption { value: "1394px", label: "Широкий" },
    ParamOption { value: "948px", label: "Узкий" },
];

/// Initial external state and the reset target: the first entry of every
/// option list.
pub const DEFAULT_ARTICLE_STATE: ArticleState = ArticleState {
    font_family: FONT_FAMILY_OPTIONS[0],
    font_size: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [ArticleField; 5] = [
        ArticleField::FontFamily,
        ArticleField::FontSize,
        ArticleField::FontColor,
        ArticleField::BackgroundColor,
        ArticleField::ContentWidth,
    ];

    fn list_for(field: ArticleField) -> &'static [ParamOption] {
        match field {
            ArticleField::FontFamily => FONT_FAMILY_OPTIONS,
            ArticleField::FontSize => FONT_SIZE_OPTIONS,
            ArticleField::FontColor => FONT_COLORS,
            ArticleField::BackgroundColor => BACKGROUND_COLORS,
            ArticleField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    fn get(state: ArticleState, field: ArticleField) -> ParamOption {
        match field {
            ArticleField::FontFamily => state.font_family,
            ArticleField::FontSize => state.font_size,
            ArticleField::FontColor => state.font_color,
            ArticleField::BackgroundColor => state.background_color,
            ArticleField::ContentWidth => state.content_width,
        }
    }

    #[test]
    fn default_takes_first_entry_of_each_list() {
        for field in ALL_FIELDS {
            assert_eq!(get(DEFAULT_ARTICLE_STATE, field), list_for(field)[0]);
        }
    }

    #[test]
    fn option_values_are_unique_within_each_list() {
        for field in ALL_FIELDS {
            let list = list_for(field);
            for (i, a) in list.iter().enumerate() {
                for b in &list[i + 1..] {
                    assert_ne!(a.value, b.value, "duplicate value in {field:?} list");
                }
            }
        }
    }

    #[test]
    fn with_replaces_only_the_named_field() {
        for field in ALL_FIELDS {
            let replacement = list_for(field)[1];
            let updated = DEFAULT_ARTICLE_STATE.with(field, replacement);

            assert_eq!(get(updated, field), replacement);
            for other in ALL_FIELDS.into_iter().filter(|f| *f != field) {
                assert_eq!(
                    get(updated, other),
                    get(DEFAULT_ARTICLE_STATE, other),
                    "{other:?} changed while updating {field:?}"
                );
            }
        }
    }

    #[test]
    fn with_is_stable_under_repetition() {
        let option = FONT_SIZE_OPTIONS[2];
        let once = DEFAULT_ARTICLE_STATE.with(ArticleField::FontSize, option);
        let twice = once.with(ArticleField::FontSize, option);
        assert_eq!(once, twice);
    }

    #[test]
    fn edited_draft_resets_to_default() {
        let draft = DEFAULT_ARTICLE_STATE
            .with(ArticleField::FontSize, FONT_SIZE_OPTIONS[1])
            .with(ArticleField::FontColor, FONT_COLORS[3]);
        assert_ne!(draft, DEFAULT_ARTICLE_STATE);

        // Reset discards the whole draft in one step.
        assert_eq!(ArticleState::default(), DEFAULT_ARTICLE_STATE);
    }

    #[test]
    fn applying_black_background_keeps_other_fields() {
        let black = BACKGROUND_COLORS
            .iter()
            .copied()
            .find(|option| option.value == "#000000")
            .unwrap();

        let applied = DEFAULT_ARTICLE_STATE.with(ArticleField::BackgroundColor, black);

        assert_eq!(applied.background_color, black);
        assert_eq!(applied.font_family, DEFAULT_ARTICLE_STATE.font_family);
        assert_eq!(applied.font_size, DEFAULT_ARTICLE_STATE.font_size);
        assert_eq!(applied.font_color, DEFAULT_ARTICLE_STATE.font_color);
        assert_eq!(applied.content_width, DEFAULT_ARTICLE_STATE.content_width);
    }
}

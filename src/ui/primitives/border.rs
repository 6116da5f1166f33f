use crate::ui::theme;

/// Box drawing characters for one rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

const UNICODE: BorderSet = BorderSet {
    top_left: theme::borders::TOP_LEFT,
    top_right: theme::borders::TOP_RIGHT,
    bottom_left: theme::borders::BOTTOM_LEFT,
    bottom_right: theme::borders::BOTTOM_RIGHT,
    horizontal: theme::borders::HORIZONTAL,
    vertical: theme::borders::VERTICAL,
};

const ASCII: BorderSet = BorderSet {
    top_left: theme::borders_ascii::TOP_LEFT,
    top_right: theme::borders_ascii::TOP_RIGHT,
    bottom_left: theme::borders_ascii::BOTTOM_LEFT,
    bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
    horizontal: theme::borders_ascii::HORIZONTAL,
    vertical: theme::borders_ascii::VERTICAL,
};

impl BorderSet {
    pub fn for_mode(supports_unicode: bool) -> &'static BorderSet {
        if supports_unicode {
            &UNICODE
        } else {
            &ASCII
        }
    }
}

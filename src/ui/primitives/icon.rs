use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Active,
    Inactive,
    Binaries,
    Switch,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Active) => theme::icons::ACTIVE,
            (true, Icon::Inactive) => theme::icons::INACTIVE,
            (true, Icon::Binaries) => theme::icons::BINARIES,
            (true, Icon::Switch) => theme::icons::SWITCH,
            (true, Icon::Trash) => theme::icons::TRASH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Active) => theme::icons_ascii::ACTIVE,
            (false, Icon::Inactive) => theme::icons_ascii::INACTIVE,
            (false, Icon::Binaries) => theme::icons_ascii::BINARIES,
            (false, Icon::Switch) => theme::icons_ascii::SWITCH,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Active => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Trash => theme::colors::WARNING,
            Icon::Arrow | Icon::Inactive => theme::colors::DIM,
            Icon::Binaries | Icon::Switch => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

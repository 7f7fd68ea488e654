use crossterm::style::Stylize;

use restyle::RewriteMode;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skipped,
    Arrow,
    Insert,
    Remove,
    Normalize,
}

impl Icon {
    /// Header icon for a rewrite mode
    pub fn for_mode(mode: RewriteMode) -> Self {
        match mode {
            RewriteMode::Insert => Icon::Insert,
            RewriteMode::Remove => Icon::Remove,
            RewriteMode::Normalize => Icon::Normalize,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Skipped) => theme::icons::SKIPPED,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Insert) => theme::icons::INSERT,
            (true, Icon::Remove) => theme::icons::REMOVE,
            (true, Icon::Normalize) => theme::icons::NORMALIZE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Skipped) => theme::icons_ascii::SKIPPED,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Insert) => theme::icons_ascii::INSERT,
            (false, Icon::Remove) => theme::icons_ascii::REMOVE,
            (false, Icon::Normalize) => theme::icons_ascii::NORMALIZE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Skipped | Icon::Arrow => theme::colors::DIM,
            Icon::Insert | Icon::Remove | Icon::Normalize => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

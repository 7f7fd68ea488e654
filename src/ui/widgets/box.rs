use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl BoxStyle {
    fn paint(self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            BoxStyle::Info => theme::colors::INFO,
            BoxStyle::Success => theme::colors::SUCCESS,
            BoxStyle::Warning => theme::colors::WARNING,
            BoxStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

/// Bordered block of text lines, sized to its widest line
#[derive(Debug, Default, Clone)]
pub struct Box {
    lines: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            lines: vec![title.into()],
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Add a line; embedded newlines become separate rows.
    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.lines.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.lines.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let inner = self
            .lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            + 2;

        let h = BorderChar::Horizontal.render(supports_unicode).repeat(inner);
        let v = self
            .style
            .paint(BorderChar::Vertical.render(supports_unicode), supports_color);

        let mut out = String::new();
        let top = format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h,
            BorderChar::TopRight.render(supports_unicode)
        );
        out.push_str(&self.style.paint(&top, supports_color));
        out.push('\n');

        for line in &self.lines {
            let pad = inner - 1 - visible_width(line);
            out.push_str(&format!("{v} {line}{}{v}\n", " ".repeat(pad)));
        }

        let bottom = format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h,
            BorderChar::BottomRight.render(supports_unicode)
        );
        out.push_str(&self.style.paint(&bottom, supports_color));
        out.push('\n');
        out
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Drop CSI escape sequences (`ESC [ ... <letter>`) so padding ignores color codes
fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }
    Cow::Owned(out)
}

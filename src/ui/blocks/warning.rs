use restyle::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// One block listing every unknown configuration key
    pub fn config_warnings(warnings: &[ConfigWarning]) -> Self {
        let mut block = Self::new("Unknown configuration keys");
        for w in warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            let mut line = format!("{location}: '{}'", w.key);
            if let Some(suggestion) = &w.suggestion {
                line.push_str(&format!(" (did you mean '{suggestion}'?)"));
            }
            block.add_line(line);
        }
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut b = Box::with_title(header).style(BoxStyle::Warning);
        for line in &self.lines {
            b.add_line(line.clone());
        }
        b.render(supports_color, supports_unicode)
    }
}

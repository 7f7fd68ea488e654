use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Lines of unchanged context kept around each hunk
const CONTEXT_LINES: usize = 2;

/// Unified diff with old/new line numbers, limited to changed hunks
pub fn render_unified_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let width = old.lines().count().max(new.lines().count()).max(1).to_string().len();

    let mut out = String::new();
    out.push_str(&paint(&format!("--- a/{path}"), LineStyle::Header, supports_color));
    out.push('\n');
    out.push_str(&paint(&format!("+++ b/{path}"), LineStyle::Header, supports_color));
    out.push('\n');

    for (i, group) in diff.grouped_ops(CONTEXT_LINES).iter().enumerate() {
        if i > 0 {
            out.push_str(&paint(&format!("{:>w$}", "…", w = width * 2 + 2), LineStyle::Gap, supports_color));
            out.push('\n');
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let number = |n: Option<usize>| {
                    n.map(|n| format!("{:>width$}", n + 1))
                        .unwrap_or_else(|| " ".repeat(width))
                };
                let (old_no, new_no, sign, style) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), None, "-", LineStyle::Removed),
                    ChangeTag::Insert => (None, change.new_index(), "+", LineStyle::Added),
                    ChangeTag::Equal => (
                        change.old_index(),
                        change.new_index(),
                        " ",
                        LineStyle::Context,
                    ),
                };
                let value = change.value().trim_end_matches('\n');
                let line = format!("{} {} {sign} {value}", number(old_no), number(new_no));
                out.push_str(&paint(&line, style, supports_color));
                out.push('\n');
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Header,
    Gap,
    Added,
    Removed,
    Context,
}

fn paint(s: &str, style: LineStyle, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        LineStyle::Header => theme::colors::INFO,
        LineStyle::Added => theme::colors::SUCCESS,
        LineStyle::Removed => theme::colors::ERROR,
        LineStyle::Gap | LineStyle::Context => theme::colors::DIM,
    };
    format!("{}", s.with(color))
}

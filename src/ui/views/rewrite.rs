use std::path::Path;

use restyle::domain::value_objects::ContentHash;
use restyle::{ExcludeRule, RewriteMode, RewriteResult, SkipReason, StylesheetLayout};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::{ResultSummary, SummaryStatus};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn title_case(mode: RewriteMode) -> &'static str {
    match mode {
        RewriteMode::Insert => "Insert",
        RewriteMode::Remove => "Remove",
        RewriteMode::Normalize => "Normalize",
    }
}

/// "1 page", "3 pages"
fn pages(count: usize) -> String {
    if count == 1 {
        "1 page".to_string()
    } else {
        format!("{} pages", count)
    }
}

/// Path shown to the user: relative to the pages root when possible
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

pub fn render_rewrite_header(
    mode: RewriteMode,
    root: &Path,
    extension: &str,
    exclude: &ExcludeRule,
    dry_run: bool,
    ui: &UiContext,
) -> String {
    let mut header = CommandHeader::new(
        Icon::for_mode(mode),
        format!("Restyle {}", title_case(mode)),
    );
    header.add("Pages", format!("{} (*.{})", root.display(), extension));
    if mode.honors_exclusion() {
        header.add("Exclude", exclude.needle().unwrap_or("(none)"));
    }
    if dry_run {
        header.add("Mode", "dry run, nothing is written");
    }
    header.render(ui.color, ui.unicode)
}

/// Effective stylesheet layout, shown at `-vv`
pub fn render_layout(layout: &StylesheetLayout, ui: &UiContext) -> String {
    let mut out = ColoredText::dim("Canonical stylesheet block:").render(ui.color);
    out.push('\n');
    for line in layout.canonical_block().lines() {
        out.push_str(&ColoredText::dim(line).render(ui.color));
        out.push('\n');
    }
    out
}

pub fn render_changed_line(
    mode: RewriteMode,
    path: &str,
    hashes: Option<(&ContentHash, &ContentHash)>,
    dry_run: bool,
    ui: &UiContext,
) -> String {
    let status = if dry_run {
        format!("would be {}", mode.past_tense())
    } else {
        mode.past_tense().to_string()
    };
    let mut line = format!(
        "{} {}: {}",
        Icon::Success.colored(ui.color, ui.unicode),
        status,
        path
    );
    if let Some((before, after)) = hashes {
        let arrow = if ui.unicode { "→" } else { "->" };
        line.push_str(&format!(
            " {}",
            ColoredText::dim(format!("({} {} {})", before.short(), arrow, after.short()))
                .render(ui.color)
        ));
    }
    line
}

pub fn render_skipped_line(path: &str, reason: SkipReason, ui: &UiContext) -> String {
    let icon = match reason {
        SkipReason::PatternNotFound => Icon::Warning,
        _ => Icon::Skipped,
    };
    let text = format!("{}: {}", reason, path);
    let text = match reason {
        SkipReason::PatternNotFound => ColoredText::warning(text),
        _ => ColoredText::dim(text),
    };
    format!("{} {}", icon.colored(ui.color, ui.unicode), text.render(ui.color))
}

pub fn render_failed_line(path: &str, error: &str, ui: &UiContext) -> String {
    format!(
        "{} {}: {}",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error(path).render(ui.color),
        error
    )
}

pub fn render_rewrite_summary(
    mode: RewriteMode,
    result: &RewriteResult,
    dry_run: bool,
    ui: &UiContext,
) -> String {
    let not_found = result.skipped_for(SkipReason::PatternNotFound);

    let status = if !result.is_success() {
        SummaryStatus::Failed
    } else if not_found > 0 {
        SummaryStatus::Partial
    } else {
        SummaryStatus::Success
    };
    let title = match (status, dry_run) {
        (_, true) => format!("{} Preview", title_case(mode)),
        (SummaryStatus::Success, false) => format!("{} Complete", title_case(mode)),
        (_, false) => format!("{} Results", title_case(mode)),
    };

    let mut summary = ResultSummary::new(status, title);
    let verb = if dry_run { "would change" } else { "changed" };
    summary.add_stat(format!("of {} pages {}", result.scanned, verb), result.changed.len());

    for reason in [
        SkipReason::AlreadyUpdated,
        SkipReason::NotApplicable,
        SkipReason::Excluded,
        SkipReason::PatternNotFound,
    ] {
        let count = result.skipped_for(reason);
        if count > 0 {
            summary.add_stat(reason.to_string(), count);
        }
    }
    if !result.errors.is_empty() {
        summary.add_stat("failed", result.errors.len());
    }

    if not_found > 0 {
        let verb = if not_found == 1 { "does" } else { "do" };
        summary.add_warning(format!(
            "{} {} not contain the expected stylesheet lines",
            pages(not_found),
            verb
        ));
    }
    if !result.errors.is_empty() {
        summary.add_warning(format!(
            "{} could not be processed",
            pages(result.errors.len())
        ));
    }

    if dry_run && !result.changed.is_empty() {
        summary.with_next_step("Run again without --dry-run to apply");
    }

    summary.render(ui.color, ui.unicode)
}

use restyle::RestyleError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// Suggested fix for errors the user can act on
fn hint(err: &RestyleError) -> Option<&'static str> {
    match err {
        RestyleError::RootNotFound { .. } => {
            Some("Pass --root DIR or set `root` under [pages] in restyle.toml")
        }
        RestyleError::InvalidConfig { .. } => Some("Fix the configuration file and try again"),
        RestyleError::InvalidLayout { .. } | RestyleError::InvalidPattern { .. } => {
            Some("Check the [stylesheets] section of restyle.toml")
        }
        _ => None,
    }
}

pub(crate) fn format_error_with(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    if let Some(hint) = err.downcast_ref::<RestyleError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    let caps = detect_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}

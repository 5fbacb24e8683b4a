//! Rendering primitives for CLI output.
//!
//! Every function returns a `String` so callers decide where it goes; the
//! menu shell writes into its own output stream.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line.
///
/// Pretty mode: "Wallet · title"
/// Plain mode: "wallet title"
pub fn header(ctx: &UiContext, title: &str) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let name = styled("Wallet", styles::bold(), ctx.color);
            format!("{} \u{00B7} {}", name, title)
        }
        OutputMode::Plain => format!("wallet {}", title.to_lowercase()),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a status line after an action.
///
/// Pretty mode: "[✓] message"
/// Plain mode: "status=ok" followed by "message=..."
pub fn success(ctx: &UiContext, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, Badge::Ok, message)
    } else {
        format!("status=ok\nmessage={}", message)
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Render a table using comfy-table for pretty mode.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Tab-separated values (no header)
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(headers.to_vec());
        for row in rows {
            table.add_row(row);
        }
        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

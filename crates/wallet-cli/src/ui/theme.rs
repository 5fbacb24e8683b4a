//! Theme definitions for colors and badges.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Err => "[\u{2717}]",  // [✗]
            Self::Info => "[\u{2139}]", // [ℹ]
        }
    }

    /// Color used when rendering this badge.
    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::green(),
            Self::Err => styles::red(),
            Self::Info => styles::cyan(),
        }
    }
}

/// Named styles shared by the renderers.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn green() -> Style {
        Style::new().green()
    }

    pub fn red() -> Style {
        Style::new().red()
    }

    pub fn cyan() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Err.text(), "[ERR]");
        assert_eq!(Badge::Info.text(), "[INFO]");
    }

    #[test]
    fn test_badge_display_ascii() {
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_badge_display_unicode() {
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
    }

    #[test]
    fn test_styled_without_color_is_unchanged() {
        assert_eq!(styled("Income", styles::bold(), false), "Income");
    }

    #[test]
    fn test_styled_with_color_adds_escapes() {
        let out = styled("Income", styles::green(), true);
        assert!(out.contains("Income"));
        assert!(out.contains('\x1b'));
    }
}

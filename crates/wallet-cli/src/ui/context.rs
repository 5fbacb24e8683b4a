//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// # Arguments
    /// * `json_flag` - Whether `--json` was passed
    /// * `no_color_flag` - Whether `--no-color` was passed
    pub fn from_env(json_flag: bool, no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Resolve color: disabled if NO_COLOR env, --no-color flag, or TERM=dumb
        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;

        Self {
            color,
            unicode: !term_is_dumb,
            mode: OutputMode::resolve(json_flag, is_tty, term_is_dumb),
        }
    }

    /// Plain, uncolored context for scripted sessions and tests.
    #[allow(dead_code)]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(false, true);
        assert!(!ctx.color);
    }

    #[test]
    fn test_plain_context() {
        let ctx = UiContext::plain();
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
    }
}

//! Server console output.
//!
//! The console has no client to localize for it, so every message is
//! rendered with its fallback text.

use chatline_i18n::Translated;
use chatline_text::clean;
use tracing::info;

/// Renders messages for the server console and log.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    strip_colours: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self {
            strip_colours: true,
        }
    }
}

impl ConsoleSink {
    /// Create a sink, keeping formatting codes when `strip_colours` is false.
    #[must_use]
    pub const fn new(strip_colours: bool) -> Self {
        Self { strip_colours }
    }

    /// Render a message as the console shows it.
    #[must_use]
    pub fn render(&self, message: &Translated) -> String {
        self.render_text(&message.fallback())
    }

    /// Render text that may contain formatting codes.
    #[must_use]
    pub fn render_text(&self, text: &str) -> String {
        if self.strip_colours {
            clean(text)
        } else {
            text.to_string()
        }
    }

    /// Log a message and return the rendered line.
    pub fn log(&self, message: &Translated) -> String {
        let line = self.render(message);
        info!(target: "chatline::console", "{line}");
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_i18n::{MESSAGE_QUIT, MESSAGE_SERVER_DISCONNECT};

    #[test]
    fn test_default_strips_codes() {
        let sink = ConsoleSink::default();
        assert_eq!(sink.render(&MESSAGE_QUIT.fill(["Steve"])), "Steve left the game");
    }

    #[test]
    fn test_keep_codes() {
        let sink = ConsoleSink::new(false);
        let msg = MESSAGE_SERVER_DISCONNECT.fill(Vec::<chatline_i18n::Param>::new());
        assert_eq!(sink.log(&msg), "§eDisconnected by Server§r");
    }
}

//! Theme for the Aurelia Nexus terminal
//!
//! A single dark plasma palette; per-message accents come from the message vibe.

mod colors;

pub use colors::*;

use nexus_core::{Message, Role};
use ratatui::style::{Color, Modifier, Style};

/// Palette used by every view
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub primary: Color,
    pub secondary: Color,
    pub spectrum: Color,
    pub status_busy: Color,
    pub status_idle: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::plasma()
    }
}

impl Theme {
    pub fn plasma() -> Self {
        Self {
            background: hex("#0a0628"),
            panel: hex("#130b34"),
            text: hex("#ecebff"),
            text_muted: hex("#8f88c2"),
            border: hex("#3c2f7a"),
            primary: hex("#00ffc6"),
            secondary: hex("#7249ff"),
            spectrum: hex("#ff73fa"),
            status_busy: hex("#ff73fa"),
            status_idle: hex("#00ffc6"),
        }
    }

    /// Accent of a message card, flattened onto the panel color
    pub fn accent(&self, message: &Message) -> Color {
        over(message.vibe().accent_color(), self.panel)
    }

    /// Card header style, stronger for the companion
    pub fn card_header(&self, message: &Message) -> Style {
        let style = Style::default().fg(self.accent(message));
        match message.role {
            Role::Agent => style.add_modifier(Modifier::BOLD),
            Role::Human => style,
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Spectrum bars shift towards the primary color while idle
    pub fn spectrum_style(&self, responding: bool) -> Style {
        let color = if responding {
            self.spectrum
        } else {
            mix(self.spectrum, self.primary, 0.4)
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::seed_messages;

    #[test]
    fn test_accent_differs_by_vibe() {
        let theme = Theme::default();
        let seeds = seed_messages();
        // seeds use vibes 1, 0, 2
        assert_ne!(theme.accent(&seeds[0]), theme.accent(&seeds[1]));
        assert_ne!(theme.accent(&seeds[1]), theme.accent(&seeds[2]));
    }

    #[test]
    fn test_agent_header_is_bold() {
        let theme = Theme::default();
        let seeds = seed_messages();
        assert!(theme
            .card_header(&seeds[0])
            .add_modifier
            .contains(Modifier::BOLD));
        assert!(!theme
            .card_header(&seeds[1])
            .add_modifier
            .contains(Modifier::BOLD));
    }
}

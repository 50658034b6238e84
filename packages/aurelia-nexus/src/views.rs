//! Views for the Aurelia Nexus terminal
//!
//! Every view draws from a [`Snapshot`] so rendering never touches the
//! conversation itself.

mod dock;
mod header;
mod orbital;

use nexus_core::{Locale, Snapshot};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::theme::Theme;

/// Everything a view needs to draw
pub struct ViewContext<'a> {
    pub snapshot: &'a Snapshot,
    pub locale: &'a Locale,
    pub theme: &'a Theme,
}

/// Draw the whole interface
pub fn render(frame: &mut Frame, cx: &ViewContext) {
    let rows = Layout::vertical([
        Constraint::Length(5), // header
        Constraint::Length(6), // spectrum
        Constraint::Min(12),   // orbital matrix
        Constraint::Length(4), // timeline
        Constraint::Length(4), // input dock
        Constraint::Length(1), // footnote
    ])
    .split(frame.size());

    header::render(frame, rows[0], cx);
    orbital::render_spectrum(frame, rows[1], cx);
    orbital::render_matrix(frame, rows[2], cx);
    orbital::render_timeline(frame, rows[3], cx);
    dock::render(frame, rows[4], cx);
    dock::render_footnote(frame, rows[5], cx);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use nexus_core::{Config, Conversation, ManualClock, StdRandom};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    pub fn conversation() -> Conversation<StdRandom, ManualClock> {
        Conversation::new(&Config::default(), StdRandom::seeded(8), ManualClock::default())
    }

    /// Render a snapshot and return the screen as one string
    pub fn draw(snapshot: &Snapshot, width: u16, height: u16) -> String {
        let locale = Locale::spanish();
        let theme = Theme::default();
        let cx = ViewContext {
            snapshot,
            locale: &locale,
            theme: &theme,
        };

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, &cx)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.get(x, y).symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

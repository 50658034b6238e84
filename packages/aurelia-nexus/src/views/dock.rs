//! Input dock: channel label, sensory mode chips, input field and send button

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::ViewContext;

const MODES: [&str; 3] = ["mode.vision", "mode.sound", "mode.haptic"];

pub fn render(frame: &mut Frame, area: Rect, cx: &ViewContext) {
    let theme = cx.theme;
    let locale = cx.locale;
    let snapshot = cx.snapshot;

    let mut label = vec![Span::styled(locale.t("input.label"), theme.muted())];
    for mode in MODES {
        label.push(Span::raw("  "));
        label.push(Span::styled(
            format!("[{}]", locale.t(mode)),
            Style::default().fg(theme.secondary),
        ));
    }

    let field = if snapshot.input.is_empty() {
        Line::from(Span::styled(
            locale.t("input.placeholder"),
            theme.muted().add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            snapshot.input.clone(),
            Style::default().fg(theme.text),
        ))
    };

    let button = Line::from(Span::styled(
        format!(" {} ", snapshot.status.send_label),
        Style::default()
            .fg(theme.background)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(Title::from(button).alignment(Alignment::Right));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(vec![Line::from(label), field]).block(block), area);

    if inner.width > 0 && inner.height > 1 {
        let x = inner.x + cursor_offset(&snapshot.input, inner.width);
        frame.set_cursor(x, inner.y + 1);
    }
}

/// Column just past the typed text, in terminal cells, kept inside the field
fn cursor_offset(input: &str, width: u16) -> u16 {
    let typed = Span::raw(input).width();
    typed.min(width.saturating_sub(1) as usize) as u16
}

pub fn render_footnote(frame: &mut Frame, area: Rect, cx: &ViewContext) {
    let locale = cx.locale;
    let help = locale.format("help.keys", &[("send", cx.snapshot.status.send_label.as_str())]);
    let note = Line::from(vec![
        Span::styled(locale.t("note.mobile"), cx.theme.muted()),
        Span::raw("   "),
        Span::styled(help, Style::default().fg(cx.theme.text_muted)),
    ]);

    frame.render_widget(Paragraph::new(note).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::cursor_offset;
    use crate::views::test_support::*;

    #[test]
    fn test_cursor_counts_cells() {
        assert_eq!(cursor_offset("", 40), 0);
        assert_eq!(cursor_offset("hápticas", 40), 8);
        // Wide characters take two cells each
        assert_eq!(cursor_offset("星の海", 40), 6);
        assert_eq!(cursor_offset("星の海", 4), 3);
    }

    #[test]
    fn test_placeholder_when_empty() {
        let chat = conversation();
        let screen = draw(&chat.snapshot(), 140, 45);
        assert!(screen.contains("Describe la experiencia imposible"));
        assert!(screen.contains("◈ Visión"));
    }

    #[test]
    fn test_typed_text_replaces_placeholder() {
        let mut chat = conversation();
        chat.set_input("nubes hápticas");
        let screen = draw(&chat.snapshot(), 140, 45);
        assert!(screen.contains("nubes hápticas"));
        assert!(!screen.contains("Describe la experiencia imposible"));
    }

    #[test]
    fn test_send_label_while_thinking() {
        let mut chat = conversation();
        chat.submit_text("hola");
        let screen = draw(&chat.snapshot(), 140, 45);
        assert!(screen.contains(" ... "));
        assert!(screen.contains("Enter ... · Esc salir"));
    }
}

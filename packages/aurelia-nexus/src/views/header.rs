//! Header: badge, title, subtitle and status orb

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::ViewContext;

pub fn render(frame: &mut Frame, area: Rect, cx: &ViewContext) {
    let theme = cx.theme;
    let locale = cx.locale;
    let status = &cx.snapshot.status;

    let orb = if status.responding {
        theme.status_busy
    } else {
        theme.status_idle
    };

    let badge = Line::from(vec![
        Span::styled(locale.t("badge.left"), Style::default().fg(theme.primary)),
        Span::raw(" "),
        Span::styled(locale.t("badge.center"), Style::default().fg(theme.spectrum)),
        Span::raw(" "),
        Span::styled(locale.t("badge.right"), Style::default().fg(theme.secondary)),
    ]);

    let state = Line::from(vec![
        Span::styled("● ", Style::default().fg(orb)),
        Span::styled(format!("{} ", locale.t("status.label")), theme.muted()),
        Span::styled(
            status.state.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);

    let title = Line::from(Span::styled(
        locale.t("app.title"),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(badge)
        .title(Title::from(state).alignment(Alignment::Right));

    let body = Paragraph::new(vec![
        title,
        Line::from(Span::styled(locale.t("app.subtitle"), theme.muted())),
    ])
    .block(block)
    .wrap(Wrap { trim: true });

    frame.render_widget(body, area);
}

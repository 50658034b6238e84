//! Orbital matrix: spectrum core, message cards on their orbits, timeline strip

use nexus_core::{height_px, Message, Transform, ORBITS};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline, Wrap};
use ratatui::Frame;

use super::ViewContext;

/// Horizontal extent of the matrix in page pixels
const X_BOUNDS: [f64; 2] = [-420.0, 420.0];
/// Vertical extent; cards go down to one line below the lowest orbit
const Y_BOUNDS: [f64; 2] = [-200.0, 200.0];

const RING_RADIUS: f64 = 280.0;
const CORE_RADIUS: f64 = 60.0;

/// Longest card body at scale 1.0, in characters
const CARD_CHARS: f64 = 34.0;

pub fn render_spectrum(frame: &mut Frame, area: Rect, cx: &ViewContext) {
    let heights: Vec<u64> = cx
        .snapshot
        .spectrum
        .iter()
        .map(|value| height_px(*value).round() as u64)
        .collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(cx.theme.border()),
        )
        .data(&heights)
        .max(100)
        .style(cx.theme.spectrum_style(cx.snapshot.status.responding));

    frame.render_widget(sparkline, area);
}

/// A card as it will be printed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Card {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub header_style: Style,
    pub header: String,
    pub body: String,
}

/// Cards for the messages currently visible on the ring, back to front.
///
/// Only the newest lap of the ring is shown; older cards share positions with
/// newer ones and would be covered anyway.
pub(crate) fn cards(cx: &ViewContext, area: Rect) -> Vec<Card> {
    let messages = &cx.snapshot.messages;
    let placements = &cx.snapshot.placements;
    let start = messages.len().saturating_sub(ORBITS.len());
    let unit = (X_BOUNDS[1] - X_BOUNDS[0]) / area.width.max(1) as f64;
    let line = (Y_BOUNDS[1] - Y_BOUNDS[0]) / area.height.max(1) as f64;

    let mut cards: Vec<Card> = messages[start..]
        .iter()
        .zip(&placements[start..])
        .map(|(message, transform)| card(cx, message, transform, unit, line))
        .collect();

    cards.sort_by(|a, b| a.scale.total_cmp(&b.scale));
    cards
}

fn card(cx: &ViewContext, message: &Message, transform: &Transform, unit: f64, line: f64) -> Card {
    let role = if message.is_human() {
        cx.locale.t("role.human")
    } else {
        cx.locale.t("role.agent")
    };
    let header = format!("{} · {} · {}", role, message.timestamp, message.vibe().label);

    let limit = (CARD_CHARS * transform.scale).round() as usize;
    let body = if message.content.chars().count() > limit {
        let head: String = message.content.chars().take(limit.saturating_sub(1)).collect();
        format!("{head}…")
    } else {
        message.content.clone()
    };

    // Center the card on its orbit point and keep it inside the matrix
    let width = header.chars().count().max(body.chars().count()) as f64 * unit;
    let x = (transform.x - width / 2.0).clamp(X_BOUNDS[0], (X_BOUNDS[1] - width).max(X_BOUNDS[0]));
    // Page y grows downwards, canvas y grows upwards
    let y = (-transform.y).clamp(Y_BOUNDS[0] + line, Y_BOUNDS[1]);

    Card {
        x,
        y,
        scale: transform.scale,
        header_style: cx.theme.card_header(message),
        header,
        body,
    }
}

pub fn render_matrix(frame: &mut Frame, area: Rect, cx: &ViewContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(cx.theme.border());
    let inner = block.inner(area);
    let line = (Y_BOUNDS[1] - Y_BOUNDS[0]) / inner.height.max(1) as f64;

    let cards = cards(cx, inner);
    let theme = cx.theme;
    let responding = cx.snapshot.status.responding;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RING_RADIUS,
                color: theme.border,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: CORE_RADIUS,
                color: theme.spectrum_style(responding).fg.unwrap_or(theme.spectrum),
            });
            ctx.layer();

            for card in &cards {
                ctx.print(card.x, card.y, Line::from(Span::styled(card.header.clone(), card.header_style)));
                ctx.print(
                    card.x,
                    card.y - line,
                    Line::from(Span::styled(card.body.clone(), Style::default().fg(theme.text))),
                );
            }
        });

    frame.render_widget(canvas, area);
}

pub fn render_timeline(frame: &mut Frame, area: Rect, cx: &ViewContext) {
    let theme = cx.theme;
    let mut steps: Vec<Span> = Vec::new();
    for (i, step) in cx.snapshot.timeline.iter().enumerate() {
        if i > 0 {
            steps.push(Span::styled(" ▸ ", Style::default().fg(theme.secondary)));
        }
        steps.push(Span::styled(step.clone(), Style::default().fg(theme.text)));
    }

    let pulse = Line::from(vec![
        Span::styled("◉ ", Style::default().fg(theme.primary)),
        Span::styled(cx.locale.t("timeline.label"), theme.muted()),
        Span::raw("  "),
        Span::styled(
            cx.snapshot.status.timeline.clone(),
            Style::default().fg(theme.primary),
        ),
    ]);

    let timeline = Paragraph::new(vec![pulse, Line::from(steps)])
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(theme.border()),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(timeline, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::views::test_support::*;
    use nexus_core::Locale;

    fn context_cards(snapshot: &nexus_core::Snapshot, area: Rect) -> Vec<Card> {
        let locale = Locale::spanish();
        let theme = Theme::default();
        let cx = ViewContext {
            snapshot,
            locale: &locale,
            theme: &theme,
        };
        cards(&cx, area)
    }

    #[test]
    fn test_cards_limited_to_one_lap() {
        let mut chat = conversation();
        for i in 0..10 {
            chat.submit_text(format!("mensaje {i}"));
        }
        let cards = context_cards(&chat.snapshot(), Rect::new(0, 0, 120, 30));
        assert_eq!(cards.len(), ORBITS.len());
    }

    #[test]
    fn test_cards_back_to_front() {
        let chat = conversation();
        let cards = context_cards(&chat.snapshot(), Rect::new(0, 0, 120, 30));
        assert_eq!(cards.len(), 3);
        for pair in cards.windows(2) {
            assert!(pair[0].scale <= pair[1].scale);
        }
    }

    #[test]
    fn test_cards_stay_inside_bounds() {
        let mut chat = conversation();
        for i in 0..6 {
            chat.submit_text(format!("una idea bastante larga para la tarjeta {i}"));
        }
        for card in context_cards(&chat.snapshot(), Rect::new(0, 0, 100, 24)) {
            assert!(card.x >= X_BOUNDS[0]);
            assert!(card.y <= Y_BOUNDS[1]);
            assert!(card.y > Y_BOUNDS[0]);
        }
    }

    #[test]
    fn test_card_labels() {
        let chat = conversation();
        let cards = context_cards(&chat.snapshot(), Rect::new(0, 0, 120, 30));
        let human = cards.iter().find(|c| c.header.starts_with("Exploradora")).unwrap();
        assert!(human.header.contains("00:18"));
        assert!(human.header.contains("ÓRBITA EMPÁTICA"));
        assert!(human.body.ends_with('…'));
    }

    #[test]
    fn test_timeline_rendered() {
        let chat = conversation();
        let screen = draw(&chat.snapshot(), 160, 45);
        assert!(screen.contains("Listo para tu próxima visión"));
        assert!(screen.contains("Humana: "));
    }
}

//! Shared UI helpers for the game shell.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Two-line status bar: a colored message on top, key hints below.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !hints.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Bordered overlay box centered in `area`, cleared underneath, with the
/// given lines centered inside.
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    lines: Vec<Line>,
) {
    let height = (lines.len() as u16 + 4).min(area.height);
    let width = 44.min(area.width);
    let rect = centered_rect(area, width, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        body,
        Rect {
            y: inner.y + 1.min(inner.height),
            height: inner.height.saturating_sub(1),
            ..inner
        },
    );
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 20, 10);
        assert_eq!(rect, Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        let rect = centered_rect(area, 100, 100);
        assert_eq!(rect, Rect::new(5, 5, 10, 4));
    }
}

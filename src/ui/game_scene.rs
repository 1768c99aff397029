//! Rendering for the flappy playfield and its overlays.
//!
//! The simulation runs in a fixed virtual playfield; this scene samples that
//! field at terminal-cell centers so the same world draws correctly at any
//! terminal size.

use crate::sim::types::{GameWorld, PIPE_GAP, PIPE_WIDTH};
use crate::ui::game_common::{render_overlay, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the game: bordered playfield, bird, pipes, and the score bar.
pub fn render_game(frame: &mut Frame, area: Rect, world: &GameWorld) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(inner);

    render_playfield(frame, chunks[0], world);
    render_status_bar(
        frame,
        chunks[1],
        &format!("Score: {}", world.score),
        Color::Green,
        &[("[Space/Up/Enter]", "Flap"), ("[Esc/Q]", "Quit")],
    );
}

/// Draw the playfield cell by cell, mapping each terminal cell to the virtual
/// coordinate at its center.
fn render_playfield(frame: &mut Frame, area: Rect, world: &GameWorld) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let cell_w = world.playfield.width / width as f64;
    let cell_h = world.playfield.height / height as f64;

    let bird = &world.bird;
    let bird_glyph = if bird.velocity < -2.0 {
        "▲"
    } else if bird.velocity > 6.0 {
        "▼"
    } else {
        "●"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let game_y = (row as f64 + 0.5) * cell_h;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let game_x = (col as f64 + 0.5) * cell_w;

            let in_bird = game_x >= bird.x
                && game_x < bird.x + bird.width
                && game_y >= bird.y
                && game_y < bird.y + bird.height;
            if in_bird {
                spans.push(Span::styled(
                    bird_glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let in_pipe = world.pipes.iter().any(|pipe| {
                game_x >= pipe.x
                    && game_x < pipe.x + PIPE_WIDTH
                    && (game_y < pipe.gap_y - PIPE_GAP || game_y >= pipe.gap_y)
            });
            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Title screen overlay.
pub fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "F L A P P Y",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Flap through the gaps. Don't touch anything."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::White)),
            Span::styled(" Play   ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc/Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_overlay(frame, area, "Flappy", Color::Cyan, lines);
}

/// Countdown overlay shown over the frozen playfield before play begins.
pub fn render_countdown(frame: &mut Frame, area: Rect, world: &GameWorld, remaining: u8) {
    render_game(frame, area, world);
    let lines = vec![Line::from(Span::styled(
        format!("{}", remaining),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    render_overlay(frame, area, "Get ready", Color::Yellow, lines);
}

/// Game-over overlay with the final score and replay prompt.
pub fn render_game_over(frame: &mut Frame, area: Rect, world: &GameWorld) {
    render_game(frame, area, world);
    let lines = vec![
        Line::from(Span::styled(
            format!("Final score: {}", world.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::White)),
            Span::styled(" Replay   ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc/Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_overlay(frame, area, "Game over", Color::Red, lines);
}

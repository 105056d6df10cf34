//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::game::rules::is_draw;
use crate::game::{Mark, Position, Square};

use super::app::{App, Focus};

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    render_board(frame, middle[0], app);
    render_timeline(frame, middle[1], app);
    render_status(frame, chunks[2], app);

    let help =
        Paragraph::new("1-9/Enter place | Arrows move | Tab: timeline | r: restart | q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// Renders the board grid with the cursor highlighted.
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(frame, rows[0], app, 0);
    render_separator(frame, rows[1]);
    render_row(frame, rows[2], app, 3);
    render_separator(frame, rows[3]);
    render_row(frame, rows[4], app, 6);
}

fn render_row(frame: &mut Frame, area: Rect, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(frame, cols[0], app, start);
    render_vertical_sep(frame, cols[1]);
    render_square(frame, cols[2], app, start + 1);
    render_vertical_sep(frame, cols[3]);
    render_square(frame, cols[4], app, start + 2);
}

fn render_square(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let Some(pos) = Position::from_index(index) else {
        return;
    };
    let (text, mut style) = match app.game().current_board().get(pos) {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::Rgb(60, 60, 60)).add_modifier(Modifier::BOLD);
    }
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

/// Renders the timeline as a list of jump targets.
fn render_timeline(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .game()
        .move_list()
        .into_iter()
        .map(|entry| {
            let current = entry.step == app.game().step();
            let selected = app.focus() == Focus::Timeline && entry.step == app.selected();
            let marker = if current { "> " } else { "  " };
            let mut style = Style::default();
            if current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if selected {
                style = style.fg(Color::Yellow);
            }
            Line::styled(format!("{marker}{}", entry.label), style)
        })
        .collect();

    let border_style = if app.focus() == Focus::Timeline {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let timeline = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Timeline")
            .border_style(border_style),
    );
    frame.render_widget(timeline, area);
}

/// Renders the status line, with a draw hint when the board fills up.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(app.game().status_text())];
    if is_draw(app.game().current_board()) {
        lines.push(Line::styled(
            "Board is full with no winner.",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}

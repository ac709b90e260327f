//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Phase, Position, Square, Symbol};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns where each cell landed.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(title_text(app))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cells = draw_board(frame, chunks[1], app);

    let mut lines = vec![Line::from(Span::styled(
        app.game().phase().to_string(),
        status_style(app.game().phase(), app.game().human_symbol()),
    ))];
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(app.game().phase()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cells
}

fn title_text(app: &App) -> String {
    match (app.game().human_symbol(), app.game().computer_symbol()) {
        (Some(human), Some(computer)) => format!(
            "Tic Tac Toe - you: {human}  computer: {computer} ({})",
            app.game().strategy().name()
        ),
        _ => "Tic Tac Toe".to_string(),
    }
}

fn help_text(phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingSymbolChoice => "x/o choose symbol (X moves first) · q quit",
        Phase::Terminal(_) => "n new game · q quit",
        Phase::HumanTurn | Phase::ComputerTurn => {
            "arrows + enter or 1-9 or click to play · n new game · q quit"
        }
    }
}

/// Green when the human won, red when the computer did, magenta for a draw.
fn status_style(phase: Phase, human: Option<Symbol>) -> Style {
    let color = match phase {
        Phase::Terminal(outcome) if outcome.is_draw() => Color::Magenta,
        Phase::Terminal(outcome) if outcome.winner() == human => Color::Green,
        Phase::Terminal(_) => Color::Red,
        _ => Color::Yellow,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let row_cells = draw_row(frame, rows[row * 2], app, row * 3);
        cells[row * 3..row * 3 + 3].copy_from_slice(&row_cells);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    cells
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, start: usize) -> [Rect; 3] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    let mut cells = [Rect::default(); 3];
    for offset in 0..3 {
        let cell = cols[offset * 2];
        if let Some(pos) = Position::from_index(start + offset) {
            draw_cell(frame, cell, app, pos);
        }
        if offset < 2 {
            draw_separator_vertical(frame, cols[offset * 2 + 1]);
        }
        cells[offset] = cell;
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, mut style) = match app.game().board().get(pos) {
        Square::Empty => (pos.key().to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Symbol::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Symbol::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if app.game().last_computer_move() == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if pos == app.cursor() && !app.game().is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the mark in the cell.
    let text = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

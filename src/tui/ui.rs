//! Stateless UI rendering for tic-tac-toe.
//!
//! Every frame is drawn from a fresh [`GameView`]; nothing here keeps state
//! between frames.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::config::Theme;
use crate::games::tictactoe::{GameView, Player, Position, Square};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.game().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(28)])
        .split(chunks[1]);
    draw_board(frame, body[0], app, &view);
    draw_moves(frame, body[1], app, &view);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help_text = match app.focus() {
        Focus::Board => "Arrows/1-9: Pick | Enter: Play | Tab: Moves | Q: Quit",
        Focus::History => "Up/Down: Select | Enter: Jump | Tab: Board | Q: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, view, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &GameView, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, view, pos);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &GameView, pos: Position) {
    let index = pos.to_index();
    let mut style = mark_style(app.theme(), view.squares()[index]);
    if view.highlights()[index] {
        style = style.bg(app.theme().highlight().to_color()).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let symbol = match view.squares()[index] {
        Square::Empty => format!("{}", index + 1),
        Square::Occupied(player) => player.to_string(),
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(theme: &Theme, square: Square) -> Style {
    match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default()
            .fg(theme.x().to_color())
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(theme.o().to_color())
            .add_modifier(Modifier::BOLD),
    }
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let text = format!("{}. {}", entry.step() + 1, entry);
            if *entry.step() == *view.current_move() {
                ListItem::new(text).style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(text)
            }
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moves")
                .border_style(focus_style(focused)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let selected = if focused {
        app.selected_step()
    } else {
        *view.current_move()
    };
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(Theme::default());
        let key = |c| crossterm::event::KeyEvent::new(c, crossterm::event::KeyModifiers::NONE);
        app.handle_key(key(crossterm::event::KeyCode::Char('5')));

        let screen = render(&app);
        assert!(screen.contains("next player is O"));
        assert!(screen.contains("1. go to game start"));
        assert!(screen.contains("2. go to move #1"));
    }
}

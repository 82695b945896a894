//! Playing screen with the 3x3 grid.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::board::{Cell, GRID_SIZE, Mark};
use crate::flow::GameFlow;
use crate::ui::layout::{self, CELL_HEIGHT, CELL_WIDTH};

pub(super) fn render(frame: &mut Frame, flow: &GameFlow) {
    let l = layout::playing_layout(frame.area());

    let player = flow.selection().selected();
    let opponent = flow.selection().opponent();

    let title = Paragraph::new(format!("{} vs {}", player.name, opponent.name))
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, l.title);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let cell_rect = Rect {
                x: l.grid.x + col as u16 * CELL_WIDTH,
                y: l.grid.y + row as u16 * CELL_HEIGHT,
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            };
            let (text, style) = match flow.board().cell(row, col) {
                Some(Cell::Occupied(Mark::Player)) => (
                    truncate(player.name),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Some(Cell::Occupied(Mark::Opponent)) => (
                    truncate(opponent.name),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                // Empty cells show the digit used for keyboard selection.
                _ => (
                    (row * GRID_SIZE + col + 1).to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            let cell = Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(cell, cell_rect);
        }
    }

    let help = Paragraph::new("Click a cell or press 1-9 | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, l.help);
}

/// Fits a character name into the text row of a grid cell.
fn truncate(name: &str) -> String {
    let max = (CELL_WIDTH - 2) as usize;
    if name.len() <= max {
        name.to_string()
    } else {
        name[..max].to_string()
    }
}

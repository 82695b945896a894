//! Title screen.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::layout;

pub(super) fn render(frame: &mut Frame) {
    let l = layout::start_layout(frame.area());

    let title = Paragraph::new("Latvju Desinas — Tic-Tac-Toe")
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, l.title);

    let start = Paragraph::new("Start Game")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(start, l.start_button);

    let help = Paragraph::new("Enter / click: Start | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, l.help);
}

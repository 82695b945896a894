//! Character-selection screen.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::roster::{CharacterSelection, ROSTER};
use crate::ui::layout;

pub(super) fn render(frame: &mut Frame, selection: &CharacterSelection) {
    let l = layout::select_layout(frame.area());

    let title = Paragraph::new("Choose Your Sausage")
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, l.title);

    let character = selection.selected();
    let portrait_text = Text::from(vec![
        Line::from(""),
        Line::from(character.name).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("{} of {}", selection.index() + 1, ROSTER.len()))
            .style(Style::default().fg(Color::DarkGray)),
    ]);
    let portrait = Paragraph::new(portrait_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Character"));
    frame.render_widget(portrait, l.portrait);

    let prev = Paragraph::new("<")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(prev, l.prev_button);

    let next = Paragraph::new(">")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(next, l.next_button);

    let confirm = Paragraph::new("Confirm")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(confirm, l.confirm_button);

    let help = Paragraph::new("←→: Browse | Enter: Confirm | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, l.help);
}

//! End screen: result banner, session stats, recent history, and fun fact.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::db::MatchResult;
use crate::flow::GameFlow;
use crate::ui::layout;
use crate::ui::{EndView, FactStatus};

pub(super) fn render(frame: &mut Frame, flow: &GameFlow, view: &EndView<'_>) {
    let l = layout::end_layout(frame.area());

    let (banner_text, banner_color) = match flow.last_result() {
        Some(MatchResult::Win) => (":D  You win!", Color::Green),
        Some(MatchResult::Loss) => ("D:  You lose...", Color::Red),
        Some(MatchResult::Draw) | None => ("Draw!", Color::Yellow),
    };
    let banner = Paragraph::new(banner_text)
        .style(Style::default().fg(banner_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, l.banner);

    let fact_text = match view.fact {
        FactStatus::Ready(fact) => fact.as_str(),
        FactStatus::Pending => "Fetching a fun fact...",
        FactStatus::Idle => "",
    };
    let fact = Paragraph::new(fact_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Fun Fact"));
    frame.render_widget(fact, l.fact);

    let restart = Paragraph::new("Play Again")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, l.restart_button);

    let menu = Paragraph::new("Back to Menu")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(menu, l.menu_button);

    let stats = flow.stats();
    let stats_lines = vec![
        Line::from(format!("Wins:   {}", stats.wins())),
        Line::from(format!("Losses: {}", stats.losses())),
        Line::from(format!("Draws:  {}", stats.draws())),
    ];
    let stats_panel = Paragraph::new(stats_lines)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Session"));
    frame.render_widget(stats_panel, l.stats);

    let items: Vec<ListItem> = view
        .recent
        .iter()
        .map(|record| {
            let color = match record.result().as_str() {
                "win" => Color::Green,
                "loss" => Color::Red,
                _ => Color::Yellow,
            };
            ListItem::new(format!(
                "{}: {} ({:.1}s)",
                record.timestamp(),
                record.result(),
                record.duration()
            ))
            .style(Style::default().fg(color))
        })
        .collect();
    let history = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Matches"),
    );
    frame.render_widget(history, l.history);

    let help = Paragraph::new("Enter / r: Play Again | m: Menu | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, l.help);
}

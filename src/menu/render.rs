// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::state::MenuState;

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    // Draw background
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    // Create layout with title area and menu area
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Title area
            Constraint::Min(6),    // Menu items
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    // Draw ASCII art title
    let title_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut title_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            " ███████╗██╗      █████╗ ██████╗ ██████╗ ██╗   ██╗",
            title_style,
        )),
        Line::from(Span::styled(
            " ██╔════╝██║     ██╔══██╗██╔══██╗██╔══██╗╚██╗ ██╔╝",
            title_style,
        )),
        Line::from(Span::styled(
            " █████╗  ██║     ███████║██████╔╝██████╔╝ ╚████╔╝ ",
            title_style,
        )),
        Line::from(Span::styled(
            " ██╔══╝  ██║     ██╔══██║██╔═══╝ ██╔═══╝   ╚██╔╝  ",
            title_style,
        )),
        Line::from(Span::styled(
            " ██║     ███████╗██║  ██║██║     ██║        ██║   ",
            title_style,
        )),
        Line::from(Span::styled(
            " ╚═╝     ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝        ╚═╝   ",
            title_style,
        )),
    ];

    if let Some(score) = menu_state.last_score {
        title_text.push(Line::from(Span::styled(
            format!("Last score: {}", score),
            Style::default().fg(Color::Gray),
        )));
    }

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Draw menu items
    let menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == menu_state.selected_index;
            let prefix = if is_selected { "  > " } else { "    " };
            let text = format!("{}{}", prefix, item.display_text());

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::White)))
            }
        })
        .collect();

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    // Draw controls hint
    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Click", Style::default().fg(Color::Gray)),
        Span::styled(": Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q/Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Quit", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);
}

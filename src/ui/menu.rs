use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::app::{MainMenu, MenuChoice};
use crate::config::Theme;
use crate::ui::dialogs::centered_rect;

const TITLE: &str = "S N A K E";

/// Draws the main menu centred in `area`.
pub fn render_main_menu(frame: &mut Frame<'_>, area: Rect, menu: &MainMenu, theme: &Theme) {
    let panel = centered_rect(area, 32, 12);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::new().bg(theme.dialog_bg).fg(theme.dialog_fg));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let [title_row, best_row, _, entries_area, _, hint_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );
    frame.render_widget(
        Paragraph::new(format!("Best: {}", menu.high_score)).alignment(Alignment::Center),
        best_row,
    );

    let entries: Vec<Line<'_>> = [(MenuChoice::Play, "Play"), (MenuChoice::Quit, "Quit")]
        .into_iter()
        .map(|(choice, label)| {
            if choice == menu.selected {
                Line::styled(
                    format!("> {label} <"),
                    Style::new()
                        .fg(theme.dialog_selected)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::from(label)
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(entries).alignment(Alignment::Center),
        entries_area,
    );

    frame.render_widget(
        Paragraph::new("↑/↓ choose · Enter select")
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud_muted)),
        hint_row,
    );
}

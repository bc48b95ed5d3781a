use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::DeathReason;
use crate::screen::{GameOverChoice, PauseChoice};

/// Big digit shown over the board before play starts.
pub fn render_countdown(frame: &mut Frame<'_>, board: Rect, remaining: u8, theme: &Theme) {
    let popup = centered_rect(board, 9, 5);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::new().bg(theme.overlay_bg).fg(theme.dialog_fg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [_, digit_row, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(remaining.to_string())
            .alignment(Alignment::Center)
            .style(Style::new().add_modifier(Modifier::BOLD)),
        digit_row,
    );
}

/// Pause dialog asking whether to quit the game.
pub fn render_pause_dialog(frame: &mut Frame<'_>, area: Rect, selected: PauseChoice, theme: &Theme) {
    let body = [Line::from("Do you want to quit the game?")];
    let buttons = [
        ("Resume", selected == PauseChoice::Resume),
        ("Quit", selected == PauseChoice::Quit),
    ];

    render_dialog(frame, area, "Pause", &body, buttons, theme);
}

/// Game-over dialog with the final and best scores.
pub fn render_game_over_dialog(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: GameOverSummary,
    selected: GameOverChoice,
    theme: &Theme,
) {
    let mut body = vec![
        Line::from(format!("Score: {}", summary.score)),
        Line::from(format!("Best: {}", summary.high_score)),
    ];
    let cause = match summary.reason {
        Some(DeathReason::WallCollision) => "You hit the wall",
        Some(DeathReason::SelfCollision) => "You bit yourself",
        Some(DeathReason::BoardFilled) => "The board is full!",
        None => "",
    };
    if !cause.is_empty() {
        body.push(Line::from(cause));
    }
    if summary.new_best {
        body.push(Line::styled(
            "New best!",
            Style::new()
                .fg(theme.dialog_selected)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let buttons = [
        ("Try Again", selected == GameOverChoice::TryAgain),
        ("Main Menu", selected == GameOverChoice::MainMenu),
    ];

    render_dialog(frame, area, "Game Over!", &body, buttons, theme);
}

/// Values shown by the game-over dialog.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverSummary {
    pub score: u32,
    pub high_score: u32,
    pub reason: Option<DeathReason>,
    pub new_best: bool,
}

fn render_dialog(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    body: &[Line<'_>],
    buttons: [(&str, bool); 2],
    theme: &Theme,
) {
    let button_line = button_row(buttons, theme);
    let content_width = body
        .iter()
        .map(Line::width)
        .chain([button_line.width(), title.width()])
        .max()
        .unwrap_or(0);

    // Body, blank spacer, buttons, plus two border rows and one padding column per side.
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(body.len() + 4).unwrap_or(u16::MAX);
    let popup = centered_rect(area, width, height);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(Line::from(format!(" {title} ")).alignment(Alignment::Center))
        .style(Style::new().bg(theme.dialog_bg).fg(theme.dialog_fg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [body_area, _, button_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(body.to_vec()).alignment(Alignment::Center),
        body_area,
    );
    frame.render_widget(
        Paragraph::new(button_line).alignment(Alignment::Center),
        button_area,
    );
}

fn button_row(buttons: [(&str, bool); 2], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(3);
    for (index, (label, selected)) in buttons.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        let (text, style) = if selected {
            (
                format!("[ {label} ]"),
                Style::new()
                    .fg(theme.dialog_selected)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (format!("  {label}  "), Style::new().fg(theme.dialog_fg))
        };
        spans.push(Span::styled(text, style));
    }

    Line::from(spans)
}

/// Returns a `width` x `height` rectangle centred in `area`, clipped to it.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

const BACK_HINT: &str = "← Esc";
const SEPARATOR: &str = "   ";

/// Renders the score row across the top of `area` and returns the space below it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    theme: &Theme,
) -> Rect {
    let [hud_area, rest] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let back_width = u16::try_from(BACK_HINT.width()).unwrap_or(u16::MAX);
    let [back_area, score_area] =
        Layout::horizontal([Constraint::Length(back_width + 1), Constraint::Min(0)])
            .areas(hud_area);

    frame.render_widget(
        Paragraph::new(BACK_HINT).style(Style::new().fg(theme.hud_muted)),
        back_area,
    );
    frame.render_widget(
        Paragraph::new(score_line(
            score,
            high_score,
            usize::from(score_area.width),
            theme,
        ))
        .alignment(Alignment::Right),
        score_area,
    );

    rest
}

/// Renders the controls reminder along the bottom of `area` and returns the
/// space above it.
#[must_use]
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, hint: &str, theme: &Theme) -> Rect {
    let [rest, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud_muted)),
        footer_area,
    );

    rest
}

fn score_line(score: u32, high_score: u32, available_width: usize, theme: &Theme) -> Line<'static> {
    let compact = score_line_width(score, high_score, false) > available_width;
    let (score_label, best_label) = if compact {
        ("S", "B")
    } else {
        ("Score", "Best")
    };

    let value_style = Style::new()
        .fg(theme.hud_primary)
        .add_modifier(Modifier::BOLD);
    let best_style = Style::new().fg(theme.hud_muted).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(format!("{score_label}: "), value_style),
        Span::styled(score.to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::styled(format!("{best_label}: "), best_style),
        Span::styled(high_score.to_string(), best_style),
    ])
}

fn score_line_width(score: u32, high_score: u32, compact: bool) -> usize {
    let (score_label, best_label) = if compact {
        ("S", "B")
    } else {
        ("Score", "Best")
    };

    format!("{score_label}: {score}").width()
        + SEPARATOR.width()
        + format!("{best_label}: {high_score}").width()
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::app::{App, Screen};
use crate::config::{
    CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize, THEME_MEADOW, Theme,
};
use crate::game::GameState;
use crate::prefs::Preferences;
use crate::screen::{GameScreen, Phase};
use crate::snake::Position;
use crate::ui::dialogs::{
    GameOverSummary, centered_rect, render_countdown, render_game_over_dialog, render_pause_dialog,
};
use crate::ui::hud::{render_footer, render_hud};
use crate::ui::menu::render_main_menu;

const CONTROLS_HINT: &str = "arrows/WASD move · P pause · Esc back · Q quit";

/// Renders the full frame for whichever screen is active.
pub fn render<P: Preferences>(frame: &mut Frame<'_>, app: &App<P>) {
    let theme = &THEME_MEADOW;
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(theme.screen_bg)), area);

    match app.screen() {
        Screen::Menu(menu) => render_main_menu(frame, area, menu, theme),
        Screen::Game(game) => render_game(frame, area, game, theme),
    }
}

/// Renders the game screen: HUD, board, and the overlay for the current phase.
pub fn render_game(frame: &mut Frame<'_>, area: Rect, game: &GameScreen, theme: &Theme) {
    let state = game.state();
    let below_hud = render_hud(frame, area, state.score(), game.high_score(), theme);
    let board_area = render_footer(frame, below_hud, CONTROLS_HINT, theme);

    let board = board_rect(board_area, state.bounds());
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.board_border))
        .style(Style::new().bg(theme.board_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match game.phase() {
        Phase::Countdown { remaining } => render_countdown(frame, board, remaining, theme),
        Phase::Running => {}
        Phase::Paused { selected } => render_pause_dialog(frame, area, selected, theme),
        Phase::GameOver { selected } => render_game_over_dialog(
            frame,
            area,
            GameOverSummary {
                score: state.score(),
                high_score: game.high_score(),
                reason: state.death_reason(),
                new_best: game.is_new_best(),
            },
            selected,
            theme,
        ),
    }
}

/// Bordered board sized to the grid, centred and clipped to `area`.
fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = bounds.height.saturating_add(2);
    centered_rect(area, width, height)
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some(food) = state.food() else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake().head();
    let buffer = frame.buffer_mut();

    let segments: Vec<Position> = state.snake().segments().copied().collect();
    for segment in segments.iter().rev() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

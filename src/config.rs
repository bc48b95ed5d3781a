use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Colors applied to the board, overlays and dialogs.
#[derive(Debug)]
pub struct Theme {
    pub screen_bg: Color,
    pub board_bg: Color,
    pub board_border: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub hud_primary: Color,
    pub hud_muted: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub dialog_selected: Color,
    pub overlay_bg: Color,
}

/// Dark green field with a lighter green dialog surface.
pub const THEME_MEADOW: Theme = Theme {
    screen_bg: Color::Rgb(0x1B, 0x5E, 0x20),
    board_bg: Color::Rgb(0x14, 0x46, 0x18),
    board_border: Color::Rgb(0xA5, 0xD6, 0xA7),
    snake_head: Color::Rgb(0xFF, 0xEB, 0x3B),
    snake_body: Color::Rgb(0x8B, 0xC3, 0x4A),
    food: Color::Rgb(0xF4, 0x43, 0x36),
    hud_primary: Color::White,
    hud_muted: Color::Rgb(0xC8, 0xE6, 0xC9),
    dialog_bg: Color::Rgb(0x2E, 0x7D, 0x32),
    dialog_fg: Color::White,
    dialog_selected: Color::Rgb(0xFF, 0xEB, 0x3B),
    overlay_bg: Color::Black,
};

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Smallest accepted grid edge.
pub const MIN_GRID_EDGE: u16 = 5;

/// Largest accepted grid edge.
pub const MAX_GRID_EDGE: u16 = 60;

/// Segments in a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points granted per food eaten.
pub const SCORE_PER_FOOD: u32 = 1;

/// Game tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Countdown step in milliseconds.
pub const COUNTDOWN_STEP_MS: u64 = 1000;

/// Countdown value shown before every game.
pub const COUNTDOWN_START: u8 = 3;

/// Input poll timeout per loop iteration, in milliseconds.
pub const INPUT_POLL_MS: u64 = 16;

/// Preference key holding the best score.
pub const HIGH_SCORE_KEY: &str = "high_score";

/// Terminal columns used to draw one logical cell.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "●";

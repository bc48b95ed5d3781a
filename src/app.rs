use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::{GridSize, HIGH_SCORE_KEY};
use crate::input::{Direction, GameInput};
use crate::prefs::Preferences;
use crate::screen::{GameScreen, Navigation, ScreenEvent};

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuChoice {
    Play,
    Quit,
}

/// Parent menu the game screen navigates back to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MainMenu {
    pub selected: MenuChoice,
    pub high_score: u32,
}

impl MainMenu {
    fn open(prefs: &dyn Preferences) -> Self {
        Self {
            selected: MenuChoice::Play,
            high_score: prefs.get_int(HIGH_SCORE_KEY, 0),
        }
    }
}

/// The screen currently shown.
#[derive(Debug, Clone)]
pub enum Screen {
    Menu(MainMenu),
    Game(GameScreen),
}

/// Top-level application: routes input and timers to the active screen and
/// performs navigation between the menu and the game.
#[derive(Debug)]
pub struct App<P> {
    screen: Screen,
    prefs: P,
    bounds: GridSize,
    seeds: StdRng,
    running: bool,
}

impl<P: Preferences> App<P> {
    /// Starts on the main menu. A `seed` makes every game's food placement
    /// reproducible.
    #[must_use]
    pub fn new(prefs: P, bounds: GridSize, seed: Option<u64>) -> Self {
        let seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            screen: Screen::Menu(MainMenu::open(&prefs)),
            prefs,
            bounds,
            seeds,
            running: true,
        }
    }

    /// Routes one input event to the active screen.
    pub fn handle_input(&mut self, input: GameInput) {
        match &mut self.screen {
            Screen::Menu(menu) => match menu_input(menu, input) {
                MenuAction::None => {}
                MenuAction::Play => self.start_game(),
                MenuAction::Quit => self.navigate(Navigation::Quit),
            },
            Screen::Game(game) => {
                let navigation = game.update(ScreenEvent::Input(input), &mut self.prefs);
                self.navigate(navigation);
            }
        }
    }

    /// Fires due timers on the active screen.
    pub fn advance(&mut self, now: Instant) {
        if let Screen::Game(game) = &mut self.screen {
            game.advance(now, &mut self.prefs);
        }
    }

    fn navigate(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Stay => {}
            Navigation::BackToMenu => {
                log::debug!("navigating to main menu");
                self.screen = Screen::Menu(MainMenu::open(&self.prefs));
            }
            Navigation::Quit => {
                log::debug!("quit requested");
                self.running = false;
            }
        }
    }

    fn start_game(&mut self) {
        let seed = self.seeds.next_u64();
        log::debug!("starting game with seed {seed}");
        self.screen = Screen::Game(GameScreen::enter(self.bounds, &self.prefs, seed));
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

enum MenuAction {
    None,
    Play,
    Quit,
}

fn menu_input(menu: &mut MainMenu, input: GameInput) -> MenuAction {
    match input {
        GameInput::Direction(Direction::Up) => menu.selected = MenuChoice::Play,
        GameInput::Direction(Direction::Down) => menu.selected = MenuChoice::Quit,
        GameInput::Confirm => {
            return match menu.selected {
                MenuChoice::Play => MenuAction::Play,
                MenuChoice::Quit => MenuAction::Quit,
            };
        }
        GameInput::Back | GameInput::Quit => return MenuAction::Quit,
        GameInput::Direction(_) | GameInput::Pause => {}
    }

    MenuAction::None
}

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::Interval;
use crate::config::{COUNTDOWN_START, COUNTDOWN_STEP_MS, GridSize, HIGH_SCORE_KEY, TICK_INTERVAL_MS};
use crate::game::GameState;
use crate::input::{Direction, GameInput};
use crate::prefs::Preferences;

/// Buttons of the pause dialog, left to right.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PauseChoice {
    Resume,
    Quit,
}

/// Buttons of the game-over dialog, left to right.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverChoice {
    TryAgain,
    MainMenu,
}

/// Where the game screen currently is in its lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Countdown { remaining: u8 },
    Running,
    Paused { selected: PauseChoice },
    GameOver { selected: GameOverChoice },
}

/// Events fed into [`GameScreen::update`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScreenEvent {
    /// Game tick timer fired.
    Tick,
    /// One countdown second elapsed.
    CountdownStep,
    Input(GameInput),
}

/// What the owner of the screen should do after an update.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Navigation {
    Stay,
    BackToMenu,
    Quit,
}

/// Game screen controller: owns the current snapshot, the countdown, the
/// dialogs and the best score shown in the HUD.
#[derive(Debug, Clone)]
pub struct GameScreen {
    state: GameState,
    phase: Phase,
    high_score: u32,
    best_before_game: u32,
    rng: StdRng,
    tick_timer: Interval,
    countdown_timer: Interval,
}

impl GameScreen {
    /// Builds a fresh game and reads the stored best score.
    #[must_use]
    pub fn enter(bounds: GridSize, prefs: &dyn Preferences, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new(bounds, &mut rng);
        let high_score = prefs.get_int(HIGH_SCORE_KEY, 0);
        log::info!(
            "game screen entered ({}x{}, best {high_score})",
            bounds.width,
            bounds.height
        );

        Self {
            state,
            phase: Phase::Countdown {
                remaining: COUNTDOWN_START,
            },
            high_score,
            best_before_game: high_score,
            rng,
            tick_timer: Interval::new(Duration::from_millis(TICK_INTERVAL_MS)),
            countdown_timer: Interval::new(Duration::from_millis(COUNTDOWN_STEP_MS)),
        }
    }

    /// Fires whichever timers are due at `now`.
    pub fn advance(&mut self, now: Instant, prefs: &mut dyn Preferences) {
        if matches!(self.phase, Phase::Countdown { .. }) && self.countdown_timer.poll(now) {
            self.on_countdown_step();
        }

        if self.tick_timer.poll(now) {
            self.on_tick(prefs);
        }
    }

    /// Applies one event and reports any navigation it requests.
    pub fn update(&mut self, event: ScreenEvent, prefs: &mut dyn Preferences) -> Navigation {
        match event {
            ScreenEvent::Tick => {
                self.on_tick(prefs);
                Navigation::Stay
            }
            ScreenEvent::CountdownStep => {
                self.on_countdown_step();
                Navigation::Stay
            }
            ScreenEvent::Input(input) => self.on_input(input),
        }
    }

    fn on_tick(&mut self, prefs: &mut dyn Preferences) {
        if self.phase != Phase::Running {
            return;
        }

        self.state = self.state.step(&mut self.rng);
        if self.state.is_over() {
            self.finish_game(prefs);
        }
    }

    fn on_countdown_step(&mut self) {
        let Phase::Countdown { remaining } = self.phase else {
            return;
        };

        let remaining = remaining.saturating_sub(1);
        self.phase = if remaining == 0 {
            log::info!("game started");
            Phase::Running
        } else {
            Phase::Countdown { remaining }
        };
    }

    fn on_input(&mut self, input: GameInput) -> Navigation {
        if input == GameInput::Quit {
            return Navigation::Quit;
        }

        match (self.phase, input) {
            (Phase::Running, GameInput::Direction(direction)) => {
                self.state = self.state.steered(direction);
            }
            (Phase::Running, GameInput::Back | GameInput::Pause) => {
                self.phase = Phase::Paused {
                    selected: PauseChoice::Resume,
                };
            }
            (Phase::Paused { .. }, GameInput::Back | GameInput::Pause) => {
                self.phase = Phase::Running;
            }
            (Phase::Paused { selected }, GameInput::Direction(direction)) => {
                self.phase = Phase::Paused {
                    selected: pick(direction, selected, PauseChoice::Resume, PauseChoice::Quit),
                };
            }
            (Phase::Paused { selected }, GameInput::Confirm) => match selected {
                PauseChoice::Resume => self.phase = Phase::Running,
                PauseChoice::Quit => return Navigation::BackToMenu,
            },
            (Phase::GameOver { selected }, GameInput::Direction(direction)) => {
                self.phase = Phase::GameOver {
                    selected: pick(
                        direction,
                        selected,
                        GameOverChoice::TryAgain,
                        GameOverChoice::MainMenu,
                    ),
                };
            }
            (Phase::GameOver { selected }, GameInput::Confirm) => match selected {
                GameOverChoice::TryAgain => self.restart(),
                GameOverChoice::MainMenu => return Navigation::BackToMenu,
            },
            (Phase::Countdown { .. } | Phase::GameOver { .. }, GameInput::Back) => {
                return Navigation::BackToMenu;
            }
            _ => {}
        }

        Navigation::Stay
    }

    fn finish_game(&mut self, prefs: &mut dyn Preferences) {
        let score = self.state.score();
        log::info!(
            "game over: score {score}, reason {:?}, ticks {}",
            self.state.death_reason(),
            self.state.tick_count()
        );

        self.phase = Phase::GameOver {
            selected: GameOverChoice::TryAgain,
        };

        if score > self.high_score {
            self.high_score = score;
            log::info!("new high score {score}");
            if let Err(error) = prefs.set_int(HIGH_SCORE_KEY, score) {
                log::warn!("failed to save high score: {error}");
            }
        }
    }

    fn restart(&mut self) {
        self.state = GameState::new(self.state.bounds(), &mut self.rng);
        self.phase = Phase::Countdown {
            remaining: COUNTDOWN_START,
        };
        self.best_before_game = self.high_score;
        self.countdown_timer.reset();
        log::info!("game restarted");
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Returns true when the finished game beat the best score it started with.
    #[must_use]
    pub fn is_new_best(&self) -> bool {
        self.state.is_over() && self.state.score() > self.best_before_game
    }
}

/// Left selects the first dialog button, Right the second.
fn pick<T: Copy>(direction: Direction, current: T, first: T, second: T) -> T {
    match direction {
        Direction::Left => first,
        Direction::Right => second,
        Direction::Up | Direction::Down => current,
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::{GridSize, HIGH_SCORE_KEY};
    use crate::game::GameState;
    use crate::input::{Direction, GameInput};
    use crate::prefs::{MemoryPreferences, Preferences};
    use crate::snake::{Position, Snake};

    use super::{GameOverChoice, GameScreen, Navigation, PauseChoice, Phase, ScreenEvent};

    fn grid() -> GridSize {
        GridSize {
            width: 10,
            height: 10,
        }
    }

    fn running_screen(prefs: &mut MemoryPreferences) -> GameScreen {
        let mut screen = GameScreen::enter(grid(), &*prefs, 1);
        for _ in 0..3 {
            screen.update(ScreenEvent::CountdownStep, prefs);
        }
        assert_eq!(screen.phase(), Phase::Running);
        screen
    }

    fn run_until_over(screen: &mut GameScreen, prefs: &mut MemoryPreferences) {
        for _ in 0..100 {
            screen.update(ScreenEvent::Tick, prefs);
            if screen.state().is_over() {
                return;
            }
        }
        panic!("snake should hit the wall within 100 ticks");
    }

    #[test]
    fn countdown_runs_three_two_one() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = GameScreen::enter(grid(), &prefs, 1);

        assert_eq!(screen.phase(), Phase::Countdown { remaining: 3 });
        screen.update(ScreenEvent::CountdownStep, &mut prefs);
        assert_eq!(screen.phase(), Phase::Countdown { remaining: 2 });
        screen.update(ScreenEvent::CountdownStep, &mut prefs);
        assert_eq!(screen.phase(), Phase::Countdown { remaining: 1 });
        screen.update(ScreenEvent::CountdownStep, &mut prefs);
        assert_eq!(screen.phase(), Phase::Running);
    }

    #[test]
    fn ticks_during_countdown_do_not_move() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = GameScreen::enter(grid(), &prefs, 1);
        let before = screen.state().clone();

        screen.update(ScreenEvent::Tick, &mut prefs);
        screen.update(ScreenEvent::Input(GameInput::Direction(Direction::Up)), &mut prefs);

        assert_eq!(screen.state(), &before);
    }

    #[test]
    fn back_while_running_pauses_and_freezes_ticks() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = running_screen(&mut prefs);

        let nav = screen.update(ScreenEvent::Input(GameInput::Back), &mut prefs);
        assert_eq!(nav, Navigation::Stay);
        assert_eq!(
            screen.phase(),
            Phase::Paused {
                selected: PauseChoice::Resume
            }
        );

        let before = screen.state().clone();
        screen.update(ScreenEvent::Tick, &mut prefs);
        assert_eq!(screen.state(), &before);

        screen.update(ScreenEvent::Input(GameInput::Back), &mut prefs);
        assert_eq!(screen.phase(), Phase::Running);
    }

    #[test]
    fn pause_dialog_quit_navigates_back() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = running_screen(&mut prefs);

        screen.update(ScreenEvent::Input(GameInput::Pause), &mut prefs);
        screen.update(
            ScreenEvent::Input(GameInput::Direction(Direction::Right)),
            &mut prefs,
        );
        let nav = screen.update(ScreenEvent::Input(GameInput::Confirm), &mut prefs);

        assert_eq!(nav, Navigation::BackToMenu);
    }

    #[test]
    fn back_during_countdown_navigates_back() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = GameScreen::enter(grid(), &prefs, 1);

        let nav = screen.update(ScreenEvent::Input(GameInput::Back), &mut prefs);

        assert_eq!(nav, Navigation::BackToMenu);
    }

    #[test]
    fn game_over_records_higher_score_once() {
        let mut prefs = MemoryPreferences::default();
        prefs.set_int(HIGH_SCORE_KEY, 0).expect("memory store never fails");
        let mut screen = running_screen(&mut prefs);
        screen.state = GameState::from_parts(
            grid(),
            Snake::from_segments(vec![Position { x: 8, y: 5 }]),
            Direction::Right,
            Position { x: 9, y: 5 },
        );

        // First tick eats at the right edge, second runs into the wall.
        screen.update(ScreenEvent::Tick, &mut prefs);
        assert_eq!(screen.state().score(), 1);
        assert!(!screen.state().is_over());
        screen.update(ScreenEvent::Tick, &mut prefs);

        assert_eq!(
            screen.phase(),
            Phase::GameOver {
                selected: GameOverChoice::TryAgain
            }
        );
        assert_eq!(prefs.get_int(HIGH_SCORE_KEY, 0), 1);
        assert_eq!(screen.high_score(), 1);
        assert!(screen.is_new_best());

        // Further ticks leave the store alone.
        prefs.set_int(HIGH_SCORE_KEY, 0).expect("memory store never fails");
        screen.update(ScreenEvent::Tick, &mut prefs);
        assert_eq!(prefs.get_int(HIGH_SCORE_KEY, 0), 0);
        prefs.set_int(HIGH_SCORE_KEY, 1).expect("memory store never fails");

        // A scoreless follow-up game keeps the best.
        screen.update(ScreenEvent::Input(GameInput::Confirm), &mut prefs);
        for _ in 0..3 {
            screen.update(ScreenEvent::CountdownStep, &mut prefs);
        }
        screen.state = GameState::from_parts(
            grid(),
            Snake::from_segments(vec![Position { x: 9, y: 0 }]),
            Direction::Right,
            Position { x: 0, y: 9 },
        );
        screen.update(ScreenEvent::Tick, &mut prefs);

        assert!(screen.state().is_over());
        assert_eq!(screen.state().score(), 0);
        assert_eq!(prefs.get_int(HIGH_SCORE_KEY, 0), 1);
        assert_eq!(screen.high_score(), 1);
        assert!(!screen.is_new_best());
    }

    #[test]
    fn lower_score_keeps_stored_best() {
        let mut prefs = MemoryPreferences::default();
        prefs.set_int(HIGH_SCORE_KEY, 500).expect("memory store never fails");
        let mut screen = running_screen(&mut prefs);
        assert_eq!(screen.high_score(), 500);

        run_until_over(&mut screen, &mut prefs);

        assert_eq!(prefs.get_int(HIGH_SCORE_KEY, 0), 500);
        assert!(!screen.is_new_best());
    }

    #[test]
    fn try_again_restarts_countdown_with_fresh_state() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = running_screen(&mut prefs);
        run_until_over(&mut screen, &mut prefs);

        let nav = screen.update(ScreenEvent::Input(GameInput::Confirm), &mut prefs);

        assert_eq!(nav, Navigation::Stay);
        assert_eq!(screen.phase(), Phase::Countdown { remaining: 3 });
        assert!(!screen.state().is_over());
        assert_eq!(screen.state().score(), 0);
    }

    #[test]
    fn game_over_menu_choice_navigates_back() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = running_screen(&mut prefs);
        run_until_over(&mut screen, &mut prefs);

        screen.update(
            ScreenEvent::Input(GameInput::Direction(Direction::Right)),
            &mut prefs,
        );
        let nav = screen.update(ScreenEvent::Input(GameInput::Confirm), &mut prefs);

        assert_eq!(nav, Navigation::BackToMenu);
    }

    #[test]
    fn timers_drive_countdown_then_ticks() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = GameScreen::enter(grid(), &prefs, 1);
        let start = Instant::now();

        screen.advance(start, &mut prefs);
        for second in 1..=3 {
            screen.advance(start + Duration::from_millis(1000 * second), &mut prefs);
        }
        assert_eq!(screen.phase(), Phase::Running);

        let head = screen.state().snake().head();
        screen.advance(start + Duration::from_millis(3200), &mut prefs);
        assert_ne!(screen.state().snake().head(), head);
    }

    #[test]
    fn quit_key_exits_from_any_phase() {
        let mut prefs = MemoryPreferences::default();
        let mut screen = GameScreen::enter(grid(), &prefs, 1);

        let nav = screen.update(ScreenEvent::Input(GameInput::Quit), &mut prefs);

        assert_eq!(nav, Navigation::Quit);
    }
}

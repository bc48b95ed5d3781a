use rand::Rng;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH, SCORE_PER_FOOD};
use crate::food::spawn_position;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

/// Immutable snapshot of one game.
///
/// Every transition returns a new value; a terminal snapshot stays terminal
/// until it is replaced by a fresh one. Food is absent only after the snake
/// has filled the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    snake: Snake,
    heading: Direction,
    queued_heading: Option<Direction>,
    food: Option<Position>,
    score: u32,
    tick_count: u64,
    death: Option<DeathReason>,
    bounds: GridSize,
}

impl GameState {
    /// Creates a fresh game: a short snake centred on the grid heading right,
    /// with food on a random free cell.
    ///
    /// # Panics
    ///
    /// Panics when the grid is too small to hold the starting snake and one food.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(bounds: GridSize, rng: &mut R) -> Self {
        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::straight(head, Direction::Right, INITIAL_SNAKE_LENGTH);
        assert!(
            snake.segments().all(|cell| cell.is_within_bounds(bounds)),
            "grid {}x{} cannot hold the starting snake",
            bounds.width,
            bounds.height,
        );
        let food = spawn_position(rng, bounds, &snake)
            .expect("starting grid must leave at least one free cell");

        Self::from_parts(bounds, snake, Direction::Right, food)
    }

    /// Assembles a live state from explicit parts.
    #[must_use]
    pub fn from_parts(bounds: GridSize, snake: Snake, heading: Direction, food: Position) -> Self {
        debug_assert!(!snake.occupies(food), "food must not sit on the snake");

        Self {
            snake,
            heading,
            queued_heading: None,
            food: Some(food),
            score: 0,
            tick_count: 0,
            death: None,
            bounds,
        }
    }

    /// Returns the state with a heading change queued for the next tick.
    ///
    /// The change is validated against the heading travelled on the last
    /// tick; a reversal, or any change on a finished game, is ignored.
    #[must_use]
    pub fn steered(&self, direction: Direction) -> Self {
        let mut next = self.clone();
        if self.is_over() {
            return next;
        }

        if direction_change_is_valid(self.heading, direction) {
            next.queued_heading = Some(direction);
        } else {
            log::debug!("ignored reversal from {:?} to {direction:?}", self.heading);
        }
        next
    }

    /// Advances the game by one tick.
    ///
    /// A finished game is returned unchanged. A move off the grid or into
    /// the body (the retracting tail cell excepted) ends the game with the
    /// body left in place. Otherwise the head advances, and eating food
    /// grows the snake by one, scores, and relocates the food. Growth that
    /// leaves no free cell clears the food and ends the game.
    #[must_use]
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        if self.is_over() {
            return self.clone();
        }

        let heading = self.queued_heading.unwrap_or(self.heading);
        let next_head = self.snake.head().step(heading);

        let mut next = self.clone();
        next.heading = heading;
        next.queued_heading = None;
        next.tick_count += 1;

        if !next_head.is_within_bounds(self.bounds) {
            next.death = Some(DeathReason::WallCollision);
            return next;
        }

        if self.snake.blocks_move_into(next_head) {
            next.death = Some(DeathReason::SelfCollision);
            return next;
        }

        let eats = self.food == Some(next_head);
        next.snake = self.snake.advanced(next_head, eats);

        if eats {
            next.score += SCORE_PER_FOOD;
            next.food = spawn_position(rng, self.bounds, &next.snake);
            if next.food.is_none() {
                next.death = Some(DeathReason::BoardFilled);
            }
        }

        next
    }

    /// Returns true once the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.death.is_some()
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Heading travelled on the most recent tick.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Current food cell; `None` once the board is full.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

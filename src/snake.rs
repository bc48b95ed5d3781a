use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step towards `direction`.
    ///
    /// The result may lie outside the grid; callers check bounds.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a straight snake of `length` cells whose head is at `head`,
    /// with the rest of the body trailing behind `heading`.
    #[must_use]
    pub fn straight(head: Position, heading: Direction, length: usize) -> Self {
        let behind = heading.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut cell = head;
        for _ in 0..length.max(1) {
            body.push_back(cell);
            cell = cell.step(behind);
        }

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake body needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if a head moving into `position` would hit the body,
    /// treating the current tail cell as free because it retracts this tick.
    #[must_use]
    pub fn blocks_move_into(&self, position: Position) -> bool {
        let retained = self.body.len().saturating_sub(1);
        self.body.iter().take(retained).any(|segment| *segment == position)
    }

    /// Returns the body after the head advances into `next_head`.
    ///
    /// The tail is kept when `grow` is set, otherwise it retracts by one cell.
    #[must_use]
    pub fn advanced(&self, next_head: Position, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(next_head);
        if !grow {
            let _ = body.pop_back();
        }

        Self { body }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn straight_snake_trails_behind_heading() {
        let snake = Snake::straight(Position { x: 5, y: 5 }, Direction::Right, 3);

        let cells: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 },
            ]
        );
    }

    #[test]
    fn bounds_check_rejects_negative_and_far_edges() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 9, y: 7 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: 8 }.is_within_bounds(bounds));
    }

    #[test]
    fn advancing_without_growth_keeps_length() {
        let snake = Snake::straight(Position { x: 5, y: 5 }, Direction::Right, 2);

        let moved = snake.advanced(Position { x: 6, y: 5 }, false);

        assert_eq!(moved.head(), Position { x: 6, y: 5 });
        assert_eq!(moved.tail(), Position { x: 5, y: 5 });
        assert_eq!(moved.len(), 2);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let snake = Snake::straight(Position { x: 5, y: 5 }, Direction::Right, 2);

        let grown = snake.advanced(Position { x: 6, y: 5 }, true);

        assert_eq!(grown.len(), 3);
        assert_eq!(grown.tail(), Position { x: 4, y: 5 });
    }

    #[test]
    fn vacating_tail_cell_does_not_block() {
        // 2x2 loop: head (1,0), then (1,1), (0,1), tail (0,0).
        let snake = Snake::from_segments(vec![
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
            Position { x: 0, y: 1 },
            Position { x: 0, y: 0 },
        ]);

        assert!(!snake.blocks_move_into(Position { x: 0, y: 0 }));
        assert!(snake.blocks_move_into(Position { x: 0, y: 1 }));
    }
}

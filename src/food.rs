use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a cell uniformly at random among cells the snake does not occupy.
///
/// Returns `None` when the snake covers the whole board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::spawn_position;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);

        for _ in 0..100 {
            let food = spawn_position(
                &mut rng,
                GridSize {
                    width: 8,
                    height: 6,
                },
                &snake,
            )
            .expect("board has free cells");
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn spawn_reaches_every_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 3,
            height: 2,
        };
        let snake = Snake::from_segments(vec![Position { x: 0, y: 0 }]);

        let seen: HashSet<Position> = (0..500)
            .filter_map(|_| spawn_position(&mut rng, bounds, &snake))
            .collect();

        assert_eq!(seen.len(), bounds.total_cells() - 1);
    }

    #[test]
    fn full_board_has_no_spawn_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
            Position { x: 0, y: 1 },
        ]);

        let spawned = spawn_position(
            &mut rng,
            GridSize {
                width: 2,
                height: 2,
            },
            &snake,
        );

        assert_eq!(spawned, None);
    }
}

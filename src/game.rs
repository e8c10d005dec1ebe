use std::collections::HashSet;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, SPAWN_HEAD_X};
use crate::geometry::{Direction, Position, key_to_direction};
use crate::placement::place_excluding;
use crate::settings::Settings;
use crate::snake::Snake;

/// What one snake tick did, for the presentation layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SnakeTick {
    /// There is no snake to move yet.
    Idle,
    /// Forward progress is impossible; the tick changed nothing.
    Blocked,
    /// The queued turn ran into a brick and was discarded.
    Obstructed,
    Moved { ate_apple: bool },
}

/// Result shown once the snake can no longer move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Complete mutable game state for one session.
///
/// The host owns exactly one value of this type and drives it through
/// [`Game::on_snake_tick`], [`Game::on_brick_tick`] and [`Game::on_input`].
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub bricks: HashSet<Position>,
    pub apple: Option<Position>,
    pub score: u32,
    queued_direction: Direction,
    bounds: GridSize,
    settings: Settings,
    rng: StdRng,
}

impl Game {
    /// Creates an empty game seeded from system entropy.
    #[must_use]
    pub fn new(bounds: GridSize, settings: Settings) -> Self {
        Self::with_rng(bounds, settings, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    #[must_use]
    pub fn with_seed(bounds: GridSize, settings: Settings, seed: u64) -> Self {
        Self::with_rng(bounds, settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, settings: Settings, rng: StdRng) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        Self {
            snake: Snake::empty(Direction::Right),
            bricks: HashSet::new(),
            apple: None,
            score: 0,
            queued_direction: Direction::None,
            bounds,
            settings,
            rng,
        }
    }

    /// Spawns the two-segment snake on the left edge, vertically centred and
    /// heading right, then places the first apple.
    pub fn start(&mut self) {
        let head = Position {
            x: SPAWN_HEAD_X,
            y: i32::from(self.bounds.height / 2),
        };
        let tail = head.apply_direction(Direction::Left, self.bounds);

        self.snake = Snake::spawn(head, tail, Direction::Right);
        self.queued_direction = Direction::None;
        self.place_apple();

        info!(
            "game started on {}x{} board, head at ({}, {})",
            self.bounds.width, self.bounds.height, head.x, head.y
        );
    }

    /// Advances the snake by one cell, honouring the queued input, bricks and
    /// the apple.
    pub fn on_snake_tick(&mut self) -> SnakeTick {
        let Some(head) = self.snake.head() else {
            return SnakeTick::Idle;
        };

        if self.is_blocked() {
            return SnakeTick::Blocked;
        }

        let heading = self.effective_heading();
        if heading.is_none() {
            return SnakeTick::Idle;
        }

        let prospective = head.apply_direction(heading, self.bounds);
        if self.bricks.contains(&prospective) {
            debug!("turn {heading:?} obstructed by brick at {prospective:?}");
            self.queued_direction = Direction::None;
            return SnakeTick::Obstructed;
        }

        self.snake.set_direction(heading);
        self.queued_direction = Direction::None;
        let next_head = head.apply_direction(self.snake.direction(), self.bounds);

        let ate_apple = self.apple == Some(next_head);
        if ate_apple {
            self.score = self.score.saturating_add(self.settings.points_per_apple);
            self.snake.mark_eating(self.settings.growth_per_apple);
            self.respawn_apple(Some(next_head));
            info!(
                "apple eaten at {next_head:?}, score {}, pending growth {}",
                self.score,
                self.snake.pending_growth()
            );
        }

        self.snake.advance(next_head);
        debug!("head moved to {next_head:?}, length {}", self.snake.len());

        if self.is_blocked() {
            info!(
                "snake blocked at length {} with score {}",
                self.snake.len(),
                self.score
            );
        }

        SnakeTick::Moved { ate_apple }
    }

    /// Adds one brick on a cell free of snake, bricks and apple.
    ///
    /// Returns the new brick, or `None` when the board has no free cell left.
    pub fn on_brick_tick(&mut self) -> Option<Position> {
        let mut excluded = self.snake_cells();
        excluded.extend(self.bricks.iter().copied());
        excluded.extend(self.apple);

        let Some(brick) = place_excluding(&mut self.rng, self.bounds, &excluded) else {
            debug!("board saturated, no brick placed");
            return None;
        };

        self.bricks.insert(brick);
        info!("brick placed at {brick:?}, {} bricks", self.bricks.len());
        Some(brick)
    }

    /// Handles a raw key code. Returns true when it was queued.
    pub fn on_input(&mut self, key_code: u32) -> bool {
        match key_to_direction(key_code) {
            Some(direction) => self.queue_direction(direction),
            None => false,
        }
    }

    /// Queues a turn for the next snake tick.
    ///
    /// Only one turn can be pending; later ones are dropped. Reversals of the
    /// current heading are rejected.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if !self.queued_direction.is_none() || direction.is_none() {
            return false;
        }

        if self.snake.direction().is_opposite(direction) {
            debug!(
                "rejected reversal {direction:?} while heading {:?}",
                self.snake.direction()
            );
            return false;
        }

        self.queued_direction = direction;
        true
    }

    /// Places a new apple on a cell free of snake and bricks.
    pub fn place_apple(&mut self) -> Option<Position> {
        self.respawn_apple(None)
    }

    fn respawn_apple(&mut self, entering: Option<Position>) -> Option<Position> {
        let mut excluded = self.snake_cells();
        excluded.extend(self.bricks.iter().copied());
        excluded.extend(entering);

        self.apple = place_excluding(&mut self.rng, self.bounds, &excluded);
        if self.apple.is_none() {
            debug!("no free cell left for an apple");
        }
        self.apple
    }

    /// Returns true when the snake has no queued alternative and its heading
    /// runs straight into a brick.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        if !self.queued_direction.is_none() {
            return false;
        }

        let Some(head) = self.snake.head() else {
            return false;
        };

        let heading = self.snake.direction();
        !heading.is_none() && self.bricks.contains(&head.apply_direction(heading, self.bounds))
    }

    /// Returns the final result once the snake is blocked.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_blocked() {
            return None;
        }

        if self.snake.len() >= self.settings.win_length {
            Some(Outcome::Win)
        } else {
            Some(Outcome::Lose)
        }
    }

    fn effective_heading(&self) -> Direction {
        if self.queued_direction.is_none() {
            self.snake.direction()
        } else {
            self.queued_direction
        }
    }

    fn snake_cells(&self) -> HashSet<Position> {
        self.snake.positions().collect()
    }

    /// Direction waiting for the next snake tick, `Direction::None` when empty.
    #[must_use]
    pub fn queued_direction(&self) -> Direction {
        self.queued_direction
    }

    /// Board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Timing and scoring values this game was built with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

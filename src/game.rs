use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{DEFAULT_HEADING, Settings};
use crate::fruit::Orchard;
use crate::grid::{Cell, GridModel};
use crate::heading::{Heading, Steering};
use crate::input::GameInput;
use crate::snake::{DeathCause, SnakeBody, TickOutcome};

/// How a cell should be painted.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SegmentRole {
    Head,
    Body,
}

/// Summary of one game tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub ate_fruit: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: SnakeBody,
    pub orchard: Orchard,
    pub tick_count: u64,
    pub fruits_eaten: u32,
    desired_heading: Heading,
    grid: GridModel,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with entropy-seeded fruit placement.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, mut rng: StdRng) -> Self {
        let grid = settings.grid;
        let snake = SnakeBody::spawn(grid, DEFAULT_HEADING);
        let orchard = Orchard::plant(&mut rng, grid, settings.fruit_count);

        Self {
            snake,
            orchard,
            tick_count: 0,
            fruits_eaten: 0,
            desired_heading: DEFAULT_HEADING,
            grid,
            rng,
        }
    }

    /// Applies one external input event.
    ///
    /// Steering is recorded only when it is perpendicular to the head's
    /// current axis; it takes effect on the next tick.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Steer(heading) => self.request_heading(heading),
            GameInput::Exit => {}
        }
    }

    fn request_heading(&mut self, heading: Heading) {
        if !self.is_alive() {
            return;
        }

        if Steering::of(self.snake.heading()).accepts(heading) {
            self.desired_heading = heading;
        } else {
            debug!("ignoring {heading:?}: head already travels on {:?}", heading.axis);
        }
    }

    /// Advances simulation by one gameplay tick; a no-op once dead.
    pub fn tick(&mut self) -> TickReport {
        if let Some(cause) = self.snake.death() {
            return TickReport {
                outcome: TickOutcome {
                    head: self.snake.head(),
                    death: Some(cause),
                },
                ate_fruit: false,
            };
        }

        self.tick_count += 1;
        let outcome = self.snake.move_toward(self.desired_heading);

        // Fruit is checked even on the fatal tick: a head that dies on a
        // fruit cell still eats it.
        let ate_fruit = self.orchard.take_at(outcome.head);
        if ate_fruit {
            self.snake.grow();
            self.fruits_eaten += 1;
            let replacement = self.orchard.replant(&mut self.rng, self.grid);
            debug!(
                "ate fruit at {:?}, length {}, replacement at {:?}",
                outcome.head,
                self.snake.len(),
                replacement.position
            );
        }

        if let Some(cause) = outcome.death {
            info!(
                "snake died ({}) at {:?} after {} ticks, length {}",
                describe_death(cause),
                outcome.head,
                self.tick_count,
                self.snake.len()
            );
        }

        TickReport { outcome, ate_fruit }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.snake.is_alive()
    }

    /// Heading the next tick will request.
    #[must_use]
    pub fn desired_heading(&self) -> Heading {
        self.desired_heading
    }

    #[must_use]
    pub fn grid(&self) -> GridModel {
        self.grid
    }

    /// Segments tail first so that the head is painted last.
    pub fn draw_order(&self) -> impl Iterator<Item = (Cell, SegmentRole)> + '_ {
        self.snake
            .segments()
            .iter()
            .enumerate()
            .rev()
            .map(|(index, segment)| {
                let role = if index == 0 {
                    SegmentRole::Head
                } else {
                    SegmentRole::Body
                };
                (segment.position, role)
            })
    }

    pub fn fruit_positions(&self) -> impl Iterator<Item = Cell> + '_ {
        self.orchard.positions()
    }
}

/// Human-readable death cause for logs and the game-over popup.
#[must_use]
pub fn describe_death(cause: DeathCause) -> &'static str {
    match cause {
        DeathCause::SelfCollision => "ran into itself",
        DeathCause::OutOfBounds => "left the field",
    }
}

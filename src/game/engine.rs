use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the head landed on the food this step
    pub ate_food: bool,
    /// Whether the snake gained a segment (false at capacity)
    pub grew: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with an entropy-seeded RNG
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state: one segment at the centre, moving right
    pub fn reset(&mut self) -> GameState {
        let block = self.config.block;
        let head = Position::new(
            (self.config.columns() / 2) * block,
            (self.config.rows() / 2) * block,
        );

        let snake = Snake::new(head, Direction::Right, self.config.max_length);
        let food = self.spawn_food();

        GameState::new(
            snake,
            food,
            self.config.width,
            self.config.height,
            block,
        )
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    grew: false,
                    collision_type: None,
                },
            };
        }

        if let Action::Move(new_direction) = action {
            if state.snake.direction.can_turn_to(new_direction) {
                debug!(from = ?state.snake.direction, to = ?new_direction, "turn");
                state.snake.direction = new_direction;
            }
        }

        state.snake.advance(state.block);
        state.steps += 1;

        if let Some(collision_type) = self.check_collision(state) {
            state.is_alive = false;

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    grew: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        let ate_food = state.snake.head() == state.food;
        let mut grew = false;

        if ate_food {
            grew = state.snake.grow();
            if grew {
                state.score += 1;
            }
            state.food = self.spawn_food();
            debug!(score = state.score, length = state.snake.len(), food = ?state.food, "ate food");
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                grew,
                collision_type: None,
            },
        }
    }

    /// Check whether the moved head ended the game
    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        if !state.is_playable(state.snake.head()) {
            return Some(CollisionType::Wall);
        }

        if state.snake.head_hits_body() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a random cell strictly inside the walls. The snake's body is not
    /// consulted, so food can land underneath it.
    fn spawn_food(&mut self) -> Position {
        let block = self.config.block;
        let x = (1 + self.rng.gen_range(0..self.config.columns() - 2)) * block;
        let y = (1 + self.rng.gen_range(0..self.config.rows() - 2)) * block;
        Position::new(x, y)
    }
}

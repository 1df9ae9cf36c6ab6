use anyhow::Result;
use macroquad::{
    input::is_quit_requested,
    text::Font,
    time::get_time,
    window::next_frame,
};
use tracing::info;

use crate::game::{Action, CollisionType, GameConfig, GameEngine, GameState, Variant};
use crate::input::{InputHandler, KeyAction, Steering};
use crate::metrics::{GameMetrics, format_summary};
use crate::render::Renderer;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Collision(CollisionType),
    Quit,
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    steering: Steering,
    variant: Variant,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, variant: Variant, seed: Option<u64>) -> Self {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.reset();
        let steering = Steering::new(state.snake.direction);

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            steering,
            variant,
            should_quit: false,
        }
    }

    /// Play one game to its end, then report it.
    ///
    /// Each tick drains input, steps once, presents the new frame, then keeps
    /// presenting it until the tick delay has passed. The banner follows
    /// whenever the variant has one, whichever way the game ended.
    pub async fn run(&mut self, font: Option<&Font>) -> Result<GameOutcome> {
        let tick = self.engine.config().tick_ms as f64 / 1000.0;

        let outcome = loop {
            let actions = self.input_handler.poll();
            self.handle_input(actions);
            if self.should_quit {
                break GameOutcome::Quit;
            }

            if let Some(collision) = self.update_game() {
                break GameOutcome::Collision(collision);
            }

            let presented_at = get_time();
            loop {
                self.renderer.draw_frame(&self.state);
                next_frame().await;
                if get_time() - presented_at >= tick {
                    break;
                }
            }
        };

        info!(
            outcome = ?outcome,
            score = self.state.score,
            length = self.state.snake.len(),
            steps = self.metrics.steps,
            foods = self.metrics.foods_eaten,
            time = %self.metrics.format_time(),
            "game over"
        );
        println!("{}", format_summary(self.state.score, self.variant));

        if let Some(font) = font.filter(|_| self.wants_banner()) {
            self.show_banner(font).await;
        }

        Ok(outcome)
    }

    fn handle_input(&mut self, actions: Vec<KeyAction>) {
        for action in actions {
            match action {
                KeyAction::Move(direction) => {
                    self.steering.request(direction);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Advance one step; returns the collision that ended the game, if any
    fn update_game(&mut self) -> Option<CollisionType> {
        let action: Action = self.steering.take();
        let result = self.engine.step(&mut self.state, action);

        self.steering.commit(self.state.snake.direction);
        self.metrics.on_step(result.info.ate_food);

        if result.terminated {
            result.info.collision_type
        } else {
            None
        }
    }

    fn wants_banner(&self) -> bool {
        self.variant.shows_banner()
    }

    async fn show_banner(&self, font: &Font) {
        let hold = self.engine.config().banner_hold_ms as f64 / 1000.0;
        let shown_at = get_time();

        while get_time() - shown_at < hold && !is_quit_requested() {
            self.renderer
                .draw_game_over(font, self.state.width, self.state.height);
            next_frame().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};

    fn mode() -> HumanMode {
        HumanMode::new(GameConfig::default(), Variant::Classic, Some(5))
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(mode.state.is_alive);
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.len(), 1);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut mode = mode();
        mode.handle_input(vec![KeyAction::Move(Direction::Up), KeyAction::Quit]);
        assert!(mode.should_quit);
    }

    #[test]
    fn test_banner_after_quit_too() {
        let mut classic = mode();
        classic.handle_input(vec![KeyAction::Quit]);
        assert!(classic.should_quit);
        assert!(classic.wants_banner());

        let large = HumanMode::new(
            GameConfig::for_variant(Variant::Large),
            Variant::Large,
            Some(5),
        );
        assert!(!large.wants_banner());
    }

    #[test]
    fn test_burst_cannot_reverse() {
        let mut mode = mode();
        mode.state.food = Position::new(20, 20);

        // right -> up -> left within one tick: the left press is rejected
        mode.handle_input(vec![
            KeyAction::Move(Direction::Up),
            KeyAction::Move(Direction::Left),
        ]);
        assert_eq!(mode.update_game(), None);
        assert_eq!(mode.state.snake.direction, Direction::Up);
        assert_eq!(mode.state.snake.head(), Position::new(200, 180));

        // Now moving vertically, left is honored
        mode.handle_input(vec![KeyAction::Move(Direction::Left)]);
        mode.update_game();
        assert_eq!(mode.state.snake.direction, Direction::Left);
    }

    #[test]
    fn test_update_reports_wall_collision() {
        let mut mode = mode();
        mode.state.food = Position::new(20, 20);

        let mut collision = None;
        for _ in 0..20 {
            collision = mode.update_game();
            if collision.is_some() {
                break;
            }
        }

        assert_eq!(collision, Some(CollisionType::Wall));
        assert_eq!(mode.metrics.steps, 9);
        assert_eq!(mode.state.score, 0);
    }
}

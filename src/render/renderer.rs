use macroquad::{
    color::Color,
    math::Rect,
    shapes::draw_rectangle,
    text::{Font, TextDimensions, TextParams, draw_text_ex, measure_text},
    window::clear_background,
};

use crate::game::{GameState, Position};

pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WALL: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const SNAKE: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const FOOD: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const BANNER_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);

pub const GAME_OVER_TEXT: &str = "Game Over Loser";
pub const BANNER_FONT_SIZE: u16 = 24;

/// One filled rectangle of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: Color,
}

impl FilledRect {
    fn new(x: i32, y: i32, w: i32, h: i32, color: Color) -> Self {
        Self {
            rect: Rect::new(x as f32, y as f32, w as f32, h as f32),
            color,
        }
    }

    fn cell(pos: Position, block: i32, color: Color) -> Self {
        Self::new(pos.x, pos.y, block, block, color)
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw list for one frame: walls, then snake, then food
    pub fn frame(&self, state: &GameState) -> Vec<FilledRect> {
        let (w, h, b) = (state.width, state.height, state.block);
        let mut rects = Vec::with_capacity(5 + state.snake.len());

        rects.push(FilledRect::new(0, 0, w, b, WALL));
        rects.push(FilledRect::new(0, h - b, w, b, WALL));
        rects.push(FilledRect::new(0, 0, b, h, WALL));
        rects.push(FilledRect::new(w - b, 0, b, h, WALL));

        rects.extend(
            state
                .snake
                .segments()
                .iter()
                .map(|&segment| FilledRect::cell(segment, b, SNAKE)),
        );

        rects.push(FilledRect::cell(state.food, b, FOOD));
        rects
    }

    pub fn draw_frame(&self, state: &GameState) {
        clear_background(BACKGROUND);
        for FilledRect { rect, color } in self.frame(state) {
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        }
    }

    /// Blank screen with the game-over text centred on it
    pub fn draw_game_over(&self, font: &Font, width: i32, height: i32) {
        clear_background(BACKGROUND);

        let dims = measure_text(GAME_OVER_TEXT, Some(font), BANNER_FONT_SIZE, 1.0);
        let (x, baseline) = banner_origin(&dims, width as f32, height as f32);

        draw_text_ex(
            GAME_OVER_TEXT,
            x,
            baseline,
            TextParams {
                font: Some(font),
                font_size: BANNER_FONT_SIZE,
                color: BANNER_TEXT,
                ..Default::default()
            },
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Left edge and baseline that centre a text box in the window.
/// macroquad draws text from its baseline, `offset_y` below the box top.
pub fn banner_origin(dims: &TextDimensions, width: f32, height: f32) -> (f32, f32) {
    let left = ((width - dims.width) / 2.0).floor();
    let top = ((height - dims.height) / 2.0).floor();
    (left, top + dims.offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};

    fn state() -> GameState {
        let snake = Snake::from_segments(
            vec![
                Position::new(200, 200),
                Position::new(180, 200),
                Position::new(160, 200),
            ],
            Direction::Right,
            1000,
        );
        GameState::new(snake, Position::new(60, 80), 400, 400, 20)
    }

    #[test]
    fn test_walls() {
        let rects = Renderer::new().frame(&state());

        let walls: Vec<Rect> = rects
            .iter()
            .filter(|r| r.color == WALL)
            .map(|r| r.rect)
            .collect();
        assert_eq!(
            walls,
            vec![
                Rect::new(0.0, 0.0, 400.0, 20.0),
                Rect::new(0.0, 380.0, 400.0, 20.0),
                Rect::new(0.0, 0.0, 20.0, 400.0),
                Rect::new(380.0, 0.0, 20.0, 400.0),
            ]
        );
    }

    #[test]
    fn test_snake_and_food() {
        let state = state();
        let rects = Renderer::new().frame(&state);

        let snake: Vec<&FilledRect> = rects.iter().filter(|r| r.color == SNAKE).collect();
        assert_eq!(snake.len(), state.snake.len());
        assert_eq!(snake[0].rect, Rect::new(200.0, 200.0, 20.0, 20.0));

        let food = rects.last().expect("food is drawn last");
        assert_eq!(food.color, FOOD);
        assert_eq!(food.rect, Rect::new(60.0, 80.0, 20.0, 20.0));
        assert_eq!(rects.len(), 4 + 3 + 1);
    }

    #[test]
    fn test_banner_is_centred() {
        let dims = TextDimensions {
            width: 180.0,
            height: 24.0,
            offset_y: 18.0,
        };

        let (x, baseline) = banner_origin(&dims, 400.0, 400.0);
        assert_eq!(x, 110.0);
        assert_eq!(baseline, 188.0 + 18.0);

        let (x, _) = banner_origin(&dims, 800.0, 800.0);
        assert_eq!(x, 310.0);
    }
}

use super::action::Direction;

/// A grid-aligned position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one block in a direction
    pub fn stepped(&self, direction: Direction, block: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * block, dy * block)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied segments, head at index 0
    segments: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    max_length: usize,
}

impl Snake {
    /// Create a one-segment snake
    pub fn new(head: Position, direction: Direction, max_length: usize) -> Self {
        let mut segments = Vec::with_capacity(max_length.min(64));
        segments.push(head);
        Self {
            segments,
            direction,
            max_length,
        }
    }

    /// Build a snake from explicit segments (head first)
    #[cfg(test)]
    pub fn from_segments(segments: Vec<Position>, direction: Direction, max_length: usize) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        assert!(segments.len() <= max_length, "snake exceeds its capacity");
        Self {
            segments,
            direction,
            max_length,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// All occupied segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.segments[1..]
    }

    /// True if the head sits on any other segment
    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body_segments().contains(&head)
    }

    /// Shift every segment onto its predecessor, then advance the head one
    /// block in the current direction. The old tail is dropped.
    pub fn advance(&mut self, block: i32) {
        let len = self.segments.len();
        self.segments.copy_within(0..len - 1, 1);
        self.segments[0] = self.segments[0].stepped(self.direction, block);
    }

    /// Add one segment on top of the tail. It separates from the tail on
    /// the next `advance`. Returns false at capacity.
    pub fn grow(&mut self) -> bool {
        if self.segments.len() >= self.max_length {
            return false;
        }
        let tail = self.tail();
        self.segments.push(tail);
        true
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit the wall band
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub width: i32,
    pub height: i32,
    pub block: i32,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, width: i32, height: i32, block: i32) -> Self {
        Self {
            snake,
            food,
            width,
            height,
            block,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Check if a position lies inside the walls
    pub fn is_playable(&self, pos: Position) -> bool {
        pos.x >= self.block
            && pos.x < self.width - self.block
            && pos.y >= self.block
            && pos.y < self.height - self.block
    }
}

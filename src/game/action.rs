/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// True for Up and Down
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// A turn is honored only onto the other axis: vertical requests while
    /// moving horizontally and horizontal requests while moving vertically.
    pub fn can_turn_to(&self, other: Direction) -> bool {
        self.is_vertical() != other.is_vertical()
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Action applied at the start of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Turn toward a direction (ignored if it is on the current axis)
    Move(Direction),
    /// Keep the current direction
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::Move).unwrap_or(Action::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_turns_only_across_axis() {
        // Moving horizontally: only vertical turns are honored
        assert!(Direction::Right.can_turn_to(Direction::Up));
        assert!(Direction::Right.can_turn_to(Direction::Down));
        assert!(!Direction::Right.can_turn_to(Direction::Left));
        assert!(!Direction::Right.can_turn_to(Direction::Right));

        // Moving vertically: "down" while dy != 0 never changes anything
        assert!(!Direction::Up.can_turn_to(Direction::Down));
        assert!(!Direction::Down.can_turn_to(Direction::Down));
        assert!(Direction::Down.can_turn_to(Direction::Left));
    }
}

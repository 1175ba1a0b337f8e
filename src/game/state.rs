use super::action::Direction;

/// A position on the game grid, in cell coordinates
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

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Desired body length; the body grows toward it on eat and is
    /// trimmed toward it on every other move
    pub target_length: usize,
}

impl Snake {
    /// Create a new snake as a single head cell that will grow toward
    /// `target_length` as it moves
    pub fn new(head: Position, direction: Direction, target_length: usize) -> Self {
        Self {
            body: vec![head],
            direction,
            target_length,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Push a new head to the front of the body
    pub fn push_head(&mut self, pos: Position) {
        self.body.insert(0, pos);
    }

    /// Trim the tail until the body is within the target length
    pub fn trim_to_target(&mut self) {
        while self.body.len() > self.target_length {
            self.body.pop();
        }
    }

    /// Increase the target length by one segment
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body[1..].contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit an obstacle cell
    Obstacle,
    /// Snake hit itself
    SelfCollision,
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Engine created, no round started yet
    Ready,
    /// Round in progress
    Running,
    /// Frozen; resumable
    Paused,
    /// Terminal; only reset() leaves this state
    Over,
}

/// Complete state of one round; also serves as the render snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub obstacles: Vec<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    /// External ticks per game advance for the current round
    pub speed_divisor: u32,
    pub round_state: RoundState,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Position,
        obstacles: Vec<Position>,
        grid_width: usize,
        grid_height: usize,
        speed_divisor: u32,
    ) -> Self {
        Self {
            snake,
            food,
            obstacles,
            grid_width,
            grid_height,
            score: 0,
            speed_divisor,
            round_state: RoundState::Running,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position holds an obstacle
    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));

        assert_eq!(
            pos.moved_in_direction(Direction::Right),
            Position::new(6, 5)
        );
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_starts_as_single_cell() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 4);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.target_length, 4);
    }

    #[test]
    fn test_snake_grows_toward_target() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.push_head(Position::new(6, 5));
        snake.trim_to_target();
        assert_eq!(snake.len(), 2);

        snake.push_head(Position::new(7, 5));
        snake.trim_to_target();
        assert_eq!(snake.len(), 3);

        // At target length the tail is dropped on each move
        snake.push_head(Position::new(8, 5));
        snake.trim_to_target();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(8, 5));
        assert!(!snake.body.contains(&Position::new(5, 5)));
    }

    #[test]
    fn test_grow_defers_trim() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 1);
        snake.grow();
        snake.push_head(Position::new(6, 5));
        snake.trim_to_target();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_collision_detection() {
        let mut snake = Snake::new(Position::new(4, 5), Direction::Right, 3);
        snake.push_head(Position::new(5, 5));
        snake.push_head(Position::new(6, 5));

        assert!(!snake.collides_with_body(Position::new(6, 5))); // head
        assert!(snake.collides_with_body(Position::new(5, 5))); // body
        assert!(snake.collides_with_body(Position::new(4, 5))); // tail
        assert!(!snake.collides_with_body(Position::new(9, 9))); // empty
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 4),
            Position::new(8, 8),
            Vec::new(),
            20,
            20,
            10,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, -1)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_obstacle_lookup() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 4),
            Position::new(8, 8),
            vec![Position::new(2, 3), Position::new(7, 7)],
            20,
            20,
            10,
        );

        assert!(state.is_obstacle(Position::new(2, 3)));
        assert!(state.is_obstacle(Position::new(7, 7)));
        assert!(!state.is_obstacle(Position::new(8, 8)));
    }
}

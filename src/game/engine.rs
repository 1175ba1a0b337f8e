use super::{
    action::Direction,
    config::{Difficulty, GameConfig},
    events::GameEvent,
    state::{CollisionType, GameState, Position, RoundState, Snake},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Result of one external tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Whether the game advanced this tick (false while throttled,
    /// paused, or after game over)
    pub advanced: bool,
    /// Collision that ended the round on this tick, if any
    pub collision: Option<CollisionType>,
    /// Events produced by this tick, in order
    pub events: Vec<GameEvent>,
}

impl TickResult {
    fn idle() -> Self {
        Self {
            advanced: false,
            collision: None,
            events: Vec::new(),
        }
    }
}

/// The game engine: owns all round state and advances it one discrete
/// step per effective tick
///
/// Driven entirely from outside: a tick source calls [`tick`], an input
/// source calls [`set_direction`] / [`pause`] / [`resume`] / [`reset`].
/// The engine is synchronous and has no event-loop dependency, so it can
/// run headlessly.
///
/// [`tick`]: GameEngine::tick
/// [`set_direction`]: GameEngine::set_direction
/// [`pause`]: GameEngine::pause
/// [`resume`]: GameEngine::resume
/// [`reset`]: GameEngine::reset
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    /// Frames seen since the last game advance
    tick_count: u32,
    /// Latest valid direction request, consumed by the next effective tick
    pending_direction: Option<Direction>,
    /// High score known to the engine; seeded by the caller from its store
    high_score: u32,
}

impl GameEngine {
    /// Create a new engine with an OS-seeded random source
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Create a new engine with a fixed seed, for deterministic runs
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, rng: StdRng) -> Self {
        let placeholder = GameState::new(
            Snake::new(Position::new(0, 0), Direction::Right, 1),
            Position::new(0, 0),
            Vec::new(),
            config.grid_width,
            config.grid_height,
            config.start_speed_divisor,
        );

        let mut engine = Self {
            config,
            rng,
            state: placeholder,
            tick_count: 0,
            pending_direction: None,
            high_score: 0,
        };

        // Show a real board before the first round starts
        engine.state = engine.build_round();
        engine.state.round_state = RoundState::Ready;
        engine
    }

    /// Current round state, also the render snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// High score known to the engine
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seed the high score from the persistence store; the engine only
    /// compares against it and flags new highs on game over
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    /// Apply a difficulty preset to subsequent resets
    ///
    /// Has no effect on the round currently in progress.
    pub fn configure(&mut self, difficulty: Difficulty) {
        self.config.start_speed_divisor = difficulty.speed_divisor();
        self.config.obstacles_enabled = difficulty.has_obstacles();
    }

    /// Start a fresh round; callable at any time
    pub fn reset(&mut self) {
        self.state = self.build_round();
        self.tick_count = 0;
        self.pending_direction = None;
    }

    /// Buffer a direction change for the next game advance
    ///
    /// Ignored if the round is not running or the requested direction is
    /// anti-parallel to the current motion vector. At most one pending
    /// direction is held; the latest valid call wins.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.round_state != RoundState::Running {
            return;
        }
        if self.state.snake.direction.is_opposite(direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Freeze the board; only valid while running
    pub fn pause(&mut self) {
        if self.state.round_state == RoundState::Running {
            self.state.round_state = RoundState::Paused;
        }
    }

    /// Unfreeze the board; only valid while paused
    pub fn resume(&mut self) {
        if self.state.round_state == RoundState::Paused {
            self.state.round_state = RoundState::Running;
        }
    }

    /// Advance the game by one external tick
    ///
    /// The caller invokes this at a steady cadence (e.g. once per display
    /// refresh); the engine downsamples internally so that one game
    /// advance happens every `speed_divisor` ticks. Runs to completion:
    /// no partial state is ever observable between ticks.
    pub fn tick(&mut self) -> TickResult {
        // Paused/Over/Ready freeze the board, counter included
        if self.state.round_state != RoundState::Running {
            return TickResult::idle();
        }

        self.tick_count += 1;
        if self.tick_count < self.state.speed_divisor {
            return TickResult::idle();
        }
        self.tick_count = 0;

        let mut events = Vec::new();

        if let Some(direction) = self.pending_direction.take() {
            self.state.snake.direction = direction;
        }

        let new_head = self
            .state
            .snake
            .head()
            .moved_in_direction(self.state.snake.direction);

        // Wall check runs before the head is pushed: on a wall death the
        // body is left exactly as it was rendered last tick
        if !self.state.is_in_bounds(new_head) {
            return self.end_round(CollisionType::Wall, events);
        }

        self.state.snake.push_head(new_head);

        // Obstacle and self checks run against the pre-trim body
        if self.state.is_obstacle(new_head) {
            return self.end_round(CollisionType::Obstacle, events);
        }

        if self.state.snake.collides_with_body(new_head) {
            return self.end_round(CollisionType::SelfCollision, events);
        }

        if new_head == self.state.food {
            self.state.snake.grow();
            self.state.score += 1;
            events.push(GameEvent::Eaten {
                score: self.state.score,
            });

            // Progressive speed: one notch faster at every milestone,
            // down to the floor
            if self.state.score % self.config.speedup_interval == 0
                && self.state.speed_divisor > self.config.speed_floor
            {
                self.state.speed_divisor -= 1;
            }

            self.respawn_food();
        } else {
            self.state.snake.trim_to_target();
        }

        TickResult {
            advanced: true,
            collision: None,
            events,
        }
    }

    fn end_round(&mut self, collision: CollisionType, mut events: Vec<GameEvent>) -> TickResult {
        self.state.round_state = RoundState::Over;

        let final_score = self.state.score;
        let new_high_score = final_score > self.high_score;
        if new_high_score {
            self.high_score = final_score;
        }
        events.push(GameEvent::GameOver {
            final_score,
            new_high_score,
        });

        TickResult {
            advanced: true,
            collision: Some(collision),
            events,
        }
    }

    fn build_round(&mut self) -> GameState {
        let start = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(start, Direction::Right, self.config.initial_target_length);

        // Food first, avoiding the snake; then obstacles, avoiding both.
        // Rejection sampling: the board is assumed to never be fully
        // occupied at playable sizes, so no retry cap.
        let food = loop {
            let cell = self.random_cell();
            if !snake.body.contains(&cell) {
                break cell;
            }
        };

        let obstacles = if self.config.obstacles_enabled {
            self.generate_obstacles(&snake, food)
        } else {
            Vec::new()
        };

        GameState::new(
            snake,
            food,
            obstacles,
            self.config.grid_width,
            self.config.grid_height,
            self.config.start_speed_divisor,
        )
    }

    fn generate_obstacles(&mut self, snake: &Snake, food: Position) -> Vec<Position> {
        let mut obstacles = Vec::with_capacity(self.config.obstacle_count);
        while obstacles.len() < self.config.obstacle_count {
            let cell = self.random_cell();
            if snake.body.contains(&cell) || cell == food || obstacles.contains(&cell) {
                continue;
            }
            obstacles.push(cell);
        }
        obstacles
    }

    fn respawn_food(&mut self) {
        loop {
            let cell = self.random_cell();
            if !self.state.snake.body.contains(&cell) && !self.state.obstacles.contains(&cell) {
                self.state.food = cell;
                return;
            }
        }
    }

    fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height) as i32;
        Position::new(x, y)
    }
}

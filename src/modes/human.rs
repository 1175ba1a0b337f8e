use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameEvent, RoundState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::score::{ScoreStore, HIGH_SCORE_KEY};

/// Interactive play: wires the tick source, keyboard, renderer, and
/// score store to the engine
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    store: Box<dyn ScoreStore>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(
        config: GameConfig,
        store: Box<dyn ScoreStore>,
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };

        let high_score = store
            .get(HIGH_SCORE_KEY)
            .context("Failed to load high score")?
            .unwrap_or(0);
        engine.set_high_score(high_score);
        engine.reset();

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            store,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Tick at display cadence (~60 Hz); the engine downsamples via
        // its speed divisor, so game speed is independent of this rate
        let tick_interval = Duration::from_millis(16);
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let high_score = self.engine.high_score();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), high_score, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    self.engine.set_direction(direction);
                }
                KeyAction::TogglePause => {
                    self.toggle_pause();
                }
                KeyAction::Restart => {
                    self.restart_round();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) -> Result<()> {
        let result = self.engine.tick();

        for event in result.events {
            match event {
                GameEvent::Eaten { .. } => {
                    // Sound/FX hook; the TUI shows the score already
                }
                GameEvent::GameOver {
                    final_score,
                    new_high_score,
                } => {
                    self.metrics.on_round_over();
                    if new_high_score {
                        self.store
                            .set(HIGH_SCORE_KEY, final_score)
                            .context("Failed to persist high score")?;
                    }
                }
            }
        }

        Ok(())
    }

    fn toggle_pause(&mut self) {
        match self.engine.state().round_state {
            RoundState::Running => self.engine.pause(),
            RoundState::Paused => self.engine.resume(),
            _ => {}
        }
    }

    fn restart_round(&mut self) {
        self.engine.reset();
        self.metrics.on_round_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MemoryStore;

    #[test]
    fn test_mode_seeds_high_score_from_store() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, 23).unwrap();

        let mode = HumanMode::new(GameConfig::default(), Box::new(store), Some(1)).unwrap();
        assert_eq!(mode.engine.high_score(), 23);
        assert_eq!(mode.engine.state().round_state, RoundState::Running);
        assert_eq!(mode.engine.state().score, 0);
    }

    #[test]
    fn test_restart_starts_fresh_round() {
        let store = MemoryStore::new();
        let mut mode = HumanMode::new(GameConfig::default(), Box::new(store), Some(1)).unwrap();

        mode.engine.pause();
        mode.restart_round();

        assert_eq!(mode.engine.state().round_state, RoundState::Running);
        assert_eq!(mode.engine.state().score, 0);
    }

    #[test]
    fn test_pause_toggle() {
        let store = MemoryStore::new();
        let mut mode = HumanMode::new(GameConfig::default(), Box::new(store), Some(1)).unwrap();

        mode.toggle_pause();
        assert_eq!(mode.engine.state().round_state, RoundState::Paused);
        mode.toggle_pause();
        assert_eq!(mode.engine.state().round_state, RoundState::Running);
    }
}

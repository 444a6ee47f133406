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

use crate::game::{GridConfig, GridModel, Position, SimulationEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Keyboard-driven play: a tokio loop that ticks the engine on a fixed
/// timer, feeds it key events as they arrive, and redraws on its own
/// cadence. The core never sees any of this machinery.
pub struct HumanMode {
    engine: SimulationEngine,
    model: GridModel,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GridConfig) -> Self {
        let mut engine = SimulationEngine::new(config);
        let model = engine.initialize(Self::start_position(&config));

        Self {
            engine,
            model,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    fn start_position(config: &GridConfig) -> Position {
        Position::new(
            (config.grid_width() / 2) as i32,
            (config.grid_height() / 2) as i32,
        )
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

        // Simulation ticks every 200 ms, matching the classic pace
        let tick_interval = Duration::from_millis(200);
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

                // Simulation tick; stepping a terminal model is harmless
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.model, &self.metrics);
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
                KeyAction::Steer(heading) => {
                    // Applied right away; the engine rejects reversals and
                    // the last accepted request before a tick wins
                    self.engine.set_heading(&mut self.model, heading);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let was_terminal = self.model.is_terminal();

        self.engine.step(&mut self.model);

        if self.model.is_terminal() && !was_terminal {
            self.metrics.on_game_over(self.model.score());
        }
    }

    fn reset_game(&mut self) {
        let start = Position::new(
            (self.model.grid_width() / 2) as i32,
            (self.model.grid_height() / 2) as i32,
        );
        self.model = self.engine.initialize(start);
        self.metrics.on_game_start();
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
    use crate::game::Heading;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GridConfig::default());
        assert!(!mode.model.is_terminal());
        assert_eq!(mode.model.score(), 0);
        assert_eq!(mode.model.head(), Position::new(12, 12));
    }

    #[test]
    fn test_game_reset() {
        let mut mode = HumanMode::new(GridConfig::default());

        // End the current game against the right wall, then restart
        for _ in 0..30 {
            mode.update_game();
        }
        assert!(mode.model.is_terminal());

        mode.reset_game();
        assert!(!mode.model.is_terminal());
        assert_eq!(mode.model.score(), 0);
        assert_eq!(mode.model.head(), Position::new(12, 12));
    }

    #[test]
    fn test_game_over_recorded_once() {
        let mut mode = HumanMode::new(GridConfig::default());

        // Drive the snake into the right wall
        mode.engine.set_heading(&mut mode.model, Heading::Right);
        for _ in 0..30 {
            mode.update_game();
        }

        assert!(mode.model.is_terminal());
        assert_eq!(mode.metrics.games_played, 1);
    }
}

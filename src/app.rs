use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::Config;
use crate::game::{Game, GameEvent, GameState};
use crate::layout::{hit_test, play_area, target_rect};
use crate::runtime::BlinkEvent;
use crate::session::{SessionConfig, SessionSummary};

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Binds terminal input to the game and remembers the frame size for hit testing
#[derive(Debug)]
pub struct App {
    pub game: Game,
    pub config: Config,
    pub session: SessionConfig,
    pub frame: Rect,
    pub last_summary: Option<SessionSummary>,
    /// game events seen while handling the most recent input, in order
    pub last_events: Vec<GameEvent>,
}

impl App {
    pub fn new(config: Config, frame: Rect) -> Self {
        Self::with_game(Game::from_config(&config), config, frame)
    }

    pub fn with_game(game: Game, config: Config, frame: Rect) -> Self {
        Self {
            session: SessionConfig::from(&config),
            game,
            config,
            frame,
            last_summary: None,
            last_events: vec![],
        }
    }

    /// Where the target currently sits on screen
    pub fn target_area(&self) -> Rect {
        target_rect(play_area(self.frame), self.game.target())
    }

    pub fn handle_event(&mut self, event: BlinkEvent, now: Instant) -> Flow {
        let flow = match event {
            BlinkEvent::Key(key) => self.on_key(key, now),
            BlinkEvent::Mouse(mouse) => {
                self.on_mouse(mouse, now);
                Flow::Continue
            }
            BlinkEvent::Resize(w, h) => {
                self.frame = Rect::new(0, 0, w, h);
                Flow::Continue
            }
            BlinkEvent::Tick => Flow::Continue,
        };

        // every pass through the loop polls the relocation timer
        self.game.on_tick(now);
        self.observe();

        flow
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit
            }
            KeyCode::Char('r') => self.game.reset(),
            KeyCode::Char(' ') | KeyCode::Enter => match self.game.state() {
                GameState::Initial => self.game.start_at(now),
                // a finished game goes back through Initial before the next one
                GameState::Completed => {
                    self.game.reset();
                    self.game.start_at(now);
                }
                GameState::Playing if self.config.keyboard_taps => self.game.tap_at(now),
                GameState::Playing => tracing::trace!("keyboard taps disabled"),
            },
            _ => {}
        }

        Flow::Continue
    }

    fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match self.game.state() {
            GameState::Initial => self.game.start_at(now),
            GameState::Playing => {
                if hit_test(self.target_area(), mouse.column, mouse.row) {
                    self.game.tap_at(now);
                } else {
                    tracing::trace!(column = mouse.column, row = mouse.row, "missed target");
                }
            }
            GameState::Completed => {}
        }
    }

    fn observe(&mut self) {
        self.last_events = self.game.drain_events();
        for event in &self.last_events {
            match event {
                GameEvent::Completed => {
                    self.last_summary = SessionSummary::from_game(&self.game);
                    if let Some(summary) = &self.last_summary {
                        tracing::info!("{}", summary.one_line());
                    }
                }
                other => tracing::trace!(event = ?other, "game event"),
            }
        }
    }
}

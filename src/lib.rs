// Library surface for headless/integration tests and reuse.
// Rendering stays in the binary; everything here is terminal-free except
// the input types and geometry used for hit testing.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod game;
pub mod layout;
pub mod logging;
pub mod progress;
pub mod round_timer;
pub mod runtime;
pub mod session;
pub mod target;
pub mod time_series;
pub mod util;

pub use error::{BlinkError, Result};
pub use game::{Game, GameEvent, GameState};

mod ui;

use blink::{
    app::{App, Flow},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging::init_logging,
    runtime::{ChannelEventSource, Runner},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Instant,
};

/// reaction-time game for the terminal: hit the target, beat your average
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A reaction-time game for the terminal. A target jumps around the screen; click it as fast as you can (or pass --keyboard and hit space) for a fixed number of rounds and see your per-round latency, best round and average."
)]
pub struct Cli {
    /// number of rounds per game
    #[clap(short = 'r', long)]
    rounds: Option<usize>,

    /// milliseconds between automatic target jumps while a game is running
    #[clap(short = 'i', long)]
    interval_ms: Option<u64>,

    /// event loop tick in milliseconds
    #[clap(long)]
    tick_ms: Option<u64>,

    /// let space/enter tap the target without aiming (mouse clicks still work)
    #[clap(short = 'k', long)]
    keyboard: bool,

    /// config file to read settings from (defaults to the platform config dir)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Command line flags win over whatever the config file says
    fn apply(&self, base: Config) -> Config {
        Config {
            rounds: self.rounds.unwrap_or(base.rounds),
            relocation_interval_ms: self.interval_ms.unwrap_or(base.relocation_interval_ms),
            tick_rate_ms: self.tick_ms.unwrap_or(base.tick_rate_ms),
            keyboard_taps: self.keyboard || base.keyboard_taps,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = cli.config_store();
    let config = cli.apply(store.load());
    config.validate()?;

    if cli.save_config {
        store.save(&config)?;
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(log_dir) = AppDirs::log_dir() {
        if let Err(e) = init_logging(&log_dir) {
            eprintln!("warning: {e}; continuing without logs");
        }
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, Rect::default());
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    if let Some(summary) = &app.last_summary {
        println!("{}", summary.one_line());
    }

    Ok(())
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(ChannelEventSource::crossterm(), app.config.tick_rate());

    loop {
        terminal.draw(|f| {
            // hit testing must use the same geometry as the last frame drawn
            app.frame = f.area();
            ui::draw(app, f);
        })?;

        if app.handle_event(runner.step(), Instant::now()) == Flow::Quit {
            break;
        }
    }

    tracing::info!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["blink"]);

        assert_eq!(cli.rounds, None);
        assert_eq!(cli.interval_ms, None);
        assert_eq!(cli.tick_ms, None);
        assert_eq!(cli.config, None);
        assert!(!cli.keyboard);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_rounds() {
        let cli = Cli::parse_from(["blink", "-r", "8"]);
        assert_eq!(cli.rounds, Some(8));

        let cli = Cli::parse_from(["blink", "--rounds", "3"]);
        assert_eq!(cli.rounds, Some(3));
    }

    #[test]
    fn test_cli_interval() {
        let cli = Cli::parse_from(["blink", "-i", "1500"]);
        assert_eq!(cli.interval_ms, Some(1500));

        let cli = Cli::parse_from(["blink", "--interval-ms", "2000"]);
        assert_eq!(cli.interval_ms, Some(2000));
    }

    #[test]
    fn test_cli_rejects_non_numeric_rounds() {
        assert!(Cli::try_parse_from(["blink", "--rounds", "five"]).is_err());
    }

    #[test]
    fn test_apply_overrides_only_given_flags() {
        let cli = Cli::parse_from(["blink", "--rounds", "7"]);
        let base = Config {
            rounds: 5,
            relocation_interval_ms: 2500,
            tick_rate_ms: 50,
            keyboard_taps: false,
        };

        let cfg = cli.apply(base);
        assert_eq!(cfg.rounds, 7);
        assert_eq!(cfg.relocation_interval_ms, 2500);
        assert_eq!(cfg.tick_rate_ms, 50);
        assert!(!cfg.keyboard_taps);
    }

    #[test]
    fn test_keyboard_flag_enables_keyboard_taps() {
        let cli = Cli::parse_from(["blink", "--keyboard"]);
        assert!(cli.keyboard);
        assert!(cli.apply(Config::default()).keyboard_taps);

        // a config file that already allows it is not switched off by omission
        let cli = Cli::parse_from(["blink"]);
        let base = Config {
            keyboard_taps: true,
            ..Config::default()
        };
        assert!(cli.apply(base).keyboard_taps);

        assert!(Cli::parse_from(["blink", "-k"]).keyboard);
    }

    #[test]
    fn test_config_store_uses_given_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let cli = Cli::parse_from(["blink", "-c", path.to_str().unwrap()]);

        let store = cli.config_store();
        assert_eq!(store.path(), path.as_path());
        store.save(&Config::default()).unwrap();
        assert!(path.exists());
    }
}

mod actions;
mod app;
mod input;
mod view;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io::{self, stdout, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const DEFAULT_ASSETS_DIR: &str = "assets";
const LOG_FILE_ENV: &str = "POKERSLOTS_LOG_FILE";
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub seed: Option<u64>,
    pub assets: Option<PathBuf>,
}

impl LaunchOptions {
    pub fn assets_dir(&self) -> PathBuf {
        self.assets
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
    }
}

pub fn run(options: LaunchOptions) -> Result<()> {
    init_logging()?;

    // Config is validated before the terminal is touched so a bad asset
    // directory fails with a readable error.
    let mut app = App::bootstrap(&options)?;

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    stdout
        .execute(EnableMouseCapture)
        .context("enable mouse capture")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args);
    run(options)
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut seed = std::env::var("POKERSLOTS_SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok());
    let mut assets = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--assets" | "-a" => {
                if let Some(value) = args.get(idx + 1) {
                    assets = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    LaunchOptions { seed, assets }
}

/// The terminal is ours while running, so logs only go somewhere when a
/// file is named.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("create log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_frame = Instant::now();
    while !app.should_quit {
        let completed = terminal.draw(|frame| view::draw(frame, app))?;
        app.surface = completed.area;

        let deadline = last_frame + FRAME;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let action = match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => input::map_key(key),
                CEvent::Mouse(mouse) => input::map_mouse(mouse),
                _ => continue,
            };
            actions::dispatch(app, action);
        }

        let now = Instant::now();
        let delta_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;
        app.on_frame(delta_ms);
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "pokerslots-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}

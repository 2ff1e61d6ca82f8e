use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use fastfingers::{
    app::App,
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    logging,
    passage::PASSAGE,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    session::SessionConfig,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tracing::{info, warn};

/// timed word-by-word typing practice in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the passage word by word against a countdown. Space submits the current word; each word is scored correct or incorrect."
)]
pub struct Cli {
    /// number of seconds to run test (defaults to the saved config, then 60)
    #[clap(short = 's', long)]
    number_of_secs: Option<u64>,

    /// save the effective number of seconds as the new default
    #[clap(long)]
    remember: bool,

    /// write logs to this file instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        if let Err(err) = logging::init(&path) {
            eprintln!("warning: running without logs: {err}");
        }
    }

    let store = FileConfigStore::new();
    let config = store.load().with_duration(cli.number_of_secs);
    if cli.remember {
        store.save(&config)?;
        info!(path = %store.path().display(), "saved config");
    }
    info!(duration_secs = config.duration_secs, "starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(SessionConfig::new(PASSAGE, config.duration_secs));
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        warn!(%err, "exiting on error");
    } else {
        info!("exiting");
    }
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    runner.run(app, |app| {
        terminal.draw(|f| f.render_widget(app, f.area()))?;
        Ok(())
    })?;

    Ok(())
}

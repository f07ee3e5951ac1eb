mod app;
mod args;
mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use zettel_config::Config;
use zettel_engine::{Zettel, ZettelFile, io, render::html};

use crate::app::App;
use crate::args::{Command, parse_args, usage};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("zettel");

    match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(Command::Help) => {
            println!("{}", usage(program));
            Ok(())
        }
        Ok(Command::Render { file }) => render(&file),
        Ok(Command::Browse { notes_path }) => browse(program, notes_path),
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    }
}

/// Print one zettel file as HTML
fn render(path: &Path) -> Result<()> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let zettel = Zettel::parse(ZettelFile::new(RelativePathBuf::from(name)), body);
    println!("{}", html::render_zettel(&zettel));
    Ok(())
}

fn browse(program: &str, cli_path: Option<PathBuf>) -> Result<()> {
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        // A broken config only matters when it is the sole source of the path
        Err(e) if cli_path.is_some() => {
            log::warn!("ignoring config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };

    let from_config = cli_path.is_none();
    let notes_path = match (cli_path, &config) {
        (Some(path), _) => path,
        (None, Some(config)) => config.notes_path.clone(),
        (None, None) => {
            eprintln!("Error: No notes path provided and no config file found");
            eprintln!("{}", usage(program));
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    // Load before taking over the screen so load warnings stay readable
    let mut app = App::new(notes_path, config.as_ref())?;
    log::info!("loaded {} zettels", app.zettels.len());

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| view::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.on_key(key.code)
        {
            return Ok(());
        }
    }
}

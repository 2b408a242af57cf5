use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use anyhow::Context;
use board_logging::{board_debug, board_info, board_warn};
use clap::Parser;
use jobboard_core::{update, AppState, FilterState, Language, Msg};
use jobboard_engine::load_feed;

use super::cli::Cli;
use super::effects::EffectRunner;
use super::persistence::{load_session, save_session};
use super::ui::commands::{parse_command, Command};
use super::ui::render::{render, render_options, HELP};

/// Everything the main loop reacts to, in arrival order.
pub enum Input {
    Line(String),
    Engine(Msg),
    Eof,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    board_logging::initialize(cli.log.into(), cli.log_level());

    let rows = load_feed(&cli.feed)
        .with_context(|| format!("failed to load job feed {:?}", cli.feed))?;

    let session = if cli.no_session {
        None
    } else {
        load_session(&cli.state_dir)
    };
    let language = match cli.language.as_deref() {
        Some(code) => Language::from_code(code).unwrap_or_else(|| {
            board_warn!("Unknown language '{}', using English", code);
            Language::default()
        }),
        None => session
            .as_ref()
            .and_then(|s| s.language)
            .unwrap_or_default(),
    };

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(cli.details_settings(), input_tx.clone())
        .context("failed to start the detail lookup engine")?;

    let mut board = Board::new(AppState::with_language(language), runner);
    board.dispatch(Msg::JobsLoaded(rows));
    if let Some(session) = session {
        board.dispatch(Msg::FiltersRestored(session.filters));
    }

    let mut autosave =
        (!cli.no_session).then(|| Autosave::watch(&mut board.state, cli.state_dir.clone()));

    spawn_stdin_reader(input_tx);
    board.print(&render(&board.state.view()))?;
    board.print("Type 'help' for commands.\n")?;
    // The startup render already shows the loaded and restored state.
    board.state.consume_dirty();

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Engine(msg) => board.dispatch(msg),
            Input::Line(line) => match parse_command(&line, &board.state.view()) {
                Command::Dispatch(msg) => board.dispatch(msg),
                Command::Show => board.print(&render(&board.state.view()))?,
                Command::Options => board.print(&render_options(&board.state.view()))?,
                Command::Help => board.print(&format!("{HELP}\n"))?,
                Command::Quit => break,
                Command::Invalid(reason) => board.print(&format!("! {reason}\n"))?,
            },
            Input::Eof => break,
        }

        if let Some(autosave) = autosave.as_mut() {
            autosave.flush(&board.state);
        }
        if board.state.consume_dirty() {
            board.print(&render(&board.state.view()))?;
        }
    }

    if let Some(autosave) = autosave.as_mut() {
        autosave.flush(&board.state);
    }
    board_info!("Exiting");
    Ok(())
}

struct Board {
    state: AppState,
    runner: EffectRunner,
}

impl Board {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self { state, runner }
    }

    fn dispatch(&mut self, msg: Msg) {
        board_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn print(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

struct Autosave {
    state_dir: PathBuf,
    pending: Arc<Mutex<Option<Arc<FilterState>>>>,
    language: Language,
}

impl Autosave {
    /// Subscribes to filter changes so each change is saved once the
    /// message that caused it is fully applied.
    fn watch(state: &mut AppState, state_dir: PathBuf) -> Self {
        let pending: Arc<Mutex<Option<Arc<FilterState>>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&pending);
        state.subscribe_filters(move |snapshot| {
            if let Ok(mut slot) = slot.lock() {
                *slot = Some(Arc::clone(snapshot));
            }
        });
        Self {
            state_dir,
            pending,
            language: state.language(),
        }
    }

    /// True when the filters or the language changed since the last check.
    fn due(&mut self, state: &AppState) -> bool {
        let filters_changed = self
            .pending
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .is_some();
        let language_changed = state.language() != self.language;
        self.language = state.language();
        filters_changed || language_changed
    }

    fn flush(&mut self, state: &AppState) {
        if self.due(state) {
            save_session(&self.state_dir, &state.filters(), self.language);
        }
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    board_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            if input_tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Input::Eof);
    });
}

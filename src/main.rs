//! Command-line front end for the catalogs screen.
//!
//! ```text
//! catalogs [key=value ...]
//! ```
//!
//! Redraws the screen on every presenter state and reads commands from stdin
//! (see [`catalogs::input`]). Keys are described on [`catalogs::Config`].
//!
//! # Threads
//!
//! ```text
//! presenter thread ──State──┐
//!                           ├──► main thread: render / dispatch
//! stdin reader ─────Line────┘
//! ```

#![allow(clippy::multiple_crate_versions)]

use catalogs::input::{parse_command, Command, HELP};
use catalogs::observability::init_tracing;
use catalogs::reactive::Signal;
use catalogs::ui::helpers::{time_ago, CLEAR_SCREEN};
use catalogs::ui::render;
use catalogs::{initialize, CatalogsApp, CatalogsError, CatalogsViewState, Config, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, Sender};
use std::thread;

const USAGE: &str = "usage: catalogs [config=PATH] [catalogs_file=PATH] [data_dir=PATH] \
[theme=light|dark|amoled] [theme_file=PATH] [locales=fr-FR,en] [trace_level=LEVEL] [width=COLS]";

enum UiEvent {
    State(Signal<CatalogsViewState>),
    Line(String),
    InputClosed,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}\n{HELP}");
        return ExitCode::SUCCESS;
    }

    let config = match parse_args(&args).and_then(|map| Config::from_map(&map)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("catalogs: {e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "catalogs exited with an error");
            eprintln!("catalogs: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<BTreeMap<String, String>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .ok_or_else(|| CatalogsError::Config(format!("expected key=value, got {arg:?}")))
        })
        .collect()
}

fn run(config: &Config) -> Result<()> {
    let app = initialize(config)?;
    let (tx, rx) = mpsc::channel();

    let state_tx = tx.clone();
    let _state_subscription = app.presenter.subscribe(move |signal| {
        let _ = state_tx.send(UiEvent::State(signal.clone()));
    });
    spawn_stdin_reader(tx)?;

    let mut stdout = io::stdout().lock();
    let mut current = CatalogsViewState::default();

    while let Ok(event) = rx.recv() {
        match event {
            UiEvent::State(Signal::Next(state)) => {
                current = state;
                write!(stdout, "{CLEAR_SCREEN}{}", render(&current, &app.theme, config.width))?;
                write!(stdout, "> ")?;
                stdout.flush()?;
            }
            UiEvent::State(Signal::Failed(message)) => {
                return Err(CatalogsError::Repository(message));
            }
            UiEvent::Line(line) => match parse_command(&line, &current) {
                Some(Command::Quit) => break,
                Some(command) => {
                    handle_command(&app, command, &mut stdout)?;
                    stdout.flush()?;
                }
                None => {
                    write!(stdout, "> ")?;
                    stdout.flush()?;
                }
            },
            UiEvent::InputClosed => break,
        }
    }

    writeln!(stdout)?;
    Ok(())
}

fn handle_command(app: &CatalogsApp, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Choose(choice) => app.presenter.set_language_choice(choice)?,
        Command::Reload => match app.repository.reload() {
            Ok(changed) => {
                let age = app
                    .repository
                    .updated_at()
                    .map(|ts| format!(", index updated {}", time_ago(ts, Utc::now())))
                    .unwrap_or_default();
                write!(out, "reloaded: {changed} list(s) changed{age}\n> ")?;
            }
            Err(e) => {
                tracing::warn!(error = %e, "reload failed");
                write!(out, "reload failed: {e}\n> ")?;
            }
        },
        Command::Help => write!(out, "{HELP}\n> ")?,
        Command::Quit => {}
    }
    Ok(())
}

fn spawn_stdin_reader(tx: Sender<UiEvent>) -> Result<()> {
    thread::Builder::new()
        .name("catalogs-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(UiEvent::Line(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(UiEvent::InputClosed);
        })?;
    Ok(())
}

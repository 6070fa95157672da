//! Compass terminal shell: a thin presentation collaborator over the core
//! state machine. Reads intents from stdin, runs effects through the
//! service bridge, and prints each feature's view as calls settle.

mod logging;
mod render;

use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use compass_client::{ApiSettings, ServiceHandle};
use compass_core::{update, AppState, Msg, QueryField, Sector};

enum Command {
    Intents(Vec<Msg>),
    Help,
    Unknown(String),
    Quit,
}

fn main() {
    logging::initialize(logging::LogDestination::File);

    let settings = ApiSettings {
        base_url: std::env::var("COMPASS_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        ..ApiSettings::default()
    };
    client_info!("starting compass shell against {}", settings.base_url);

    let handle = match ServiceHandle::new(settings) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("could not start the service client: {err}");
            return;
        }
    };

    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_stdin_reader(cmd_tx);

    let mut state = AppState::new();
    render::help();

    // Initial unfiltered tips load; the same path as any later selection.
    state = apply(state, Msg::SectorSelected(Sector::General), &handle);

    loop {
        let mut idle = true;

        while let Some(msg) = handle.try_recv() {
            state = apply(state, msg, &handle);
            idle = false;
        }

        match cmd_rx.try_recv() {
            Ok(Command::Intents(msgs)) => {
                for msg in msgs {
                    state = apply(state, msg, &handle);
                }
                idle = false;
            }
            Ok(Command::Help) => render::help(),
            Ok(Command::Unknown(line)) => {
                println!("unrecognized command: {line}");
                render::help();
            }
            Ok(Command::Quit) => break,
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        if idle {
            thread::sleep(Duration::from_millis(20));
        }
    }
}

/// Runs one message through the core, forwards its effects to the bridge,
/// and prints the section the message touched.
fn apply(state: AppState, msg: Msg, handle: &ServiceHandle) -> AppState {
    let section = section_of(&msg);
    let (state, effects) = update(state, msg);
    handle.run(effects);

    let view = state.view();
    match section {
        Section::Tips => render::tips(&view.market_tips),
        Section::Jobs => render::jobs(&view.recommendations),
        Section::Chat => render::chat(&view.conversation),
        Section::Silent => {}
    }
    state
}

enum Section {
    Tips,
    Jobs,
    Chat,
    Silent,
}

fn section_of(msg: &Msg) -> Section {
    match msg {
        Msg::SectorSelected(_) | Msg::TipsSettled { .. } => Section::Tips,
        Msg::RecommendationsSubmitted | Msg::RecommendationsSettled { .. } => Section::Jobs,
        Msg::ChatSubmitted | Msg::ChatSettled { .. } => Section::Chat,
        Msg::RecommendationFieldEdited { .. } | Msg::ChatDraftEdited(_) => Section::Silent,
    }
}

fn spawn_stdin_reader(cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    client_warn!("stdin closed: {err}");
                    break;
                }
            };
            if cmd_tx.send(parse_command(&line)).is_err() {
                break;
            }
        }
    });
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "sector" => match Sector::parse(rest) {
            Some(sector) => Command::Intents(vec![Msg::SectorSelected(sector)]),
            None => Command::Unknown(trimmed.to_string()),
        },
        "prefs" => Command::Intents(vec![field_edit(QueryField::Preferences, rest)]),
        "skills" => Command::Intents(vec![field_edit(QueryField::Skills, rest)]),
        "details" => Command::Intents(vec![field_edit(QueryField::DetailedExpectations, rest)]),
        "find" => Command::Intents(vec![Msg::RecommendationsSubmitted]),
        "say" => Command::Intents(vec![
            Msg::ChatDraftEdited(rest.to_string()),
            Msg::ChatSubmitted,
        ]),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "" => Command::Help,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn field_edit(field: QueryField, value: &str) -> Msg {
    Msg::RecommendationFieldEdited {
        field,
        value: value.to_string(),
    }
}

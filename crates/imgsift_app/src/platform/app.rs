use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use imgsift_core::{update, AppState, Msg};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::input::Command;

const SERVICE_URL_ENV: &str = "IMGSIFT_SERVICE_URL";
const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let base_url =
        std::env::var(SERVICE_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
    let output_dir = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("downloads");

    let shared = Arc::new(Mutex::new(SharedState::default()));
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

    let runner = EffectRunner::new(base_url, output_dir, msg_tx.clone())
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    spawn_state_loop(shared.clone(), msg_rx, runner);

    println!("{}", ui::render::BANNER);
    println!("{}", ui::render::HELP);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        // The view is only borrowed long enough to resolve card indices.
        let command = {
            let guard = shared.lock().expect("lock shared state");
            ui::input::parse_command(&line, &guard.state.view())
        };
        match command {
            Command::Quit => break,
            Command::Help => println!("{}", ui::render::HELP),
            Command::Dispatch(msgs) => {
                for msg in msgs {
                    if msg_tx.send(msg).is_err() {
                        return Ok(());
                    }
                }
            }
        }
    }
    Ok(())
}

#[derive(Default)]
struct SharedState {
    state: AppState,
}

/// The state loop owns all dispatch: apply the message, hand effects to the
/// runner, re-render whenever the state actually changed.
fn spawn_state_loop(
    shared: Arc<Mutex<SharedState>>,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
) {
    thread::spawn(move || {
        while let Ok(msg) = msg_rx.recv() {
            let (maybe_view, effects) = {
                let mut guard = shared.lock().expect("lock shared state");
                let state = std::mem::take(&mut guard.state);
                let (mut state, effects) = update(state, msg);
                let view = state.view();
                let was_dirty = state.consume_dirty();
                guard.state = state;
                (was_dirty.then_some(view), effects)
            };
            runner.run(effects);
            if let Some(view) = maybe_view {
                print!("{}", ui::render::render(&view));
                let _ = io::stdout().flush();
            }
        }
    });
}

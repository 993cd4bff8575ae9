use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use postcraft_core::{update, AppState, Msg};
use postcraft_engine::{system_clipboard, Clipboard, Generator, ReqwestGenerator};
use postcraft_logging::{craft_info, craft_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{parse_line, InputCommand, HELP};
use super::ui;

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// Completion or timer message from the engine.
    Msg(Msg),
    /// A decoded line from the terminal.
    Input(InputCommand),
    /// Stdin reached end of file.
    InputClosed,
}

/// Owns the controller state for one front-end and applies messages to it.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    pub fn new(
        generator: Arc<dyn Generator>,
        clipboard: Arc<dyn Clipboard>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self> {
        let runner =
            EffectRunner::new(generator, clipboard, event_tx).context("failed to start engine")?;
        Ok(Self {
            state: AppState::new(),
            runner,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// No generation or clipboard write is waiting on the engine.
    pub fn is_idle(&self) -> bool {
        !self.state.is_generating() && !self.state.is_copying()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Rendered view when anything changed since the last frame.
    pub fn take_frame(&mut self) -> Option<String> {
        if self.state.consume_dirty() {
            Some(ui::render::render(&self.state.view()))
        } else {
            None
        }
    }
}

pub fn run_app(config: &AppConfig) -> Result<()> {
    let generator = ReqwestGenerator::new(config.generation_settings())
        .context("invalid generation endpoint")?;
    craft_info!(
        "Starting postcraft endpoint={} timeout_ms={}",
        config.endpoint,
        config.request_timeout_ms
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let mut session = Session::new(
        Arc::new(generator),
        Arc::new(system_clipboard()),
        event_tx.clone(),
    )?;
    spawn_stdin_reader(event_tx);

    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;
    writeln!(out, "{}", ui::render::render(&session.state().view()))?;
    out.flush()?;

    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => session.dispatch(msg),
            AppEvent::Input(InputCommand::Dispatch(msgs)) => {
                for msg in msgs {
                    session.dispatch(msg);
                }
            }
            AppEvent::Input(InputCommand::Help) => writeln!(out, "{HELP}")?,
            AppEvent::Input(InputCommand::Unknown(reason)) => writeln!(out, "{reason}")?,
            AppEvent::Input(InputCommand::Quit) => break,
            AppEvent::InputClosed => input_closed = true,
        }

        if let Some(frame) = session.take_frame() {
            writeln!(out, "{frame}")?;
        }
        out.flush()?;

        // Piped input: let pending requests and copies resolve before exiting.
        if input_closed && session.is_idle() {
            break;
        }
    }

    craft_info!("Postcraft exiting");
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    craft_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            if event_tx.send(AppEvent::Input(parse_line(&line))).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

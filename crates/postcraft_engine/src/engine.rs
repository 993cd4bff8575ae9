use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use postcraft_logging::{craft_debug, craft_info, craft_warn};
use thiserror::Error;

use crate::{
    Clipboard, ClipboardError, EngineEvent, GenerationError, GenerationRequest, Generator,
    RequestId, TimerToken,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Generate {
        request_id: RequestId,
        request: GenerationRequest,
    },
    Copy {
        text: String,
    },
    Schedule {
        token: TimerToken,
        after: Duration,
    },
}

/// Handle to the engine thread. Cheap to clone; the thread stops once every
/// handle is dropped.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    // Completions for commands the engine thread can no longer accept.
    event_tx: mpsc::Sender<EngineEvent>,
    next_token: Arc<AtomicU64>,
}

impl EngineHandle {
    pub fn spawn(
        generator: Arc<dyn Generator>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("postcraft-engine-worker")
            .enable_all()
            .build()?;

        let worker_tx = event_tx.clone();
        thread::Builder::new()
            .name("postcraft-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let generator = generator.clone();
                    let clipboard = clipboard.clone();
                    let event_tx = worker_tx.clone();
                    runtime.spawn(async move {
                        handle_command(generator, clipboard, command, event_tx).await;
                    });
                }
                craft_info!("Engine command channel closed; shutting down");
            })?;

        let handle = Self {
            cmd_tx,
            event_tx,
            next_token: Arc::new(AtomicU64::new(0)),
        };
        Ok((handle, event_rx))
    }

    /// Always answered by exactly one `GenerationCompleted` for `request_id`.
    pub fn generate(&self, request_id: RequestId, request: GenerationRequest) {
        let command = EngineCommand::Generate {
            request_id,
            request,
        };
        if self.cmd_tx.send(command).is_err() {
            craft_warn!("Engine stopped; failing request_id={}", request_id);
            let _ = self.event_tx.send(EngineEvent::GenerationCompleted {
                request_id,
                result: Err(GenerationError::Network("engine stopped".to_string())),
            });
        }
    }

    pub fn copy(&self, text: impl Into<String>) {
        let command = EngineCommand::Copy { text: text.into() };
        if self.cmd_tx.send(command).is_err() {
            craft_warn!("Engine stopped; failing clipboard write");
            let _ = self.event_tx.send(EngineEvent::CopyCompleted {
                result: Err(ClipboardError::Unavailable("engine stopped".to_string())),
            });
        }
    }

    /// Emits `EngineEvent::TimerElapsed` with the returned token after `after`.
    pub fn schedule(&self, after: Duration) -> TimerToken {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed) + 1;
        let _ = self.cmd_tx.send(EngineCommand::Schedule { token, after });
        token
    }
}

async fn handle_command(
    generator: Arc<dyn Generator>,
    clipboard: Arc<dyn Clipboard>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Generate {
            request_id,
            request,
        } => {
            craft_debug!("Engine generate request_id={}", request_id);
            // Own task so a panicking generator still yields a completion.
            let result = tokio::spawn(async move { generator.generate(&request).await })
                .await
                .unwrap_or_else(|err| {
                    craft_warn!("Generation task failed request_id={}: {}", request_id, err);
                    Err(GenerationError::Network(err.to_string()))
                });
            EngineEvent::GenerationCompleted { request_id, result }
        }
        EngineCommand::Copy { text } => {
            let result = tokio::task::spawn_blocking(move || clipboard.set_text(&text))
                .await
                .unwrap_or_else(|err| Err(ClipboardError::Unavailable(err.to_string())));
            EngineEvent::CopyCompleted { result }
        }
        EngineCommand::Schedule { token, after } => {
            tokio::time::sleep(after).await;
            EngineEvent::TimerElapsed { token }
        }
    };
    let _ = event_tx.send(event);
}

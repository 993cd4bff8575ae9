use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use postcraft_core::{CopyFailure, Effect, GenerationFailure, Msg};
use postcraft_engine::{
    Clipboard, EngineError, EngineEvent, EngineHandle, GenerationError, GenerationRequest,
    Generator, TimerToken,
};
use postcraft_logging::{craft_debug, craft_info, craft_warn};

use super::app::AppEvent;

type PendingTimers = Arc<Mutex<HashMap<TimerToken, Msg>>>;

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    timers: PendingTimers,
}

impl EffectRunner {
    pub fn new(
        generator: Arc<dyn Generator>,
        clipboard: Arc<dyn Clipboard>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, EngineError> {
        let (engine, engine_events) = EngineHandle::spawn(generator, clipboard)?;
        let runner = Self {
            engine,
            timers: PendingTimers::default(),
        };
        runner.spawn_event_loop(engine_events, event_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Generate {
                    request_id,
                    request,
                } => {
                    craft_info!(
                        "Generate request_id={} topic_len={} tone={}",
                        request_id,
                        request.topic().len(),
                        request.tone()
                    );
                    self.engine.generate(
                        request_id,
                        GenerationRequest::new(request.topic(), request.tone().as_str()),
                    );
                }
                Effect::CopyToClipboard { text } => {
                    craft_debug!("Copy chars={}", text.len());
                    self.engine.copy(text);
                }
                Effect::ScheduleCopyReset { copy_id, after } => {
                    self.schedule(after, Msg::CopyResetElapsed { copy_id });
                }
                Effect::ScheduleNotificationExpiry {
                    notification_id,
                    after,
                } => {
                    self.schedule(after, Msg::NotificationExpired { notification_id });
                }
            }
        }
    }

    fn schedule(&self, after: Duration, msg: Msg) {
        // Hold the lock across scheduling so a short timer cannot fire before its message is known.
        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        let token = self.engine.schedule(after);
        timers.insert(token, msg);
    }

    fn spawn_event_loop(
        &self,
        engine_events: mpsc::Receiver<EngineEvent>,
        event_tx: mpsc::Sender<AppEvent>,
    ) {
        let timers = self.timers.clone();
        thread::spawn(move || {
            while let Ok(event) = engine_events.recv() {
                let msg = match event {
                    EngineEvent::GenerationCompleted { request_id, result } => {
                        Some(Msg::GenerationDone {
                            request_id,
                            result: result.map(|generated| generated.post).map_err(map_failure),
                        })
                    }
                    EngineEvent::CopyCompleted { result } => Some(Msg::CopyDone {
                        result: result.map_err(|err| {
                            craft_warn!("Copy failed: {}", err);
                            CopyFailure {
                                reason: err.to_string(),
                            }
                        }),
                    }),
                    EngineEvent::TimerElapsed { token } => timers
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .remove(&token),
                };
                if let Some(msg) = msg {
                    if event_tx.send(AppEvent::Msg(msg)).is_err() {
                        break;
                    }
                }
            }
        });
    }
}

fn map_failure(err: GenerationError) -> GenerationFailure {
    match err {
        GenerationError::Timeout => GenerationFailure::Timeout,
        GenerationError::HttpStatus { status } => GenerationFailure::Http { status },
        GenerationError::Server { message } => GenerationFailure::Server { message },
        GenerationError::MalformedResponse(_) => GenerationFailure::MalformedResponse,
        GenerationError::Network(_) | GenerationError::InvalidEndpoint { .. } => {
            GenerationFailure::Network
        }
    }
}

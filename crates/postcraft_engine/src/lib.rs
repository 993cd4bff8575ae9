//! Postcraft engine: generation client, clipboard access and effect execution.
mod clipboard;
mod engine;
mod generate;
mod types;

pub use clipboard::{
    system_clipboard, ArboardClipboard, Clipboard, CommandClipboard, FallbackClipboard,
    SystemClipboard,
};
pub use engine::{EngineError, EngineHandle};
pub use generate::{GenerationSettings, Generator, ReqwestGenerator};
pub use types::{
    ClipboardError, EngineEvent, GeneratedPost, GenerationError, GenerationRequest, RequestId,
    TimerToken,
};

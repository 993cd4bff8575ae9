//! Postcraft terminal front-end: wires the core state machine to the engine.
mod platform;

pub use platform::app::{run_app, AppEvent, Session};
pub use platform::config::{load_config, AppConfig, DEFAULT_CONFIG_FILENAME};
pub use platform::effects::EffectRunner;
pub use platform::input::{parse_line, InputCommand, HELP};
pub use platform::logging::{initialize as initialize_logging, LogDestination};
pub use platform::ui::render::render;

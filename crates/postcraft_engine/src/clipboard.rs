//! Write-only clipboard access.
//!
//! The native path goes through `arboard`. When that is unavailable (no display
//! server, missing Wayland data-control protocol, sandboxed session) the legacy
//! path pipes the text into the platform's clipboard command instead.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use postcraft_logging::{craft_debug, craft_warn};

use crate::ClipboardError;

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

type CopyJob = (String, mpsc::Sender<Result<(), ClipboardError>>);

const NATIVE_REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// Native clipboard owned by a dedicated thread.
///
/// The `arboard::Clipboard` instance lives as long as that thread so X11 and
/// Wayland selections keep being served after `set_text` returns.
pub struct ArboardClipboard {
    jobs: mpsc::Sender<CopyJob>,
}

impl ArboardClipboard {
    pub fn spawn() -> Self {
        let (jobs, rx) = mpsc::channel::<CopyJob>();
        let spawned = thread::Builder::new()
            .name("postcraft-clipboard".to_string())
            .spawn(move || serve_native(rx));
        if let Err(err) = spawned {
            // The receiver is gone, so every set_text reports Unavailable.
            craft_warn!("Could not start clipboard thread: {}", err);
        }
        Self { jobs }
    }
}

impl Clipboard for ArboardClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.jobs
            .send((text.to_string(), reply_tx))
            .map_err(|_| ClipboardError::Unavailable("clipboard thread stopped".to_string()))?;
        reply_rx
            .recv_timeout(NATIVE_REPLY_TIMEOUT)
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?
    }
}

fn serve_native(rx: mpsc::Receiver<CopyJob>) {
    let mut slot: Option<arboard::Clipboard> = None;
    while let Ok((text, reply)) = rx.recv() {
        let result = write_native(&mut slot, &text);
        if result.is_err() {
            // Reconnect on the next attempt.
            slot = None;
        }
        let _ = reply.send(result);
    }
}

fn write_native(slot: &mut Option<arboard::Clipboard>, text: &str) -> Result<(), ClipboardError> {
    if slot.is_none() {
        let clipboard = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        *slot = Some(clipboard);
    }
    let Some(clipboard) = slot.as_mut() else {
        return Err(ClipboardError::Unavailable(
            "clipboard not initialized".to_string(),
        ));
    };
    clipboard
        .set_text(text)
        .map_err(|err| ClipboardError::Write(err.to_string()))?;
    craft_debug!("Copied {} chars via native clipboard", text.len());
    Ok(())
}

/// Legacy path: pipe the text into the first clipboard command that works.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    candidates: Vec<(String, Vec<String>)>,
}

impl CommandClipboard {
    /// Uses `pbcopy` on macOS, `wl-copy`/`xclip`/`xsel` on Linux and `clip` on Windows.
    pub fn for_platform() -> Self {
        Self::with_candidates(platform_candidates())
    }

    pub fn with_candidates<I, P, A>(candidates: I) -> Self
    where
        I: IntoIterator<Item = (P, Vec<A>)>,
        P: Into<String>,
        A: Into<String>,
    {
        Self {
            candidates: candidates
                .into_iter()
                .map(|(program, args)| (program.into(), args.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::for_platform()
    }
}

impl Clipboard for CommandClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut failures = Vec::new();
        for (program, args) in &self.candidates {
            match pipe_to(program, args, text) {
                Ok(()) => {
                    craft_debug!("Copied {} chars via {}", text.len(), program);
                    return Ok(());
                }
                Err(err) => failures.push(format!("{program}: {err}")),
            }
        }
        if failures.is_empty() {
            return Err(ClipboardError::Command(
                "no clipboard command for this platform".to_string(),
            ));
        }
        Err(ClipboardError::Command(failures.join(", ")))
    }
}

fn pipe_to(program: &str, args: &[String], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {status}")))
    }
}

fn platform_candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", vec![])]
    } else if cfg!(target_os = "windows") {
        vec![("clip", vec![])]
    } else if cfg!(unix) {
        vec![
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
        ]
    } else {
        Vec::new()
    }
}

/// Tries `primary`, then `fallback`; fails only when both do.
pub struct FallbackClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Clipboard, F: Clipboard> Clipboard for FallbackClipboard<P, F> {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let primary = match self.primary.set_text(text) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        craft_warn!("Native clipboard failed ({}); trying legacy copy", primary);
        self.fallback
            .set_text(text)
            .map_err(|fallback| ClipboardError::Exhausted {
                primary: Box::new(primary),
                fallback: Box::new(fallback),
            })
    }
}

pub type SystemClipboard = FallbackClipboard<ArboardClipboard, CommandClipboard>;

pub fn system_clipboard() -> SystemClipboard {
    FallbackClipboard::new(ArboardClipboard::spawn(), CommandClipboard::for_platform())
}

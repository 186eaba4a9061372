use colored::*;
use lazy_static::lazy_static;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod message;
pub use message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Severity of a status message. Routing is an exhaustive match, so an
/// unhandled level cannot be silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Level::Info => "ℹ",
            Level::Success => "✔",
            Level::Warn => "⚠",
            Level::Error => "✖",
            Level::Debug => "●",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

lazy_static! {
    static ref RENDERER: RwLock<Renderer> = RwLock::new(Renderer::default());
}

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

pub fn init(format: OutputFormat, color: bool) {
    if let Ok(mut r) = RENDERER.write() {
        r.format = format;
        r.color = color;
    }
}

pub fn get_output_format() -> OutputFormat {
    RENDERER.read().expect("renderer poisoned").format
}

// Separator characters
pub const SEPARATOR_HEAVY: &str = "━";
pub const SEPARATOR_LIGHT: &str = "─";

#[derive(Serialize)]
struct Event<'a> {
    level: &'a str,
    code: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

fn colorize(level: Level, s: &str, enable: bool) -> String {
    if !enable {
        return s.to_string();
    }
    match level {
        Level::Info => s.normal().to_string(),
        Level::Success => s.green().bold().to_string(),
        Level::Warn => s.yellow().bold().to_string(),
        Level::Error => s.red().bold().to_string(),
        Level::Debug => s.cyan().to_string(),
    }
}

/// Drop ANSI CSI sequences so JSON events carry plain text only.
fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for final_byte in chars.by_ref() {
                    if ('@'..='~').contains(&final_byte) {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn writer_for(level: Level) -> Box<dyn Write> {
    match level {
        Level::Error | Level::Warn => Box::new(io::stderr()),
        _ => Box::new(io::stdout()),
    }
}

pub fn emit(level: Level, code: &str, message: &str, data: Option<serde_json::Value>) {
    let renderer = RENDERER.read().expect("renderer poisoned").clone();
    let mut out = writer_for(level);
    match renderer.format {
        OutputFormat::Text => {
            let line = colorize(
                level,
                &format!("{} {}", level.glyph(), message),
                renderer.color,
            );
            let _ = writeln!(out, "{line}");
        }
        OutputFormat::Json => {
            let clean = strip_ansi(message);
            let event = Event {
                level: level.as_str(),
                code,
                message: &clean,
                data,
            };
            let line = serde_json::to_string(&event).expect("serialize event");
            let _ = writeln!(out, "{line}");
        }
    }
}

/// Debug-channel message, emitted only when debug mode is on.
pub fn debug(code: &str, message: &str) {
    if is_debug_enabled() {
        emit(Level::Debug, code, message, None);
    }
}

pub fn separator(light: bool) {
    let renderer = RENDERER.read().expect("renderer poisoned").clone();
    // No separators in JSON mode to keep the stream parseable
    if matches!(renderer.format, OutputFormat::Json) {
        return;
    }
    let glyph = if light {
        SEPARATOR_LIGHT
    } else {
        SEPARATOR_HEAVY
    };
    let line = glyph.repeat(80);
    let mut out = io::stdout();
    let _ = writeln!(
        out,
        "{}",
        if renderer.color {
            line.normal().to_string()
        } else {
            line
        }
    );
}

pub mod prelude {
    pub use super::{Level, Message, OutputFormat, debug, emit, get_output_format, separator};
}

//! Line-oriented replay scripts for driving a board without a UI.
//!
//! Each non-empty line is one trigger: a tool/color/text selection, a
//! pointer event, or a button press. `#` starts a comment line.
//!
//! ```text
//! tool pen
//! color #ff0000
//! down 5 5
//! move 5 50
//! up 5 50
//! text Hi
//! tool text
//! down 20 20
//! save
//! ```

use crate::export::ExportError;
use crate::input::{PointerEvent, Theme, Whiteboard};
use log::{debug, info};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from parsing or running a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Surface {
        line: usize,
        #[source]
        source: crate::draw::SurfaceError,
    },

    #[error("line {line}: {source}")]
    Export {
        line: usize,
        #[source]
        source: ExportError,
    },
}

/// Pointer phase of a scripted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Down,
    Move,
    Up,
}

/// Zoom button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAction {
    In,
    Out,
    Reset,
}

/// One scripted trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tool(String),
    Color(String),
    Text(String),
    Pointer { phase: Phase, touch: bool, x: f64, y: f64 },
    Undo,
    Redo,
    Clear,
    Zoom(ZoomAction),
    Resize { width: i32, height: i32 },
    Theme(Theme),
    Save,
}

/// A parsed command together with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
}

/// Parses a whole script.
pub fn parse(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command =
            parse_line(trimmed).map_err(|message| ScriptError::Parse { line, message })?;
        steps.push(Step { line, command });
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<Command, String> {
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword {
        "tool" => Command::Tool(required(rest, "tool id")?.to_string()),
        "color" => Command::Color(required(rest, "color value")?.to_string()),
        // Text keeps inner spacing and may be empty
        "text" => Command::Text(
            line.strip_prefix("text")
                .unwrap_or_default()
                .trim_start()
                .to_string(),
        ),
        "down" | "move" | "up" | "touch-down" | "touch-move" | "touch-up" => {
            let touch = keyword.starts_with("touch-");
            let phase = match keyword.trim_start_matches("touch-") {
                "down" => Phase::Down,
                "move" => Phase::Move,
                _ => Phase::Up,
            };
            let (x, y) = two_numbers::<f64>(rest)?;
            Command::Pointer { phase, touch, x, y }
        }
        "undo" => no_args(rest, Command::Undo)?,
        "redo" => no_args(rest, Command::Redo)?,
        "clear" => no_args(rest, Command::Clear)?,
        "save" => no_args(rest, Command::Save)?,
        "zoom" => Command::Zoom(match rest {
            "in" => ZoomAction::In,
            "out" => ZoomAction::Out,
            "reset" => ZoomAction::Reset,
            other => return Err(format!("unknown zoom action '{}'", other)),
        }),
        "resize" => {
            let (width, height) = two_numbers::<i32>(rest)?;
            Command::Resize { width, height }
        }
        "theme" => Command::Theme(
            rest.parse()
                .map_err(|()| format!("unknown theme '{}'", rest))?,
        ),
        other => return Err(format!("unknown command '{}'", other)),
    };
    Ok(command)
}

fn required<'a>(rest: &'a str, what: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("missing {}", what))
    } else {
        Ok(rest)
    }
}

fn no_args(rest: &str, command: Command) -> Result<Command, String> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(format!("unexpected arguments '{}'", rest))
    }
}

fn two_numbers<T: std::str::FromStr>(rest: &str) -> Result<(T, T), String> {
    let mut parts = rest.split_whitespace();
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected two numbers, got '{}'", rest));
    };
    let parse = |s: &str| {
        s.parse::<T>()
            .map_err(|_| format!("invalid number '{}'", s))
    };
    Ok((parse(a)?, parse(b)?))
}

/// Outcome of running a script.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of commands executed
    pub executed: usize,
    /// Files written by `save` commands, in order
    pub saved: Vec<PathBuf>,
}

/// Executes parsed steps against a board.
pub fn run(board: &mut Whiteboard, steps: &[Step]) -> Result<RunSummary, ScriptError> {
    let mut summary = RunSummary::default();

    for step in steps {
        let line = step.line;
        let surface_err = |source| ScriptError::Surface { line, source };
        debug!("line {}: {:?}", line, step.command);

        match &step.command {
            Command::Tool(id) => board.select_tool(id),
            Command::Color(value) => board.select_color(value),
            Command::Text(text) => board.set_text_input(text.as_str()),
            Command::Pointer { phase, touch, x, y } => {
                let event = if *touch {
                    PointerEvent::touch(*x, *y)
                } else {
                    PointerEvent::mouse(*x, *y)
                };
                match phase {
                    Phase::Down => board.on_pointer_down(&event),
                    Phase::Move => board.on_pointer_move(&event),
                    Phase::Up => board.on_pointer_up(&event),
                };
            }
            Command::Undo => {
                board.undo();
            }
            Command::Redo => {
                board.redo();
            }
            Command::Clear => board.clear(),
            Command::Zoom(action) => match action {
                ZoomAction::In => board.zoom_in().map_err(surface_err)?,
                ZoomAction::Out => board.zoom_out().map_err(surface_err)?,
                ZoomAction::Reset => board.reset_zoom().map_err(surface_err)?,
            },
            Command::Resize { width, height } => {
                board.resize(*width, *height).map_err(surface_err)?
            }
            Command::Theme(theme) => board.set_theme(*theme),
            Command::Save => {
                let path = board
                    .save()
                    .map_err(|source| ScriptError::Export { line, source })?;
                info!("Saved {}", path.display());
                summary.saved.push(path);
            }
        }
        summary.executed += 1;
    }

    Ok(summary)
}

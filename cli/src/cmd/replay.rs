//! Replays a script of widget input, one action per line:
//!
//! ```text
//! # pointer input, aimed at a note or at an x,y point in svg coordinates
//! down A-0
//! up 9,10
//! leave C#-1
//!
//! # programmatic changes
//! set-down E-1
//! set-up E-1
//!
//! # attribute changes, applied on top of the current configuration
//! configure key-count=13 read-only
//! ```

use std::fs;
use std::path::PathBuf;

use error_stack::{report, Result, ResultExt};
use log::{debug, info};

use piano_keys_core::layout::Point;
use piano_keys_core::notes::Note;
use piano_keys_core::{Action, Effect, PianoKeys, PianoKeysError, Pointer, WidgetConfig};

use super::render::write_svg;

/// Where a pointer event landed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
  Note(Note),
  At(Point),
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
  Pointer(Pointer, Target),
  SetDown(Note),
  SetUp(Note),
  Configure(Vec<(String, String)>),
}

fn script_error(line: usize, message: impl Into<String>) -> error_stack::Report<PianoKeysError> {
  report!(PianoKeysError::ScriptParseError {
    line,
    message: message.into(),
  })
}

fn parse_target(line: usize, s: &str) -> Result<Target, PianoKeysError> {
  if let Some((x, y)) = s.split_once(',') {
    let x = x.trim().parse::<f64>();
    let y = y.trim().parse::<f64>();
    return match (x, y) {
      (Ok(x), Ok(y)) => Ok(Target::At(Point { x, y })),
      _ => Err(script_error(line, format!("invalid point {s:?}"))),
    };
  }
  parse_note(line, s).map(Target::Note)
}

fn parse_note(line: usize, s: &str) -> Result<Note, PianoKeysError> {
  Note::parse(s).change_context(PianoKeysError::ScriptParseError {
    line,
    message: format!("invalid note {s:?}"),
  })
}

fn parse_line(line: usize, text: &str) -> Result<Option<Step>, PianoKeysError> {
  let text = text.trim();
  if text.is_empty() || text.starts_with('#') {
    return Ok(None);
  }

  let (command, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
  let rest = rest.trim();
  let step = match command {
    "down" => Step::Pointer(Pointer::Down, parse_target(line, rest)?),
    "up" => Step::Pointer(Pointer::Up, parse_target(line, rest)?),
    "leave" => Step::Pointer(Pointer::Leave, parse_target(line, rest)?),
    "set-down" => Step::SetDown(parse_note(line, rest)?),
    "set-up" => Step::SetUp(parse_note(line, rest)?),
    "configure" => Step::Configure(
      rest
        .split_whitespace()
        .map(|attr| {
          let (name, value) = attr.split_once('=').unwrap_or((attr, ""));
          (name.to_string(), value.to_string())
        })
        .collect(),
    ),
    other => return Err(script_error(line, format!("unknown command {other:?}"))),
  };
  Ok(Some(step))
}

fn parse_script(script: &str) -> Result<Vec<Step>, PianoKeysError> {
  let mut steps = vec![];
  for (i, text) in script.lines().enumerate() {
    if let Some(step) = parse_line(i + 1, text)? {
      steps.push(step);
    }
  }
  Ok(steps)
}

/// Runs the steps against `keys`, returning every effect in order.
fn replay(keys: &mut PianoKeys, steps: Vec<Step>) -> Result<Vec<Effect>, PianoKeysError> {
  let mut effects = vec![];
  for step in steps {
    let action = match step {
      Step::Pointer(p, Target::Note(note)) => Action::Pointer(p, note),
      Step::Pointer(p, Target::At(point)) => match keys.pointer_target(point) {
        Some(note) => Action::Pointer(p, note),
        None => {
          debug!("no key at {point:?}");
          continue;
        }
      },
      Step::SetDown(note) => Action::SetKeyDown(note),
      Step::SetUp(note) => Action::SetKeyUp(note),
      Step::Configure(attrs) => {
        let mut config = *keys.config();
        for (name, value) in &attrs {
          config.apply_attribute(name, value)?;
        }
        Action::Configure(config)
      }
    };
    effects.extend(keys.dispatch(action));
  }
  Ok(effects)
}

pub fn run_replay(
  script: &PathBuf,
  config: WidgetConfig,
  svg: Option<&PathBuf>,
) -> Result<(), PianoKeysError> {
  let contents = fs::read_to_string(script).map_err(|e| {
    report!(PianoKeysError::IoError).attach_printable(format!("unable to read {}: {e}", script.display()))
  })?;
  let steps = parse_script(&contents)?;
  info!("replaying {} step(s) from {}", steps.len(), script.display());

  let mut keys = PianoKeys::new(config);
  for effect in replay(&mut keys, steps)? {
    if let Effect::Notify(notification) = effect {
      let line = serde_json::to_string(&notification).map_err(|e| {
        report!(PianoKeysError::IoError).attach_printable(format!("unable to encode notification: {e}"))
      })?;
      println!("{line}");
    }
  }

  match svg {
    Some(path) => write_svg(&keys.render_svg(), Some(path)),
    None => Ok(()),
  }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::notes::Note;

/// Notifications raised when the user presses or releases a key.
///
/// Serializes as `{"type":"note-down","name":"C#","octave":1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Notification {
  NoteDown(Note),
  NoteUp(Note),
}

impl Notification {
  pub fn note(&self) -> Note {
    match self {
      Notification::NoteDown(n) | Notification::NoteUp(n) => *n,
    }
  }

  /// The event name, `note-down` or `note-up`.
  pub fn event_name(&self) -> &'static str {
    match self {
      Notification::NoteDown(_) => "note-down",
      Notification::NoteUp(_) => "note-up",
    }
  }
}

/// Effects are requests from the widget to "do something" in the outside world,
/// reported in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
  /// A key's depressed flag changed, and its rendered element should be updated.
  KeyStateChanged { note: Note, depressed: bool },

  /// Listeners should be told about a press or release.
  Notify(Notification),

  /// The whole keyboard was laid out again and should be redrawn.
  Rerendered,
}

impl Display for Effect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Effect::*;
    match self {
      KeyStateChanged { note, depressed } => write!(f, "KeyStateChanged({note}, {depressed})"),
      Notify(n) => write!(f, "Notify({}, {})", n.event_name(), n.note()),
      Rerendered => write!(f, "Rerendered"),
    }
  }
}

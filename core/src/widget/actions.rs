use std::fmt::Display;

use crate::config::WidgetConfig;
use crate::notes::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
  Down,
  Up,
  /// The pointer moved off a key without being released.
  Leave,
}

/// Actions are inputs into the widget.
/// Pointer actions come from the user, everything else from the embedding program.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  /// A pointer event landed on the key for the given note.
  Pointer(Pointer, Note),

  /// Mark a key as depressed without notifying anyone.
  SetKeyDown(Note),

  /// Clear a key's depressed state without notifying anyone.
  SetKeyUp(Note),

  /// Replace the configuration. The keyboard is laid out again and every key is released.
  Configure(WidgetConfig),
}

impl Display for Action {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Action::*;
    match self {
      Pointer(p, note) => write!(f, "Pointer({p:?}, {note})"),
      SetKeyDown(note) => write!(f, "SetKeyDown({note})"),
      SetKeyUp(note) => write!(f, "SetKeyUp({note})"),
      Configure(config) => write!(
        f,
        "Configure({} keys from {}{})",
        config.key_count,
        config.starting_pitch,
        if config.read_only { ", read-only" } else { "" }
      ),
    }
  }
}

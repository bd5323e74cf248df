use serde::{Deserialize, Serialize};

use error_stack::Context;
use std::fmt::Display;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum PianoKeysError {
  InvalidPitchClass(String),
  InvalidKeyCount(String),
  InvalidLayoutName(String),
  InvalidNote(String),
  InvalidElementName(String),

  RegistryUnavailable,
  ConfigLoadError,
  IoError,

  ScriptParseError { line: usize, message: String },
}

impl Context for PianoKeysError {}

impl Display for PianoKeysError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use PianoKeysError::*;
    match self {
      InvalidPitchClass(s) => write!(
        f,
        "invalid pitch class {s:?}. Expected one of A, A#, B, C, C#, D, D#, E, F, F#, G, G#"
      ),

      InvalidKeyCount(s) => write!(f, "invalid key count {s:?}. Expected a non-negative integer"),

      InvalidLayoutName(s) => write!(f, "invalid keyboard layout {s:?}. Expected AtoG or CtoB"),

      InvalidNote(s) => write!(f, "invalid note {s:?}. Expected <pitch>-<octave>, e.g. C#-4"),

      InvalidElementName(s) => write!(f, "invalid element name {s:?}"),

      RegistryUnavailable => write!(f, "element registry is unavailable"),

      ConfigLoadError => write!(f, "failed to load keyboard configuration"),

      IoError => write!(f, "i/o error"),

      ScriptParseError { line, message } => write!(f, "script error on line {line}: {message}"),
    }
  }
}

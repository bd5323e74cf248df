//! Pitch classes, notes, and the cyclic note sequence that maps a linear key index
//! to a note name and octave.

mod sequence;

pub use sequence::{sequence, NoteSequence};

use std::fmt::Display;
use std::str::FromStr;

use error_stack::{report, Result, ResultExt};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::PianoKeysError;

/// The number of pitch classes in an octave.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// One of the twelve chromatic note names.
///
/// Discriminants follow the A-rooted ordering used by the keyboard, so
/// `PitchClass::A as u8 == 0` and `PitchClass::Gsh as u8 == 11`.
#[derive(
  Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PitchClass {
  A = 0,
  #[serde(rename = "A#")]
  Ash,
  B,
  C,
  #[serde(rename = "C#")]
  Csh,
  D,
  #[serde(rename = "D#")]
  Dsh,
  E,
  F,
  #[serde(rename = "F#")]
  Fsh,
  G,
  #[serde(rename = "G#")]
  Gsh,
}

impl PitchClass {
  /// All pitch classes, starting from A.
  pub fn all() -> [PitchClass; 12] {
    use PitchClass::*;
    [A, Ash, B, C, Csh, D, Dsh, E, F, Fsh, G, Gsh]
  }

  pub fn index(&self) -> u8 {
    *self as u8
  }

  /// Returns the pitch class `steps` semitones above this one, wrapping at the octave.
  ///
  /// ```rust
  /// use piano_keys_core::notes::PitchClass;
  ///
  /// assert_eq!(PitchClass::A.offset(3), PitchClass::C);
  /// assert_eq!(PitchClass::Gsh.offset(1), PitchClass::A);
  /// ```
  pub fn offset(&self, steps: usize) -> PitchClass {
    let idx = (self.index() as usize + steps) % PITCH_CLASS_COUNT as usize;
    // idx is always in range
    PitchClass::from_usize(idx).unwrap_or(*self)
  }

  pub fn name(&self) -> &'static str {
    use PitchClass::*;
    match self {
      A => "A",
      Ash => "A#",
      B => "B",
      C => "C",
      Csh => "C#",
      D => "D",
      Dsh => "D#",
      E => "E",
      F => "F",
      Fsh => "F#",
      G => "G",
      Gsh => "G#",
    }
  }

  pub fn is_sharp(&self) -> bool {
    self.name().contains('#')
  }
}

impl Display for PitchClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for PitchClass {
  type Err = error_stack::Report<PianoKeysError>;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    PitchClass::all()
      .into_iter()
      .find(|p| p.name() == s)
      .ok_or_else(|| report!(PianoKeysError::InvalidPitchClass(s.to_string())))
  }
}

/// A pitch class in a specific octave. Octave numbering starts at zero with the first
/// key of a keyboard and increments at each "C".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
  pub name: PitchClass,
  pub octave: u32,
}

impl Note {
  pub fn new(name: PitchClass, octave: u32) -> Note {
    Note { name, octave }
  }

  pub fn is_sharp(&self) -> bool {
    self.name.is_sharp()
  }

  /// The id of the rendered element for this note, e.g. `note-A#-0`.
  pub fn element_id(&self) -> String {
    format!("note-{self}")
  }

  /// Parses a note in `<pitch>-<octave>` form, e.g. `C#-4`.
  pub fn parse(s: &str) -> Result<Note, PianoKeysError> {
    let invalid = || report!(PianoKeysError::InvalidNote(s.to_string()));

    let (name, octave) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
    let name = name
      .parse::<PitchClass>()
      .change_context(PianoKeysError::InvalidNote(s.to_string()))?;
    let octave = octave.parse::<u32>().map_err(|_| invalid())?;
    Ok(Note { name, octave })
  }
}

impl Display for Note {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}-{}", self.name, self.octave)
  }
}

impl FromStr for Note {
  type Err = error_stack::Report<PianoKeysError>;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    Note::parse(s)
  }
}

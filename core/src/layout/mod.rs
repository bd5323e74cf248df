//! Computes where each key of a keyboard goes.
//!
//! Natural keys sit side by side, each one advancing a running cursor by the natural key
//! width. Sharp keys don't advance the cursor. They're placed a fixed distance to the right
//! of the preceding natural key, overlapping it and the next natural.
//!
//! ```text
//!   ┌──┬─┬─┬─┬──┬──┬─┬──
//!   │  │█│ │█│  │  │█│
//!   │  │█│ │█│  │  │█│
//!   │  └┬┘ └┬┘  │  └┬┘
//!   │ A │ B │ C │ D │ ...
//!   └───┴───┴───┴───┴──
//! ```

use crate::config::WidgetConfig;
use crate::notes::{sequence, Note};

/// Just a typedef for the floating point type used for coordinates, etc.
pub type Float = f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: Float,
  pub y: Float,
}

impl From<(Float, Float)> for Point {
  fn from(p: (Float, Float)) -> Self {
    Point { x: p.0, y: p.1 }
  }
}

/// Width of a natural key, and the distance the cursor advances for each one.
pub const NATURAL_WIDTH: Float = 10.0;
pub const NATURAL_HEIGHT: Float = 50.0;
pub const SHARP_WIDTH: Float = 6.0;
pub const SHARP_HEIGHT: Float = 30.0;
/// Distance from the left edge of a natural key to the left edge of the sharp that follows it.
pub const SHARP_OFFSET: Float = 7.0;
pub const KEY_TOP: Float = 1.0;
pub const VIEWPORT_HEIGHT: Float = 52.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
  Natural,
  Sharp,
}

impl KeyKind {
  pub fn of(note: &Note) -> KeyKind {
    if note.is_sharp() {
      KeyKind::Sharp
    } else {
      KeyKind::Natural
    }
  }

  /// The css class names used for keys of this kind.
  pub fn class_names(&self) -> &'static str {
    match self {
      KeyKind::Natural => "natural-note note",
      KeyKind::Sharp => "sharp-note note",
    }
  }
}

/// A single key with its position on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedKey {
  pub note: Note,
  pub kind: KeyKind,
  pub x: Float,
  pub y: Float,
  pub width: Float,
  pub height: Float,
}

impl PositionedKey {
  fn new(note: Note, x: Float) -> PositionedKey {
    let kind = KeyKind::of(&note);
    let (width, height) = match kind {
      KeyKind::Natural => (NATURAL_WIDTH, NATURAL_HEIGHT),
      KeyKind::Sharp => (SHARP_WIDTH, SHARP_HEIGHT),
    };
    PositionedKey {
      note,
      kind,
      x,
      y: KEY_TOP,
      width,
      height,
    }
  }

  pub fn contains(&self, p: Point) -> bool {
    p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
  }
}

/// The full set of keys for a configuration, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardLayout {
  keys: Vec<PositionedKey>,
  width: Float,
}

impl KeyboardLayout {
  /// Keys in z-order: every natural key first, then every sharp, so sharps draw on top.
  pub fn keys(&self) -> &[PositionedKey] {
    &self.keys
  }

  pub fn len(&self) -> usize {
    self.keys.len()
  }

  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }

  pub fn width(&self) -> Float {
    self.width
  }

  pub fn height(&self) -> Float {
    VIEWPORT_HEIGHT
  }

  pub fn natural_count(&self) -> usize {
    self.keys.iter().filter(|k| k.kind == KeyKind::Natural).count()
  }

  pub fn key(&self, note: &Note) -> Option<&PositionedKey> {
    self.keys.iter().find(|k| k.note == *note)
  }

  pub fn contains(&self, note: &Note) -> bool {
    self.key(note).is_some()
  }

  /// Returns the topmost key under the given point. Sharps are drawn over naturals,
  /// so they're checked first.
  pub fn key_at(&self, p: Point) -> Option<&PositionedKey> {
    self.keys.iter().rev().find(|k| k.contains(p))
  }
}

/// Lays out the first `key_count` notes of the sequence that starts at the configured pitch.
pub fn configure(config: &WidgetConfig) -> KeyboardLayout {
  let notes = sequence(config.starting_pitch).take(config.key_count);

  let mut cursor = KEY_TOP - NATURAL_WIDTH;
  let positioned: Vec<PositionedKey> = notes
    .map(|note| {
      let x = if note.is_sharp() {
        cursor + SHARP_OFFSET
      } else {
        cursor += NATURAL_WIDTH;
        cursor
      };
      PositionedKey::new(note, x)
    })
    .collect();

  let (mut keys, sharps): (Vec<PositionedKey>, Vec<PositionedKey>) = positioned
    .into_iter()
    .partition(|k| k.kind == KeyKind::Natural);
  let naturals = keys.len();
  keys.extend(sharps);

  KeyboardLayout {
    keys,
    width: (naturals as Float * NATURAL_WIDTH) + SHARP_WIDTH,
  }
}

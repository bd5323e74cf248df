//! The keyboard widget: a layout plus the set of keys currently held down.
//!
//! [PianoKeys] takes [Action]s and returns the [Effect]s they caused, in order. A pointer
//! press on a key first changes the key's state and then raises a notification:
//!
//! ```text
//!   Pointer(Down, A-0)  ──►  [KeyStateChanged(A-0, true),  Notify(note-down, A-0)]
//!   Pointer(Up, A-0)    ──►  [KeyStateChanged(A-0, false), Notify(note-up, A-0)]
//!   Pointer(Leave, A-0) ──►  []   (already released)
//! ```
//!
//! In read-only mode pointer actions are ignored, but `SetKeyDown` / `SetKeyUp` still work.
//! Any configuration change lays the keyboard out again and releases every key.

pub mod actions;
pub mod effects;

use std::collections::HashSet;

use log::debug;

use crate::config::WidgetConfig;
use crate::layout::{configure, KeyboardLayout, Point};
use crate::notes::{Note, PitchClass};
use crate::render::{color::KeyPalette, render_svg};

pub use actions::{Action, Pointer};
pub use effects::{Effect, Notification};

#[derive(Debug, Clone)]
pub struct PianoKeys {
  config: WidgetConfig,
  layout: KeyboardLayout,
  palette: KeyPalette,
  depressed: HashSet<Note>,
}

impl Default for PianoKeys {
  fn default() -> Self {
    PianoKeys::new(WidgetConfig::default())
  }
}

impl PianoKeys {
  pub fn new(config: WidgetConfig) -> PianoKeys {
    PianoKeys {
      config,
      layout: configure(&config),
      palette: KeyPalette::default(),
      depressed: HashSet::new(),
    }
  }

  pub fn with_palette(mut self, palette: KeyPalette) -> PianoKeys {
    self.palette = palette;
    self
  }

  pub fn config(&self) -> &WidgetConfig {
    &self.config
  }

  pub fn layout(&self) -> &KeyboardLayout {
    &self.layout
  }

  pub fn is_depressed(&self, note: &Note) -> bool {
    self.depressed.contains(note)
  }

  /// Currently depressed notes, in layout order.
  pub fn depressed_notes(&self) -> Vec<Note> {
    self
      .layout
      .keys()
      .iter()
      .map(|k| k.note)
      .filter(|n| self.depressed.contains(n))
      .collect()
  }

  /// Returns the note of the topmost key under `point`, if any.
  pub fn pointer_target(&self, point: Point) -> Option<Note> {
    self.layout.key_at(point).map(|k| k.note)
  }

  /// Replaces the configuration and lays the keyboard out again. All depressed state is lost.
  pub fn configure(&mut self, config: WidgetConfig) -> Vec<Effect> {
    self.dispatch(Action::Configure(config))
  }

  pub fn set_key_down(&mut self, pitch: PitchClass, octave: u32) -> Vec<Effect> {
    self.dispatch(Action::SetKeyDown(Note::new(pitch, octave)))
  }

  pub fn set_key_up(&mut self, pitch: PitchClass, octave: u32) -> Vec<Effect> {
    self.dispatch(Action::SetKeyUp(Note::new(pitch, octave)))
  }

  /// Applies an [Action] and returns the resulting [Effect]s.
  /// Actions that don't apply, like releasing a key that isn't held, return nothing.
  pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
    debug!("handling action {action}");

    let effects = match action {
      Action::Configure(config) => {
        self.config = config;
        self.layout = configure(&config);
        self.depressed.clear();
        vec![Effect::Rerendered]
      }

      Action::Pointer(_, note) if self.config.read_only => {
        debug!("ignoring pointer input on {note}: keyboard is read-only");
        vec![]
      }

      Action::Pointer(Pointer::Down, note) => match self.press(note) {
        Some(changed) => vec![changed, Effect::Notify(Notification::NoteDown(note))],
        None => vec![],
      },

      Action::Pointer(Pointer::Up | Pointer::Leave, note) => match self.release(note) {
        Some(changed) => vec![changed, Effect::Notify(Notification::NoteUp(note))],
        None => vec![],
      },

      Action::SetKeyDown(note) => self.press(note).into_iter().collect(),

      Action::SetKeyUp(note) => self.release(note).into_iter().collect(),
    };

    for e in &effects {
      debug!("effect: {e}");
    }
    effects
  }

  /// Marks a key as depressed, returning the state change if there was one.
  fn press(&mut self, note: Note) -> Option<Effect> {
    if !self.layout.contains(&note) {
      debug!("no key for {note}, ignoring");
      return None;
    }
    if self.depressed.insert(note) {
      Some(Effect::KeyStateChanged {
        note,
        depressed: true,
      })
    } else {
      None
    }
  }

  fn release(&mut self, note: Note) -> Option<Effect> {
    if self.depressed.remove(&note) {
      Some(Effect::KeyStateChanged {
        note,
        depressed: false,
      })
    } else {
      None
    }
  }

  /// Renders the current layout and key states as an SVG document.
  pub fn render_svg(&self) -> String {
    render_svg(&self.layout, &self.palette, |n| self.is_depressed(n))
  }
}

//! A piano keyboard widget: lays out a span of piano keys, renders them as SVG, and tracks
//! which keys are held down.
//!
//! ```rust
//! use piano_keys_core::{PianoKeys, WidgetConfig, Action, Pointer, Effect, Notification};
//! use piano_keys_core::notes::{Note, PitchClass};
//!
//! let mut keys = PianoKeys::new(WidgetConfig { key_count: 13, ..WidgetConfig::default() });
//! let c1 = Note::new(PitchClass::C, 1);
//!
//! let effects = keys.dispatch(Action::Pointer(Pointer::Down, c1));
//! assert_eq!(effects.last(), Some(&Effect::Notify(Notification::NoteDown(c1))));
//! assert!(keys.render_svg().contains(r#"id="note-C-1""#));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod notes;
pub mod registry;
pub mod render;
pub mod widget;

pub use config::WidgetConfig;
pub use error::PianoKeysError;
pub use layout::{configure, KeyboardLayout};
pub use widget::{Action, Effect, Notification, PianoKeys, Pointer};

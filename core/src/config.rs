//! Widget configuration, and the attribute / ini surfaces it can be read from.
//!
//! Attribute names match the ones used by the `<piano-keys>` element:
//!
//! - `key-count`: number of keys to draw (default 88)
//! - `starting-pitch`: pitch class of the leftmost key (default `A`)
//! - `keyboard-layout`: `AtoG` or `CtoB`, a named alternative to `starting-pitch`
//! - `read-only`: if present (with any value), pointer input is ignored

use std::path::Path;
use std::str::FromStr;

use error_stack::{report, Report, Result, ResultExt};
use ini::Ini;
use log::warn;

use crate::error::PianoKeysError;
use crate::notes::PitchClass;

pub const KEY_COUNT_ATTR: &str = "key-count";
pub const STARTING_PITCH_ATTR: &str = "starting-pitch";
pub const KEYBOARD_LAYOUT_ATTR: &str = "keyboard-layout";
pub const READ_ONLY_ATTR: &str = "read-only";

/// Name of the ini section read by [WidgetConfig::from_ini_str].
pub const INI_SECTION: &str = "piano";

pub const DEFAULT_KEY_COUNT: usize = 88;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
  pub key_count: usize,
  pub starting_pitch: PitchClass,
  pub read_only: bool,
}

impl Default for WidgetConfig {
  fn default() -> Self {
    WidgetConfig {
      key_count: DEFAULT_KEY_COUNT,
      starting_pitch: PitchClass::A,
      read_only: false,
    }
  }
}

/// Named keyboard layouts, identified by their first and last pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardLayoutName {
  AtoG,
  CtoB,
}

impl KeyboardLayoutName {
  pub fn starting_pitch(&self) -> PitchClass {
    match self {
      KeyboardLayoutName::AtoG => PitchClass::A,
      KeyboardLayoutName::CtoB => PitchClass::C,
    }
  }
}

impl FromStr for KeyboardLayoutName {
  type Err = Report<PianoKeysError>;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s {
      "AtoG" => Ok(KeyboardLayoutName::AtoG),
      "CtoB" => Ok(KeyboardLayoutName::CtoB),
      _ => Err(report!(PianoKeysError::InvalidLayoutName(s.to_string()))),
    }
  }
}

fn parse_key_count(s: &str) -> Result<usize, PianoKeysError> {
  s.trim()
    .parse::<usize>()
    .map_err(|e| report!(PianoKeysError::InvalidKeyCount(s.to_string())).attach_printable(e))
}

impl WidgetConfig {
  /// Builds a config from host attributes, starting from the defaults.
  ///
  /// Attributes are applied in order, so a later `starting-pitch` or `keyboard-layout`
  /// overrides an earlier one. Unknown attributes are ignored.
  ///
  /// ```rust
  /// use piano_keys_core::config::WidgetConfig;
  /// use piano_keys_core::notes::PitchClass;
  ///
  /// let config = WidgetConfig::from_attributes([("key-count", "13"), ("keyboard-layout", "CtoB")]).unwrap();
  /// assert_eq!(config.key_count, 13);
  /// assert_eq!(config.starting_pitch, PitchClass::C);
  /// assert!(!config.read_only);
  /// ```
  pub fn from_attributes<'a, I>(attrs: I) -> Result<WidgetConfig, PianoKeysError>
  where
    I: IntoIterator<Item = (&'a str, &'a str)>,
  {
    let mut config = WidgetConfig::default();
    for (name, value) in attrs {
      config.apply_attribute(name, value)?;
    }
    Ok(config)
  }

  /// Updates a single field from a named attribute.
  pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), PianoKeysError> {
    match name {
      KEY_COUNT_ATTR => self.key_count = parse_key_count(value)?,
      STARTING_PITCH_ATTR => self.starting_pitch = value.trim().parse()?,
      KEYBOARD_LAYOUT_ATTR => {
        let layout: KeyboardLayoutName = value.trim().parse()?;
        self.starting_pitch = layout.starting_pitch();
      }
      // presence is all that matters, like `hasAttribute`
      READ_ONLY_ATTR => self.read_only = true,
      other => warn!("ignoring unknown attribute {other}={value:?}"),
    }
    Ok(())
  }

  /// Reads a config from the `[piano]` section of an ini document.
  /// Missing sections or keys fall back to the defaults.
  pub fn from_ini_str(s: &str) -> Result<WidgetConfig, PianoKeysError> {
    let ini = Ini::load_from_str(s)
      .map_err(|e| report!(PianoKeysError::ConfigLoadError).attach_printable(e.to_string()))?;
    WidgetConfig::from_ini(&ini)
  }

  pub fn from_ini_file<P: AsRef<Path>>(path: P) -> Result<WidgetConfig, PianoKeysError> {
    let path = path.as_ref();
    let ini = Ini::load_from_file(path).map_err(|e| {
      report!(PianoKeysError::ConfigLoadError)
        .attach_printable(format!("unable to read {}: {e}", path.display()))
    })?;
    WidgetConfig::from_ini(&ini)
  }

  fn from_ini(ini: &Ini) -> Result<WidgetConfig, PianoKeysError> {
    match ini.section(Some(INI_SECTION)) {
      Some(section) => WidgetConfig::from_attributes(section.iter())
        .change_context(PianoKeysError::ConfigLoadError),
      None => {
        warn!("no [{INI_SECTION}] section found, using default configuration");
        Ok(WidgetConfig::default())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{KeyboardLayoutName, WidgetConfig};
  use crate::error::PianoKeysError;
  use crate::notes::PitchClass;

  #[test]
  fn defaults() {
    let config = WidgetConfig::from_attributes(Vec::<(&str, &str)>::new()).unwrap();
    assert_eq!(config, WidgetConfig::default());
    assert_eq!(config.key_count, 88);
    assert_eq!(config.starting_pitch, PitchClass::A);
    assert!(!config.read_only);
  }

  #[test]
  fn read_only_is_set_by_presence() {
    let config = WidgetConfig::from_attributes([("read-only", "true")]).unwrap();
    assert!(config.read_only);

    let config = WidgetConfig::from_attributes([("read-only", "")]).unwrap();
    assert!(config.read_only);
  }

  #[test]
  fn starting_pitch_and_layout() {
    let config = WidgetConfig::from_attributes([("starting-pitch", "G#")]).unwrap();
    assert_eq!(config.starting_pitch, PitchClass::Gsh);

    let config =
      WidgetConfig::from_attributes([("starting-pitch", "G#"), ("keyboard-layout", "AtoG")]).unwrap();
    assert_eq!(config.starting_pitch, PitchClass::A);

    assert_eq!("CtoB".parse::<KeyboardLayoutName>().unwrap(), KeyboardLayoutName::CtoB);
  }

  #[test]
  fn invalid_values_are_reported() {
    let err = WidgetConfig::from_attributes([("key-count", "-1")]).unwrap_err();
    assert_eq!(err.current_context(), &PianoKeysError::InvalidKeyCount("-1".to_string()));

    let err = WidgetConfig::from_attributes([("key-count", "lots")]).unwrap_err();
    assert_eq!(err.current_context(), &PianoKeysError::InvalidKeyCount("lots".to_string()));

    let err = WidgetConfig::from_attributes([("starting-pitch", "H")]).unwrap_err();
    assert_eq!(err.current_context(), &PianoKeysError::InvalidPitchClass("H".to_string()));

    let err = WidgetConfig::from_attributes([("keyboard-layout", "DtoC")]).unwrap_err();
    assert_eq!(err.current_context(), &PianoKeysError::InvalidLayoutName("DtoC".to_string()));
  }

  #[test]
  fn unknown_attributes_are_ignored() {
    let config = WidgetConfig::from_attributes([("color", "red"), ("key-count", "5")]).unwrap();
    assert_eq!(config.key_count, 5);
  }

  #[test]
  fn from_ini() {
    let config = WidgetConfig::from_ini_str(
      "[piano]\nkey-count = 25\nkeyboard-layout = CtoB\nread-only = yes\n",
    )
    .unwrap();
    assert_eq!(
      config,
      WidgetConfig {
        key_count: 25,
        starting_pitch: PitchClass::C,
        read_only: true,
      }
    );

    let config = WidgetConfig::from_ini_str("[other]\nkey-count = 25\n").unwrap();
    assert_eq!(config, WidgetConfig::default());

    let err = WidgetConfig::from_ini_str("[piano]\nkey-count = many\n").unwrap_err();
    assert_eq!(err.current_context(), &PianoKeysError::ConfigLoadError);
  }
}

//! Process-wide registry of element names.
//!
//! Defining the widget used to register a custom element as a side effect. Here it's an
//! explicit call, safe to repeat: the first registration of a name wins and later ones
//! report that it already exists.

use std::collections::HashSet;
use std::sync::Mutex;

use error_stack::{report, Result};
use lazy_static::lazy_static;
use log::{debug, info};

use crate::error::PianoKeysError;

/// The element name the keyboard is registered under by default.
pub const DEFAULT_ELEMENT_NAME: &str = "piano-keys";

lazy_static! {
  static ref REGISTERED: Mutex<HashSet<String>> = Mutex::new(HashSet::new());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
  Registered,
  AlreadyRegistered,
}

/// Checks that `name` is a usable custom element name: it must start with a lowercase
/// ASCII letter, contain a hyphen, and have no uppercase letters or whitespace.
pub fn validate_element_name(name: &str) -> Result<(), PianoKeysError> {
  let starts_lower = name.chars().next().map_or(false, |c| c.is_ascii_lowercase());
  let has_hyphen = name.contains('-');
  let no_upper_or_space = !name.chars().any(|c| c.is_uppercase() || c.is_whitespace());

  if starts_lower && has_hyphen && no_upper_or_space {
    Ok(())
  } else {
    Err(report!(PianoKeysError::InvalidElementName(name.to_string())))
  }
}

pub fn register_element(name: &str) -> Result<Registration, PianoKeysError> {
  validate_element_name(name)?;

  let mut registered = REGISTERED
    .lock()
    .map_err(|_| report!(PianoKeysError::RegistryUnavailable))?;

  if registered.insert(name.to_string()) {
    info!("registered element <{name}>");
    Ok(Registration::Registered)
  } else {
    debug!("element <{name}> is already registered");
    Ok(Registration::AlreadyRegistered)
  }
}

pub fn is_registered(name: &str) -> bool {
  REGISTERED
    .lock()
    .map(|r| r.contains(name))
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use super::{is_registered, register_element, validate_element_name, Registration};
  use crate::error::PianoKeysError;

  #[test]
  fn registration_is_idempotent() {
    assert!(!is_registered("test-keys-idempotent"));
    assert_eq!(register_element("test-keys-idempotent").unwrap(), Registration::Registered);
    assert_eq!(
      register_element("test-keys-idempotent").unwrap(),
      Registration::AlreadyRegistered
    );
    assert!(is_registered("test-keys-idempotent"));
  }

  #[test]
  fn element_names_are_validated() {
    assert!(validate_element_name("piano-keys").is_ok());
    assert!(validate_element_name("x-1").is_ok());

    for bad in ["piano", "Piano-keys", "-keys", "piano-Keys", "piano keys", "", "1-keys"] {
      let err = validate_element_name(bad).unwrap_err();
      assert_eq!(err.current_context(), &PianoKeysError::InvalidElementName(bad.to_string()));
    }

    assert!(register_element("nohyphen").is_err());
    assert!(!is_registered("nohyphen"));
  }
}

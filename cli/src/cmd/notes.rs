use error_stack::Result;

use piano_keys_core::notes::{sequence, PitchClass};
use piano_keys_core::PianoKeysError;

pub fn run_notes(start: PitchClass, count: usize) -> Result<(), PianoKeysError> {
  for note in sequence(start).take(count) {
    println!("{note}");
  }
  Ok(())
}

use super::{Note, PitchClass, PITCH_CLASS_COUNT};

/// An endless iterator over consecutive chromatic notes, starting from a given pitch class.
///
/// The octave starts at zero and increments every time the sequence reaches C, except when
/// C is the very first note. Octave boundaries therefore always fall on C, no matter where
/// the sequence begins.
///
/// The sequence can't be rewound; create a new one to start over.
#[derive(Debug, Clone)]
pub struct NoteSequence {
  start: PitchClass,
  position: usize,
  octave: u32,
  first: bool,
}

impl NoteSequence {
  pub fn new(start: PitchClass) -> NoteSequence {
    NoteSequence {
      start,
      position: 0,
      octave: 0,
      first: true,
    }
  }

  pub fn start(&self) -> PitchClass {
    self.start
  }
}

impl Iterator for NoteSequence {
  type Item = Note;

  fn next(&mut self) -> Option<Note> {
    let name = self.start.offset(self.position);
    if name == PitchClass::C && !self.first {
      self.octave += 1;
    }
    self.first = false;
    self.position = (self.position + 1) % PITCH_CLASS_COUNT as usize;
    Some(Note::new(name, self.octave))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (usize::MAX, None)
  }
}

/// Shorthand for [NoteSequence::new].
///
/// ```rust
/// use piano_keys_core::notes::{sequence, Note, PitchClass};
///
/// let notes: Vec<Note> = sequence(PitchClass::B).take(2).collect();
/// assert_eq!(notes, vec![Note::new(PitchClass::B, 0), Note::new(PitchClass::C, 1)]);
/// ```
pub fn sequence(start: PitchClass) -> NoteSequence {
  NoteSequence::new(start)
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::sequence;
  use crate::notes::{Note, PitchClass};
  use PitchClass::*;

  fn notes(start: PitchClass, n: usize) -> Vec<Note> {
    sequence(start).take(n).collect()
  }

  #[test]
  fn first_note_is_start_pitch_in_octave_zero() {
    for p in PitchClass::all() {
      assert_eq!(sequence(p).next(), Some(Note::new(p, 0)));
    }
  }

  #[test]
  fn c_to_b() {
    let expected: Vec<Note> = [C, Csh, D, Dsh, E, F, Fsh, G, Gsh, A, Ash, B]
      .into_iter()
      .map(|p| Note::new(p, 0))
      .chain(std::iter::once(Note::new(C, 1)))
      .collect();
    assert_eq!(notes(C, 13), expected);
  }

  #[test]
  fn a_to_g_sharp() {
    let got = notes(A, 12);
    assert_eq!(&got[..3], &[Note::new(A, 0), Note::new(Ash, 0), Note::new(B, 0)]);
    for n in &got[3..] {
      assert_eq!(n.octave, 1, "{n} should be in octave 1");
    }
    assert_eq!(got[3], Note::new(C, 1));
    assert_eq!(got[11], Note::new(Gsh, 1));
  }

  #[test]
  fn octave_boundary_follows_c_from_g_sharp() {
    let got = notes(Gsh, 5);
    assert_eq!(got[3], Note::new(B, 0));
    assert_eq!(got[4], Note::new(C, 1));
  }

  #[test]
  fn octave_increments_only_at_c() {
    for start in PitchClass::all() {
      let got = notes(start, 100);
      for pair in got.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.name == C {
          assert_eq!(next.octave, prev.octave + 1);
        } else {
          assert_eq!(next.octave, prev.octave);
        }
      }
    }
  }

  #[test]
  fn twelve_notes_cover_every_pitch_class_once() {
    for start in PitchClass::all() {
      let names: HashSet<PitchClass> = notes(start, 12).into_iter().map(|n| n.name).collect();
      assert_eq!(names.len(), 12);
    }
  }

  #[test]
  fn full_88_key_piano_ends_on_c8() {
    let last = sequence(A).nth(87).unwrap();
    assert_eq!(last, Note::new(C, 8));
  }
}

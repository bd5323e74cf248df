//! Renders a [KeyboardLayout] as an SVG document.
//!
//! Every key becomes a `<rect>` that can be addressed by note, either by id
//! (`#note-C#-4`) or by data attributes (`[data-note="C#"][data-octave="4"]`), and carries
//! a `natural-note` or `sharp-note` class for styling.

pub mod color;

use std::fmt::Write;

use crate::layout::{KeyKind, KeyboardLayout, PositionedKey};
use crate::notes::Note;

use self::color::{color_hex, KeyPalette};

const PRESSED_TRANSFORM: &str = "scale(1 0.95)";
const RELEASED_TRANSFORM: &str = "scale(1 1)";

/// Returns the `fill` and `transform` attribute values for a key in the given state.
pub fn key_style(palette: &KeyPalette, kind: KeyKind, depressed: bool) -> (String, &'static str) {
  match (kind, depressed) {
    (_, true) => (color_hex(&palette.depressed_fill), PRESSED_TRANSFORM),
    (KeyKind::Natural, false) => (color_hex(&palette.natural_fill), RELEASED_TRANSFORM),
    (KeyKind::Sharp, false) => (color_hex(&palette.sharp_fill), RELEASED_TRANSFORM),
  }
}

fn key_rect(out: &mut String, palette: &KeyPalette, key: &PositionedKey, depressed: bool) {
  let (fill, transform) = key_style(palette, key.kind, depressed);
  let stroke = color_hex(&palette.stroke);
  let Note { name, octave } = key.note;
  // writing into a String can't fail
  let _ = writeln!(
    out,
    r#"    <rect id="{id}" class="{class}" data-note="{name}" data-octave="{octave}" x="{x}" y="{y}" width="{w}" height="{h}" stroke="{stroke}" fill="{fill}" transform="{transform}"></rect>"#,
    id = key.note.element_id(),
    class = key.kind.class_names(),
    x = key.x,
    y = key.y,
    w = key.width,
    h = key.height,
  );
}

/// Renders the layout, asking `is_depressed` for the state of each key.
pub fn render_svg<F>(layout: &KeyboardLayout, palette: &KeyPalette, is_depressed: F) -> String
where
  F: Fn(&Note) -> bool,
{
  let mut out = String::new();
  let _ = writeln!(
    out,
    r#"<svg viewBox="0 0 {} {}" version="1.1" xmlns="http://www.w3.org/2000/svg">"#,
    layout.width(),
    layout.height()
  );
  out.push_str("  <g>\n");
  for key in layout.keys() {
    key_rect(&mut out, palette, key, is_depressed(&key.note));
  }
  out.push_str("  </g>\n</svg>\n");
  out
}

#[cfg(test)]
mod tests {
  use super::{key_style, render_svg};
  use crate::config::WidgetConfig;
  use crate::layout::{configure, KeyKind};
  use crate::notes::{Note, PitchClass};
  use crate::render::color::KeyPalette;

  fn small_layout() -> crate::layout::KeyboardLayout {
    configure(&WidgetConfig {
      key_count: 3,
      ..WidgetConfig::default()
    })
  }

  #[test]
  fn renders_one_rect_per_key() {
    let svg = render_svg(&configure(&WidgetConfig::default()), &KeyPalette::default(), |_| false);
    assert_eq!(svg.matches("<rect ").count(), 88);
    assert_eq!(svg.matches(r#"class="natural-note note""#).count(), 52);
    assert_eq!(svg.matches(r#"class="sharp-note note""#).count(), 36);
  }

  #[test]
  fn viewbox_matches_layout_width() {
    let svg = render_svg(&small_layout(), &KeyPalette::default(), |_| false);
    assert!(svg.starts_with(r#"<svg viewBox="0 0 26 52""#), "{svg}");
  }

  #[test]
  fn sharps_render_after_naturals() {
    let svg = render_svg(&small_layout(), &KeyPalette::default(), |_| false);
    let a = svg.find(r#"id="note-A-0""#).unwrap();
    let b = svg.find(r#"id="note-B-0""#).unwrap();
    let a_sharp = svg.find(r#"id="note-A#-0""#).unwrap();
    assert!(a < b && b < a_sharp);
  }

  #[test]
  fn keys_are_addressable_by_data_attributes() {
    let svg = render_svg(&small_layout(), &KeyPalette::default(), |_| false);
    assert!(svg.contains(r#"data-note="A#" data-octave="0" x="8" y="1" width="6" height="30""#));
  }

  #[test]
  fn depressed_keys_are_grey() {
    let a = Note::new(PitchClass::A, 0);
    let svg = render_svg(&small_layout(), &KeyPalette::default(), |n| *n == a);
    let line = svg.lines().find(|l| l.contains(r#"id="note-A-0""#)).unwrap();
    assert!(line.contains(r##"fill="#808080""##), "{line}");
    assert!(line.contains(r#"transform="scale(1 0.95)""#));

    let line = svg.lines().find(|l| l.contains(r#"id="note-B-0""#)).unwrap();
    assert!(line.contains(r##"fill="#ffffff""##), "{line}");
  }

  #[test]
  fn released_fill_depends_on_kind() {
    let palette = KeyPalette::default();
    assert_eq!(key_style(&palette, KeyKind::Natural, false).0, "#ffffff");
    assert_eq!(key_style(&palette, KeyKind::Sharp, false).0, "#555555");
    assert_eq!(key_style(&palette, KeyKind::Sharp, true).0, "#808080");
  }
}

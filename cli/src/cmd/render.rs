use std::fs;
use std::path::PathBuf;

use error_stack::{report, Result};
use log::{debug, info};

use piano_keys_core::notes::Note;
use piano_keys_core::{PianoKeys, PianoKeysError, WidgetConfig};

/// Writes `svg` to the given file, or to stdout.
pub fn write_svg(svg: &str, output: Option<&PathBuf>) -> Result<(), PianoKeysError> {
  match output {
    Some(path) => {
      fs::write(path, svg).map_err(|e| {
        report!(PianoKeysError::IoError)
          .attach_printable(format!("unable to write {}: {e}", path.display()))
      })?;
      info!("wrote {}", path.display());
    }
    None => print!("{svg}"),
  }
  Ok(())
}

pub fn run_render(
  config: WidgetConfig,
  down: &[String],
  output: Option<&PathBuf>,
) -> Result<(), PianoKeysError> {
  let mut keys = PianoKeys::new(config);
  for s in down {
    let note = Note::parse(s)?;
    let effects = keys.set_key_down(note.name, note.octave);
    debug!("set {note} down: {} effect(s)", effects.len());
  }

  write_svg(&keys.render_svg(), output)
}

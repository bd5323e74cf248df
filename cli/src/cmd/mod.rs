mod notes;
mod render;
mod replay;

use clap::{Args, Subcommand};
use error_stack::Result;
use std::path::PathBuf;

use piano_keys_core::config::{
  WidgetConfig, KEYBOARD_LAYOUT_ATTR, KEY_COUNT_ATTR, READ_ONLY_ATTR, STARTING_PITCH_ATTR,
};
use piano_keys_core::notes::PitchClass;
use piano_keys_core::PianoKeysError;

use self::{notes::run_notes, render::run_render, replay::run_replay};

/// Keyboard configuration flags shared by the commands that build a keyboard.
#[derive(Args, Debug)]
pub struct ConfigArgs {
  /// Read the `[piano]` section of an ini file first; other flags override it
  #[clap(long, value_parser)]
  config: Option<PathBuf>,

  /// Number of keys to draw [default: 88]
  #[clap(long)]
  key_count: Option<String>,

  /// Pitch class of the leftmost key, e.g. A or C# [default: A]
  #[clap(long)]
  starting_pitch: Option<String>,

  /// Named layout, AtoG or CtoB
  #[clap(long)]
  keyboard_layout: Option<String>,

  /// Ignore pointer input
  #[clap(long)]
  read_only: bool,
}

impl ConfigArgs {
  pub fn to_config(&self) -> Result<WidgetConfig, PianoKeysError> {
    let mut config = match &self.config {
      Some(path) => WidgetConfig::from_ini_file(path)?,
      None => WidgetConfig::default(),
    };

    let attrs = [
      (KEY_COUNT_ATTR, self.key_count.as_deref()),
      (STARTING_PITCH_ATTR, self.starting_pitch.as_deref()),
      (KEYBOARD_LAYOUT_ATTR, self.keyboard_layout.as_deref()),
      (READ_ONLY_ATTR, self.read_only.then(|| "")),
    ];
    for (name, value) in attrs {
      if let Some(value) = value {
        config.apply_attribute(name, value)?;
      }
    }
    log::debug!("using config {config:?}");
    Ok(config)
  }
}

#[derive(Subcommand)]
pub enum CliCommand {
  /// Prints the note sequence that starts at the given pitch class
  Notes {
    /// Pitch class of the first note
    #[clap(long, default_value = "A")]
    start: String,

    #[clap(long, default_value_t = 12)]
    count: usize,
  },

  /// Renders the keyboard as SVG
  Render {
    #[clap(flatten)]
    config: ConfigArgs,

    /// Mark a key as held down, e.g. --down C#-4. May be repeated
    #[clap(long)]
    down: Vec<String>,

    /// Write to this file instead of stdout
    #[clap(long, short, value_parser)]
    output: Option<PathBuf>,
  },

  /// Replays a script of pointer events and prints each notification as a JSON line
  Replay {
    #[clap(value_parser)]
    script: PathBuf,

    #[clap(flatten)]
    config: ConfigArgs,

    /// Write the final keyboard state as SVG to this file
    #[clap(long, value_parser)]
    svg: Option<PathBuf>,
  },
}

impl CliCommand {
  pub fn run(&self) -> Result<(), PianoKeysError> {
    match self {
      Self::Notes { start, count } => run_notes(start.parse::<PitchClass>()?, *count),

      Self::Render {
        config,
        down,
        output,
      } => run_render(config.to_config()?, down, output.as_ref()),

      Self::Replay {
        script,
        config,
        svg,
      } => run_replay(script, config.to_config()?, svg.as_ref()),
    }
  }
}

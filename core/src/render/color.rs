use palette::Srgb;

/// Colors used when drawing keys.
#[derive(Debug, Clone, Copy)]
pub struct KeyPalette {
  pub natural_fill: Srgb<u8>,
  pub sharp_fill: Srgb<u8>,
  pub depressed_fill: Srgb<u8>,
  pub stroke: Srgb<u8>,
}

impl Default for KeyPalette {
  fn default() -> Self {
    KeyPalette {
      natural_fill: Srgb::new(0xff, 0xff, 0xff),
      sharp_fill: Srgb::new(0x55, 0x55, 0x55),
      depressed_fill: Srgb::new(0x80, 0x80, 0x80),
      stroke: Srgb::new(0x55, 0x55, 0x55),
    }
  }
}

pub fn color_hex(col: &Srgb<u8>) -> String {
  format!("#{col:x}")
}

#[cfg(test)]
mod tests {
  use palette::Srgb;

  use super::color_hex;

  #[test]
  fn hex_is_zero_padded() {
    assert_eq!(color_hex(&Srgb::new(0x0a, 0x00, 0xff)), "#0a00ff");
  }
}

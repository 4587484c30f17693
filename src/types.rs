use micromath::vector::Vector3d;

/// Decoded raw acceleration counts per axis.
pub type SignedAxisReading = Vector3d<i16>;

/// Acceleration per axis in units of standard gravity.
pub type ForceVector = Vector3d<f32>;

/// Low and high output register bytes of a single axis, as read off the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAxisPair {
  pub low: u8,
  pub high: u8,
}

impl RawAxisPair {
  pub const fn new(low: u8, high: u8) -> Self {
    Self { low, high }
  }

  /// Decode the pair into a signed count.
  ///
  /// The bytes are combined little-endian, sign-extended from 16 bits and
  /// then bitwise inverted, as the LIS331 output handling prescribes. The
  /// inversion is kept bit-for-bit: `(0x00, 0x00)` decodes to `-1`,
  /// `(0xFF, 0x7F)` to `!32767` and `(0x00, 0x80)` to `!-32768`.
  pub const fn decode(self) -> i16 {
    let mut raw = (self.low as i32) | ((self.high as i32) << 8);
    if raw > 32767 {
      raw -= 65536;
    }
    !(raw as i16)
  }
}

/// Output register bytes for all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAxes {
  pub x: RawAxisPair,
  pub y: RawAxisPair,
  pub z: RawAxisPair,
}

impl RawAxes {
  /// Build from bytes in register order: X_L, X_H, Y_L, Y_H, Z_L, Z_H.
  pub const fn from_bytes(b: [u8; 6]) -> Self {
    RawAxes {
      x: RawAxisPair::new(b[0], b[1]),
      y: RawAxisPair::new(b[2], b[3]),
      z: RawAxisPair::new(b[4], b[5]),
    }
  }

  pub fn decode(self) -> SignedAxisReading {
    Vector3d { x: self.x.decode(), y: self.y.decode(), z: self.z.decode() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_bytes_decode_to_minus_one() {
    assert_eq!(RawAxisPair::new(0x00, 0x00).decode(), -1);
  }

  #[test]
  fn positive_boundary_is_inverted_without_sign_flip() {
    assert_eq!(RawAxisPair::new(0xFF, 0x7F).decode(), !32767i16);
    assert_eq!(RawAxisPair::new(0xFF, 0x7F).decode(), -32768);
  }

  #[test]
  fn negative_boundary_is_sign_flipped_then_inverted() {
    assert_eq!(RawAxisPair::new(0x00, 0x80).decode(), !(-32768i16));
    assert_eq!(RawAxisPair::new(0x00, 0x80).decode(), 32767);
  }

  #[test]
  fn all_ones_decode_to_zero() {
    // 0xFFFF -> -1 -> !(-1) == 0
    assert_eq!(RawAxisPair::new(0xFF, 0xFF).decode(), 0);
  }

  #[test]
  fn low_byte_is_least_significant() {
    assert_eq!(RawAxisPair::new(0x34, 0x12).decode(), !0x1234i16);
  }

  #[test]
  fn decoding_is_pure() {
    let axes = RawAxes::from_bytes([0x10, 0x20, 0x30, 0x40, 0x50, 0xA0]);
    let first = axes.decode();
    for _ in 0..8 {
      assert_eq!(axes.decode(), first);
    }
  }

  #[test]
  fn axes_are_taken_in_register_order() {
    let axes = RawAxes::from_bytes([0xFF, 0xFF, 0x00, 0x00, 0x00, 0x80]);
    assert_eq!(axes.decode(), Vector3d { x: 0, y: -1, z: 32767 });
  }
}

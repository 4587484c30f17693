//! Startup configuration.

use crate::{accel::AccelRange, danger::DebouncePolicy, defs::*, Error};

/// Monitor configuration, fixed for the lifetime of a [`SamplingCycle`](crate::SamplingCycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
  /// 7-bit I2C address of the accelerometer.
  pub address: u8,
  /// Full-scale range in g. Must be 6, 12 or 24.
  pub scale_g: u8,
  /// Interval between samples in `run`.
  pub sample_period_ms: u32,
  pub debounce: DebouncePolicy,
}

impl MonitorConfig {
  /// Validate the configured scale. Anything other than 6, 12 or 24 is a
  /// hard error; sampling with a mismatched conversion factor would report
  /// wrong physical units.
  pub fn range<E>(&self) -> Result<AccelRange, Error<E>> {
    AccelRange::from_full_scale(self.scale_g).ok_or(Error::InvalidScale(self.scale_g))
  }
}

impl Default for MonitorConfig {
  fn default() -> Self {
    MonitorConfig {
      address: ADDR_SA0_HIGH,
      scale_g: DEFAULT_SCALE_G,
      sample_period_ms: DEFAULT_SAMPLE_PERIOD_MS,
      debounce: DebouncePolicy::Literal,
    }
  }
}

//! Reading and alert records plus the seams they are written through.
//!
//! Both records render as one tab-separated line:
//!
//! ```text
//! <timestamp>\tx: <gx>\ty: <gy>\tz: <gz>
//! ```
//!
//! g values are printed with every digit of their exact value and a trailing
//! `.0` for whole numbers (`10.0`, `9.999755859375`, `-0.000732421875`).

use core::fmt;

use crate::ForceVector;

/// Source of timestamps for records.
pub trait Clock {
  type Stamp: fmt::Display + Clone;

  fn now(&mut self) -> Self::Stamp;
}

/// Append-only destination for readings and alerts.
///
/// Errors are fatal to the sampling loop; there is no fallback destination.
pub trait Journal<T> {
  type Error;

  /// Append to the all-readings log. Called once per sample.
  fn record_reading(&mut self, reading: &Reading<T>) -> Result<(), Self::Error>;

  /// Append to the alert log. Called only for confirmed alerts.
  fn record_alert(&mut self, alert: &AlertRecord<T>) -> Result<(), Self::Error>;
}

impl<T, J: Journal<T>> Journal<T> for &mut J {
  type Error = J::Error;

  fn record_reading(&mut self, reading: &Reading<T>) -> Result<(), Self::Error> {
    (**self).record_reading(reading)
  }

  fn record_alert(&mut self, alert: &AlertRecord<T>) -> Result<(), Self::Error> {
    (**self).record_alert(alert)
  }
}

/// One sample, journaled regardless of classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading<T> {
  pub timestamp: T,
  pub force: ForceVector,
}

/// A triggered alert. Written once, never read back.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord<T> {
  pub timestamp: T,
  pub force: ForceVector,
}

impl<T: fmt::Display> fmt::Display for Reading<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_line(f, &self.timestamp, &self.force)
  }
}

impl<T: fmt::Display> fmt::Display for AlertRecord<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_line(f, &self.timestamp, &self.force)
  }
}

fn write_line(f: &mut fmt::Formatter<'_>, ts: &dyn fmt::Display, g: &ForceVector) -> fmt::Result {
  // Widened so every digit of the exact value is printed; `{:?}` keeps the `.0` on whole values.
  write!(f, "{}\tx: {:?}\ty: {:?}\tz: {:?}", ts, f64::from(g.x), f64::from(g.y), f64::from(g.z))
}

#[cfg(test)]
mod tests {
  use micromath::vector::Vector3d;

  use super::*;

  #[test]
  fn reading_line_layout() {
    let r = Reading { timestamp: "Thu Oct 16 12:00:00 2026", force: Vector3d { x: 10.0, y: 0.0, z: -0.5 } };
    assert_eq!(r.to_string(), "Thu Oct 16 12:00:00 2026\tx: 10.0\ty: 0.0\tz: -0.5");
  }

  #[test]
  fn alert_line_matches_reading_line() {
    let force = Vector3d { x: 5.0, y: -0.0234375, z: 1.0 };
    let r = Reading { timestamp: 7u32, force };
    let a = AlertRecord { timestamp: 7u32, force };
    assert_eq!(r.to_string(), a.to_string());
    assert_eq!(a.to_string(), "7\tx: 5.0\ty: -0.0234375\tz: 1.0");
  }

  #[test]
  fn g_values_keep_all_digits() {
    let force = Vector3d { x: 9.999755859375, y: -0.000732421875, z: 5.000244140625 };
    let r = Reading { timestamp: 0u32, force };
    assert_eq!(r.to_string(), "0\tx: 9.999755859375\ty: -0.000732421875\tz: 5.000244140625");
  }
}

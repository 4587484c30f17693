#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Fail-fast configuration**: an unsupported full-scale range aborts
//!   startup instead of producing silently wrong units
//! - **Async-first**: Built on `embedded-hal-async` I2C and delay traits
//! - **Explicit context**: bus, indicator, journal and clock are owned by one
//!   [`SamplingCycle`] and handed back on release
//! - **Bit-exact decoding**: raw output handling matches the device's
//!   documented sign treatment
//!
//! ## Module Organization
//!
//! - [`accel`]: Control registers, full-scale range and g conversion
//! - [`danger`]: Two-tier impact classification with debounce
//! - [`journal`]: Reading/alert records, journal and clock seams
//! - [`cycle`]: The sampling loop tying sensor, classifier, indicator and journal together
//! - [`config`]: Startup configuration
//!
//! ## Basic Usage
//!
//! ```no_run
//! # async fn example<I, D, P, J, C, T>(i2c: I, delay: D, led: P, journal: J, clock: C, mut ticker: T)
//! # where
//! #   I: embedded_hal_async::i2c::I2c,
//! #   D: embedded_hal_async::delay::DelayNs,
//! #   T: embedded_hal_async::delay::DelayNs,
//! #   P: embedded_hal::digital::OutputPin,
//! #   C: helmet_guardian::journal::Clock,
//! #   J: helmet_guardian::journal::Journal<C::Stamp>,
//! # {
//! use core::sync::atomic::AtomicBool;
//! use helmet_guardian::{MonitorConfig, SamplingCycle};
//!
//! static STOP: AtomicBool = AtomicBool::new(false);
//!
//! let mut monitor = match SamplingCycle::start(MonitorConfig::default(), i2c, delay, led, journal, clock).await {
//!   Ok(m) => m,
//!   Err(_) => return,
//! };
//! let _ = monitor.run(&mut ticker, &STOP).await;
//! let _parts = monitor.release();
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, i2c::*};

pub mod accel;
pub mod config;
pub mod cycle;
pub mod danger;
mod defs;
#[cfg(feature = "std")]
pub mod host;
pub mod journal;
pub(crate) mod rw;
#[cfg(test)]
mod testing;
mod types;

pub use config::MonitorConfig;
pub use cycle::{CycleError, SamplingCycle, TickReport};
pub use defs::{ADDR_SA0_HIGH, ADDR_SA0_LOW};
pub use types::*;

/// Driver error type.
///
/// This error type wraps the underlying I2C error and adds LIS331-specific
/// error conditions.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I2C communication error
  I2c(E),
  /// Configured full-scale range is not one of 6, 12 or 24 g
  InvalidScale(u8),
  /// Register contents could not be decoded
  Data,
}

/// LIS331HH device driver instance.
///
/// Owns the I2C bus and delay provider and remembers the device address
/// (`0x19` with SA0 high, `0x18` with SA0 low).
///
/// # Type Parameters
///
/// - `I`: I2C implementation (must implement `embedded_hal_async::i2c::I2c`)
/// - `D`: Delay provider (must implement `embedded_hal_async::delay::DelayNs`)
pub struct Lis331<I, D: DelayNs> {
  i2c: I,
  delay: D,
  address: SevenBitAddress,
}

impl<I, D> Lis331<I, D>
where
  I: I2c<SevenBitAddress>,
  D: DelayNs,
{
  /// Create a new LIS331 driver instance.
  ///
  /// # Arguments
  ///
  /// - `i2c`: I2C bus implementation
  /// - `delay`: Delay provider for timing operations
  /// - `address`: 7-bit device address
  pub fn new(i2c: I, delay: D, address: SevenBitAddress) -> Self {
    Self { i2c, delay, address }
  }

  pub fn address(&self) -> SevenBitAddress {
    self.address
  }

  /// Give back the bus and delay provider.
  pub fn release(self) -> (I, D) {
    (self.i2c, self.delay)
  }
}

//! In-crate fakes for the bus, delay, indicator pin, journal and clock.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital;
use embedded_hal_async::{delay::DelayNs, i2c};

use crate::journal::{AlertRecord, Clock, Journal, Reading};

#[derive(Debug)]
pub struct BusFault;

impl i2c::Error for BusFault {
  fn kind(&self) -> i2c::ErrorKind {
    i2c::ErrorKind::Other
  }
}

/// Register-file bus. A one-byte write sets the register pointer, a two-byte
/// write stores a value, reads return bytes at the pointer.
pub struct FakeBus {
  pub registers: [u8; 256],
  pub reads: Vec<u8>,
  pub writes: Vec<(u8, u8, u8)>,
  pub fail: bool,
  pointer: u8,
}

impl Default for FakeBus {
  fn default() -> Self {
    Self { registers: [0; 256], reads: Vec::new(), writes: Vec::new(), fail: false, pointer: 0 }
  }
}

impl FakeBus {
  /// Load the output registers, X_L through Z_H.
  pub fn set_output(&mut self, bytes: [u8; 6]) {
    self.registers[0x28..0x2E].copy_from_slice(&bytes);
  }
}

impl i2c::ErrorType for FakeBus {
  type Error = BusFault;
}

impl i2c::I2c for FakeBus {
  async fn transaction(&mut self, address: u8, operations: &mut [i2c::Operation<'_>]) -> Result<(), Self::Error> {
    if self.fail {
      return Err(BusFault);
    }
    for op in operations {
      match op {
        i2c::Operation::Write(bytes) => match **bytes {
          [reg] => self.pointer = reg,
          [reg, value] => {
            self.registers[reg as usize] = value;
            self.writes.push((address, reg, value));
          }
          _ => return Err(BusFault),
        },
        i2c::Operation::Read(buf) => {
          for b in buf.iter_mut() {
            self.reads.push(self.pointer);
            *b = self.registers[self.pointer as usize];
          }
        }
      }
    }
    Ok(())
  }
}

pub struct NoDelay;

impl DelayNs for NoDelay {
  async fn delay_ns(&mut self, _ns: u32) {}
}

/// Ticker that records each sleep and sets `stop` after `ticks` sleeps.
pub struct StopAfter<'a> {
  remaining: usize,
  stop: &'a AtomicBool,
  pub slept_ms: Vec<u32>,
}

impl<'a> StopAfter<'a> {
  pub fn new(ticks: usize, stop: &'a AtomicBool) -> Self {
    Self { remaining: ticks, stop, slept_ms: Vec::new() }
  }
}

impl DelayNs for StopAfter<'_> {
  async fn delay_ns(&mut self, _ns: u32) {}

  async fn delay_ms(&mut self, ms: u32) {
    self.slept_ms.push(ms);
    self.remaining = self.remaining.saturating_sub(1);
    if self.remaining == 0 {
      self.stop.store(true, Ordering::Release);
    }
  }
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
  fn kind(&self) -> digital::ErrorKind {
    digital::ErrorKind::Other
  }
}

#[derive(Default)]
pub struct FakePin {
  pub high: bool,
  pub history: Vec<bool>,
}

impl digital::ErrorType for FakePin {
  type Error = PinFault;
}

impl digital::OutputPin for FakePin {
  fn set_low(&mut self) -> Result<(), Self::Error> {
    self.high = false;
    self.history.push(false);
    Ok(())
  }

  fn set_high(&mut self) -> Result<(), Self::Error> {
    self.high = true;
    self.history.push(true);
    Ok(())
  }
}

#[derive(Debug)]
pub struct JournalFault;

/// Keeps rendered lines in memory.
#[derive(Default)]
pub struct MemJournal {
  pub readings: Vec<String>,
  pub alerts: Vec<String>,
  pub order: Vec<&'static str>,
  pub fail: bool,
}

impl<T: core::fmt::Display> Journal<T> for MemJournal {
  type Error = JournalFault;

  fn record_reading(&mut self, reading: &Reading<T>) -> Result<(), Self::Error> {
    if self.fail {
      return Err(JournalFault);
    }
    self.readings.push(reading.to_string());
    self.order.push("reading");
    Ok(())
  }

  fn record_alert(&mut self, alert: &AlertRecord<T>) -> Result<(), Self::Error> {
    if self.fail {
      return Err(JournalFault);
    }
    self.alerts.push(alert.to_string());
    self.order.push("alert");
    Ok(())
  }
}

/// Counts up from zero, one per call.
#[derive(Default)]
pub struct TickClock {
  next: u32,
}

impl Clock for TickClock {
  type Stamp = u32;

  fn now(&mut self) -> u32 {
    let t = self.next;
    self.next += 1;
    t
  }
}

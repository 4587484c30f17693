//! Host collaborators (`std` feature): append-only log files and a wall clock.

use std::{
  fmt,
  fs::{File, OpenOptions},
  io::{self, Write},
  path::Path,
};

use chrono::{DateTime, Local};

use crate::journal::{AlertRecord, Clock, Journal, Reading};

/// Default file name for every reading.
pub const ALL_READINGS_FILE: &str = "AllSensorData.txt";
/// Default file name for alerts.
pub const ALERTS_FILE: &str = "AlertData.txt";

/// Two append-only text files, one line per record.
///
/// Files are created if missing and never truncated. Each line is flushed
/// as it is written; both files close when the journal is dropped.
pub struct FileJournal {
  readings: File,
  alerts: File,
}

impl FileJournal {
  pub fn open(readings: impl AsRef<Path>, alerts: impl AsRef<Path>) -> io::Result<Self> {
    Ok(Self { readings: open_append(readings.as_ref())?, alerts: open_append(alerts.as_ref())? })
  }

  /// Open [`ALL_READINGS_FILE`] and [`ALERTS_FILE`] inside `dir`.
  pub fn open_in(dir: impl AsRef<Path>) -> io::Result<Self> {
    let dir = dir.as_ref();
    Self::open(dir.join(ALL_READINGS_FILE), dir.join(ALERTS_FILE))
  }
}

fn open_append(path: &Path) -> io::Result<File> {
  OpenOptions::new().create(true).append(true).open(path)
}

fn append_line(file: &mut File, line: &dyn fmt::Display) -> io::Result<()> {
  writeln!(file, "{}", line)?;
  file.flush()
}

impl<T: fmt::Display> Journal<T> for FileJournal {
  type Error = io::Error;

  fn record_reading(&mut self, reading: &Reading<T>) -> Result<(), Self::Error> {
    append_line(&mut self.readings, reading)
  }

  fn record_alert(&mut self, alert: &AlertRecord<T>) -> Result<(), Self::Error> {
    append_line(&mut self.alerts, alert)
  }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  type Stamp = CtimeStamp;

  fn now(&mut self) -> CtimeStamp {
    CtimeStamp(Local::now())
  }
}

/// Local time rendered in `ctime` layout, e.g. `Thu Oct 16 09:05:03 2026`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtimeStamp(pub DateTime<Local>);

impl fmt::Display for CtimeStamp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format("%a %b %e %H:%M:%S %Y"))
  }
}

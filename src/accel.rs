//! Accelerometer configuration and data reading.
//!
//! The LIS331HH is configured through two control registers: `CTRL_REG1`
//! (power mode, output data rate, axis enables) and `CTRL_REG4` (full-scale
//! range). Samples are read one output register at a time and converted to g
//! with the same [`AccelRange`] that was programmed into `CTRL_REG4`.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut imu: helmet_guardian::Lis331<impl embedded_hal_async::i2c::I2c, impl embedded_hal_async::delay::DelayNs>) {
//! use helmet_guardian::accel::AccelRange;
//!
//! imu.init(AccelRange::G24).await.unwrap();
//!
//! let force = imu.get_accel_data(AccelRange::G24).await.unwrap();
//! let _ = (force.x, force.y, force.z);
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, i2c::*};
use micromath::vector::Vector3d;

use super::{defs::*, Error, ForceVector, Lis331, RawAxes, SignedAxisReading};

impl<I, D, E> Lis331<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Program normal power mode at 50 Hz with all axes enabled, then the
  /// full-scale range. Waits out the turn-on time before returning.
  pub async fn init(&mut self, range: AccelRange) -> Result<(), Error<E>> {
    self.set_accel_conf(AccelConfig::default()).await?;
    self.set_range(range).await?;
    self.delay.delay_ms(TURN_ON_DELAY_MS).await;
    Ok(())
  }

  pub async fn get_accel_conf(&mut self) -> Result<AccelConfig, Error<E>> {
    self.read(Reg::CtrlReg1).await
  }

  pub async fn set_accel_conf(&mut self, cfg: AccelConfig) -> Result<(), Error<E>> {
    self.write(Reg::CtrlReg1, cfg).await
  }

  pub async fn get_range(&mut self) -> Result<AccelRange, Error<E>> {
    let r: RangeConfig = self.read(Reg::CtrlReg4).await?;
    Ok(r.range)
  }

  /// Write `CTRL_REG4` with only the full-scale bits set.
  pub async fn set_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
    self.write(Reg::CtrlReg4, RangeConfig::new(range)).await
  }

  /// Read the six output registers, one byte per transaction.
  pub async fn get_raw_axis_pairs(&mut self) -> Result<RawAxes, Error<E>> {
    let mut b = [0u8; 6];
    for (byte, reg) in b.iter_mut().zip(OUT_REGS) {
      *byte = self.read_u8(reg).await?;
    }
    Ok(RawAxes::from_bytes(b))
  }

  /// Read decoded raw counts.
  ///
  /// Use [`get_accel_data`](Self::get_accel_data) for values in g.
  pub async fn get_raw_accel_data(&mut self) -> Result<SignedAxisReading, Error<E>> {
    Ok(self.get_raw_axis_pairs().await?.decode())
  }

  /// Read acceleration in g for the given range. The range must match the
  /// one passed to [`init`](Self::init).
  pub async fn get_accel_data(&mut self, range: AccelRange) -> Result<ForceVector, Error<E>> {
    let raw = self.get_raw_accel_data().await?;
    Ok(range.convert(raw))
  }
}

/// `CTRL_REG1`: axis enables, output data rate and power mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct AccelConfig {
  pub x_en: bool,
  pub y_en: bool,
  pub z_en: bool,
  #[bits(2)]
  pub odr: OutputDataRate,
  #[bits(3)]
  pub mode: PowerMode,
}

impl Default for AccelConfig {
  /// Normal mode, 50 Hz, all axes: `0x27`.
  fn default() -> Self {
    AccelConfig { x_en: true, y_en: true, z_en: true, odr: OutputDataRate::Hz50, mode: PowerMode::Normal }
  }
}

/// `CTRL_REG4`: SPI mode, self test, full-scale selection, endianness and
/// block data update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct RangeConfig {
  pub spi_3wire: bool,
  pub self_test: bool,
  #[skip(1)]
  pub self_test_sign: bool,
  #[bits(2)]
  pub range: AccelRange,
  pub big_endian: bool,
  pub block_update: bool,
}

impl RangeConfig {
  pub const fn new(range: AccelRange) -> Self {
    Self { spi_3wire: false, self_test: false, self_test_sign: false, range, big_endian: false, block_update: false }
  }
}

/// Normal-mode output data rates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
  Hz50 = 0x00,
  Hz100 = 0x01,
  Hz400 = 0x02,
  Hz1000 = 0x03,
}

impl From<OutputDataRate> for u8 {
  fn from(odr: OutputDataRate) -> Self {
    odr as u8
  }
}

impl TryFrom<u8> for OutputDataRate {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(OutputDataRate::Hz50),
      0x01 => Ok(OutputDataRate::Hz100),
      0x02 => Ok(OutputDataRate::Hz400),
      0x03 => Ok(OutputDataRate::Hz1000),
      _ => Err(()),
    }
  }
}

/// Power mode. The low-power modes run at a fixed, slow output rate and
/// ignore [`OutputDataRate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
  PowerDown = 0x0,
  Normal = 0x1,
  LowPowerHz0_5 = 0x2,
  LowPowerHz1 = 0x3,
  LowPowerHz2 = 0x4,
  LowPowerHz5 = 0x5,
  LowPowerHz10 = 0x6,
}

impl From<PowerMode> for u8 {
  fn from(value: PowerMode) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for PowerMode {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x0 => Ok(PowerMode::PowerDown),
      0x1 => Ok(PowerMode::Normal),
      0x2 => Ok(PowerMode::LowPowerHz0_5),
      0x3 => Ok(PowerMode::LowPowerHz1),
      0x4 => Ok(PowerMode::LowPowerHz2),
      0x5 => Ok(PowerMode::LowPowerHz5),
      0x6 => Ok(PowerMode::LowPowerHz10),
      _ => Err(()),
    }
  }
}

/// Accelerometer full-scale range.
///
/// The discriminant is the `CTRL_REG4` FS field. The same value drives the
/// conversion factor, so register configuration and unit conversion cannot
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
  /// ±6g range
  G6 = 0x00,
  /// ±12g range
  G12 = 0x01,
  /// ±24g range
  G24 = 0x03,
}

impl AccelRange {
  /// Select the range for a configured full-scale value in g (6, 12 or 24).
  pub const fn from_full_scale(g: u8) -> Option<Self> {
    match g {
      6 => Some(AccelRange::G6),
      12 => Some(AccelRange::G12),
      24 => Some(AccelRange::G24),
      _ => None,
    }
  }

  pub const fn full_scale(self) -> u8 {
    match self {
      AccelRange::G6 => 6,
      AccelRange::G12 => 12,
      AccelRange::G24 => 24,
    }
  }

  /// `g = 2 * S * raw / 65536`. Linear, unclamped.
  pub fn to_g(self, raw: i16) -> f32 {
    (2. * f32::from(self.full_scale()) * f32::from(raw)) / COUNTS_SPAN
  }

  pub fn convert(self, raw: SignedAxisReading) -> ForceVector {
    Vector3d { x: self.to_g(raw.x), y: self.to_g(raw.y), z: self.to_g(raw.z) }
  }
}

impl From<AccelRange> for u8 {
  fn from(value: AccelRange) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for AccelRange {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(AccelRange::G6),
      0x01 => Ok(AccelRange::G12),
      0x03 => Ok(AccelRange::G24),
      _ => Err(()),
    }
  }
}

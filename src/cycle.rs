//! The sampling loop.
//!
//! [`SamplingCycle`] is the single owner of everything a running monitor
//! touches: the sensor driver, the indicator pin, the journal and the clock.
//! Each [`tick`](SamplingCycle::tick) reads one sample, decodes and converts
//! it, classifies it and performs the side effects in a fixed order:
//!
//! 1. on an alert, append to the alert journal and raise the indicator;
//! 2. always append the reading to the all-readings journal.
//!
//! The indicator is driven low once at startup and never cleared after an
//! alert raises it.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::OutputPin;
use embedded_hal_async::{delay::DelayNs, i2c::*};

use crate::{
  accel::AccelRange,
  danger::{Classification, DangerClassifier},
  journal::{AlertRecord, Clock, Journal, Reading},
  Error, ForceVector, Lis331, MonitorConfig,
};

/// Failure of a sampling step. All variants are fatal to [`SamplingCycle::run`].
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError<E, P, J> {
  /// Sensor configuration or bus failure
  Sensor(Error<E>),
  /// Indicator pin could not be driven
  Indicator(P),
  /// Journal write failed
  Journal(J),
}

impl<E, P, J> From<Error<E>> for CycleError<E, P, J> {
  fn from(e: Error<E>) -> Self {
    CycleError::Sensor(e)
  }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
  pub force: ForceVector,
  pub classification: Classification,
}

pub struct SamplingCycle<I, D: DelayNs, P, J, C> {
  sensor: Lis331<I, D>,
  range: AccelRange,
  indicator: P,
  journal: J,
  clock: C,
  classifier: DangerClassifier,
  sample_period_ms: u32,
}

impl<I, D, P, J, C, E> SamplingCycle<I, D, P, J, C>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
  P: OutputPin,
  C: Clock,
  J: Journal<C::Stamp>,
{
  /// Validate the configuration, clear the indicator and program the
  /// sensor. An unsupported scale aborts before the bus is touched.
  pub async fn start(
    config: MonitorConfig,
    i2c: I,
    delay: D,
    mut indicator: P,
    journal: J,
    clock: C,
  ) -> Result<Self, CycleError<E, P::Error, J::Error>> {
    let range = config.range::<E>()?;

    indicator.set_low().map_err(CycleError::Indicator)?;

    let mut sensor = Lis331::new(i2c, delay, config.address);
    sensor.init(range).await?;

    #[cfg(feature = "defmt")]
    defmt::info!("sampling started: addr={=u8:#x} range={}", config.address, range);

    Ok(Self {
      sensor,
      range,
      indicator,
      journal,
      clock,
      classifier: DangerClassifier::new(config.debounce),
      sample_period_ms: config.sample_period_ms,
    })
  }

  pub fn range(&self) -> AccelRange {
    self.range
  }

  pub fn classifier(&self) -> &DangerClassifier {
    &self.classifier
  }

  /// Run one sample through decode, conversion and classification, then
  /// journal it.
  pub async fn tick(&mut self) -> Result<TickReport, CycleError<E, P::Error, J::Error>> {
    let timestamp = self.clock.now();
    let force = self.sensor.get_accel_data(self.range).await?;
    let classification = self.classifier.classify(&force);

    #[cfg(feature = "defmt")]
    defmt::debug!("x={} y={} z={} g", force.x, force.y, force.z);

    if classification.is_alert() {
      #[cfg(feature = "defmt")]
      defmt::warn!("impact alert: {} x={} y={} z={}", classification, force.x, force.y, force.z);

      self
        .journal
        .record_alert(&AlertRecord { timestamp: timestamp.clone(), force })
        .map_err(CycleError::Journal)?;
      self.indicator.set_high().map_err(CycleError::Indicator)?;
    }

    self.journal.record_reading(&Reading { timestamp, force }).map_err(CycleError::Journal)?;

    Ok(TickReport { force, classification })
  }

  /// Tick every `sample_period_ms` until `stop` is set. The flag is checked
  /// before each tick; the first error ends the loop.
  pub async fn run<T: DelayNs>(
    &mut self,
    ticker: &mut T,
    stop: &AtomicBool,
  ) -> Result<(), CycleError<E, P::Error, J::Error>> {
    while !stop.load(Ordering::Acquire) {
      self.tick().await?;
      ticker.delay_ms(self.sample_period_ms).await;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("sampling stopped");

    Ok(())
  }

  /// Give back the bus, delay provider, indicator pin and journal.
  pub fn release(self) -> (I, D, P, J) {
    let (i2c, delay) = self.sensor.release();
    (i2c, delay, self.indicator, self.journal)
  }
}

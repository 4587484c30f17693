//! Impact classification.
//!
//! Every reading is checked against two strict thresholds on the absolute
//! value of each axis:
//!
//! - above 9 g on any axis is a high impact and alerts immediately;
//! - above 4 g on any axis is a moderate impact and alerts only once the
//!   debounce counter exceeds 4.
//!
//! The high-impact check runs first and short-circuits the moderate path, so
//! a single reading never produces two alerts.
//!
//! # Debounce
//!
//! [`DebouncePolicy::Literal`] reproduces the established device behavior:
//! the counter starts from zero on every call and spins over the *same*
//! reading at most five times. Because the condition cannot change inside the
//! spin, every moderate reading is confirmed. This does not detect a
//! sustained impact over time.
//!
//! [`DebouncePolicy::Windowed`] carries the counter across readings instead
//! and confirms after five consecutive moderate readings (about one second at
//! the default 5 Hz cadence). It changes alerting behavior and must be opted
//! into explicitly.

use crate::{defs::*, ForceVector};

/// How moderate impacts are confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePolicy {
  /// Per-call counter spinning over the unchanged reading.
  #[default]
  Literal,
  /// Counter carried across consecutive readings.
  Windowed,
}

/// Outcome of classifying a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Classification {
  /// All axes within ±4 g.
  Normal,
  /// Some axis above 4 g, none above 9 g. `count` is the debounce counter
  /// after this reading.
  Moderate { count: u32, confirmed: bool },
  /// Some axis above 9 g.
  HighImpact,
}

impl Classification {
  /// Whether this reading must be journaled as an alert and raise the indicator.
  pub fn is_alert(&self) -> bool {
    match self {
      Classification::Normal => false,
      Classification::Moderate { confirmed, .. } => *confirmed,
      Classification::HighImpact => true,
    }
  }
}

#[derive(Debug, Clone)]
pub struct DangerClassifier {
  policy: DebouncePolicy,
  counter: u32,
}

impl DangerClassifier {
  pub const fn new(policy: DebouncePolicy) -> Self {
    Self { policy, counter: 0 }
  }

  pub fn policy(&self) -> DebouncePolicy {
    self.policy
  }

  /// Debounce counter carried into the next reading. Always zero under
  /// [`DebouncePolicy::Literal`].
  pub fn counter(&self) -> u32 {
    self.counter
  }

  pub fn classify(&mut self, force: &ForceVector) -> Classification {
    if exceeds(force, HIGH_IMPACT_G) {
      self.counter = 0;
      return Classification::HighImpact;
    }

    if !exceeds(force, MODERATE_IMPACT_G) {
      self.counter = 0;
      return Classification::Normal;
    }

    match self.policy {
      DebouncePolicy::Literal => {
        let count = spin_debounce(DEBOUNCE_MAX_ITERATIONS, || exceeds(force, MODERATE_IMPACT_G));
        Classification::Moderate { count, confirmed: count > DEBOUNCE_CONFIRM }
      }
      DebouncePolicy::Windowed => {
        self.counter = self.counter.saturating_add(1);
        let count = self.counter;
        let confirmed = count > DEBOUNCE_CONFIRM;
        if confirmed {
          self.counter = 0;
        }
        Classification::Moderate { count, confirmed }
      }
    }
  }
}

impl Default for DangerClassifier {
  fn default() -> Self {
    Self::new(DebouncePolicy::default())
  }
}

/// Bounded spin: count while `holds` keeps returning true, stopping after
/// `max_iterations` or as soon as the count exceeds the confirmation value.
/// Performs no waiting and no re-sampling.
pub fn spin_debounce(max_iterations: u32, mut holds: impl FnMut() -> bool) -> u32 {
  let mut counter = 0;
  while counter < max_iterations && holds() {
    counter += 1;
    if counter > DEBOUNCE_CONFIRM {
      break;
    }
  }
  counter
}

/// Strict `|axis| > limit` on any axis.
fn exceeds(force: &ForceVector, limit: f32) -> bool {
  [force.x, force.y, force.z].iter().any(|&a| a > limit || a < -limit)
}

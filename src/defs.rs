#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reg {
  CtrlReg1 = 0x20,
  CtrlReg4 = 0x23,
  OutXL = 0x28,
  OutXH = 0x29,
  OutYL = 0x2A,
  OutYH = 0x2B,
  OutZL = 0x2C,
  OutZH = 0x2D,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Output registers in the order they are sampled: X_L, X_H, Y_L, Y_H, Z_L, Z_H.
pub(crate) const OUT_REGS: [Reg; 6] = [Reg::OutXL, Reg::OutXH, Reg::OutYL, Reg::OutYH, Reg::OutZL, Reg::OutZH];

/// I2C address with SA0 tied high.
pub const ADDR_SA0_HIGH: u8 = 0x19;
/// I2C address with SA0 tied low.
pub const ADDR_SA0_LOW: u8 = 0x18;

// Conversion denominator: full 16-bit span of the output registers.
pub(crate) const COUNTS_SPAN: f32 = 65536.;

pub(crate) const HIGH_IMPACT_G: f32 = 9.;
pub(crate) const MODERATE_IMPACT_G: f32 = 4.;
// Confirmation requires the debounce counter to exceed this value.
pub(crate) const DEBOUNCE_CONFIRM: u32 = 4;
pub(crate) const DEBOUNCE_MAX_ITERATIONS: u32 = 5;

pub(crate) const DEFAULT_SCALE_G: u8 = 24;
pub(crate) const DEFAULT_SAMPLE_PERIOD_MS: u32 = 200;

// Turn-on time after leaving power-down: 1/ODR + 1 ms at 50 Hz.
pub(crate) const TURN_ON_DELAY_MS: u32 = 21;

#![no_std]
//! Driver for seven-segment LED displays wired straight to GPIO lines.
//!
//! Every digit shares the eight segment lines (a-g plus the decimal point) and
//! the digits are lit one segment at a time. The caller owns the timing: call
//! [`SevSeg::refresh`] from a loop ([`FullSweep`]) or a timer tick
//! ([`SegmentStep`]) often enough that the display looks steady.
//!
//! ```ignore
//! let mut display: SevSeg<_, _, _, 4> = SevSeg::new(
//!     Config::default().with_hardware_config(HardwareConfig::CommonAnode),
//!     digit_pins,
//!     segment_pins,
//!     FullSweep::new(delay),
//! );
//! display.init()?;
//! display.set_number(3.14, 2);
//! loop {
//!     display.refresh()?;
//! }
//! ```

mod constants;
mod digits;
mod error;
mod multiplex;
mod polarity;

pub use constants::*;
pub use digits::{symbol_to_mask, DigitBuffer, Symbol};
pub use error::SevSegError;
pub use multiplex::{DriveLines, FullSweep, Multiplex, SegmentStep};
pub use polarity::{HardwareConfig, Polarity, NP_COMMON_ANODE, NP_COMMON_CATHODE};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use num_traits::ToPrimitive;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub hardware_config: HardwareConfig,
    /// Initial brightness in the strategy's own range; `None` keeps it at full.
    pub brightness: Option<i32>,
}

impl Config {
    pub fn with_hardware_config(mut self, hardware_config: HardwareConfig) -> Self {
        self.hardware_config = hardware_config;
        self
    }

    pub fn with_brightness(mut self, brightness: i32) -> Self {
        self.brightness = Some(brightness);
        self
    }
}

pub struct SevSeg<D, S, M, const NUM_DIGITS: usize> {
    lines: DriveLines<D, S, NUM_DIGITS>,
    digits: DigitBuffer,
    multiplexer: M,
}

impl<D, S, M, E, const NUM_DIGITS: usize> SevSeg<D, S, M, NUM_DIGITS>
where
    D: OutputPin<Error = E>,
    S: OutputPin<Error = E>,
    M: Multiplex,
{
    /// Takes ownership of the lines. Digits past [`MAX_DIGITS`] are kept off and never lit.
    pub fn new(
        config: Config,
        digit_pins: [D; NUM_DIGITS],
        segment_pins: [S; NUM_SEGMENTS],
        mut multiplexer: M,
    ) -> Self {
        if let Some(brightness) = config.brightness {
            multiplexer.set_brightness(brightness);
        }
        Self {
            lines: DriveLines::new(digit_pins, segment_pins, config.hardware_config.into()),
            digits: DigitBuffer::new(NUM_DIGITS),
            multiplexer,
        }
    }

    pub fn release(self) -> ([D; NUM_DIGITS], [S; NUM_SEGMENTS], M) {
        let (digit_pins, segment_pins) = self.lines.release();
        (digit_pins, segment_pins, self.multiplexer)
    }

    /// Switches every line off and blanks the display.
    pub fn init(&mut self) -> Result<(), SevSegError<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "sevseg: {} digits, {}",
            self.digits.len(),
            self.lines.polarity()
        );
        self.lines.all_off()?;
        self.digits.clear();
        Ok(())
    }

    pub fn refresh(&mut self) -> Result<(), SevSegError<E>> {
        self.multiplexer
            .refresh(&mut self.lines, self.digits.masks())?;
        Ok(())
    }

    pub fn set_brightness(&mut self, brightness: i32) {
        self.multiplexer.set_brightness(brightness);
    }

    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn polarity(&self) -> Polarity {
        self.lines.polarity()
    }

    pub fn masks(&self) -> &[u8] {
        self.digits.masks()
    }

    pub fn multiplexer(&self) -> &M {
        &self.multiplexer
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn set_digit(&mut self, digit: u8, symbol: u8) {
        self.digits.set_digit(digit, symbol);
    }

    pub fn try_set_digit(&mut self, digit: u8, symbol: u8) -> Result<(), SevSegError<E>> {
        if digit as usize >= self.digits.len() {
            return Err(SevSegError::InvalidLocation(digit));
        }
        if !self.digits.set_digit(digit, symbol) {
            return Err(SevSegError::InvalidSymbol(symbol));
        }
        Ok(())
    }

    pub fn set_digits(&mut self, symbols: &[u8]) {
        self.digits.set_digits(symbols);
    }

    pub fn set_segments(&mut self, digit: u8, mask: u8) {
        self.digits.set_segments(digit, mask);
    }

    pub fn try_set_segments(&mut self, digit: u8, mask: u8) -> Result<(), SevSegError<E>> {
        if !self.digits.set_segments(digit, mask) {
            return Err(SevSegError::InvalidLocation(digit));
        }
        Ok(())
    }

    pub fn set_decimal_point(&mut self, digit: u8, on: bool) {
        self.digits.set_decimal_point(digit, on);
    }

    pub fn set_number<T>(&mut self, number: T, decimal_places: u8)
    where
        T: ToPrimitive,
    {
        self.digits.set_number(number, decimal_places);
    }

    pub fn set_hex_number<T>(&mut self, number: T)
    where
        T: ToPrimitive,
    {
        self.digits.set_hex_number(number);
    }
}

impl<D, S, E, DELAY, const NUM_DIGITS: usize> SevSeg<D, S, FullSweep<DELAY>, NUM_DIGITS>
where
    D: OutputPin<Error = E>,
    S: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// One blocking sweep with an explicit per-segment on-time instead of the brightness setting.
    pub fn refresh_with_on_time(&mut self, on_time_us: u32) -> Result<(), SevSegError<E>> {
        self.multiplexer
            .sweep(&mut self.lines, self.digits.masks(), on_time_us)?;
        Ok(())
    }
}

//! Bit-plane multiplexing: one segment line at a time, with every digit that
//! lights that segment switched on alongside it.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::constants::{
    MAX_BRIGHTNESS_LEVEL, MAX_BRIGHTNESS_PERCENT, MAX_ON_TIME_US, MAX_SKIP_CYCLES, MIN_ON_TIME_US,
    NUM_SEGMENTS,
};
use crate::polarity::Polarity;

/// The digit-select and segment lines plus the levels that switch them on.
pub struct DriveLines<D, S, const NUM_DIGITS: usize> {
    digit_pins: [D; NUM_DIGITS],
    segment_pins: [S; NUM_SEGMENTS],
    polarity: Polarity,
}

impl<D, S, const NUM_DIGITS: usize> DriveLines<D, S, NUM_DIGITS> {
    pub fn new(
        digit_pins: [D; NUM_DIGITS],
        segment_pins: [S; NUM_SEGMENTS],
        polarity: Polarity,
    ) -> Self {
        Self {
            digit_pins,
            segment_pins,
            polarity,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn release(self) -> ([D; NUM_DIGITS], [S; NUM_SEGMENTS]) {
        (self.digit_pins, self.segment_pins)
    }
}

impl<D, S, E, const NUM_DIGITS: usize> DriveLines<D, S, NUM_DIGITS>
where
    D: OutputPin<Error = E>,
    S: OutputPin<Error = E>,
{
    /// Drives every declared line, including digits past the clamp, to its off level.
    pub fn all_off(&mut self) -> Result<(), E> {
        let digit_off = self.polarity.digit_off();
        for pin in &mut self.digit_pins {
            pin.set_state(digit_off)?;
        }
        let segment_off = self.polarity.segment_off();
        for pin in &mut self.segment_pins {
            pin.set_state(segment_off)?;
        }
        Ok(())
    }

    pub fn set_segment(&mut self, segment: usize, on: bool) -> Result<(), E> {
        let level = self.polarity.segment_level(on);
        if let Some(pin) = self.segment_pins.get_mut(segment) {
            pin.set_state(level)?;
        }
        Ok(())
    }

    /// Switches on each digit whose mask has bit `segment` set.
    pub fn digits_on_for(&mut self, segment: usize, masks: &[u8]) -> Result<(), E> {
        let digit_on = self.polarity.digit_on;
        for (pin, mask) in self.digit_pins.iter_mut().zip(masks) {
            if *mask & (1u8 << segment) != 0 {
                pin.set_state(digit_on)?;
            }
        }
        Ok(())
    }

    pub fn digits_off(&mut self, count: usize) -> Result<(), E> {
        let digit_off = self.polarity.digit_off();
        for pin in self.digit_pins.iter_mut().take(count) {
            pin.set_state(digit_off)?;
        }
        Ok(())
    }
}

/// Drives one display-refresh step from the mask buffer.
pub trait Multiplex {
    /// Clamps `brightness` to the strategy's range and maps it onto its timing knob.
    fn set_brightness(&mut self, brightness: i32);

    fn refresh<D, S, E, const NUM_DIGITS: usize>(
        &mut self,
        lines: &mut DriveLines<D, S, NUM_DIGITS>,
        masks: &[u8],
    ) -> Result<(), E>
    where
        D: OutputPin<Error = E>,
        S: OutputPin<Error = E>;
}

/// Blocking strategy for displays with the resistors on the digit lines.
///
/// Each [`refresh`](Multiplex::refresh) walks all eight segments and holds each
/// one for the on-time, so a call blocks for `8 * on_time_us` microseconds.
pub struct FullSweep<DELAY> {
    delay: DELAY,
    on_time_us: u32,
}

impl<DELAY> FullSweep<DELAY>
where
    DELAY: DelayNs,
{
    pub fn new(delay: DELAY) -> Self {
        Self {
            delay,
            on_time_us: MAX_ON_TIME_US,
        }
    }

    pub fn on_time_us(&self) -> u32 {
        self.on_time_us
    }

    pub fn release(self) -> DELAY {
        self.delay
    }

    pub fn sweep<D, S, E, const NUM_DIGITS: usize>(
        &mut self,
        lines: &mut DriveLines<D, S, NUM_DIGITS>,
        masks: &[u8],
        on_time_us: u32,
    ) -> Result<(), E>
    where
        D: OutputPin<Error = E>,
        S: OutputPin<Error = E>,
    {
        let on_time_us = on_time_us.clamp(MIN_ON_TIME_US, MAX_ON_TIME_US);
        for segment in 0..NUM_SEGMENTS {
            lines.set_segment(segment, true)?;
            lines.digits_on_for(segment, masks)?;
            self.delay.delay_us(on_time_us);
            lines.digits_off(masks.len())?;
            lines.set_segment(segment, false)?;
        }
        Ok(())
    }
}

impl<DELAY> Multiplex for FullSweep<DELAY>
where
    DELAY: DelayNs,
{
    fn set_brightness(&mut self, brightness: i32) {
        let brightness = brightness.clamp(0, MAX_BRIGHTNESS_PERCENT);
        self.on_time_us = map_range(
            brightness,
            0,
            MAX_BRIGHTNESS_PERCENT,
            MIN_ON_TIME_US as i32,
            MAX_ON_TIME_US as i32,
        ) as u32;
        #[cfg(feature = "defmt")]
        defmt::trace!("brightness {} -> on-time {}us", brightness, self.on_time_us);
    }

    fn refresh<D, S, E, const NUM_DIGITS: usize>(
        &mut self,
        lines: &mut DriveLines<D, S, NUM_DIGITS>,
        masks: &[u8],
    ) -> Result<(), E>
    where
        D: OutputPin<Error = E>,
        S: OutputPin<Error = E>,
    {
        self.sweep(lines, masks, self.on_time_us)
    }
}

/// Non-blocking strategy for displays with the resistors on the segment lines.
///
/// Each [`refresh`](Multiplex::refresh) moves one phase forward, so it is meant to
/// be called at a steady rate, e.g. from a timer interrupt. Phases past the eighth
/// segment are dark and only stretch the cycle.
pub struct SegmentStep {
    position: usize,
    skip_cycles: u8,
}

impl SegmentStep {
    pub const fn new() -> Self {
        Self {
            position: 0,
            skip_cycles: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn skip_cycles(&self) -> u8 {
        self.skip_cycles
    }

    fn cycle_len(&self) -> usize {
        NUM_SEGMENTS + self.skip_cycles as usize
    }
}

impl Default for SegmentStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplex for SegmentStep {
    fn set_brightness(&mut self, brightness: i32) {
        let brightness = brightness.clamp(0, MAX_BRIGHTNESS_LEVEL);
        self.skip_cycles = map_range(
            brightness,
            0,
            MAX_BRIGHTNESS_LEVEL,
            MAX_SKIP_CYCLES as i32,
            0,
        ) as u8;
        #[cfg(feature = "defmt")]
        defmt::trace!("brightness {} -> {} skip cycles", brightness, self.skip_cycles);
    }

    fn refresh<D, S, E, const NUM_DIGITS: usize>(
        &mut self,
        lines: &mut DriveLines<D, S, NUM_DIGITS>,
        masks: &[u8],
    ) -> Result<(), E>
    where
        D: OutputPin<Error = E>,
        S: OutputPin<Error = E>,
    {
        if self.position < NUM_SEGMENTS {
            lines.set_segment(self.position, false)?;
            lines.digits_off(masks.len())?;
        }

        self.position = (self.position + 1) % self.cycle_len();

        if self.position < NUM_SEGMENTS {
            lines.set_segment(self.position, true)?;
            lines.digits_on_for(self.position, masks)?;
        }
        Ok(())
    }
}

/// Linear integer rescale; works for descending output ranges too.
fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn on_time_bounds() {
        let mut sweep = FullSweep::new(NoopDelay::new());
        assert_eq!(sweep.on_time_us(), MAX_ON_TIME_US);
        sweep.set_brightness(0);
        assert_eq!(sweep.on_time_us(), MIN_ON_TIME_US);
        sweep.set_brightness(-50);
        assert_eq!(sweep.on_time_us(), MIN_ON_TIME_US);
        sweep.set_brightness(500);
        assert_eq!(sweep.on_time_us(), MAX_ON_TIME_US);
    }

    #[test]
    fn on_time_is_monotonic() {
        let mut sweep = FullSweep::new(NoopDelay::new());
        let mut previous = 0;
        for brightness in -10..=110 {
            sweep.set_brightness(brightness);
            assert!(sweep.on_time_us() >= previous);
            previous = sweep.on_time_us();
        }
    }

    #[test]
    fn skip_cycles_are_monotonic() {
        let mut step = SegmentStep::new();
        let mut previous = u8::MAX;
        for brightness in -10..=300 {
            step.set_brightness(brightness);
            assert!(step.skip_cycles() <= previous);
            previous = step.skip_cycles();
        }
        step.set_brightness(0);
        assert_eq!(step.skip_cycles(), MAX_SKIP_CYCLES);
        step.set_brightness(255);
        assert_eq!(step.skip_cycles(), 0);
    }

    #[test]
    fn cycle_wraps_through_dark_phases() {
        let mut step = SegmentStep::new();
        step.set_brightness(0);
        assert_eq!(step.cycle_len(), NUM_SEGMENTS + MAX_SKIP_CYCLES as usize);
    }
}

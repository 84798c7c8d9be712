use embedded_hal::digital::PinState;

/// How the digit and segment lines are wired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareConfig {
    #[default]
    CommonCathode,
    CommonAnode,
    /// Active-high low-side switches on the digit lines (usually N-type FETs).
    NTransistors,
    /// Active-low high-side switches on the digit lines (usually P-type FETs).
    PTransistors,
}

// N-type on the cathodes and P-type on the anodes flips the plain cases
pub const NP_COMMON_CATHODE: HardwareConfig = HardwareConfig::CommonAnode;
pub const NP_COMMON_ANODE: HardwareConfig = HardwareConfig::CommonCathode;

impl TryFrom<u8> for HardwareConfig {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HardwareConfig::CommonCathode),
            1 => Ok(HardwareConfig::CommonAnode),
            2 => Ok(HardwareConfig::NTransistors),
            3 => Ok(HardwareConfig::PTransistors),
            _ => Err(value),
        }
    }
}

/// Active levels for the digit and segment lines. Off is always the complement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polarity {
    pub digit_on: PinState,
    pub segment_on: PinState,
}

impl Polarity {
    pub const fn digit_off(&self) -> PinState {
        match self.digit_on {
            PinState::High => PinState::Low,
            PinState::Low => PinState::High,
        }
    }

    pub const fn segment_off(&self) -> PinState {
        match self.segment_on {
            PinState::High => PinState::Low,
            PinState::Low => PinState::High,
        }
    }

    pub const fn digit_level(&self, on: bool) -> PinState {
        if on {
            self.digit_on
        } else {
            self.digit_off()
        }
    }

    pub const fn segment_level(&self, on: bool) -> PinState {
        if on {
            self.segment_on
        } else {
            self.segment_off()
        }
    }
}

impl From<HardwareConfig> for Polarity {
    fn from(config: HardwareConfig) -> Self {
        let (digit_on, segment_on) = match config {
            HardwareConfig::CommonCathode => (PinState::Low, PinState::High),
            HardwareConfig::CommonAnode => (PinState::High, PinState::Low),
            HardwareConfig::NTransistors => (PinState::High, PinState::High),
            HardwareConfig::PTransistors => (PinState::Low, PinState::Low),
        };
        Self {
            digit_on,
            segment_on,
        }
    }
}

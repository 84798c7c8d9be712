//! Symbol table and the per-position segment mask buffer.

use num_traits::ToPrimitive;

use crate::constants::{BLANK, DASH, DIGIT_CODE_MAP, DOT_MASK, MAX_DIGITS, POWERS_OF_TEN};

/// Glyphs with a fixed entry in [`DIGIT_CODE_MAP`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Symbol {
    Zero = 0,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    A,
    B,
    C,
    D,
    E,
    F,
    Blank = BLANK,
    Dash = DASH,
}

impl Symbol {
    pub const fn mask(self) -> u8 {
        DIGIT_CODE_MAP[self as usize]
    }
}

impl TryFrom<u8> for Symbol {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        const SYMBOLS: [Symbol; 18] = [
            Symbol::Zero,
            Symbol::One,
            Symbol::Two,
            Symbol::Three,
            Symbol::Four,
            Symbol::Five,
            Symbol::Six,
            Symbol::Seven,
            Symbol::Eight,
            Symbol::Nine,
            Symbol::A,
            Symbol::B,
            Symbol::C,
            Symbol::D,
            Symbol::E,
            Symbol::F,
            Symbol::Blank,
            Symbol::Dash,
        ];
        SYMBOLS.get(value as usize).copied().ok_or(value)
    }
}

/// Segment mask for a raw symbol value, `None` outside `0..=DASH`.
pub fn symbol_to_mask(symbol: u8) -> Option<u8> {
    DIGIT_CODE_MAP.get(symbol as usize).copied()
}

/// One segment mask per digit position, index-aligned with the digit pins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitBuffer {
    masks: [u8; MAX_DIGITS],
    len: usize,
}

impl DigitBuffer {
    /// `len` is clamped to [`MAX_DIGITS`]; every position starts blank.
    pub fn new(len: usize) -> Self {
        Self {
            masks: [Symbol::Blank.mask(); MAX_DIGITS],
            len: len.min(MAX_DIGITS),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn masks(&self) -> &[u8] {
        &self.masks[..self.len]
    }

    /// Writes the mask of `symbol` at `position`. Out-of-range input is ignored.
    pub fn set_digit(&mut self, position: u8, symbol: u8) -> bool {
        match (self.slot(position), symbol_to_mask(symbol)) {
            (Some(slot), Some(mask)) => {
                *slot = mask;
                true
            }
            _ => false,
        }
    }

    /// All or nothing: a slice longer than the display leaves every mask as it was.
    pub fn set_digits(&mut self, symbols: &[u8]) -> bool {
        if symbols.len() > self.len {
            return false;
        }
        for (slot, &symbol) in self.masks.iter_mut().zip(symbols) {
            if let Some(mask) = symbol_to_mask(symbol) {
                *slot = mask;
            }
        }
        true
    }

    pub fn set_segments(&mut self, position: u8, mask: u8) -> bool {
        match self.slot(position) {
            Some(slot) => {
                *slot = mask;
                true
            }
            None => false,
        }
    }

    pub fn set_decimal_point(&mut self, position: u8, on: bool) -> bool {
        match self.slot(position) {
            Some(slot) => {
                if on {
                    *slot |= DOT_MASK;
                } else {
                    *slot &= !DOT_MASK;
                }
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.fill(Symbol::Blank.mask());
    }

    /// Right-aligned decimal rendering with `decimal_places` digits after the point.
    ///
    /// Negative values get a leading dash. Anything that does not fit, including
    /// non-finite input or `decimal_places >= len`, turns every position into a dash.
    pub fn set_number<T>(&mut self, value: T, decimal_places: u8) -> bool
    where
        T: ToPrimitive,
    {
        let decimal_places = decimal_places as usize;
        let value = match value.to_f64() {
            Some(value) if value.is_finite() && decimal_places < self.len => value,
            _ => {
                self.overflow();
                return false;
            }
        };

        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };
        // saturating cast, so huge values still land above the limit below
        let scaled = (magnitude * POWERS_OF_TEN[decimal_places] as f64 + 0.5) as u64;
        if scaled >= POWERS_OF_TEN[MAX_DIGITS] {
            self.overflow();
            return false;
        }

        // "0.5" not ".5"; a value rounding to zero gets no sign
        let width = digit_count(scaled, 10).max(decimal_places + 1);
        let sign = negative && scaled != 0;
        if width + sign as usize > self.len {
            self.overflow();
            return false;
        }
        self.render(scaled, 10, width, sign);
        if decimal_places > 0 {
            self.masks[self.len - 1 - decimal_places] |= DOT_MASK;
        }
        true
    }

    /// Right-aligned hexadecimal rendering; negative or oversized values become dashes.
    pub fn set_hex_number<T>(&mut self, value: T) -> bool
    where
        T: ToPrimitive,
    {
        let value = match value.to_u64() {
            Some(value) if self.len > 0 && digit_count(value, 16) <= self.len => value,
            _ => {
                self.overflow();
                return false;
            }
        };
        self.render(value, 16, digit_count(value, 16), false);
        true
    }

    fn render(&mut self, mut value: u64, radix: u64, width: usize, sign: bool) {
        let len = self.len;
        for (i, slot) in self.masks[..len].iter_mut().rev().enumerate() {
            *slot = if i < width {
                let digit = (value % radix) as usize;
                value /= radix;
                DIGIT_CODE_MAP[digit]
            } else if sign && i == width {
                Symbol::Dash.mask()
            } else {
                Symbol::Blank.mask()
            };
        }
    }

    fn overflow(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("value does not fit {} digits, showing dashes", self.len);
        self.fill(Symbol::Dash.mask());
    }

    fn fill(&mut self, mask: u8) {
        for slot in &mut self.masks[..self.len] {
            *slot = mask;
        }
    }

    fn slot(&mut self, position: u8) -> Option<&mut u8> {
        self.masks[..self.len].get_mut(position as usize)
    }
}

fn digit_count(mut value: u64, radix: u64) -> usize {
    let mut count = 1;
    while value >= radix {
        value /= radix;
        count += 1;
    }
    count
}

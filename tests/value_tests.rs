extern crate sevseg;

use core::convert::Infallible;

use sevseg::{Config, SegmentStep, SevSeg, Symbol, DASH, DIGIT_CODE_MAP, DOT_MASK};

const NUM_DIGITS: usize = 4;
const DASHES: [u8; NUM_DIGITS] = [DIGIT_CODE_MAP[DASH as usize]; NUM_DIGITS];

struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn display() -> SevSeg<MockPin, MockPin, SegmentStep, NUM_DIGITS> {
    let mut display = SevSeg::new(
        Config::default(),
        [MockPin, MockPin, MockPin, MockPin],
        [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin],
        SegmentStep::new(),
    );
    display.init().unwrap();
    display
}

#[test]
fn init_blanks_display() {
    let display = display();
    assert_eq!(display.digit_count(), NUM_DIGITS);
    assert_eq!(display.masks(), &[Symbol::Blank.mask(); NUM_DIGITS]);
}

#[test]
fn set_digits_round_trip() {
    let mut display = display();
    display.set_digits(&[1, 2, 3, 4]);
    assert_eq!(
        display.masks(),
        &[
            DIGIT_CODE_MAP[1],
            DIGIT_CODE_MAP[2],
            DIGIT_CODE_MAP[3],
            DIGIT_CODE_MAP[4]
        ]
    );

    // too many values: nothing changes
    display.set_digits(&[5, 5, 5, 5, 5]);
    assert_eq!(display.masks()[0], DIGIT_CODE_MAP[1]);
}

#[test]
fn set_digit_ignores_invalid_input() {
    let mut display = display();
    display.set_digit(0, 8);
    display.set_digit(0, 18);
    display.set_digit(4, 1);
    assert_eq!(display.masks(), &[DIGIT_CODE_MAP[8], 0, 0, 0]);
}

#[test]
fn decimal_value_test() {
    let mut display = display();

    display.set_number(9999, 0);
    assert_eq!(display.masks(), &[DIGIT_CODE_MAP[9]; NUM_DIGITS]);
    display.set_number(12345, 0);
    assert_eq!(display.masks(), &DASHES);
    display.set_number(-999, 0);
    assert_eq!(display.masks()[0], Symbol::Dash.mask());
    assert_eq!(display.masks()[3], DIGIT_CODE_MAP[9]);
    display.set_number(-1000, 0);
    assert_eq!(display.masks(), &DASHES);
    display.set_number(u64::MAX, 0);
    assert_eq!(display.masks(), &DASHES);
}

#[test]
fn hexadecimal_value_test() {
    let mut display = display();

    display.set_hex_number(0xFFFF);
    assert_eq!(display.masks(), &[Symbol::F.mask(); NUM_DIGITS]);
    display.set_hex_number(0x10000);
    assert_eq!(display.masks(), &DASHES);
    display.set_hex_number(0xC0);
    assert_eq!(
        display.masks(),
        &[0, 0, Symbol::C.mask(), Symbol::Zero.mask()]
    );
    display.set_hex_number(-0xFFF);
    assert_eq!(display.masks(), &DASHES);
}

#[test]
fn float_value_test() {
    let mut display = display();

    display.set_number(0.0, 1);
    assert_eq!(
        display.masks(),
        &[0, 0, DIGIT_CODE_MAP[0] | DOT_MASK, DIGIT_CODE_MAP[0]]
    );
    display.set_number(0.0, NUM_DIGITS as u8 - 1);
    assert_eq!(display.masks()[0], DIGIT_CODE_MAP[0] | DOT_MASK);
    display.set_number(0.0, NUM_DIGITS as u8);
    assert_eq!(display.masks(), &DASHES);

    display.set_number(123.0, 1);
    assert_eq!(
        display.masks(),
        &[
            DIGIT_CODE_MAP[1],
            DIGIT_CODE_MAP[2],
            DIGIT_CODE_MAP[3] | DOT_MASK,
            DIGIT_CODE_MAP[0]
        ]
    );
    display.set_number(1234.0, 1);
    assert_eq!(display.masks(), &DASHES);

    display.set_number(-1.25f32, 1);
    assert_eq!(
        display.masks(),
        &[
            0,
            Symbol::Dash.mask(),
            DIGIT_CODE_MAP[1] | DOT_MASK,
            DIGIT_CODE_MAP[3]
        ]
    );
}

#[test]
fn decimal_point_survives_until_overwritten() {
    let mut display = display();
    display.set_digits(&[1, 2]);
    display.set_decimal_point(0, true);
    assert_eq!(display.masks()[0], DIGIT_CODE_MAP[1] | DOT_MASK);
    display.set_digit(0, 1);
    assert_eq!(display.masks()[0], DIGIT_CODE_MAP[1]);
    display.clear();
    assert_eq!(display.masks(), &[0; NUM_DIGITS]);
}

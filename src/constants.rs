pub const MAX_DIGITS: usize = 8;
pub const NUM_SEGMENTS: usize = 8; // a-g + dp
pub const DOT_MASK: u8 = 0x80;

pub const BLANK: u8 = 16;
pub const DASH: u8 = 17;

pub const MAX_BRIGHTNESS_PERCENT: i32 = 100; // full sweep
pub const MAX_BRIGHTNESS_LEVEL: i32 = 255; // segment stepping
pub const MIN_ON_TIME_US: u32 = 1;
pub const MAX_ON_TIME_US: u32 = 2000;
pub const MAX_SKIP_CYCLES: u8 = 100;

// bit 0 = a ... bit 6 = g
pub const DIGIT_CODE_MAP: [u8; 18] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
    0b0000_0000, // blank
    0b0100_0000, // dash
];

pub const POWERS_OF_TEN: [u64; MAX_DIGITS + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

pub mod segment {
    pub const A: u8 = 0x01;
    pub const B: u8 = 0x02;
    pub const C: u8 = 0x04;
    pub const D: u8 = 0x08;
    pub const E: u8 = 0x10;
    pub const F: u8 = 0x20;
    pub const G: u8 = 0x40;
    pub const DP: u8 = 0x80;
}

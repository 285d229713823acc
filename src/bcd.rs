//! Packed binary-coded decimal helpers.
//!
//! Every time and alarm field of the DS3231 stores two decimal digits in one
//! byte: tens in the high nibble, ones in the low nibble. Only values 0-99 are
//! meaningful; anything larger produces a truncated byte rather than a panic.

/// Packs a binary value (0-99) into a BCD byte.
#[must_use]
pub const fn bin2bcd(value: u8) -> u8 {
    value.wrapping_add(6u8.wrapping_mul(value / 10))
}

/// Unpacks a BCD byte into its binary value (0-99).
#[must_use]
pub const fn bcd2bin(bcd: u8) -> u8 {
    bcd - 6 * (bcd >> 4)
}

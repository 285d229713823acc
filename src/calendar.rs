//! Day-of-week arithmetic for the years 2000-2099.
//!
//! The DS3231 has no notion of which weekday a date falls on; the day register
//! is just a counter the host keeps in step. These helpers derive it from the
//! date so the time block and weekday alarms always agree with the calendar.

/// Lengths of January through November in a common year. December is never
/// needed since only the months before the target month are summed.
const DAYS_IN_MONTH: [u8; 11] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns the day of the week (0 = Sunday .. 6 = Saturday) for a date given
/// as year offset from 2000 (0-99), month (1-12) and day of month (1-31).
///
/// Every year divisible by four is treated as a leap year, which holds for the
/// whole 2000-2099 range. Inputs outside the documented ranges give an
/// unspecified weekday but never panic.
///
/// ```
/// use ds3231_rtc::day_of_week;
///
/// assert_eq!(day_of_week(0, 1, 1), 6); // Saturday
/// assert_eq!(day_of_week(24, 4, 2), 2); // Tuesday
/// ```
#[must_use]
pub fn day_of_week(year_offset: u8, month: u8, day: u8) -> u8 {
    let year = u32::from(year_offset);
    let mut days = u32::from(day);
    days += DAYS_IN_MONTH
        .iter()
        .take(usize::from(month.saturating_sub(1)))
        .map(|&d| u32::from(d))
        .sum::<u32>();
    if month > 2 && year % 4 == 0 {
        days += 1;
    }
    // Whole years since 2000 plus their leap days
    days += 365 * year + (year + 3) / 4;

    // Day 1 (2000-01-01) is a Saturday

    u8::try_from((days + 5) % 7).unwrap_or(0)
}

/// English name of a weekday number (0 = Sunday).
#[must_use]
pub fn weekday_name(weekday: u8) -> Option<&'static str> {
    WEEKDAY_NAMES.get(usize::from(weekday)).copied()
}

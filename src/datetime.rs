//! `DateTime` record and time register image for the DS3231 RTC.
//!
//! The DS3231 stores date and time in 7 consecutive registers:
//! - Seconds, Minutes, Hours, Day, Date, Month, Year
//!
//! [`DateTime`] is the plain semantic record handed to and returned from the
//! driver. [`TimeRegisters`] is its on-wire image. Encoding never validates:
//! values outside the documented ranges are truncated to the register field
//! widths. Conversions to and from chrono's `NaiveDateTime` do validate and
//! report problems through [`DateTimeError`].

use core::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::bcd::{bcd2bin, bin2bcd};
use crate::calendar::day_of_week;
use crate::{Date, Day, Hours, Minutes, Month, Seconds, TimeRepresentation, Year};

/// Calendar date and time of day as kept by the DS3231.
///
/// The year is stored as an offset from 2000, so the supported range is
/// 2000-2099. `weekday` counts from 0 = Sunday and is derived from the date by
/// [`day_of_week`] whenever this crate builds a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Seconds (0-59)
    pub second: u8,
    /// Minutes (0-59)
    pub minute: u8,
    /// Hours (0-23)
    pub hour: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Month (1-12)
    pub month: u8,
    /// Year offset from 2000 (0-99)
    pub year: u8,
    /// Day of week (0 = Sunday .. 6 = Saturday)
    pub weekday: u8,
}

impl DateTime {
    /// Builds a record from its date and time parts, computing the weekday.
    ///
    /// ```
    /// use ds3231_rtc::DateTime;
    ///
    /// let dt = DateTime::new(24, 4, 2, 12, 8, 0);
    /// assert_eq!(dt.weekday, 2); // Tuesday
    /// ```
    #[must_use]
    pub fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        DateTime {
            second,
            minute,
            hour,
            day,
            month,
            year,
            weekday: day_of_week(year, month, day),
        }
    }

    /// Full calendar year, e.g. 2024.
    #[must_use]
    pub fn full_year(&self) -> u16 {
        2000 + u16::from(self.year)
    }
}

impl TryFrom<&NaiveDateTime> for DateTime {
    type Error = DateTimeError;

    fn try_from(datetime: &NaiveDateTime) -> Result<Self, Self::Error> {
        let year = datetime.year();
        if year < 2000 {
            error!("Year {} is too early! must be greater than 1999", year);
            return Err(DateTimeError::YearNotAfter1999);
        }
        if year > 2099 {
            error!("Year {} is too late! must be before 2100", year);
            return Err(DateTimeError::YearNotBefore2100);
        }
        let narrow = |v: u32| u8::try_from(v).map_err(|_| DateTimeError::InvalidDateTime);
        let year = u8::try_from(year - 2000).map_err(|_| DateTimeError::InvalidDateTime)?;
        Ok(DateTime::new(
            year,
            narrow(datetime.month())?,
            narrow(datetime.day())?,
            narrow(datetime.hour())?,
            narrow(datetime.minute())?,
            narrow(datetime.second())?,
        ))
    }
}

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = DateTimeError;

    fn try_from(datetime: DateTime) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(
            i32::from(datetime.full_year()),
            u32::from(datetime.month),
            u32::from(datetime.day),
        )
        .and_then(|d| {
            d.and_hms_opt(
                u32::from(datetime.hour),
                u32::from(datetime.minute),
                u32::from(datetime.second),
            )
        })
        .ok_or(DateTimeError::InvalidDateTime)
    }
}

/// Parses `"2024/04/02 12:08:00"` style text: year, month, day, hour, minute
/// and second separated by `/`, `:` or spaces.
impl FromStr for DateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .split(|c| matches!(c, '/' | ':' | ' '))
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<u32>().map_err(|_| DateTimeError::Malformed));
        let mut next = || tokens.next().unwrap_or(Err(DateTimeError::Malformed));
        let (year, month, day) = (next()?, next()?, next()?);
        let (hour, minute, second) = (next()?, next()?, next()?);
        if tokens.next().is_some() {
            return Err(DateTimeError::Malformed);
        }

        let year = i32::try_from(year).map_err(|_| DateTimeError::Malformed)?;
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .ok_or(DateTimeError::InvalidDateTime)?;
        DateTime::try_from(&naive)
    }
}

/// Register image of the 7 byte time block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct TimeRegisters {
    seconds: Seconds,
    minutes: Minutes,
    hours: Hours,
    day: Day,
    date: Date,
    month: Month,
    year: Year,
}

impl TimeRegisters {
    /// Builds the register image. Hours are always written in 24-hour format
    /// and the weekday is stored 1-based (1 = Sunday).
    pub(crate) fn from_datetime(datetime: &DateTime) -> Self {
        let mut seconds = Seconds::default();
        seconds.set_bcd_seconds(bin2bcd(datetime.second));
        let mut minutes = Minutes::default();
        minutes.set_bcd_minutes(bin2bcd(datetime.minute));
        let mut hours = Hours::default();
        hours.set_time_representation(TimeRepresentation::TwentyFourHour);
        hours.set_bcd_hours(bin2bcd(datetime.hour));
        let mut day = Day::default();
        day.set_day(datetime.weekday.wrapping_add(1));
        let mut date = Date::default();
        date.set_bcd_date(bin2bcd(datetime.day));
        let mut month = Month::default();
        month.set_bcd_month(bin2bcd(datetime.month));
        let mut year = Year::default();
        year.set_bcd_year(bin2bcd(datetime.year));

        TimeRegisters {
            seconds,
            minutes,
            hours,
            day,
            date,
            month,
            year,
        }
    }

    /// Decodes the register image. The 12/24-hour flag and the century flag
    /// are masked off, and the weekday is recomputed from the date rather than
    /// trusted from the day register.
    pub(crate) fn to_datetime(self) -> DateTime {
        let datetime = DateTime::new(
            bcd2bin(self.year.bcd_year()),
            bcd2bin(self.month.bcd_month()),
            bcd2bin(self.date.bcd_date()),
            self.hours.hour(),
            bcd2bin(self.minutes.bcd_minutes()),
            bcd2bin(self.seconds.bcd_seconds()),
        );
        if self.day.day() != datetime.weekday.wrapping_add(1) {
            debug!(
                "day register {} disagrees with computed weekday {}",
                self.day.day(),
                datetime.weekday
            );
        }
        datetime
    }
}

impl From<[u8; 7]> for TimeRegisters {
    fn from(data: [u8; 7]) -> Self {
        TimeRegisters {
            seconds: Seconds(data[0]),
            minutes: Minutes(data[1]),
            hours: Hours(data[2]),
            day: Day(data[3]),
            date: Date(data[4]),
            month: Month(data[5]),
            year: Year(data[6]),
        }
    }
}

impl From<&TimeRegisters> for [u8; 7] {
    fn from(dt: &TimeRegisters) -> [u8; 7] {
        [
            dt.seconds.0,
            dt.minutes.0,
            dt.hours.0,
            dt.day.0,
            dt.date.0,
            dt.month.0,
            dt.year.0,
        ]
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur during date/time conversion or parsing.
pub enum DateTimeError {
    /// The provided or decoded date/time is not a real calendar date/time
    InvalidDateTime,
    /// The year is not after 1999 (the DS3231 year register starts at 2000)
    YearNotAfter1999,
    /// The year is not before 2100 (the century flag is not supported)
    YearNotBefore2100,
    /// Text did not contain exactly six numeric fields
    Malformed,
}

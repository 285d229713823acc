//! Alarm configuration for the DS3231 RTC.
//!
//! Each alarm has a set of mask bits, one in the top bit of every alarm
//! register, plus a DY/DT bit that decides whether the day register holds a
//! weekday or a date. Together they select one of a fixed set of matching
//! modes. The modes are enums here, and each enum has a single table mapping
//! it to its packed mode bits:
//!
//! | Alarm 1 mode  | bits | Alarm 2 mode  | bits |
//! |---------------|------|---------------|------|
//! | `EverySecond` | 0x0F | `EveryMinute` | 0x07 |
//! | `OnSecond`    | 0x0E | `OnMinute`    | 0x06 |
//! | `OnMinute`    | 0x0C | `OnHour`      | 0x04 |
//! | `OnHour`      | 0x08 | `OnDate`      | 0x00 |
//! | `OnDate`      | 0x00 | `OnWeekday`   | 0x08 |
//! | `OnWeekday`   | 0x10 |               |      |
//!
//! Alarm 1 packs A1M1..A1M4 into bits 0-3 and DY/DT into bit 4. Alarm 2 has
//! no seconds register and packs A2M2..A2M4 into bits 0-2 and DY/DT into bit 3.
//!
//! # Decoded alarms
//!
//! Alarms repeat every month, so the month and year of a decoded alarm carry
//! no meaning. They are always set to the fixed anchor
//! [`ALARM_REFERENCE_MONTH`] / [`ALARM_REFERENCE_YEAR`] (January 2024). The day
//! field that does not apply is set to [`NOT_APPLICABLE`]: day-of-month for a
//! weekday alarm, weekday for a date alarm, and both when the day register is
//! masked out entirely.

use crate::bcd::{bcd2bin, bin2bcd};
use crate::calendar::day_of_week;
use crate::datetime::DateTime;
use crate::{
    AlarmDayDate, AlarmHours, AlarmMinutes, AlarmSeconds, Control, DayDateSelect, Status,
    TimeRepresentation,
};

/// Month reported by every decoded alarm.
pub const ALARM_REFERENCE_MONTH: u8 = 1;
/// Year offset reported by every decoded alarm.
pub const ALARM_REFERENCE_YEAR: u8 = 24;
/// Value of a decoded day or weekday field that the alarm does not match on.
pub const NOT_APPLICABLE: u8 = 0;

const A1M1: u8 = 0x01;
const A1M2: u8 = 0x02;
const A1M3: u8 = 0x04;
const A1M4: u8 = 0x08;
const A1_DY_DT: u8 = 0x10;

const A2M2: u8 = 0x01;
const A2M3: u8 = 0x02;
const A2M4: u8 = 0x04;
const A2_DY_DT: u8 = 0x08;

/// Selects one of the two alarms.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmId {
    /// Alarm 1 (seconds resolution)
    Alarm1 = 1,
    /// Alarm 2 (minutes resolution)
    Alarm2 = 2,
}

impl AlarmId {
    /// Mask of this alarm's bit in the control (AxIE) and status (AxF)
    /// registers: bit `alarm number - 1`.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (self as u8 - 1)
    }
}

impl Control {
    /// Whether the interrupt of `alarm` is enabled.
    #[must_use]
    pub fn alarm_interrupt_enable(&self, alarm: AlarmId) -> bool {
        match alarm {
            AlarmId::Alarm1 => self.alarm1_interrupt_enable(),
            AlarmId::Alarm2 => self.alarm2_interrupt_enable(),
        }
    }

    /// Enables or disables the interrupt of `alarm`.
    pub fn set_alarm_interrupt_enable(&mut self, alarm: AlarmId, enable: bool) {
        match alarm {
            AlarmId::Alarm1 => self.set_alarm1_interrupt_enable(enable),
            AlarmId::Alarm2 => self.set_alarm2_interrupt_enable(enable),
        }
    }
}

impl Status {
    /// Whether `alarm` has fired since its flag was last cleared.
    #[must_use]
    pub fn alarm_flag(&self, alarm: AlarmId) -> bool {
        match alarm {
            AlarmId::Alarm1 => self.alarm1_flag(),
            AlarmId::Alarm2 => self.alarm2_flag(),
        }
    }

    /// Sets or clears the fired flag of `alarm`.
    pub fn set_alarm_flag(&mut self, alarm: AlarmId, fired: bool) {
        match alarm {
            AlarmId::Alarm1 => self.set_alarm1_flag(fired),
            AlarmId::Alarm2 => self.set_alarm2_flag(fired),
        }
    }
}

/// Matching modes of Alarm 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm1Mode {
    /// Fires once per second
    EverySecond,
    /// Fires when the seconds match
    OnSecond,
    /// Fires when minutes and seconds match
    OnMinute,
    /// Fires when hours, minutes and seconds match
    OnHour,
    /// Fires when date of month, hours, minutes and seconds match
    OnDate,
    /// Fires when day of week, hours, minutes and seconds match
    OnWeekday,
}

impl Alarm1Mode {
    const TABLE: [(Alarm1Mode, u8); 6] = [
        (Alarm1Mode::EverySecond, A1M1 | A1M2 | A1M3 | A1M4),
        (Alarm1Mode::OnSecond, A1M2 | A1M3 | A1M4),
        (Alarm1Mode::OnMinute, A1M3 | A1M4),
        (Alarm1Mode::OnHour, A1M4),
        (Alarm1Mode::OnDate, 0),
        (Alarm1Mode::OnWeekday, A1_DY_DT),
    ];

    /// Packed mode bits: A1M1..A1M4 in bits 0-3, DY/DT in bit 4.
    #[must_use]
    pub fn bits(self) -> u8 {
        Self::TABLE
            .iter()
            .find(|(mode, _)| *mode == self)
            .map_or(0, |(_, bits)| *bits)
    }

    /// Looks up the mode for packed mode bits, `None` if the combination is
    /// not one the device documents.
    #[must_use]
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, b)| *b == bits)
            .map(|(mode, _)| *mode)
    }
}

/// Matching modes of Alarm 2. Alarm 2 always fires at 00 seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alarm2Mode {
    /// Fires once per minute
    EveryMinute,
    /// Fires when the minutes match
    OnMinute,
    /// Fires when hours and minutes match
    OnHour,
    /// Fires when date of month, hours and minutes match
    OnDate,
    /// Fires when day of week, hours and minutes match
    OnWeekday,
}

impl Alarm2Mode {
    const TABLE: [(Alarm2Mode, u8); 5] = [
        (Alarm2Mode::EveryMinute, A2M2 | A2M3 | A2M4),
        (Alarm2Mode::OnMinute, A2M3 | A2M4),
        (Alarm2Mode::OnHour, A2M4),
        (Alarm2Mode::OnDate, 0),
        (Alarm2Mode::OnWeekday, A2_DY_DT),
    ];

    /// Packed mode bits: A2M2..A2M4 in bits 0-2, DY/DT in bit 3.
    #[must_use]
    pub fn bits(self) -> u8 {
        Self::TABLE
            .iter()
            .find(|(mode, _)| *mode == self)
            .map_or(0, |(_, bits)| *bits)
    }

    /// Looks up the mode for packed mode bits, `None` if the combination is
    /// not one the device documents.
    #[must_use]
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, b)| *b == bits)
            .map(|(mode, _)| *mode)
    }
}

/// Alarm 1 setting: a mode plus the time fields it matches on.
///
/// Fields the mode does not match on are still written to the device but have
/// no effect. For [`Alarm1Mode::OnWeekday`] the weekday is computed from the
/// date in `time`, so pick any date that falls on the wanted day.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm1 {
    /// Matching mode
    pub mode: Alarm1Mode,
    /// Time fields to match
    pub time: DateTime,
}

/// Alarm 2 setting: a mode plus the time fields it matches on.
///
/// The seconds of `time` are ignored; see [`Alarm1`] for weekday handling.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm2 {
    /// Matching mode
    pub mode: Alarm2Mode,
    /// Time fields to match
    pub time: DateTime,
}

fn encode_minutes(minute: u8, masked: bool) -> AlarmMinutes {
    let mut minutes = AlarmMinutes::default();
    minutes.set_bcd_minutes(bin2bcd(minute));
    minutes.set_alarm_mask2(masked);
    minutes
}

fn encode_hours(hour: u8, masked: bool) -> AlarmHours {
    let mut hours = AlarmHours::default();
    hours.set_time_representation(TimeRepresentation::TwentyFourHour);
    hours.set_bcd_hours(bin2bcd(hour));
    hours.set_alarm_mask3(masked);
    hours
}

fn encode_day_date(time: &DateTime, masked: bool, select: DayDateSelect) -> AlarmDayDate {
    let mut day_date = AlarmDayDate::default();
    day_date.set_day_date_select(select);
    match select {
        DayDateSelect::Day => {
            let weekday = day_of_week(time.year, time.month, time.day);
            day_date.set_bcd_day(bin2bcd(weekday + 1));
        }
        DayDateSelect::Date => day_date.set_bcd_date(bin2bcd(time.day)),
    }
    day_date.set_alarm_mask4(masked);
    day_date
}

/// Builds the decoded time of an alarm from its register fields.
fn decode_time(
    second: u8,
    minutes: AlarmMinutes,
    hours: AlarmHours,
    day_date: AlarmDayDate,
) -> DateTime {
    let (day, weekday) = if day_date.alarm_mask4() {
        (NOT_APPLICABLE, NOT_APPLICABLE)
    } else {
        match day_date.day_date_select() {
            // Stored 1-based; a zero register saturates to Sunday
            DayDateSelect::Day => (
                NOT_APPLICABLE,
                bcd2bin(day_date.bcd_day()).saturating_sub(1),
            ),
            DayDateSelect::Date => (bcd2bin(day_date.bcd_date()), NOT_APPLICABLE),
        }
    };
    DateTime {
        second,
        minute: bcd2bin(minutes.bcd_minutes()),
        hour: hours.hour(),
        day,
        month: ALARM_REFERENCE_MONTH,
        year: ALARM_REFERENCE_YEAR,
        weekday,
    }
}

/// Register image of the 4 byte Alarm 1 block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DS3231Alarm1 {
    seconds: AlarmSeconds,
    minutes: AlarmMinutes,
    hours: AlarmHours,
    day_date: AlarmDayDate,
}

impl DS3231Alarm1 {
    /// Encodes an alarm setting into its register image.
    #[must_use]
    pub fn from_alarm(alarm: &Alarm1) -> Self {
        let bits = alarm.mode.bits();
        let time = &alarm.time;

        let mut seconds = AlarmSeconds::default();
        seconds.set_bcd_seconds(bin2bcd(time.second));
        seconds.set_alarm_mask1(bits & A1M1 != 0);

        let select = if bits & A1_DY_DT != 0 {
            DayDateSelect::Day
        } else {
            DayDateSelect::Date
        };

        DS3231Alarm1 {
            seconds,
            minutes: encode_minutes(time.minute, bits & A1M2 != 0),
            hours: encode_hours(time.hour, bits & A1M3 != 0),
            day_date: encode_day_date(time, bits & A1M4 != 0, select),
        }
    }

    /// Packed mode bits as stored in the registers.
    #[must_use]
    pub fn mode_bits(&self) -> u8 {
        u8::from(self.seconds.alarm_mask1())
            | u8::from(self.minutes.alarm_mask2()) << 1
            | u8::from(self.hours.alarm_mask3()) << 2
            | u8::from(self.day_date.alarm_mask4()) << 3
            | u8::from(self.day_date.day_date_select()) << 4
    }

    /// Decodes the register image.
    ///
    /// # Errors
    ///
    /// Returns the packed mode bits when they do not form a documented mode.
    pub fn to_alarm(&self) -> Result<Alarm1, u8> {
        let bits = self.mode_bits();
        let mode = Alarm1Mode::from_bits(bits).ok_or(bits)?;
        let time = decode_time(
            bcd2bin(self.seconds.bcd_seconds()),
            self.minutes,
            self.hours,
            self.day_date,
        );
        Ok(Alarm1 { mode, time })
    }
}

impl From<[u8; 4]> for DS3231Alarm1 {
    fn from(data: [u8; 4]) -> Self {
        DS3231Alarm1 {
            seconds: AlarmSeconds(data[0]),
            minutes: AlarmMinutes(data[1]),
            hours: AlarmHours(data[2]),
            day_date: AlarmDayDate(data[3]),
        }
    }
}

impl From<&DS3231Alarm1> for [u8; 4] {
    fn from(alarm: &DS3231Alarm1) -> [u8; 4] {
        [
            alarm.seconds.0,
            alarm.minutes.0,
            alarm.hours.0,
            alarm.day_date.0,
        ]
    }
}

/// Register image of the 3 byte Alarm 2 block (no seconds register).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DS3231Alarm2 {
    minutes: AlarmMinutes,
    hours: AlarmHours,
    day_date: AlarmDayDate,
}

impl DS3231Alarm2 {
    /// Encodes an alarm setting into its register image.
    #[must_use]
    pub fn from_alarm(alarm: &Alarm2) -> Self {
        let bits = alarm.mode.bits();
        let time = &alarm.time;
        let select = if bits & A2_DY_DT != 0 {
            DayDateSelect::Day
        } else {
            DayDateSelect::Date
        };

        DS3231Alarm2 {
            minutes: encode_minutes(time.minute, bits & A2M2 != 0),
            hours: encode_hours(time.hour, bits & A2M3 != 0),
            day_date: encode_day_date(time, bits & A2M4 != 0, select),
        }
    }

    /// Packed mode bits as stored in the registers.
    #[must_use]
    pub fn mode_bits(&self) -> u8 {
        u8::from(self.minutes.alarm_mask2())
            | u8::from(self.hours.alarm_mask3()) << 1
            | u8::from(self.day_date.alarm_mask4()) << 2
            | u8::from(self.day_date.day_date_select()) << 3
    }

    /// Decodes the register image. Seconds are always 0.
    ///
    /// # Errors
    ///
    /// Returns the packed mode bits when they do not form a documented mode.
    pub fn to_alarm(&self) -> Result<Alarm2, u8> {
        let bits = self.mode_bits();
        let mode = Alarm2Mode::from_bits(bits).ok_or(bits)?;
        let time = decode_time(0, self.minutes, self.hours, self.day_date);
        Ok(Alarm2 { mode, time })
    }
}

impl From<[u8; 3]> for DS3231Alarm2 {
    fn from(data: [u8; 3]) -> Self {
        DS3231Alarm2 {
            minutes: AlarmMinutes(data[0]),
            hours: AlarmHours(data[1]),
            day_date: AlarmDayDate(data[2]),
        }
    }
}

impl From<&DS3231Alarm2> for [u8; 3] {
    fn from(alarm: &DS3231Alarm2) -> [u8; 3] {
        [alarm.minutes.0, alarm.hours.0, alarm.day_date.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALARM1_MODES: [Alarm1Mode; 6] = [
        Alarm1Mode::EverySecond,
        Alarm1Mode::OnSecond,
        Alarm1Mode::OnMinute,
        Alarm1Mode::OnHour,
        Alarm1Mode::OnDate,
        Alarm1Mode::OnWeekday,
    ];

    const ALARM2_MODES: [Alarm2Mode; 5] = [
        Alarm2Mode::EveryMinute,
        Alarm2Mode::OnMinute,
        Alarm2Mode::OnHour,
        Alarm2Mode::OnDate,
        Alarm2Mode::OnWeekday,
    ];

    fn alarm1_bytes(mode: Alarm1Mode, time: DateTime) -> [u8; 4] {
        (&DS3231Alarm1::from_alarm(&Alarm1 { mode, time })).into()
    }

    fn alarm2_bytes(mode: Alarm2Mode, time: DateTime) -> [u8; 3] {
        (&DS3231Alarm2::from_alarm(&Alarm2 { mode, time })).into()
    }

    #[test]
    fn test_alarm_id_bits() {
        assert_eq!(AlarmId::Alarm1.bit(), 0x01);
        assert_eq!(AlarmId::Alarm2.bit(), 0x02);
    }

    #[test]
    fn test_control_and_status_alarm_accessors() {
        let mut control = Control::default();
        control.set_alarm_interrupt_enable(AlarmId::Alarm2, true);
        assert_eq!(u8::from(control), AlarmId::Alarm2.bit());
        assert!(control.alarm_interrupt_enable(AlarmId::Alarm2));
        assert!(!control.alarm_interrupt_enable(AlarmId::Alarm1));

        let mut status = Status(0x8B);
        assert!(status.alarm_flag(AlarmId::Alarm1));
        status.set_alarm_flag(AlarmId::Alarm1, false);
        assert_eq!(u8::from(status), 0x8A);
        assert!(status.alarm_flag(AlarmId::Alarm2));
    }

    #[test]
    fn test_mode_tables() {
        let alarm1: [u8; 6] = ALARM1_MODES.map(Alarm1Mode::bits);
        assert_eq!(alarm1, [0x0F, 0x0E, 0x0C, 0x08, 0x00, 0x10]);
        let alarm2: [u8; 5] = ALARM2_MODES.map(Alarm2Mode::bits);
        assert_eq!(alarm2, [0x07, 0x06, 0x04, 0x00, 0x08]);

        for mode in ALARM1_MODES {
            assert_eq!(Alarm1Mode::from_bits(mode.bits()), Some(mode));
        }
        for mode in ALARM2_MODES {
            assert_eq!(Alarm2Mode::from_bits(mode.bits()), Some(mode));
        }
        assert_eq!(Alarm1Mode::from_bits(0x0D), None);
        assert_eq!(Alarm1Mode::from_bits(0x1F), None);
        assert_eq!(Alarm2Mode::from_bits(0x05), None);
    }

    #[test]
    fn test_alarm1_encode_every_second() {
        let time = DateTime::new(24, 4, 2, 12, 8, 30);
        assert_eq!(
            alarm1_bytes(Alarm1Mode::EverySecond, time),
            [0xB0, 0x88, 0x92, 0x82]
        );
    }

    #[test]
    fn test_alarm1_encode_on_hour() {
        let time = DateTime::new(24, 4, 2, 12, 8, 30);
        assert_eq!(
            alarm1_bytes(Alarm1Mode::OnHour, time),
            [0x30, 0x08, 0x12, 0x82]
        );
    }

    #[test]
    fn test_alarm1_encode_on_date() {
        let time = DateTime::new(24, 4, 23, 12, 8, 30);
        assert_eq!(
            alarm1_bytes(Alarm1Mode::OnDate, time),
            [0x30, 0x08, 0x12, 0x23]
        );
    }

    #[test]
    fn test_alarm1_encode_on_weekday_computes_day() {
        // 2024-04-02 is a Tuesday, stored 1-based as 3
        let mut time = DateTime::new(24, 4, 2, 12, 8, 30);
        // The weekday field is ignored in favour of the date
        time.weekday = 6;
        assert_eq!(
            alarm1_bytes(Alarm1Mode::OnWeekday, time),
            [0x30, 0x08, 0x12, 0x43]
        );
    }

    #[test]
    fn test_alarm1_roundtrip_all_modes() {
        let time = DateTime::new(24, 4, 2, 12, 8, 30);
        for mode in ALARM1_MODES {
            let raw = DS3231Alarm1::from_alarm(&Alarm1 { mode, time });
            assert_eq!(raw.mode_bits(), mode.bits());
            let bytes: [u8; 4] = (&raw).into();
            let decoded = DS3231Alarm1::from(bytes).to_alarm().unwrap();

            assert_eq!(decoded.mode, mode);
            assert_eq!(decoded.time.second, 30);
            assert_eq!(decoded.time.minute, 8);
            assert_eq!(decoded.time.hour, 12);
            assert_eq!(decoded.time.month, ALARM_REFERENCE_MONTH);
            assert_eq!(decoded.time.year, ALARM_REFERENCE_YEAR);
            match mode {
                Alarm1Mode::OnDate => {
                    assert_eq!(decoded.time.day, 2);
                    assert_eq!(decoded.time.weekday, NOT_APPLICABLE);
                }
                Alarm1Mode::OnWeekday => {
                    assert_eq!(decoded.time.day, NOT_APPLICABLE);
                    assert_eq!(decoded.time.weekday, 2);
                }
                _ => {
                    assert_eq!(decoded.time.day, NOT_APPLICABLE);
                    assert_eq!(decoded.time.weekday, NOT_APPLICABLE);
                }
            }
        }
    }

    #[test]
    fn test_alarm1_weekday_saturday() {
        // 2000-01-01 is a Saturday, stored as 7
        let time = DateTime::new(0, 1, 1, 23, 59, 59);
        let bytes = alarm1_bytes(Alarm1Mode::OnWeekday, time);
        assert_eq!(bytes, [0x59, 0x59, 0x23, 0x47]);
        let decoded = DS3231Alarm1::from(bytes).to_alarm().unwrap();
        assert_eq!(decoded.time.weekday, 6);
    }

    #[test]
    fn test_alarm1_decode_masked_fields() {
        // Only the seconds participate
        let raw = DS3231Alarm1::from([0x15, 0x80, 0x80, 0x80]);
        assert_eq!(raw.mode_bits(), 0x0E);
        assert_eq!(
            raw.to_alarm(),
            Ok(Alarm1 {
                mode: Alarm1Mode::OnSecond,
                time: DateTime {
                    second: 15,
                    minute: 0,
                    hour: 0,
                    day: NOT_APPLICABLE,
                    month: ALARM_REFERENCE_MONTH,
                    year: ALARM_REFERENCE_YEAR,
                    weekday: NOT_APPLICABLE,
                },
            })
        );
    }

    #[test]
    fn test_alarm1_decode_unknown_mode() {
        // A1M1 and A1M3 set with A1M2 clear is not a documented combination
        let raw = DS3231Alarm1::from([0x80, 0x00, 0x80, 0x80]);
        assert_eq!(raw.to_alarm(), Err(0x0D));
    }

    #[test]
    fn test_alarm1_decode_twelve_hour_register() {
        // 7 PM stored in 12-hour format, on date 15
        let raw = DS3231Alarm1::from([0x00, 0x45, 0x67, 0x15]);
        let alarm = raw.to_alarm().unwrap();
        assert_eq!(alarm.mode, Alarm1Mode::OnDate);
        assert_eq!(alarm.time.hour, 19);
        assert_eq!(alarm.time.minute, 45);
        assert_eq!(alarm.time.day, 15);
    }

    #[test]
    fn test_alarm2_encode_on_hour() {
        let time = DateTime::new(24, 1, 1, 7, 30, 0);
        assert_eq!(alarm2_bytes(Alarm2Mode::OnHour, time), [0x30, 0x07, 0x81]);
    }

    #[test]
    fn test_alarm2_encode_every_minute() {
        let time = DateTime::new(24, 1, 15, 7, 30, 45);
        assert_eq!(
            alarm2_bytes(Alarm2Mode::EveryMinute, time),
            [0xB0, 0x87, 0x95]
        );
    }

    #[test]
    fn test_alarm2_encode_on_weekday() {
        // 2024-01-05 is a Friday, stored as 6
        let time = DateTime::new(24, 1, 5, 17, 45, 0);
        assert_eq!(
            alarm2_bytes(Alarm2Mode::OnWeekday, time),
            [0x45, 0x17, 0x46]
        );
    }

    #[test]
    fn test_alarm2_roundtrip_all_modes() {
        let time = DateTime::new(24, 4, 23, 18, 5, 42);
        for mode in ALARM2_MODES {
            let bytes = alarm2_bytes(mode, time);
            let decoded = DS3231Alarm2::from(bytes).to_alarm().unwrap();

            assert_eq!(decoded.mode, mode);
            assert_eq!(decoded.time.second, 0);
            assert_eq!(decoded.time.minute, 5);
            assert_eq!(decoded.time.hour, 18);
            assert_eq!(decoded.time.month, ALARM_REFERENCE_MONTH);
            assert_eq!(decoded.time.year, ALARM_REFERENCE_YEAR);
            match mode {
                Alarm2Mode::OnDate => {
                    assert_eq!(decoded.time.day, 23);
                    assert_eq!(decoded.time.weekday, NOT_APPLICABLE);
                }
                Alarm2Mode::OnWeekday => {
                    assert_eq!(decoded.time.day, NOT_APPLICABLE);
                    // Tuesday
                    assert_eq!(decoded.time.weekday, 2);
                }
                _ => {
                    assert_eq!(decoded.time.day, NOT_APPLICABLE);
                    assert_eq!(decoded.time.weekday, NOT_APPLICABLE);
                }
            }
        }
    }

    #[test]
    fn test_alarm2_decode_unknown_mode() {
        let raw = DS3231Alarm2::from([0x80, 0x00, 0x80]);
        assert_eq!(raw.mode_bits(), 0x05);
        assert_eq!(raw.to_alarm(), Err(0x05));
    }

    #[test]
    fn test_decode_zero_weekday_saturates() {
        // DY/DT set but weekday register holds 0, which the device never does
        let raw = DS3231Alarm2::from([0x00, 0x00, 0x40]);
        let alarm = raw.to_alarm().unwrap();
        assert_eq!(alarm.mode, Alarm2Mode::OnWeekday);
        assert_eq!(alarm.time.weekday, 0);
    }
}

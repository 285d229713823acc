//! Register map and bitfield structures for the DS3231 RTC.
//!
//! Each register the driver touches has a `bitfield!` newtype over its raw
//! byte. Flag bits get named accessors; two-digit values are exposed as whole
//! BCD fields and packed or unpacked with [`crate::bcd`].

use bitfield::bitfield;

use crate::bcd::bcd2bin;

/// Register addresses for the DS3231 RTC.
#[allow(unused)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAddr {
    /// First register of the 7 byte time block
    Seconds = 0x00,
    /// First register of the 4 byte alarm 1 block
    Alarm1Seconds = 0x07,
    /// First register of the 3 byte alarm 2 block
    Alarm2Minutes = 0x0B,
    /// Control register
    Control = 0x0E,
    /// Control/Status register
    ControlStatus = 0x0F,
    /// Temperature MSB register, followed by the LSB at 0x12
    MSBTemp = 0x11,
}

/// Hour format flag stored in bit 6 of every hours register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeRepresentation {
    /// 24-hour format (0-23)
    TwentyFourHour = 0,
    /// 12-hour format (1-12 + AM/PM)
    TwelveHour = 1,
}
impl From<u8> for TimeRepresentation {
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => TimeRepresentation::TwentyFourHour,
            1 => TimeRepresentation::TwelveHour,
            _ => panic!("Invalid value for TimeRepresentation: {}", v),
        }
    }
}
impl From<TimeRepresentation> for u8 {
    fn from(v: TimeRepresentation) -> Self {
        v as u8
    }
}

/// Oscillator control (EOSC, active low).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oscillator {
    /// Oscillator runs on battery power
    Enabled = 0,
    /// Oscillator stops when the device switches to battery power
    Disabled = 1,
}
impl From<u8> for Oscillator {
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => Oscillator::Enabled,
            1 => Oscillator::Disabled,
            _ => panic!("Invalid value for Oscillator: {}", v),
        }
    }
}
impl From<Oscillator> for u8 {
    fn from(v: Oscillator) -> Self {
        v as u8
    }
}

/// INT/SQW pin function (INTCN).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptControl {
    /// Pin outputs the square wave
    SquareWave = 0,
    /// Pin signals alarm interrupts
    Interrupt = 1,
}
impl From<u8> for InterruptControl {
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => InterruptControl::SquareWave,
            1 => InterruptControl::Interrupt,
            _ => panic!("Invalid value for InterruptControl: {}", v),
        }
    }
}
impl From<InterruptControl> for u8 {
    fn from(v: InterruptControl) -> Self {
        v as u8
    }
}

/// Rate select bits (RS2:RS1).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SquareWaveFrequency {
    /// 1 Hz
    Hz1 = 0b00,
    /// 1.024 kHz
    Hz1024 = 0b01,
    /// 4.096 kHz
    Hz4096 = 0b10,
    /// 8.192 kHz
    Hz8192 = 0b11,
}
impl From<u8> for SquareWaveFrequency {
    /// # Panics
    /// Panics if the value does not fit in two bits.
    fn from(v: u8) -> Self {
        match v {
            0b00 => SquareWaveFrequency::Hz1,
            0b01 => SquareWaveFrequency::Hz1024,
            0b10 => SquareWaveFrequency::Hz4096,
            0b11 => SquareWaveFrequency::Hz8192,
            _ => panic!("Invalid value for SquareWaveFrequency: {}", v),
        }
    }
}
impl From<SquareWaveFrequency> for u8 {
    fn from(v: SquareWaveFrequency) -> Self {
        v as u8
    }
}

/// Day/Date select for alarm registers (DY/DT bit).
///
/// This controls whether the alarm day/date register matches against
/// the day of the week or the date of the month.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayDateSelect {
    /// Match against date of the month (1-31)
    Date = 0,
    /// Match against day of the week (1-7, where 1=Sunday)
    Day = 1,
}
impl From<u8> for DayDateSelect {
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => DayDateSelect::Date,
            1 => DayDateSelect::Day,
            _ => panic!("Invalid value for DayDateSelect: {}", v),
        }
    }
}
impl From<DayDateSelect> for u8 {
    fn from(v: DayDateSelect) -> Self {
        v as u8
    }
}

/// Output selected on the INT/SQW pin.
///
/// The pin either carries a square wave at one of four rates or, when INTCN is
/// set, alarm interrupts; in the latter case the square wave is off no matter
/// what the rate bits hold.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SquareWaveRate {
    /// 1 Hz square wave
    Hz1,
    /// 1.024 kHz square wave
    Hz1024,
    /// 4.096 kHz square wave
    Hz4096,
    /// 8.192 kHz square wave
    Hz8192,
    /// No square wave, the pin is in interrupt mode
    Off,
}

impl SquareWaveRate {
    /// Control register bits each rate maps to: (INTCN, RS2:RS1).
    const TABLE: [(SquareWaveRate, InterruptControl, SquareWaveFrequency); 5] = [
        (
            SquareWaveRate::Hz1,
            InterruptControl::SquareWave,
            SquareWaveFrequency::Hz1,
        ),
        (
            SquareWaveRate::Hz1024,
            InterruptControl::SquareWave,
            SquareWaveFrequency::Hz1024,
        ),
        (
            SquareWaveRate::Hz4096,
            InterruptControl::SquareWave,
            SquareWaveFrequency::Hz4096,
        ),
        (
            SquareWaveRate::Hz8192,
            InterruptControl::SquareWave,
            SquareWaveFrequency::Hz8192,
        ),
        (
            SquareWaveRate::Off,
            InterruptControl::Interrupt,
            SquareWaveFrequency::Hz8192,
        ),
    ];

    /// Reads the rate selected by a control register value.
    #[must_use]
    pub fn from_control(control: Control) -> Self {
        if control.interrupt_control() == InterruptControl::Interrupt {
            return SquareWaveRate::Off;
        }
        let frequency = control.square_wave_frequency();
        Self::TABLE
            .iter()
            .find(|(_, intcn, rs)| *intcn == InterruptControl::SquareWave && *rs == frequency)
            .map_or(SquareWaveRate::Off, |(rate, _, _)| *rate)
    }

    /// Writes this rate into the INTCN and RS bits of `control`, leaving the
    /// other bits alone.
    pub fn apply(self, control: &mut Control) {
        if let Some((_, intcn, rs)) = Self::TABLE.iter().find(|(rate, _, _)| *rate == self) {
            control.set_interrupt_control(*intcn);
            control.set_square_wave_frequency(*rs);
        }
    }
}

// This macro generates the From<u8> and Into<u8> implementations for the
// register type
macro_rules! from_register_u8 {
    ($typ:ty) => {
        impl From<u8> for $typ {
            fn from(v: u8) -> Self {
                paste::paste!([< $typ >](v))
            }
        }
        impl From<$typ> for u8 {
            fn from(v: $typ) -> Self {
                v.0
            }
        }
    };
}

/// Turns the fields of an hours register into a 0-23 hour.
fn hour_from_fields(representation: TimeRepresentation, pm: bool, bcd12: u8, bcd24: u8) -> u8 {
    match representation {
        TimeRepresentation::TwentyFourHour => bcd2bin(bcd24),
        TimeRepresentation::TwelveHour => match (bcd2bin(bcd12), pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        },
    }
}

bitfield! {
    /// Seconds register (0-59).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Seconds(u8);
    impl Debug;
    /// Seconds in BCD
    pub bcd_seconds, set_bcd_seconds: 6, 0;
}
from_register_u8!(Seconds);

bitfield! {
    /// Minutes register (0-59).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Minutes(u8);
    impl Debug;
    /// Minutes in BCD
    pub bcd_minutes, set_bcd_minutes: 6, 0;
}
from_register_u8!(Minutes);

bitfield! {
    /// Hours register with format selection.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Hours(u8);
    impl Debug;
    /// Time representation format (12/24 hour)
    pub from into TimeRepresentation, time_representation, set_time_representation: 6, 6;
    /// PM flag, only meaningful in 12-hour format
    pub pm, set_pm: 5;
    /// Hours in BCD (0-23) for 24-hour format
    pub bcd_hours, set_bcd_hours: 5, 0;
    /// Hours in BCD (1-12) for 12-hour format
    pub bcd_hours12, set_bcd_hours12: 4, 0;
}
from_register_u8!(Hours);

impl Hours {
    /// The stored hour as 0-23 regardless of the register's format.
    #[must_use]
    pub fn hour(&self) -> u8 {
        hour_from_fields(
            self.time_representation(),
            self.pm(),
            self.bcd_hours12(),
            self.bcd_hours(),
        )
    }
}

bitfield! {
    /// Day of week register (1-7, 1 = Sunday).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Day(u8);
    impl Debug;
    /// Day of week
    pub day, set_day: 2, 0;
}
from_register_u8!(Day);

bitfield! {
    /// Date of month register (1-31).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Date(u8);
    impl Debug;
    /// Date in BCD
    pub bcd_date, set_bcd_date: 5, 0;
}
from_register_u8!(Date);

bitfield! {
    /// Month register (1-12) with century flag.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Month(u8);
    impl Debug;
    /// Century flag, toggled by the device when the year rolls over from 99
    pub century, set_century: 7;
    /// Month in BCD
    pub bcd_month, set_bcd_month: 4, 0;
}
from_register_u8!(Month);

bitfield! {
    /// Year register (0-99).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Year(u8);
    impl Debug;
    /// Year offset from 2000 in BCD
    pub bcd_year, set_bcd_year: 7, 0;
}
from_register_u8!(Year);

bitfield! {
    /// Control register for device configuration.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control(u8);
    impl Debug;
    /// Oscillator enable/disable control
    pub from into Oscillator, oscillator_enable, set_oscillator_enable: 7, 7;
    /// Enable square wave output on battery power
    pub battery_backed_square_wave, set_battery_backed_square_wave: 6;
    /// Force temperature conversion
    pub convert_temperature, set_convert_temperature: 5;
    /// Square wave output frequency selection
    pub from into SquareWaveFrequency, square_wave_frequency, set_square_wave_frequency: 4, 3;
    /// INT/SQW pin function control
    pub from into InterruptControl, interrupt_control, set_interrupt_control: 2, 2;
    /// Enable alarm 2 interrupt
    pub alarm2_interrupt_enable, set_alarm2_interrupt_enable: 1;
    /// Enable alarm 1 interrupt
    pub alarm1_interrupt_enable, set_alarm1_interrupt_enable: 0;
}
from_register_u8!(Control);

#[cfg(feature = "defmt")]
impl defmt::Format for Control {
    fn format(&self, f: defmt::Formatter) {
        match self.oscillator_enable() {
            Oscillator::Enabled => defmt::write!(f, "Oscillator enabled"),
            Oscillator::Disabled => defmt::write!(f, "Oscillator disabled"),
        }
        if self.battery_backed_square_wave() {
            defmt::write!(f, ", Battery backed square wave enabled");
        }
        match SquareWaveRate::from_control(*self) {
            SquareWaveRate::Hz1 => defmt::write!(f, ", 1 Hz square wave"),
            SquareWaveRate::Hz1024 => defmt::write!(f, ", 1024 Hz square wave"),
            SquareWaveRate::Hz4096 => defmt::write!(f, ", 4096 Hz square wave"),
            SquareWaveRate::Hz8192 => defmt::write!(f, ", 8192 Hz square wave"),
            SquareWaveRate::Off => defmt::write!(f, ", Interrupt output"),
        }
        if self.alarm2_interrupt_enable() {
            defmt::write!(f, ", Alarm 2 interrupt enabled");
        }
        if self.alarm1_interrupt_enable() {
            defmt::write!(f, ", Alarm 1 interrupt enabled");
        }
    }
}

bitfield! {
    /// Status register for device state and flags.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Status(u8);
    impl Debug;
    /// Oscillator stop flag, set after a power loss
    pub oscillator_stop_flag, set_oscillator_stop_flag: 7;
    /// Enable 32kHz output
    pub enable_32khz_output, set_enable_32khz_output: 3;
    /// Device busy flag
    pub busy, set_busy: 2;
    /// Alarm 2 triggered flag
    pub alarm2_flag, set_alarm2_flag: 1;
    /// Alarm 1 triggered flag
    pub alarm1_flag, set_alarm1_flag: 0;
}
from_register_u8!(Status);

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Status(OSF={}, EN32kHz={}, BSY={}, A2F={}, A1F={})",
            self.oscillator_stop_flag(),
            self.enable_32khz_output(),
            self.busy(),
            self.alarm2_flag(),
            self.alarm1_flag()
        );
    }
}

bitfield! {
    /// Temperature register (integer part, two's complement).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Temperature(u8);
    impl Debug;
    /// Whole degrees Celsius
    pub i8, temperature, set_temperature: 7, 0;
}
from_register_u8!(Temperature);

bitfield! {
    /// Temperature fraction register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TemperatureFraction(u8);
    impl Debug;
    /// Quarter degrees (0-3) in the top two bits
    pub quarters, set_quarters: 7, 6;
}
from_register_u8!(TemperatureFraction);

/// The two temperature registers read as one block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TemperatureRegisters {
    msb: Temperature,
    lsb: TemperatureFraction,
}

impl TemperatureRegisters {
    /// Temperature in degrees Celsius with 0.25 degree resolution.
    #[must_use]
    pub fn celsius(&self) -> f32 {
        f32::from(self.msb.temperature()) + f32::from(self.lsb.quarters()) * 0.25
    }
}

impl From<[u8; 2]> for TemperatureRegisters {
    fn from(data: [u8; 2]) -> Self {
        TemperatureRegisters {
            msb: Temperature(data[0]),
            lsb: TemperatureFraction(data[1]),
        }
    }
}

// Alarm register types with mask bits and special control bits

bitfield! {
    /// Alarm Seconds register with mask bit (only used by Alarm 1).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmSeconds(u8);
    impl Debug;
    /// Alarm mask bit 1 (A1M1)
    pub alarm_mask1, set_alarm_mask1: 7;
    /// Seconds in BCD
    pub bcd_seconds, set_bcd_seconds: 6, 0;
}
from_register_u8!(AlarmSeconds);

bitfield! {
    /// Alarm Minutes register with mask bit (used by both Alarm 1 and Alarm 2).
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmMinutes(u8);
    impl Debug;
    /// Alarm mask bit 2 (A1M2/A2M2)
    pub alarm_mask2, set_alarm_mask2: 7;
    /// Minutes in BCD
    pub bcd_minutes, set_bcd_minutes: 6, 0;
}
from_register_u8!(AlarmMinutes);

bitfield! {
    /// Alarm Hours register with mask bit and time format control.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmHours(u8);
    impl Debug;
    /// Alarm mask bit 3 (A1M3/A2M3)
    pub alarm_mask3, set_alarm_mask3: 7;
    /// Time representation format (12/24 hour)
    pub from into TimeRepresentation, time_representation, set_time_representation: 6, 6;
    /// PM flag, only meaningful in 12-hour format
    pub pm, set_pm: 5;
    /// Hours in BCD (0-23) for 24-hour format
    pub bcd_hours, set_bcd_hours: 5, 0;
    /// Hours in BCD (1-12) for 12-hour format
    pub bcd_hours12, set_bcd_hours12: 4, 0;
}
from_register_u8!(AlarmHours);

impl AlarmHours {
    /// The stored hour as 0-23 regardless of the register's format.
    #[must_use]
    pub fn hour(&self) -> u8 {
        hour_from_fields(
            self.time_representation(),
            self.pm(),
            self.bcd_hours12(),
            self.bcd_hours(),
        )
    }
}

bitfield! {
    /// Alarm Day/Date register with mask bit and DY/DT control.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmDayDate(u8);
    impl Debug;
    /// Alarm mask bit 4 (A1M4/A2M4)
    pub alarm_mask4, set_alarm_mask4: 7;
    /// Day/Date select (1=day of week, 0=date of month)
    pub from into DayDateSelect, day_date_select, set_day_date_select: 6, 6;
    /// Date of month in BCD when DY/DT=0
    pub bcd_date, set_bcd_date: 5, 0;
    /// Day of week (1-7) when DY/DT=1
    pub bcd_day, set_bcd_day: 3, 0;
}
from_register_u8!(AlarmDayDate);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_date_select_conversions() {
        assert_eq!(DayDateSelect::from(0), DayDateSelect::Date);
        assert_eq!(DayDateSelect::from(1), DayDateSelect::Day);
        assert_eq!(u8::from(DayDateSelect::Date), 0);
        assert_eq!(u8::from(DayDateSelect::Day), 1);
    }

    #[test]
    #[should_panic(expected = "Invalid value for DayDateSelect: 2")]
    fn test_invalid_day_date_select_conversion() {
        let _ = DayDateSelect::from(2);
    }

    #[test]
    #[should_panic(expected = "Invalid value for SquareWaveFrequency: 4")]
    fn test_invalid_square_wave_frequency_conversion() {
        let _ = SquareWaveFrequency::from(4);
    }

    #[test]
    fn test_hours_24_hour_decode() {
        let hours = Hours::from(0x23);
        assert_eq!(
            hours.time_representation(),
            TimeRepresentation::TwentyFourHour
        );
        assert_eq!(hours.hour(), 23);
        assert_eq!(Hours::from(0x00).hour(), 0);
        assert_eq!(Hours::from(0x19).hour(), 19);
    }

    #[test]
    fn test_hours_12_hour_decode() {
        // 12 PM
        assert_eq!(Hours::from(0x72).hour(), 12);
        // 12 AM
        assert_eq!(Hours::from(0x52).hour(), 0);
        // 8 PM
        assert_eq!(Hours::from(0x68).hour(), 20);
        // 11 AM
        assert_eq!(Hours::from(0x51).hour(), 11);
    }

    #[test]
    fn test_alarm_hours_ignores_mask_bit() {
        let hours = AlarmHours::from(0x87);
        assert!(hours.alarm_mask3());
        assert_eq!(hours.hour(), 7);
        assert_eq!(AlarmHours::from(0xF2).hour(), 12);
    }

    #[test]
    fn test_month_century_flag() {
        let month = Month::from(0x84);
        assert!(month.century());
        assert_eq!(month.bcd_month(), 0x04);
        assert_eq!(u8::from(month), 0x84);
    }

    #[test]
    fn test_alarm_day_date_fields() {
        let day = AlarmDayDate::from(0x43);
        assert!(!day.alarm_mask4());
        assert_eq!(day.day_date_select(), DayDateSelect::Day);
        assert_eq!(day.bcd_day(), 3);

        let date = AlarmDayDate::from(0x31);
        assert_eq!(date.day_date_select(), DayDateSelect::Date);
        assert_eq!(date.bcd_date(), 0x31);

        let mut value = AlarmDayDate::default();
        value.set_alarm_mask4(true);
        value.set_day_date_select(DayDateSelect::Day);
        value.set_bcd_day(7);
        assert_eq!(u8::from(value), 0xC7);
    }

    #[test]
    fn test_control_register_fields() {
        // Power-on default: INTCN and both RS bits set
        let control = Control::from(0x1C);
        assert_eq!(control.oscillator_enable(), Oscillator::Enabled);
        assert_eq!(control.interrupt_control(), InterruptControl::Interrupt);
        assert_eq!(control.square_wave_frequency(), SquareWaveFrequency::Hz8192);
        assert!(!control.alarm1_interrupt_enable());
        assert!(!control.alarm2_interrupt_enable());

        let mut control = Control::default();
        control.set_alarm1_interrupt_enable(true);
        control.set_alarm2_interrupt_enable(true);
        control.set_oscillator_enable(Oscillator::Disabled);
        assert_eq!(u8::from(control), 0x83);
    }

    #[test]
    fn test_status_register_fields() {
        let status = Status::from(0x88);
        assert!(status.oscillator_stop_flag());
        assert!(status.enable_32khz_output());
        assert!(!status.busy());
        assert!(!status.alarm1_flag());
        assert!(!status.alarm2_flag());

        let status = Status::from(0x03);
        assert!(status.alarm1_flag());
        assert!(status.alarm2_flag());
    }

    #[test]
    fn test_square_wave_rate_from_control() {
        assert_eq!(SquareWaveRate::from_control(Control(0x00)), SquareWaveRate::Hz1);
        assert_eq!(
            SquareWaveRate::from_control(Control(0x08)),
            SquareWaveRate::Hz1024
        );
        assert_eq!(
            SquareWaveRate::from_control(Control(0x10)),
            SquareWaveRate::Hz4096
        );
        assert_eq!(
            SquareWaveRate::from_control(Control(0x18)),
            SquareWaveRate::Hz8192
        );
        assert_eq!(SquareWaveRate::from_control(Control(0x1C)), SquareWaveRate::Off);
        // INTCN alone wins over any rate bits
        assert_eq!(SquareWaveRate::from_control(Control(0x04)), SquareWaveRate::Off);
        // Unrelated bits do not matter
        assert_eq!(
            SquareWaveRate::from_control(Control(0xCB)),
            SquareWaveRate::Hz1024
        );
    }

    #[test]
    fn test_square_wave_rate_apply() {
        let mut control = Control(0x1F);
        SquareWaveRate::Hz1024.apply(&mut control);
        assert_eq!(u8::from(control), 0x0B);

        let mut control = Control(0x00);
        SquareWaveRate::Off.apply(&mut control);
        assert_eq!(u8::from(control), 0x1C);

        let mut control = Control(0x80);
        SquareWaveRate::Hz4096.apply(&mut control);
        assert_eq!(u8::from(control), 0x90);

        for rate in [
            SquareWaveRate::Hz1,
            SquareWaveRate::Hz1024,
            SquareWaveRate::Hz4096,
            SquareWaveRate::Hz8192,
            SquareWaveRate::Off,
        ] {
            let mut control = Control(0x43);
            rate.apply(&mut control);
            assert_eq!(SquareWaveRate::from_control(control), rate);
            assert_eq!(u8::from(control) & 0xE3, 0x43);
        }
    }

    #[test]
    fn test_temperature_decode() {
        assert_eq!(TemperatureRegisters::from([25, 0b0100_0000]).celsius(), 25.25);
        assert_eq!(TemperatureRegisters::from([25, 0b0000_0000]).celsius(), 25.0);
        assert_eq!(TemperatureRegisters::from([25, 0b1100_0000]).celsius(), 25.75);
        // Low six bits of the fraction register are unused
        assert_eq!(TemperatureRegisters::from([25, 0b1000_0011]).celsius(), 25.5);
    }

    #[test]
    fn test_negative_temperature_decode() {
        // -2 + 0.25
        assert_eq!(TemperatureRegisters::from([0xFE, 0x40]).celsius(), -1.75);
        assert_eq!(TemperatureRegisters::from([0xF6, 0x00]).celsius(), -10.0);
    }
}

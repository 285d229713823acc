//! A platform-agnostic driver for the DS3231 precision real-time clock.
//!
//! The driver talks to the device through the `embedded-hal` I2C traits and
//! turns register contents into plain values:
//!
//! - reading and setting the time ([`DateTime`])
//! - the two alarms, their matching modes, arming, firing and clearing
//! - the square wave output rate and the 32kHz output
//! - the on-chip temperature sensor
//! - the oscillator stop (power lost) flag
//!
//! The register encoding lives in plain functions and types ([`bcd`],
//! [`calendar`], [`DS3231Alarm1`], ...) that can be used without a bus.
//!
//! # Example
//!
//! ```rust,ignore
//! use ds3231_rtc::{Alarm2, Alarm2Mode, AlarmId, DateTime, DS3231};
//!
//! let mut rtc = DS3231::new(i2c);
//! if rtc.is_power_lost()? {
//!     rtc.set_datetime(&"2024/04/02 12:08:00".parse()?)?;
//! }
//! let now = rtc.datetime()?;
//!
//! // Daily alarm at 07:30
//! rtc.set_alarm2(&Alarm2 {
//!     mode: Alarm2Mode::OnHour,
//!     time: DateTime::new(now.year, now.month, now.day, 7, 30, 0),
//! })?;
//! if rtc.is_alarm_fired(AlarmId::Alarm2)? {
//!     rtc.clear_alarm(AlarmId::Alarm2)?;
//! }
//! ```
//!
//! # Features
//!
//! - `async`: adds [`asynch::DS3231`] built on `embedded-hal-async`
//! - `log`: debug output through the `log` crate
//! - `defmt`: debug output and `defmt::Format` impls through `defmt`
#![no_std]

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        macro_rules! debug {
            ($($arg:tt)+) => { log::debug!($($arg)+) };
        }
        macro_rules! warn {
            ($($arg:tt)+) => { log::warn!($($arg)+) };
        }
        macro_rules! error {
            ($($arg:tt)+) => { log::error!($($arg)+) };
        }
    } else if #[cfg(feature = "defmt")] {
        macro_rules! debug {
            ($($arg:tt)+) => { defmt::debug!($($arg)+) };
        }
        macro_rules! warn {
            ($($arg:tt)+) => { defmt::warn!($($arg)+) };
        }
        macro_rules! error {
            ($($arg:tt)+) => { defmt::error!($($arg)+) };
        }
    } else {
        macro_rules! debug {
            ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
        macro_rules! warn {
            ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
        macro_rules! error {
            ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
    }
}

pub mod alarm;
#[cfg(feature = "async")]
pub mod asynch;
pub mod bcd;
pub mod calendar;
pub mod datetime;
mod registers;

use chrono::NaiveDateTime;
use embedded_hal::i2c::I2c;

pub use alarm::{
    Alarm1, Alarm1Mode, Alarm2, Alarm2Mode, AlarmId, DS3231Alarm1, DS3231Alarm2,
    ALARM_REFERENCE_MONTH, ALARM_REFERENCE_YEAR, NOT_APPLICABLE,
};
pub use calendar::{day_of_week, weekday_name};
pub use datetime::{DateTime, DateTimeError};
pub use registers::*;

use datetime::TimeRegisters;

/// Fixed I2C address of the DS3231.
pub const DS3231_ADDRESS: u8 = 0x68;

/// Longest register block written in one transaction (the time block).
const MAX_WRITE: usize = 7;

/// Device settings applied by `configure`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Output of the INT/SQW pin
    pub square_wave_rate: SquareWaveRate,
    /// Keep the square wave running on battery power
    pub battery_backed_square_wave: bool,
    /// Keep the oscillator running on battery power
    pub oscillator_enable: Oscillator,
    /// Drive the 32kHz output pin
    pub output_32khz: bool,
}

impl Default for Config {
    /// The device's power-on state.
    fn default() -> Self {
        Config {
            square_wave_rate: SquareWaveRate::Off,
            battery_backed_square_wave: false,
            oscillator_enable: Oscillator::Enabled,
            output_32khz: true,
        }
    }
}

/// Errors returned by the driver.
#[derive(Debug)]
pub enum DS3231Error<I2CE> {
    /// An I2C transaction failed. Never retried.
    I2c(I2CE),
    /// The registers do not hold a valid calendar date
    DateTime(DateTimeError),
    /// The alarm registers hold a mask/DY-DT combination that is not a
    /// documented mode; carries the packed mode bits
    UnknownAlarmMode(u8),
}

impl<I2CE> From<I2CE> for DS3231Error<I2CE> {
    fn from(e: I2CE) -> Self {
        DS3231Error::I2c(e)
    }
}

// Generates a getter and a setter for a single byte register
macro_rules! register_access {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        $(
            paste::paste! {
                #[doc = concat!("Reads the ", stringify!($name), " register.")]
                ///
                /// # Errors
                /// Returns an error if the I2C transaction fails.
                pub fn $name(&mut self) -> Result<$typ, DS3231Error<I2C::Error>> {
                    let mut data = [0];
                    self.read_registers($regaddr, &mut data)?;
                    Ok(<$typ>::from(data[0]))
                }

                #[doc = concat!("Writes the ", stringify!($name), " register.")]
                ///
                /// # Errors
                /// Returns an error if the I2C transaction fails.
                pub fn [<set_ $name>](&mut self, value: $typ) -> Result<(), DS3231Error<I2C::Error>> {
                    self.write_registers($regaddr, &[value.into()])
                }
            }
        )+
    };
}

/// DS3231 Real-Time Clock driver.
///
/// Owns the I2C bus handle; every operation is one or more blocking
/// transactions. Sharing a device between threads needs external locking.
pub struct DS3231<I2C: I2c> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> DS3231<I2C> {
    /// Creates a driver for the device at [`DS3231_ADDRESS`].
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DS3231_ADDRESS,
        }
    }

    /// Gives back the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_registers(
        &mut self,
        reg: RegAddr,
        buffer: &mut [u8],
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.i2c.write_read(self.address, &[reg as u8], buffer)?;
        Ok(())
    }

    fn write_registers(
        &mut self,
        reg: RegAddr,
        payload: &[u8],
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let len = payload.len().min(MAX_WRITE);
        let mut frame = [0u8; MAX_WRITE + 1];
        frame[0] = reg as u8;
        frame[1..=len].copy_from_slice(&payload[..len]);
        self.i2c.write(self.address, &frame[..=len])?;
        Ok(())
    }

    register_access!(
        (control, RegAddr::Control, Control),
        (status, RegAddr::ControlStatus, Status)
    );

    /// Checks that the device answers.
    ///
    /// Reads the status register and looks at the EN32kHz bit, which is set at
    /// power-up. This is a liveness heuristic: a device whose 32kHz output was
    /// turned off also reports `false`.
    pub fn connect(&mut self) -> bool {
        match self.status() {
            Ok(status) if status.enable_32khz_output() => true,
            Ok(status) => {
                warn!("DS3231: EN32kHz clear, status={}", u8::from(status));
                false
            }
            Err(_) => {
                warn!("DS3231: no response at address {}", self.address);
                false
            }
        }
    }

    /// Applies a configuration to the control and status registers.
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn configure(&mut self, config: &Config) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        control.set_oscillator_enable(config.oscillator_enable);
        control.set_battery_backed_square_wave(config.battery_backed_square_wave);
        config.square_wave_rate.apply(&mut control);
        debug!("DS3231: control: {:?}", control);
        self.set_control(control)?;

        let mut status = self.status()?;
        status.set_enable_32khz_output(config.output_32khz);
        self.set_status(status)
    }

    /// Whether the oscillator stopped since the time was last set, meaning
    /// the time can not be trusted.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails.
    pub fn is_power_lost(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.status()?.oscillator_stop_flag())
    }

    /// Reads the current date and time. The weekday is computed from the date.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails.
    pub fn datetime(&mut self) -> Result<DateTime, DS3231Error<I2C::Error>> {
        let mut data = [0; 7];
        self.read_registers(RegAddr::Seconds, &mut data)?;
        debug!("DS3231: time registers {:?}", data);
        Ok(TimeRegisters::from(data).to_datetime())
    }

    /// Sets the date and time, then clears the oscillator stop flag.
    ///
    /// The weekday written is the one in `datetime`; build it with
    /// [`DateTime::new`] to keep it consistent with the date.
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), DS3231Error<I2C::Error>> {
        let data: [u8; 7] = (&TimeRegisters::from_datetime(datetime)).into();
        debug!("DS3231: writing time registers {:?}", data);
        self.write_registers(RegAddr::Seconds, &data)?;

        let mut status = self.status()?;
        status.set_oscillator_stop_flag(false);
        self.set_status(status)
    }

    /// Reads the current date and time as a chrono `NaiveDateTime`.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails or the registers do not
    /// hold a valid date.
    pub fn naive_datetime(&mut self) -> Result<NaiveDateTime, DS3231Error<I2C::Error>> {
        NaiveDateTime::try_from(self.datetime()?).map_err(DS3231Error::DateTime)
    }

    /// Sets the date and time from a chrono `NaiveDateTime` (2000-2099).
    ///
    /// # Errors
    /// Returns an error if the year is out of range or an I2C transaction
    /// fails.
    pub fn set_naive_datetime(
        &mut self,
        datetime: &NaiveDateTime,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let datetime = DateTime::try_from(datetime).map_err(DS3231Error::DateTime)?;
        self.set_datetime(&datetime)
    }

    /// Reads the INT/SQW pin output.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails.
    pub fn square_wave_rate(&mut self) -> Result<SquareWaveRate, DS3231Error<I2C::Error>> {
        Ok(SquareWaveRate::from_control(self.control()?))
    }

    /// Selects the INT/SQW pin output. Any rate other than
    /// [`SquareWaveRate::Off`] takes the pin out of interrupt mode.
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn set_square_wave_rate(
        &mut self,
        rate: SquareWaveRate,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        rate.apply(&mut control);
        self.set_control(control)
    }

    /// Reads the temperature in degrees Celsius (0.25 degree resolution).
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails.
    pub fn temperature(&mut self) -> Result<f32, DS3231Error<I2C::Error>> {
        let mut data = [0; 2];
        self.read_registers(RegAddr::MSBTemp, &mut data)?;
        Ok(TemperatureRegisters::from(data).celsius())
    }

    fn arm_alarm(&mut self, alarm: AlarmId) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        control.set_interrupt_control(InterruptControl::Interrupt);
        control.set_alarm_interrupt_enable(alarm, true);
        self.set_control(control)
    }

    /// Writes Alarm 1 and arms it: the alarm's interrupt is enabled and the
    /// INT/SQW pin is switched to interrupt mode.
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn set_alarm1(&mut self, alarm: &Alarm1) -> Result<(), DS3231Error<I2C::Error>> {
        let data: [u8; 4] = (&DS3231Alarm1::from_alarm(alarm)).into();
        debug!("DS3231: alarm1 {:?} registers {:?}", alarm.mode, data);
        self.write_registers(RegAddr::Alarm1Seconds, &data)?;
        self.arm_alarm(AlarmId::Alarm1)
    }

    /// Writes Alarm 2 and arms it, see [`DS3231::set_alarm1`].
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn set_alarm2(&mut self, alarm: &Alarm2) -> Result<(), DS3231Error<I2C::Error>> {
        let data: [u8; 3] = (&DS3231Alarm2::from_alarm(alarm)).into();
        debug!("DS3231: alarm2 {:?} registers {:?}", alarm.mode, data);
        self.write_registers(RegAddr::Alarm2Minutes, &data)?;
        self.arm_alarm(AlarmId::Alarm2)
    }

    /// Reads back the Alarm 1 setting. See [`alarm`] for how the month, year
    /// and unused day fields are reported.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails or the mask bits do not
    /// form a documented mode.
    pub fn alarm1_status(&mut self) -> Result<Alarm1, DS3231Error<I2C::Error>> {
        let mut data = [0; 4];
        self.read_registers(RegAddr::Alarm1Seconds, &mut data)?;
        debug!("DS3231: alarm1 registers {:?}", data);
        DS3231Alarm1::from(data)
            .to_alarm()
            .map_err(DS3231Error::UnknownAlarmMode)
    }

    /// Reads back the Alarm 2 setting. Seconds are always 0.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails or the mask bits do not
    /// form a documented mode.
    pub fn alarm2_status(&mut self) -> Result<Alarm2, DS3231Error<I2C::Error>> {
        let mut data = [0; 3];
        self.read_registers(RegAddr::Alarm2Minutes, &mut data)?;
        debug!("DS3231: alarm2 registers {:?}", data);
        DS3231Alarm2::from(data)
            .to_alarm()
            .map_err(DS3231Error::UnknownAlarmMode)
    }

    /// Whether the alarm's interrupt is enabled.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails.
    pub fn is_alarm_armed(&mut self, alarm: AlarmId) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.control()?.alarm_interrupt_enable(alarm))
    }

    /// Clears the alarm's fired flag, releasing the INT pin.
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn clear_alarm(&mut self, alarm: AlarmId) -> Result<(), DS3231Error<I2C::Error>> {
        let mut status = self.status()?;
        status.set_alarm_flag(alarm, false);
        self.set_status(status)
    }

    /// Disables the alarm's interrupt and clears its fired flag.
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn disable_alarm(&mut self, alarm: AlarmId) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control()?;
        control.set_alarm_interrupt_enable(alarm, false);
        self.set_control(control)?;
        self.clear_alarm(alarm)
    }

    /// Whether the alarm has fired since its flag was last cleared.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails.
    pub fn is_alarm_fired(&mut self, alarm: AlarmId) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.status()?.alarm_flag(alarm))
    }

    /// Turns on the 32kHz output pin (open drain, needs a pull-up).
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn enable_32khz_output(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut status = self.status()?;
        status.set_enable_32khz_output(true);
        self.set_status(status)
    }

    /// Turns off the 32kHz output pin.
    ///
    /// # Errors
    /// Returns an error if an I2C transaction fails.
    pub fn disable_32khz_output(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut status = self.status()?;
        status.set_enable_32khz_output(false);
        self.set_status(status)
    }

    /// Whether the 32kHz output pin is on.
    ///
    /// # Errors
    /// Returns an error if the I2C transaction fails.
    pub fn is_32khz_output_enabled(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.status()?.enable_32khz_output())
    }
}

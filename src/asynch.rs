//! Async implementation of the DS3231 driver.
//!
//! Same operations and register traffic as [`crate::DS3231`], over the
//! `embedded-hal-async` I2C trait. Only available with the `async` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use ds3231_rtc::asynch::DS3231;
//!
//! let mut rtc = DS3231::new(i2c);
//! rtc.configure(&Config::default()).await?;
//! let datetime = rtc.datetime().await?;
//! ```

use chrono::NaiveDateTime;
use embedded_hal_async::i2c::I2c;
use paste::paste;

use crate::datetime::TimeRegisters;
use crate::{
    Alarm1, Alarm2, AlarmId, Config, Control, DS3231Alarm1, DS3231Alarm2, DS3231Error, DateTime,
    InterruptControl, RegAddr, SquareWaveRate, Status, TemperatureRegisters, DS3231_ADDRESS,
};

const MAX_WRITE: usize = 7;

/// DS3231 Real-Time Clock async driver.
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

    async fn read_registers(
        &mut self,
        reg: RegAddr,
        buffer: &mut [u8],
    ) -> Result<(), DS3231Error<I2C::Error>> {
        self.i2c.write_read(self.address, &[reg as u8], buffer).await?;
        Ok(())
    }

    async fn write_registers(
        &mut self,
        reg: RegAddr,
        payload: &[u8],
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let len = payload.len().min(MAX_WRITE);
        let mut frame = [0u8; MAX_WRITE + 1];
        frame[0] = reg as u8;
        frame[1..=len].copy_from_slice(&payload[..len]);
        self.i2c.write(self.address, &frame[..=len]).await?;
        Ok(())
    }

    /// Returns `true` when the status register reads back with EN32kHz set.
    pub async fn connect(&mut self) -> bool {
        match self.status().await {
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
    pub async fn configure(&mut self, config: &Config) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control().await?;
        control.set_oscillator_enable(config.oscillator_enable);
        control.set_battery_backed_square_wave(config.battery_backed_square_wave);
        config.square_wave_rate.apply(&mut control);
        debug!("DS3231: control: {:?}", control);
        self.set_control(control).await?;

        let mut status = self.status().await?;
        status.set_enable_32khz_output(config.output_32khz);
        self.set_status(status).await
    }

    /// Whether the oscillator stopped since the time was last set.
    pub async fn is_power_lost(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.status().await?.oscillator_stop_flag())
    }

    /// Reads the current date and time.
    pub async fn datetime(&mut self) -> Result<DateTime, DS3231Error<I2C::Error>> {
        let mut data = [0; 7];
        self.read_registers(RegAddr::Seconds, &mut data).await?;
        debug!("DS3231: time registers {:?}", data);
        Ok(TimeRegisters::from(data).to_datetime())
    }

    /// Sets the date and time, then clears the oscillator stop flag.
    pub async fn set_datetime(
        &mut self,
        datetime: &DateTime,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let data: [u8; 7] = (&TimeRegisters::from_datetime(datetime)).into();
        debug!("DS3231: writing time registers {:?}", data);
        self.write_registers(RegAddr::Seconds, &data).await?;

        let mut status = self.status().await?;
        status.set_oscillator_stop_flag(false);
        self.set_status(status).await
    }

    /// Reads the current date and time as a chrono `NaiveDateTime`.
    pub async fn naive_datetime(&mut self) -> Result<NaiveDateTime, DS3231Error<I2C::Error>> {
        NaiveDateTime::try_from(self.datetime().await?).map_err(DS3231Error::DateTime)
    }

    /// Sets the date and time from a chrono `NaiveDateTime` (2000-2099).
    pub async fn set_naive_datetime(
        &mut self,
        datetime: &NaiveDateTime,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let datetime = DateTime::try_from(datetime).map_err(DS3231Error::DateTime)?;
        self.set_datetime(&datetime).await
    }

    pub async fn square_wave_rate(&mut self) -> Result<SquareWaveRate, DS3231Error<I2C::Error>> {
        Ok(SquareWaveRate::from_control(self.control().await?))
    }

    pub async fn set_square_wave_rate(
        &mut self,
        rate: SquareWaveRate,
    ) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control().await?;
        rate.apply(&mut control);
        self.set_control(control).await
    }

    /// Reads the temperature in degrees Celsius.
    pub async fn temperature(&mut self) -> Result<f32, DS3231Error<I2C::Error>> {
        let mut data = [0; 2];
        self.read_registers(RegAddr::MSBTemp, &mut data).await?;
        Ok(TemperatureRegisters::from(data).celsius())
    }

    async fn arm_alarm(&mut self, alarm: AlarmId) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control().await?;
        control.set_interrupt_control(InterruptControl::Interrupt);
        control.set_alarm_interrupt_enable(alarm, true);
        self.set_control(control).await
    }

    /// Writes Alarm 1 and arms it.
    pub async fn set_alarm1(&mut self, alarm: &Alarm1) -> Result<(), DS3231Error<I2C::Error>> {
        let data: [u8; 4] = (&DS3231Alarm1::from_alarm(alarm)).into();
        debug!("DS3231: alarm1 {:?} registers {:?}", alarm.mode, data);
        self.write_registers(RegAddr::Alarm1Seconds, &data).await?;
        self.arm_alarm(AlarmId::Alarm1).await
    }

    /// Writes Alarm 2 and arms it.
    pub async fn set_alarm2(&mut self, alarm: &Alarm2) -> Result<(), DS3231Error<I2C::Error>> {
        let data: [u8; 3] = (&DS3231Alarm2::from_alarm(alarm)).into();
        debug!("DS3231: alarm2 {:?} registers {:?}", alarm.mode, data);
        self.write_registers(RegAddr::Alarm2Minutes, &data).await?;
        self.arm_alarm(AlarmId::Alarm2).await
    }

    pub async fn alarm1_status(&mut self) -> Result<Alarm1, DS3231Error<I2C::Error>> {
        let mut data = [0; 4];
        self.read_registers(RegAddr::Alarm1Seconds, &mut data).await?;
        DS3231Alarm1::from(data)
            .to_alarm()
            .map_err(DS3231Error::UnknownAlarmMode)
    }

    pub async fn alarm2_status(&mut self) -> Result<Alarm2, DS3231Error<I2C::Error>> {
        let mut data = [0; 3];
        self.read_registers(RegAddr::Alarm2Minutes, &mut data).await?;
        DS3231Alarm2::from(data)
            .to_alarm()
            .map_err(DS3231Error::UnknownAlarmMode)
    }

    pub async fn is_alarm_armed(
        &mut self,
        alarm: AlarmId,
    ) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.control().await?.alarm_interrupt_enable(alarm))
    }

    pub async fn clear_alarm(&mut self, alarm: AlarmId) -> Result<(), DS3231Error<I2C::Error>> {
        let mut status = self.status().await?;
        status.set_alarm_flag(alarm, false);
        self.set_status(status).await
    }

    /// Disables the alarm's interrupt and clears its fired flag.
    pub async fn disable_alarm(&mut self, alarm: AlarmId) -> Result<(), DS3231Error<I2C::Error>> {
        let mut control = self.control().await?;
        control.set_alarm_interrupt_enable(alarm, false);
        self.set_control(control).await?;
        self.clear_alarm(alarm).await
    }

    pub async fn is_alarm_fired(
        &mut self,
        alarm: AlarmId,
    ) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.status().await?.alarm_flag(alarm))
    }

    pub async fn enable_32khz_output(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut status = self.status().await?;
        status.set_enable_32khz_output(true);
        self.set_status(status).await
    }

    pub async fn disable_32khz_output(&mut self) -> Result<(), DS3231Error<I2C::Error>> {
        let mut status = self.status().await?;
        status.set_enable_32khz_output(false);
        self.set_status(status).await
    }

    pub async fn is_32khz_output_enabled(&mut self) -> Result<bool, DS3231Error<I2C::Error>> {
        Ok(self.status().await?.enable_32khz_output())
    }
}

macro_rules! impl_register_access {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        impl<I2C: I2c> DS3231<I2C> {
            $(
                paste! {
                    #[doc = concat!("Reads the ", stringify!($name), " register.")]
                    pub async fn $name(&mut self) -> Result<$typ, DS3231Error<I2C::Error>> {
                        let mut data = [0];
                        self.read_registers($regaddr, &mut data).await?;
                        Ok(<$typ>::from(data[0]))
                    }

                    #[doc = concat!("Writes the ", stringify!($name), " register.")]
                    pub async fn [<set_ $name>](&mut self, value: $typ) -> Result<(), DS3231Error<I2C::Error>> {
                        self.write_registers($regaddr, &[value.into()]).await
                    }
                }
            )+
        }
    }
}

impl_register_access!(
    (control, RegAddr::Control, Control),
    (status, RegAddr::ControlStatus, Status)
);

//! Free-fall detection on interrupt generator 1.
//!
//! The device is programmed so that `INT1` goes high (latched by default)
//! once acceleration on all three axes stays below the threshold for the
//! configured duration. [`FreeFall::run`] then watches the pin and reports
//! each event on a console.

use core::convert::Infallible;
use core::fmt::{Debug, Write};

use embedded_hal::digital::{ErrorType, InputPin};

use crate::interface::Interface;
use crate::reg::{FullScale, Mode, Notification, Odr};
use crate::{Error, IgConfig, IgSource, Int1Routing, Lis3de};

/// Line written to the console for every detected event
pub const FREE_FALL_MESSAGE: &str = "freefall detected\r\n";

/// Progress of the detection sequence
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Nothing read from the device yet
    Init,
    /// `WHO_AM_I` matched
    Verified,
    /// Detection registers programmed
    Configured,
    /// Watching the interrupt pin
    Polling,
}

/// Interrupt generator threshold
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Threshold {
    /// `IGx_THS` value as written
    Raw(u8),
    /// Milligravities, resolved against the full scale
    Mg(u16),
}

impl Threshold {
    /// `IGx_THS` value at full scale `fs`
    pub fn bits(self, fs: FullScale) -> u8 {
        match self {
            Threshold::Raw(ths) => ths,
            Threshold::Mg(mg) => fs.ths_from_mg(mg),
        }
    }
}

/// Interrupt generator duration
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duration {
    /// ODR cycles
    Cycles(u8),
    /// Milliseconds, resolved against the data rate and operating mode
    Ms(u16),
}

impl Duration {
    /// `IGx_DURATION` value at `odr` in `mode`
    pub fn cycles(self, odr: Odr, mode: Mode) -> u8 {
        match self {
            Duration::Cycles(d) => d,
            Duration::Ms(ms) => odr.duration_from_ms(ms, mode),
        }
    }
}

/// Free-fall detection settings
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FreeFallConfig {
    /// Output data rate, also the duration time base
    pub odr: Odr,
    /// Full scale, also the threshold resolution
    pub fs: FullScale,
    /// Operating mode
    pub mode: Mode,
    /// `INT1` notification mode
    pub notification: Notification,
    /// `IG1_THS` setting
    pub threshold: Threshold,
    /// `IG1_DURATION` setting
    pub duration: Duration,
}

impl Default for FreeFallConfig {
    /// 100 Hz, ±2 g, low-power, latched,
    /// threshold `0x16` (~350 mg), duration `0x03` (30 ms)
    fn default() -> Self {
        Self {
            odr: Odr::Hz100,
            fs: FullScale::G2,
            mode: Mode::LowPower,
            notification: Notification::Latched,
            threshold: Threshold::Raw(0x16),
            duration: Duration::Cycles(0x03),
        }
    }
}

impl FreeFallConfig {
    /// Overrides the output data rate
    pub fn with_odr(mut self, odr: Odr) -> Self {
        self.odr = odr;
        self
    }

    /// Overrides the full scale
    pub fn with_fs(mut self, fs: FullScale) -> Self {
        self.fs = fs;
        self
    }

    /// Overrides the operating mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the `INT1` notification mode
    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = notification;
        self
    }

    /// Raw threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = Threshold::Raw(threshold);
        self
    }

    /// Threshold in mg, converted with the final full scale
    pub fn with_threshold_mg(mut self, mg: u16) -> Self {
        self.threshold = Threshold::Mg(mg);
        self
    }

    /// Raw duration in ODR cycles
    pub fn with_duration(mut self, duration: u8) -> Self {
        self.duration = Duration::Cycles(duration);
        self
    }

    /// Duration in ms, converted with the final data rate and mode
    pub fn with_duration_ms(mut self, ms: u16) -> Self {
        self.duration = Duration::Ms(ms);
        self
    }

    /// `IG1_THS` value to program
    pub fn threshold_bits(&self) -> u8 {
        self.threshold.bits(self.fs)
    }

    /// `IG1_DURATION` value to program
    pub fn duration_cycles(&self) -> u8 {
        self.duration.cycles(self.odr, self.mode)
    }
}

/// Interrupt pin for boards where `INT1` is not connected, always low
#[derive(Copy, Clone, Debug, Default)]
pub struct Unwired;

impl ErrorType for Unwired {
    type Error = Infallible;
}

impl InputPin for Unwired {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Free-fall runner errors
#[derive(Debug)]
pub enum FreeFallError<E: Debug, PE> {
    /// Bus error or device not found
    Sensor(Error<E>),
    /// Interrupt pin could not be read
    Pin(PE),
    /// Console rejected the notification
    Console(core::fmt::Error),
}

impl<E: Debug, PE> From<Error<E>> for FreeFallError<E, PE> {
    fn from(err: Error<E>) -> Self {
        FreeFallError::Sensor(err)
    }
}

/// Free-fall detection runner
pub struct FreeFall<IFACE, PIN> {
    dev: Lis3de<IFACE>,
    int1: PIN,
    config: FreeFallConfig,
    state: State,
}

impl<IFACE, PIN, E> FreeFall<IFACE, PIN>
where
    IFACE: Interface<Error = E>,
    E: Debug,
    PIN: InputPin,
{
    /// Create a runner, nothing is sent to the device yet
    pub fn new(iface: IFACE, int1: PIN, config: FreeFallConfig) -> Self {
        Self {
            dev: Lis3de::unchecked(iface),
            int1,
            config,
            state: State::Init,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Settings in use
    pub fn config(&self) -> &FreeFallConfig {
        &self.config
    }

    /// Underlying driver
    pub fn device(&mut self) -> &mut Lis3de<IFACE> {
        &mut self.dev
    }

    /// Destroy the runner, return the driver and the interrupt pin
    pub fn release(self) -> (Lis3de<IFACE>, PIN) {
        (self.dev, self.int1)
    }

    /// Check `WHO_AM_I`; on mismatch the runner stays in [`State::Init`]
    /// and nothing else is written
    pub fn verify(&mut self) -> Result<(), FreeFallError<E, PIN::Error>> {
        if self.state != State::Init {
            return Ok(());
        }
        if let Err(err) = self.dev.check_device_id() {
            debug!("lis3de: device not found");
            return Err(err.into());
        }
        self.state = State::Verified;
        debug!("lis3de: device found");
        Ok(())
    }

    /// Program free-fall recognition on interrupt generator 1 routed to `INT1`.
    ///
    /// Registers are written in a fixed order; a bus error stops the
    /// sequence where it is and leaves the runner in [`State::Verified`].
    pub fn configure(&mut self) -> Result<(), FreeFallError<E, PIN::Error>> {
        self.verify()?;
        if self.state != State::Verified {
            return Ok(());
        }
        let cfg = self.config;
        let ths = cfg.threshold_bits();
        let dur = cfg.duration_cycles();

        self.dev.set_odr(cfg.odr)?;
        self.dev.set_fs(cfg.fs)?;
        self.dev.set_pin_int1_config(&Int1Routing {
            ig1: true,
            ..Default::default()
        })?;
        self.dev.set_int1_notification(cfg.notification)?;

        let mut ig1 = self.dev.int1();
        ig1.set_ths(ths)?;
        ig1.set_duration(dur)?;
        ig1.set_config(&IgConfig::free_fall())?;

        self.dev.set_mode(cfg.mode)?;

        self.state = State::Configured;
        info!(
            "lis3de: free-fall armed, ths={=u8:#x} dur={=u8}",
            ths,
            dur
        );
        Ok(())
    }

    /// One polling iteration.
    ///
    /// Configures the device first if needed. When `INT1` is high the
    /// interrupt source is read (clearing the latch) and
    /// [`FREE_FALL_MESSAGE`] is written to `console`.
    pub fn poll<W>(
        &mut self,
        console: &mut W,
    ) -> Result<Option<IgSource>, FreeFallError<E, PIN::Error>>
    where
        W: Write,
    {
        self.configure()?;
        self.state = State::Polling;

        if !self.int1.is_high().map_err(FreeFallError::Pin)? {
            return Ok(None);
        }

        let src = self.dev.int1().get_src()?;
        debug!("lis3de: free-fall {}", src);
        console
            .write_str(FREE_FALL_MESSAGE)
            .map_err(FreeFallError::Console)?;
        Ok(Some(src))
    }

    /// Poll forever, returns only on error
    pub fn run<W>(&mut self, console: &mut W) -> Result<Infallible, FreeFallError<E, PIN::Error>>
    where
        W: Write,
    {
        loop {
            self.poll(console)?;
        }
    }
}

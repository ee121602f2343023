//! Platform-agnostic LIS3DE accelerometer driver which uses I2C or SPI via
//! [embedded-hal] and implements the [`RawAccelerometer` trait][trait]
//! from the `accelerometer` crate.
//!
//! The [`FreeFall`] runner drives the device through the free-fall
//! detection setup (AND of all three axes below a threshold for a minimum
//! duration, latched on `INT1`) and then watches the `INT1` pin.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal
//! [trait]: https://docs.rs/accelerometer/latest/accelerometer/trait.RawAccelerometer.html
//!

#![deny(missing_docs)]
#![deny(warnings)]
#![no_std]
#![forbid(unsafe_code)]

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    };
}

macro_rules! info {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
    };
}

mod freefall;
pub mod interface;
mod reg;

use core::fmt::Debug;
use core::marker::PhantomData;

#[cfg(feature = "out_f32")]
pub use accelerometer::vector::F32x3;
pub use accelerometer::vector::I16x3;
pub use accelerometer::{Accelerometer, Error, ErrorKind, RawAccelerometer};
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;
#[cfg(feature = "out_f32")]
use num_traits::FromPrimitive;

pub use crate::freefall::{
    Duration, FreeFall, FreeFallConfig, FreeFallError, State, Threshold, Unwired,
    FREE_FALL_MESSAGE,
};
pub use crate::interface::{I2cInterface, Interface, SlaveAddr, SpiInterface};
use crate::reg::*;
pub use crate::reg::{Aoi6d, FifoMode, FullScale, Mode, Notification, Odr, DEVICE_ID};

/// Data status structure,
/// decoded from STATUS_REG register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataStatus {
    /// ZYXOR bit
    pub zyxor: bool,
    /// (XOR, YOR, ZOR) bits
    pub xyzor: (bool, bool, bool),
    /// ZYXDA bit
    pub zyxda: bool,
    /// (XDA, YDA, ZDA) bits
    pub xyzda: (bool, bool, bool),
}

/// Signal routing to the `INT1` pin, `CTRL_REG3`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Int1Routing {
    /// `I1_CLICK`
    pub click: bool,
    /// `I1_IG1`, interrupt generator 1
    pub ig1: bool,
    /// `I1_IG2`, interrupt generator 2
    pub ig2: bool,
    /// `I1_DRDY1`
    pub drdy1: bool,
    /// `I1_DRDY2`
    pub drdy2: bool,
    /// `I1_WTM`, FIFO watermark
    pub wtm: bool,
    /// `I1_OVERRUN`, FIFO overrun
    pub overrun: bool,
}

impl Int1Routing {
    fn bits(&self) -> u8 {
        let mut v = 0;
        v |= if self.click { I1_CLICK } else { 0 };
        v |= if self.ig1 { I1_IG1 } else { 0 };
        v |= if self.ig2 { I1_IG2 } else { 0 };
        v |= if self.drdy1 { I1_DRDY1 } else { 0 };
        v |= if self.drdy2 { I1_DRDY2 } else { 0 };
        v |= if self.wtm { I1_WTM } else { 0 };
        v |= if self.overrun { I1_OVERRUN } else { 0 };
        v
    }

    fn from_bits(reg: u8) -> Self {
        Self {
            click: (reg & I1_CLICK) != 0,
            ig1: (reg & I1_IG1) != 0,
            ig2: (reg & I1_IG2) != 0,
            drdy1: (reg & I1_DRDY1) != 0,
            drdy2: (reg & I1_DRDY2) != 0,
            wtm: (reg & I1_WTM) != 0,
            overrun: (reg & I1_OVERRUN) != 0,
        }
    }
}

/// Signal routing to the `INT2` pin, `CTRL_REG6`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Int2Routing {
    /// `I2_CLICK`
    pub click: bool,
    /// `I2_IG1`, interrupt generator 1
    pub ig1: bool,
    /// `I2_IG2`, interrupt generator 2
    pub ig2: bool,
    /// `I2_BOOT`
    pub boot: bool,
    /// `I2_ACT`, sleep-to-wake activity
    pub act: bool,
}

impl Int2Routing {
    const MASK: u8 = I2_CLICK | I2_IG1 | I2_IG2 | I2_BOOT | I2_ACT;

    fn bits(&self) -> u8 {
        let mut v = 0;
        v |= if self.click { I2_CLICK } else { 0 };
        v |= if self.ig1 { I2_IG1 } else { 0 };
        v |= if self.ig2 { I2_IG2 } else { 0 };
        v |= if self.boot { I2_BOOT } else { 0 };
        v |= if self.act { I2_ACT } else { 0 };
        v
    }

    fn from_bits(reg: u8) -> Self {
        Self {
            click: (reg & I2_CLICK) != 0,
            ig1: (reg & I2_IG1) != 0,
            ig2: (reg & I2_IG2) != 0,
            boot: (reg & I2_BOOT) != 0,
            act: (reg & I2_ACT) != 0,
        }
    }
}

/// Interrupt generator configuration, `IGx_CFG`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IgConfig {
    /// `AOI` and `6D` bits
    pub mode: Aoi6d,
    /// (`XHIE`, `YHIE`, `ZHIE`) high event enable
    pub high: (bool, bool, bool),
    /// (`XLIE`, `YLIE`, `ZLIE`) low event enable
    pub low: (bool, bool, bool),
}

impl IgConfig {
    /// Free-fall recognition: AND of X, Y and Z below threshold
    pub fn free_fall() -> Self {
        Self {
            mode: Aoi6d::And,
            high: (false, false, false),
            low: (true, true, true),
        }
    }

    fn bits(&self) -> u8 {
        let mut v = (self.mode as u8) << 6;
        v |= if self.high.0 { XHIE } else { 0 };
        v |= if self.high.1 { YHIE } else { 0 };
        v |= if self.high.2 { ZHIE } else { 0 };
        v |= if self.low.0 { XLIE } else { 0 };
        v |= if self.low.1 { YLIE } else { 0 };
        v |= if self.low.2 { ZLIE } else { 0 };
        v
    }

    fn from_bits(reg: u8) -> Self {
        Self {
            mode: Aoi6d::from_bits((reg & AOI_6D_MASK) >> 6),
            high: ((reg & XHIE) != 0, (reg & YHIE) != 0, (reg & ZHIE) != 0),
            low: ((reg & XLIE) != 0, (reg & YLIE) != 0, (reg & ZLIE) != 0),
        }
    }
}

/// Interrupt generator source snapshot, `IGx_SOURCE`.
///
/// Reading the register also clears a latched interrupt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IgSource {
    /// `IA`, one or more interrupts have been generated
    pub active: bool,
    /// (`XH`, `XL`)
    pub x: (bool, bool),
    /// (`YH`, `YL`)
    pub y: (bool, bool),
    /// (`ZH`, `ZL`)
    pub z: (bool, bool),
}

impl IgSource {
    fn from_bits(reg: u8) -> Self {
        Self {
            active: (reg & IA) != 0,
            x: ((reg & XH) != 0, (reg & XL) != 0),
            y: ((reg & YH) != 0, (reg & YL) != 0),
            z: ((reg & ZH) != 0, (reg & ZL) != 0),
        }
    }

    /// Active with all three axes reporting a low event
    pub fn is_free_fall(&self) -> bool {
        self.active && self.x.1 && self.y.1 && self.z.1
    }
}

/// Click recognition configuration, `CLICK_CFG`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickConfig {
    /// (`XS`, `YS`, `ZS`) single click enable
    pub single: (bool, bool, bool),
    /// (`XD`, `YD`, `ZD`) double click enable
    pub double: (bool, bool, bool),
}

impl ClickConfig {
    fn bits(&self) -> u8 {
        let mut v = 0;
        v |= if self.single.0 { XS } else { 0 };
        v |= if self.single.1 { YS } else { 0 };
        v |= if self.single.2 { ZS } else { 0 };
        v |= if self.double.0 { XD } else { 0 };
        v |= if self.double.1 { YD } else { 0 };
        v |= if self.double.2 { ZD } else { 0 };
        v
    }
}

/// Click source, `CLICK_SRC`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickSource {
    /// `DClick`
    pub double: bool,
    /// `SClick`
    pub single: bool,
    /// `Sign`, negative detection
    pub negative: bool,
    /// (`X`, `Y`, `Z`)
    pub axis: (bool, bool, bool),
}

/// `LIS3DE` driver
pub struct Lis3de<IFACE> {
    /// Bus interface
    iface: IFACE,
    /// Current full-scale
    #[cfg(feature = "out_f32")]
    fs: FullScale,
}

/// Interrupt generator setting and status
pub struct Int<'a, REG, IFACE> {
    dev: &'a mut Lis3de<IFACE>,
    reg: PhantomData<REG>,
}

impl<I2C> Lis3de<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Create a new `LIS3DE` driver from the given `I2C` peripheral
    pub fn new_i2c(i2c: I2C, addr: SlaveAddr) -> Result<Self, Error<I2C::Error>> {
        Self::new(I2cInterface::new(i2c, addr))
    }
}

impl<SPI> Lis3de<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Create a new `LIS3DE` driver from the given `SPI` device
    pub fn new_spi(spi: SPI) -> Result<Self, Error<SPI::Error>> {
        Self::new(SpiInterface::new(spi))
    }
}

impl<IFACE, E> Lis3de<IFACE>
where
    IFACE: Interface<Error = E>,
    E: Debug,
{
    /// Create a new `LIS3DE` driver over the given bus interface
    pub fn new(iface: IFACE) -> Result<Self, Error<E>> {
        let mut dev = Self::unchecked(iface);
        dev.check_device_id()?;
        Ok(dev)
    }

    /// Ensure we have the correct device ID
    pub(crate) fn check_device_id(&mut self) -> Result<(), Error<E>> {
        if self.get_device_id()? != DEVICE_ID {
            ErrorKind::Device.err()?;
        }
        Ok(())
    }

    /// Driver without the `WHO_AM_I` check
    pub(crate) fn unchecked(iface: IFACE) -> Self {
        Self {
            iface,
            #[cfg(feature = "out_f32")]
            fs: FullScale::G2,
        }
    }

    /// Destroy driver instance, return the bus interface
    pub fn destroy(self) -> IFACE {
        self.iface
    }

    /// `WHO_AM_I` register
    pub fn get_device_id(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Register::WHO_AM_I).map_err(Into::into)
    }

    /// Operating mode selection,
    /// `CTRL_REG1`: `LPen` bit
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG1, LPen, mode == Mode::LowPower)?;
        Ok(())
    }

    /// Operating mode,
    /// `CTRL_REG1`: `LPen` bit
    pub fn get_mode(&mut self) -> Result<Mode, Error<E>> {
        let reg = self.read_reg(Register::CTRL_REG1)?;
        Ok(if (reg & LPen) != 0 {
            Mode::LowPower
        } else {
            Mode::Normal
        })
    }

    /// Data rate selection,
    /// `CTRL_REG1`: `ODR`
    pub fn set_odr(&mut self, odr: Odr) -> Result<(), Error<E>> {
        self.modify_reg(Register::CTRL_REG1, |v| {
            (v & !ODR_MASK) | ((odr as u8) << 4)
        })?;
        Ok(())
    }

    /// Data rate,
    /// `CTRL_REG1`: `ODR`
    pub fn get_odr(&mut self) -> Result<Odr, Error<E>> {
        let reg = self.read_reg(Register::CTRL_REG1)?;
        Ok(Odr::from_bits(reg >> 4))
    }

    /// X,Y,Z-axis enable,
    /// `CTRL_REG1`: `Xen`, `Yen`, `Zen`
    pub fn enable_axis(&mut self, (x, y, z): (bool, bool, bool)) -> Result<(), Error<E>> {
        self.modify_reg(Register::CTRL_REG1, |mut v| {
            v &= !(Xen | Yen | Zen); // disable all axes
            v |= if x { Xen } else { 0 };
            v |= if y { Yen } else { 0 };
            v |= if z { Zen } else { 0 };
            v
        })?;
        Ok(())
    }

    /// Enable high-pass filter for CLICK/IG2/IG1,
    /// `CTRL_REG2`: `HPCLICK`, `HP_IA2`, `HP_IA1`
    pub fn set_hp_filter(&mut self, click: bool, ig2: bool, ig1: bool) -> Result<(), Error<E>> {
        self.modify_reg(Register::CTRL_REG2, |mut v| {
            v &= !(HPCLICK | HP_IA2 | HP_IA1);
            v |= if click { HPCLICK } else { 0 };
            v |= if ig2 { HP_IA2 } else { 0 };
            v |= if ig1 { HP_IA1 } else { 0 };
            v
        })?;
        Ok(())
    }

    /// Signals routed to `INT1` pin, the whole `CTRL_REG3` is written
    pub fn set_pin_int1_config(&mut self, cfg: &Int1Routing) -> Result<(), Error<E>> {
        self.write_reg(Register::CTRL_REG3, cfg.bits())?;
        Ok(())
    }

    /// Signals routed to `INT1` pin,
    /// `CTRL_REG3`
    pub fn get_pin_int1_config(&mut self) -> Result<Int1Routing, Error<E>> {
        let reg = self.read_reg(Register::CTRL_REG3)?;
        Ok(Int1Routing::from_bits(reg))
    }

    /// Signals routed to `INT2` pin,
    /// `CTRL_REG6`, `INT_POLARITY` is kept
    pub fn set_pin_int2_config(&mut self, cfg: &Int2Routing) -> Result<(), Error<E>> {
        self.modify_reg(Register::CTRL_REG6, |v| {
            (v & !Int2Routing::MASK) | cfg.bits()
        })?;
        Ok(())
    }

    /// Signals routed to `INT2` pin,
    /// `CTRL_REG6`
    pub fn get_pin_int2_config(&mut self) -> Result<Int2Routing, Error<E>> {
        let reg = self.read_reg(Register::CTRL_REG6)?;
        Ok(Int2Routing::from_bits(reg))
    }

    /// INT1/INT2 pin polarity,
    /// `CTRL_REG6`: `INT_POLARITY`
    pub fn set_int_polarity(&mut self, active_low: bool) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG6, INT_POLARITY, active_low)?;
        Ok(())
    }

    /// Block data update,
    /// `CTRL_REG4`: `BDU`
    pub fn set_bdu(&mut self, bdu: bool) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG4, BDU, bdu)?;
        Ok(())
    }

    /// Full-scale selection,
    /// `CTRL_REG4`: `FS`
    pub fn set_fs(&mut self, fs: FullScale) -> Result<(), Error<E>> {
        self.modify_reg(Register::CTRL_REG4, |v| (v & !FS_MASK) | ((fs as u8) << 4))?;
        #[cfg(feature = "out_f32")]
        {
            self.fs = fs;
        }
        Ok(())
    }

    /// Full-scale,
    /// `CTRL_REG4`: `FS`
    pub fn get_fs(&mut self) -> Result<FullScale, Error<E>> {
        let reg = self.read_reg(Register::CTRL_REG4)?;
        Ok(FullScale::from_bits(reg >> 4))
    }

    /// Reboot memory content,
    /// `CTRL_REG5`: `BOOT`
    pub fn reboot(&mut self, reboot: bool) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG5, BOOT, reboot)?;
        Ok(())
    }

    /// In boot,
    /// `CTRL_REG5`: `BOOT`
    pub fn in_boot(&mut self) -> Result<bool, Error<E>> {
        let reg = self.read_reg(Register::CTRL_REG5)?;
        Ok((reg & BOOT) != 0)
    }

    /// FIFO enable,
    /// `CTRL_REG5`: `FIFO_EN`
    pub fn enable_fifo(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG5, FIFO_EN, enable)?;
        Ok(())
    }

    /// Interrupt generator 1 notification on the pins; when latched
    /// the request is cleared by reading `IG1_SOURCE` (31h),
    /// `CTRL_REG5`: `LIR_IG1`
    pub fn set_int1_notification(&mut self, mode: Notification) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG5, LIR_IG1, mode == Notification::Latched)?;
        Ok(())
    }

    /// Interrupt generator 2 notification on the pins; when latched
    /// the request is cleared by reading `IG2_SOURCE` (35h),
    /// `CTRL_REG5`: `LIR_IG2`
    pub fn set_int2_notification(&mut self, mode: Notification) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG5, LIR_IG2, mode == Notification::Latched)?;
        Ok(())
    }

    /// 4D detection on interrupt generator 1 when `6D` is set in `IG1_CFG`,
    /// `CTRL_REG5`: `D4D_IG1`
    pub fn enable_d4d_int1(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG5, D4D_IG1, enable)?;
        Ok(())
    }

    /// 4D detection on interrupt generator 2 when `6D` is set in `IG2_CFG`,
    /// `CTRL_REG5`: `D4D_IG2`
    pub fn enable_d4d_int2(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CTRL_REG5, D4D_IG2, enable)?;
        Ok(())
    }

    /// Data status,
    /// `STATUS_REG`: as
    /// DataStatus {zyxor: `ZYXOR`, xyzor: (`XOR`, `YOR`, `ZOR`), zyxda: `ZYXDA`, xyzda: (`XDA`, `YDA`, `ZDA`)}
    pub fn get_status(&mut self) -> Result<DataStatus, Error<E>> {
        let reg = self.read_reg(Register::STATUS_REG)?;
        Ok(DataStatus {
            zyxor: (reg & ZYXOR) != 0,
            xyzor: ((reg & XOR) != 0, (reg & YOR) != 0, (reg & ZOR) != 0),
            zyxda: (reg & ZYXDA) != 0,
            xyzda: ((reg & XDA) != 0, (reg & YDA) != 0, (reg & ZDA) != 0),
        })
    }

    /// FIFO mode selection,
    /// `FIFO_CTRL_REG`: `FM`
    pub fn set_fifo_mode(&mut self, fm: FifoMode) -> Result<(), Error<E>> {
        self.modify_reg(Register::FIFO_CTRL_REG, |v| {
            (v & !FM_MASK) | ((fm as u8) << 6)
        })?;
        Ok(())
    }

    /// FIFO watermark,
    /// `FIFO_CTRL_REG`: `FTH`
    pub fn set_fifo_watermark(&mut self, fth: u8) -> Result<(), Error<E>> {
        self.modify_reg(Register::FIFO_CTRL_REG, |v| {
            (v & !FTH_MASK) | (fth & FTH_MASK)
        })?;
        Ok(())
    }

    /// Samples currently stored in the FIFO,
    /// `FIFO_SRC_REG`: `FSS`
    pub fn get_stored_samples(&mut self) -> Result<u8, Error<E>> {
        let value = self.read_reg(Register::FIFO_SRC_REG)?;
        Ok(value & FSS)
    }

    /// Click recognition per axis, the whole `CLICK_CFG` is written
    pub fn set_click_config(&mut self, cfg: &ClickConfig) -> Result<(), Error<E>> {
        self.write_reg(Register::CLICK_CFG, cfg.bits())?;
        Ok(())
    }

    /// Click source,
    /// `CLICK_SRC`, `None` unless `IA` is set
    pub fn get_click_src(&mut self) -> Result<Option<ClickSource>, Error<E>> {
        let reg = self.read_reg(Register::CLICK_SRC)?;
        if (reg & IA) == 0 {
            return Ok(None);
        }
        Ok(Some(ClickSource {
            double: (reg & DClick) != 0,
            single: (reg & SClick) != 0,
            negative: (reg & Sign) != 0,
            axis: ((reg & X) != 0, (reg & Y) != 0, (reg & Z) != 0),
        }))
    }

    /// Keep the click interrupt high until `CLICK_SRC` (39h) is read,
    /// `CLICK_THS`: `LIR_Click`
    pub fn enable_lir_click(&mut self, latch: bool) -> Result<(), Error<E>> {
        self.reg_xset_bits(Register::CLICK_THS, LIR_Click, latch)?;
        Ok(())
    }

    /// Click threshold, `LIR_Click` is kept,
    /// `CLICK_THS`: `Ths`
    pub fn set_click_ths(&mut self, ths: u8) -> Result<(), Error<E>> {
        self.modify_reg(Register::CLICK_THS, |v| (v & LIR_Click) | (ths & THS_MASK))?;
        Ok(())
    }

    /// Click time limit,
    /// `TIME_LIMIT`: `TLI`
    pub fn set_time_limit(&mut self, tli: u8) -> Result<(), Error<E>> {
        self.write_reg(Register::TIME_LIMIT, tli & D_MASK)?;
        Ok(())
    }

    /// Click time latency,
    /// `TIME_LATENCY`: `TLA`
    pub fn set_time_latency(&mut self, tla: u8) -> Result<(), Error<E>> {
        self.write_reg(Register::TIME_LATENCY, tla)?;
        Ok(())
    }

    /// Click time window,
    /// `TIME_WINDOW`: `TW`
    pub fn set_time_window(&mut self, tw: u8) -> Result<(), Error<E>> {
        self.write_reg(Register::TIME_WINDOW, tw)?;
        Ok(())
    }

    /// Sleep-to-wake, return-to-sleep activation threshold in low-power mode,
    /// `ACT_THS`: `Acth`
    pub fn set_act_ths(&mut self, ths: u8) -> Result<(), Error<E>> {
        self.write_reg(Register::ACT_THS, ths & THS_MASK)?;
        Ok(())
    }

    /// Sleep-to-wake, return-to-sleep duration,
    /// `ACT_DUR`: `ActD`
    pub fn set_act_dur(&mut self, d: u8) -> Result<(), Error<E>> {
        self.write_reg(Register::ACT_DUR, d)?;
        Ok(())
    }

    /// `REFERENCE` register
    pub fn set_ref(&mut self, reference: u8) -> Result<(), Error<E>> {
        self.write_reg(Register::REFERENCE, reference)?;
        Ok(())
    }

    /// `REFERENCE` register
    pub fn get_ref(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Register::REFERENCE).map_err(Into::into)
    }

    /// Interrupt generator 1
    pub fn int1(&mut self) -> Int<'_, Ig1Regs, IFACE> {
        Int::new(self)
    }

    /// Interrupt generator 2
    pub fn int2(&mut self) -> Int<'_, Ig2Regs, IFACE> {
        Int::new(self)
    }

    /// Resets control and interrupt generator registers to their default
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        self.write_reg(Register::CTRL_REG1, CTRL_REG1_DEFAULT)?;
        for reg in [
            Register::CTRL_REG2,
            Register::CTRL_REG3,
            Register::CTRL_REG4,
            Register::CTRL_REG5,
            Register::CTRL_REG6,
            Register::IG1_CFG,
            Register::IG2_CFG,
            Register::IG1_THS,
            Register::IG2_THS,
            Register::IG1_DURATION,
            Register::IG2_DURATION,
        ]
        .iter()
        {
            self.write_reg(*reg, 0x00)?;
        }
        #[cfg(feature = "out_f32")]
        {
            self.fs = FullScale::G2;
        }
        Ok(())
    }

    #[inline]
    fn read_reg(&mut self, reg: Register) -> Result<u8, E> {
        let mut buf = [0u8];
        self.iface.read_regs(reg.addr(), &mut buf)?;
        Ok(buf[0])
    }

    #[inline]
    fn read_regs(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), E> {
        self.iface.read_regs(reg.addr(), buffer)
    }

    #[inline]
    fn write_reg(&mut self, reg: Register, val: u8) -> Result<(), E> {
        self.iface.write_reg(reg.addr(), val)
    }

    #[inline]
    fn modify_reg<F>(&mut self, reg: Register, f: F) -> Result<(), E>
    where
        F: FnOnce(u8) -> u8,
    {
        let r = self.read_reg(reg)?;
        self.write_reg(reg, f(r))?;
        Ok(())
    }

    #[inline]
    fn reg_set_bits(&mut self, reg: Register, bits: u8) -> Result<(), E> {
        self.modify_reg(reg, |v| v | bits)
    }

    #[inline]
    fn reg_reset_bits(&mut self, reg: Register, bits: u8) -> Result<(), E> {
        self.modify_reg(reg, |v| v & !bits)
    }

    #[inline]
    fn reg_xset_bits(&mut self, reg: Register, bits: u8, set: bool) -> Result<(), E> {
        if set {
            self.reg_set_bits(reg, bits)
        } else {
            self.reg_reset_bits(reg, bits)
        }
    }
}

impl<IFACE, E> RawAccelerometer<I16x3> for Lis3de<IFACE>
where
    IFACE: Interface<Error = E>,
    E: Debug,
{
    type Error = E;

    /// Get acceleration reading from the accelerometer,
    /// 8-bit `OUT_X`, `OUT_Y`, `OUT_Z` sign-extended
    fn accel_raw(&mut self) -> Result<I16x3, Error<E>> {
        // OUT_X/Y/Z sit on the odd addresses of a 6-byte block
        let mut buf = [0u8; 6];
        self.read_regs(Register::FIFO_READ_START, &mut buf)?;

        Ok(I16x3::new(
            i16::from(buf[1] as i8),
            i16::from(buf[3] as i8),
            i16::from(buf[5] as i8),
        ))
    }
}

#[cfg(feature = "out_f32")]
impl<IFACE, E> Accelerometer for Lis3de<IFACE>
where
    IFACE: Interface<Error = E>,
    E: Debug,
{
    type Error = E;

    /// Get normalized ±g reading from the accelerometer
    fn accel_norm(&mut self) -> Result<F32x3, Error<E>> {
        let acc_raw: I16x3 = self.accel_raw()?;

        Ok(F32x3::new(
            self.fs.convert_out_i16tof32(acc_raw.x),
            self.fs.convert_out_i16tof32(acc_raw.y),
            self.fs.convert_out_i16tof32(acc_raw.z),
        ))
    }

    /// Get sample rate of accelerometer in Hz
    fn sample_rate(&mut self) -> Result<f32, Error<Self::Error>> {
        let creg1 = self.read_reg(Register::CTRL_REG1)?;
        let mode = if creg1 & LPen == 0 {
            Mode::Normal
        } else {
            Mode::LowPower
        };
        let rate = match FromPrimitive::from_u8(creg1 >> 4) {
            Some(odr) => Odr::hz(odr, mode) as f32,
            None => 0.0,
        };
        Ok(rate)
    }
}

impl<'a, REG, IFACE, E> Int<'a, REG, IFACE>
where
    REG: IntRegs,
    IFACE: Interface<Error = E>,
    E: Debug,
{
    fn new(dev: &'a mut Lis3de<IFACE>) -> Self {
        Self {
            dev,
            reg: PhantomData,
        }
    }

    /// Disable interrupt generator,
    /// `IGx_CFG` clean all bits
    pub fn disable(&mut self) -> Result<(), Error<E>> {
        self.dev.write_reg(REG::reg_cfg(), 0x00)?;
        Ok(())
    }

    /// Whole generator configuration,
    /// `IGx_CFG`
    pub fn set_config(&mut self, cfg: &IgConfig) -> Result<(), Error<E>> {
        self.dev.write_reg(REG::reg_cfg(), cfg.bits())?;
        Ok(())
    }

    /// Generator configuration,
    /// `IGx_CFG`
    pub fn get_config(&mut self) -> Result<IgConfig, Error<E>> {
        let reg = self.dev.read_reg(REG::reg_cfg())?;
        Ok(IgConfig::from_bits(reg))
    }

    /// AOI-6D Interrupt mode,
    /// `IGx_CFG`: `AOI`, `6D`
    pub fn set_mode(&mut self, mode: Aoi6d) -> Result<(), Error<E>> {
        self.dev
            .modify_reg(REG::reg_cfg(), |v| (v & !AOI_6D_MASK) | ((mode as u8) << 6))?;
        Ok(())
    }

    /// Source,
    /// `IGx_SOURCE`, reading it clears a latched request
    pub fn get_src(&mut self) -> Result<IgSource, Error<E>> {
        let reg = self.dev.read_reg(REG::reg_src())?;
        Ok(IgSource::from_bits(reg))
    }

    /// Threshold,
    /// `IGx_THS`: `THS`
    pub fn set_ths(&mut self, ths: u8) -> Result<(), Error<E>> {
        self.dev.write_reg(REG::reg_ths(), ths & THS_MASK)?;
        Ok(())
    }

    /// Threshold as f32 in g,
    /// `IGx_THS`: `THS`
    #[cfg(feature = "out_f32")]
    pub fn set_thsf(&mut self, ths: f32) -> Result<(), Error<E>> {
        self.set_ths(self.dev.fs.convert_ths_f32tou8(ths))
    }

    /// Duration in ODR cycles,
    /// `IGx_DURATION`: `D`
    pub fn set_duration(&mut self, d: u8) -> Result<(), Error<E>> {
        self.dev.write_reg(REG::reg_duration(), d & D_MASK)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_fall_generator_config() {
        assert_eq!(IgConfig::free_fall().bits(), 0b1001_0101);
        assert_eq!(IgConfig::from_bits(0b1001_0101), IgConfig::free_fall());
        assert_eq!(IgConfig::default().bits(), 0);
    }

    #[test]
    fn int1_routing_bits() {
        let cfg = Int1Routing {
            ig1: true,
            ..Default::default()
        };
        assert_eq!(cfg.bits(), 0b0100_0000);
        assert_eq!(Int1Routing::from_bits(0b0100_0001), cfg);
    }

    #[test]
    fn source_decoding() {
        let src = IgSource::from_bits(0b0101_0101);
        assert!(src.active);
        assert!(src.is_free_fall());
        assert_eq!(src.x, (false, true));

        let src = IgSource::from_bits(0b0001_0101);
        assert!(!src.is_free_fall());
    }
}

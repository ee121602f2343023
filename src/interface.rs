//! Bus interfaces.
//!
//! The LIS3DE speaks both I²C and SPI; the driver talks to it through the
//! [`Interface`] trait so the transport is picked by the value handed to
//! [`Lis3de::new`](crate::Lis3de::new).

use core::fmt::Debug;

use embedded_hal::i2c::I2c;
use embedded_hal::spi::{Operation, SpiDevice};

use crate::reg::{I2C_AUTO_INC, I2C_SAD, SPI_MS, SPI_RW};

/// Possible slave addresses
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddr {
    /// Default slave address, `SA0` pulled high
    Default,
    /// Alternative slave address providing bit value for `SA0`
    Alternative(bool),
}

impl SlaveAddr {
    pub(crate) fn addr(self) -> u8 {
        match self {
            SlaveAddr::Default => I2C_SAD | 1,
            SlaveAddr::Alternative(a0) => I2C_SAD | a0 as u8,
        }
    }
}

/// Register access over a concrete bus
pub trait Interface {
    /// Bus error
    type Error: Debug;

    /// Write a single register
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Read consecutive registers starting at `reg`
    fn read_regs(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// I²C transport
pub struct I2cInterface<I2C> {
    /// The concrete I²C device implementation
    i2c: I2C,
    /// The I²C device slave address
    addr: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wrap an I²C bus talking to the device at `addr`
    pub fn new(i2c: I2C, addr: SlaveAddr) -> Self {
        Self {
            i2c,
            addr: addr.addr(),
        }
    }

    /// 7-bit slave address in use
    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Return the `I2C` bus instance
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.addr, &[reg | I2C_AUTO_INC, value])
    }

    fn read_regs(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.addr, &[reg | I2C_AUTO_INC], buf)
    }
}

/// 4-wire SPI transport, chip select handled by the [`SpiDevice`]
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Wrap an SPI device
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Return the `SPI` device instance
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.spi.write(&[reg | SPI_MS, value])
    }

    fn read_regs(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }
        let cmd = [reg | SPI_RW | SPI_MS];
        self.spi
            .transaction(&mut [Operation::Write(&cmd), Operation::Read(buf)])
    }
}

#![allow(dead_code, unused_imports)]

pub use lis3de::*;

use embedded_hal_mock as hal;
pub use hal::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTrans};
pub use hal::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
pub use hal::eh1::spi::{Mock as SpiMock, Transaction as SpiTrans};

/// SA0 high
pub const DEV_ADDR: u8 = 0b010_1001;

/// I2C sub-address auto-increment bit
pub const INC: u8 = 0x80;

pub fn trans_who_am_i() -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![INC | 0x0F], vec![0b0011_0011])
}

pub fn read(reg: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![INC | reg], vec![value])
}

pub fn write(reg: u8, value: u8) -> I2cTrans {
    I2cTrans::write(DEV_ADDR, vec![INC | reg, value])
}

/// Register traffic of the default free-fall setup,
/// starting from power-on register values
pub fn trans_free_fall_setup() -> Vec<I2cTrans> {
    vec![
        // CTRL_REG1: ODR = 100 Hz
        read(0x20, 0b0000_0111),
        write(0x20, 0b0101_0111),
        // CTRL_REG4: FS = ±2 g
        read(0x23, 0b0000_0000),
        write(0x23, 0b0000_0000),
        // CTRL_REG3: I1_IG1
        write(0x22, 0b0100_0000),
        // CTRL_REG5: LIR_IG1
        read(0x24, 0b0000_0000),
        write(0x24, 0b0000_1000),
        // IG1_THS
        write(0x32, 0x16),
        // IG1_DURATION
        write(0x33, 0x03),
        // IG1_CFG: AOI | ZLIE | YLIE | XLIE
        write(0x30, 0b1001_0101),
        // CTRL_REG1: LPen
        read(0x20, 0b0101_0111),
        write(0x20, 0b0101_1111),
    ]
}

/// Return the bus and the pin mocks of a finished runner
pub fn finish<PIN>(ff: FreeFall<I2cInterface<I2cMock>, PIN>) -> (I2cMock, PIN)
where
    PIN: embedded_hal::digital::InputPin,
{
    let (dev, pin) = ff.release();
    (dev.destroy().release(), pin)
}

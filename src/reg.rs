#![allow(dead_code)]
#![allow(non_upper_case_globals)]

#[cfg(feature = "out_f32")]
use num_derive::FromPrimitive;

/// I2C slave address base, `SA0` adds bit 0
pub const I2C_SAD: u8 = 0b010_1000;

/// I2C sub-address auto-increment
pub const I2C_AUTO_INC: u8 = 0b1000_0000;

/// SPI read bit
pub const SPI_RW: u8 = 0b1000_0000;
/// SPI address auto-increment
pub const SPI_MS: u8 = 0b0100_0000;

/// Operating mode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Normal mode
    Normal,
    /// Low-power mode
    LowPower,
}

/// Register mapping
#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    STATUS_REG_AUX = 0x07,
    OUT_ADC1_L = 0x08,
    OUT_ADC1_H = 0x09,
    OUT_ADC2_L = 0x0A,
    OUT_ADC2_H = 0x0B,
    OUT_ADC3_L = 0x0C,
    OUT_ADC3_H = 0x0D,
    WHO_AM_I = 0x0F,
    CTRL_REG0 = 0x1E,
    TEMP_CFG_REG = 0x1F,
    CTRL_REG1 = 0x20,
    CTRL_REG2 = 0x21,
    CTRL_REG3 = 0x22,
    CTRL_REG4 = 0x23,
    CTRL_REG5 = 0x24,
    CTRL_REG6 = 0x25,
    REFERENCE = 0x26,
    STATUS_REG = 0x27,
    FIFO_READ_START = 0x28,
    OUT_X = 0x29,
    OUT_Y = 0x2B,
    OUT_Z = 0x2D,
    FIFO_CTRL_REG = 0x2E,
    FIFO_SRC_REG = 0x2F,
    IG1_CFG = 0x30,
    IG1_SOURCE = 0x31,
    IG1_THS = 0x32,
    IG1_DURATION = 0x33,
    IG2_CFG = 0x34,
    IG2_SOURCE = 0x35,
    IG2_THS = 0x36,
    IG2_DURATION = 0x37,
    CLICK_CFG = 0x38,
    CLICK_SRC = 0x39,
    CLICK_THS = 0x3A,
    TIME_LIMIT = 0x3B,
    TIME_LATENCY = 0x3C,
    TIME_WINDOW = 0x3D,
    ACT_THS = 0x3E,
    ACT_DUR = 0x3F,
}

impl Register {
    /// Get register address
    pub fn addr(self) -> u8 {
        self as u8
    }
}

// === WHO_AM_I (0Fh) ===

/// WHO_AM_I device identification register
pub const DEVICE_ID: u8 = 0b0011_0011;

// === CTRL_REG1 (20h) ===

pub const ODR_MASK: u8 = 0b1111_0000;

/// Output Data Rate
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "out_f32", derive(FromPrimitive))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Odr {
    /// Power-down mode
    PowerDown = 0b0000,
    /// 1 Hz
    Hz1 = 0b0001,
    /// 10 Hz
    Hz10 = 0b0010,
    /// 25 Hz
    Hz25 = 0b0011,
    /// 50 Hz
    Hz50 = 0b0100,
    /// 100 Hz
    Hz100 = 0b0101,
    /// 200 Hz
    Hz200 = 0b0110,
    /// 400 Hz
    Hz400 = 0b0111,
    /// 1.6 kHz, low-power mode only
    Hz1600 = 0b1000,
    /// Normal (1.344 kHz),
    /// Low-power (5.376 kHz)
    HighRate = 0b1001,
}

impl Odr {
    /// Rate in Hz in the given operating mode.
    ///
    /// `HighRate` runs at 1344 Hz in normal mode and 5376 Hz in low-power
    /// mode; `Hz1600` exists in low-power mode only and reads 0 otherwise.
    pub fn hz(self, mode: Mode) -> u32 {
        match (self, mode) {
            (Odr::PowerDown, _) => 0,
            (Odr::Hz1, _) => 1,
            (Odr::Hz10, _) => 10,
            (Odr::Hz25, _) => 25,
            (Odr::Hz50, _) => 50,
            (Odr::Hz100, _) => 100,
            (Odr::Hz200, _) => 200,
            (Odr::Hz400, _) => 400,
            (Odr::Hz1600, Mode::LowPower) => 1600,
            (Odr::Hz1600, Mode::Normal) => 0,
            (Odr::HighRate, Mode::Normal) => 1344,
            (Odr::HighRate, Mode::LowPower) => 5376,
        }
    }

    /// Interrupt generator duration in ODR cycles for `ms` milliseconds,
    /// saturated to the 7-bit `D` field
    pub fn duration_from_ms(self, ms: u16, mode: Mode) -> u8 {
        let cycles = u32::from(ms) * self.hz(mode) / 1000;
        cast::u8(cycles).map_or(D_MASK, |d| d.min(D_MASK))
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits {
            0b0001 => Odr::Hz1,
            0b0010 => Odr::Hz10,
            0b0011 => Odr::Hz25,
            0b0100 => Odr::Hz50,
            0b0101 => Odr::Hz100,
            0b0110 => Odr::Hz200,
            0b0111 => Odr::Hz400,
            0b1000 => Odr::Hz1600,
            0b1001 => Odr::HighRate,
            _ => Odr::PowerDown,
        }
    }
}

pub const LPen: u8 = 0b0000_1000;
pub const Zen: u8 = 0b0000_0100;
pub const Yen: u8 = 0b0000_0010;
pub const Xen: u8 = 0b0000_0001;

/// CTRL_REG1 power-on value, all axes enabled
pub const CTRL_REG1_DEFAULT: u8 = 0b0000_0111;

// === CTRL_REG2 (21h) ===

pub const HPCLICK: u8 = 0b0000_0100;
pub const HP_IA2: u8 = 0b0000_0010;
pub const HP_IA1: u8 = 0b0000_0001;

// === CTRL_REG3 (22h) ===

pub const I1_CLICK: u8 = 0b1000_0000;
pub const I1_IG1: u8 = 0b0100_0000;
pub const I1_IG2: u8 = 0b0010_0000;
pub const I1_DRDY1: u8 = 0b0001_0000;
pub const I1_DRDY2: u8 = 0b0000_1000;
pub const I1_WTM: u8 = 0b0000_0100;
pub const I1_OVERRUN: u8 = 0b0000_0010;

// === CTRL_REG4 (23h) ===

pub const BDU: u8 = 0b1000_0000;

pub const FS_MASK: u8 = 0b0011_0000;

/// Full-scale selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    /// ±2 g
    G2 = 0b00,
    /// ±4 g
    G4 = 0b01,
    /// ±8 g
    G8 = 0b10,
    /// ±16 g
    G16 = 0b11,
}

impl FullScale {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => FullScale::G2,
            0b01 => FullScale::G4,
            0b10 => FullScale::G8,
            _ => FullScale::G16,
        }
    }

    /// Interrupt threshold resolution, mg per LSb
    pub fn ths_lsb_mg(self) -> u16 {
        match self {
            Self::G2 => 16,
            Self::G4 => 32,
            Self::G8 => 62,
            Self::G16 => 186,
        }
    }

    /// Interrupt generator threshold for `mg` milligravities,
    /// saturated to the 7-bit `THS` field
    pub fn ths_from_mg(self, mg: u16) -> u8 {
        let ths = mg / self.ths_lsb_mg();
        cast::u8(ths).map_or(THS_MASK, |t| t.min(THS_MASK))
    }

    #[cfg(feature = "out_f32")]
    pub(crate) fn convert_out_i16tof32(self, val: i16) -> f32 {
        // mg/digit, 8-bit data
        let sens: f32 = match self {
            Self::G2 => 15.63,
            Self::G4 => 31.25,
            Self::G8 => 62.5,
            Self::G16 => 187.5,
        };
        cast::f32(val) * sens / 1000.0
    }

    #[cfg(feature = "out_f32")]
    pub(crate) fn convert_ths_f32tou8(self, val: f32) -> u8 {
        let lsb = cast::f32(self.ths_lsb_mg()) / 1000.0;
        let f = val / lsb;
        if f < 0.0 {
            0
        } else if f > 127.0 {
            THS_MASK
        } else {
            f as u8
        }
    }
}

// === CTRL_REG5 (24h) ===

pub const BOOT: u8 = 0b1000_0000;
pub const FIFO_EN: u8 = 0b0100_0000;
pub const LIR_IG1: u8 = 0b0000_1000;
pub const D4D_IG1: u8 = 0b0000_0100;
pub const LIR_IG2: u8 = 0b0000_0010;
pub const D4D_IG2: u8 = 0b0000_0001;

/// Interrupt request notification on the INT pins
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// Interrupt pin follows the generator
    Pulsed,
    /// Interrupt pin stays asserted until the source register is read
    Latched,
}

// === CTRL_REG6 (25h) ===

pub const I2_CLICK: u8 = 0b1000_0000;
pub const I2_IG1: u8 = 0b0100_0000;
pub const I2_IG2: u8 = 0b0010_0000;
pub const I2_BOOT: u8 = 0b0001_0000;
pub const I2_ACT: u8 = 0b0000_1000;
pub const INT_POLARITY: u8 = 0b0000_0010;

// === STATUS_REG (27h) ===

pub const ZYXOR: u8 = 0b1000_0000;
pub const ZOR: u8 = 0b0100_0000;
pub const YOR: u8 = 0b0010_0000;
pub const XOR: u8 = 0b0001_0000;
pub const ZYXDA: u8 = 0b0000_1000;
pub const ZDA: u8 = 0b0000_0100;
pub const YDA: u8 = 0b0000_0010;
pub const XDA: u8 = 0b0000_0001;

// === FIFO_CTRL_REG (2Eh) ===

pub const FM_MASK: u8 = 0b1100_0000;

/// FIFO mode selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// Bypass mode
    Bypass = 0b00,
    /// FIFO mode
    Fifo = 0b01,
    /// Stream mode
    Stream = 0b10,
    /// Stream-to-FIFO mode
    StreamToFifo = 0b11,
}

pub const FTH_MASK: u8 = 0b0001_1111;

// === FIFO_SRC_REG (2Fh) ===

pub const FSS: u8 = 0b0001_1111;

// === IG1_CFG (30h), IG2_CFG (34h) ===

pub const AOI_6D_MASK: u8 = 0b1100_0000;

/// AOI-6D Interrupt mode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Aoi6d {
    /// OR combination of interrupt events
    Or = 0b00,
    /// 6-direction movement recognition
    Movement6D = 0b01,
    /// AND combination of interrupt events
    And = 0b10,
    /// 6-direction position recognition
    Position6D = 0b11,
}

impl Default for Aoi6d {
    fn default() -> Self {
        Aoi6d::Or
    }
}

impl Aoi6d {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Aoi6d::Or,
            0b01 => Aoi6d::Movement6D,
            0b10 => Aoi6d::And,
            _ => Aoi6d::Position6D,
        }
    }
}

pub const ZHIE: u8 = 0b0010_0000;
pub const ZLIE: u8 = 0b0001_0000;
pub const YHIE: u8 = 0b0000_1000;
pub const YLIE: u8 = 0b0000_0100;
pub const XHIE: u8 = 0b0000_0010;
pub const XLIE: u8 = 0b0000_0001;

// === IG1_SOURCE (31h), IG2_SOURCE (35h), CLICK_SRC (39h) ===

pub const IA: u8 = 0b0100_0000;
pub const ZH: u8 = 0b0010_0000;
pub const ZL: u8 = 0b0001_0000;
pub const YH: u8 = 0b0000_1000;
pub const YL: u8 = 0b0000_0100;
pub const XH: u8 = 0b0000_0010;
pub const XL: u8 = 0b0000_0001;

// === IG1_THS (32h), IG2_THS (36h), CLICK_THS (3Ah), ACT_THS (3Eh) ===

pub const THS_MASK: u8 = 0b0111_1111;

// === IG1_DURATION (33h), IG2_DURATION (37h), TIME_LIMIT (3Bh) ===

pub const D_MASK: u8 = 0b0111_1111;

// === CLICK_CFG (38h) ===

pub const ZD: u8 = 0b0010_0000;
pub const ZS: u8 = 0b0001_0000;
pub const YD: u8 = 0b0000_1000;
pub const YS: u8 = 0b0000_0100;
pub const XD: u8 = 0b0000_0010;
pub const XS: u8 = 0b0000_0001;

// === CLICK_SRC (39h) ===

pub const DClick: u8 = 0b0010_0000;
pub const SClick: u8 = 0b0001_0000;
pub const Sign: u8 = 0b0000_1000;
pub const Z: u8 = 0b0000_0100;
pub const Y: u8 = 0b0000_0010;
pub const X: u8 = 0b0000_0001;

// === CLICK_THS (3Ah) ===

pub const LIR_Click: u8 = 0b1000_0000;

// *** Interrupt generator registers ***

pub trait IntRegs {
    fn reg_cfg() -> Register;
    fn reg_src() -> Register;
    fn reg_ths() -> Register;
    fn reg_duration() -> Register;
}

macro_rules! int_regs {
    ($IGX:ident: ($REG_CFG:ident, $REG_SRC:ident, $REG_THS:ident, $REG_DURATION:ident)) => {
        /// Interrupt generator register set
        pub struct $IGX();
        impl IntRegs for $IGX {
            fn reg_cfg() -> Register {
                Register::$REG_CFG
            }
            fn reg_src() -> Register {
                Register::$REG_SRC
            }
            fn reg_ths() -> Register {
                Register::$REG_THS
            }
            fn reg_duration() -> Register {
                Register::$REG_DURATION
            }
        }
    };
}

int_regs!(Ig1Regs: (IG1_CFG, IG1_SOURCE, IG1_THS, IG1_DURATION));
int_regs!(Ig2Regs: (IG2_CFG, IG2_SOURCE, IG2_THS, IG2_DURATION));

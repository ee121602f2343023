mod common;

use common::*;

fn spi_read(reg: u8, value: u8) -> Vec<SpiTrans<u8>> {
    vec![
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0xC0 | reg]),
        SpiTrans::read_vec(vec![value]),
        SpiTrans::transaction_end(),
    ]
}

fn spi_write(reg: u8, value: u8) -> Vec<SpiTrans<u8>> {
    vec![
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0x40 | reg, value]),
        SpiTrans::transaction_end(),
    ]
}

#[test]
fn register_commands() {
    let mut trans = spi_read(0x0F, 0b0011_0011);
    trans.extend(spi_write(0x32, 0x16));
    trans.extend(spi_read(0x31, 0b0100_0000));
    let mock = SpiMock::new(&trans);

    let mut dev = Lis3de::new_spi(mock).unwrap();
    dev.int1().set_ths(0x16).unwrap();
    assert!(dev.int1().get_src().unwrap().active);
    dev.destroy().release().done();
}

#[test]
fn accel_burst() {
    let mut trans = spi_read(0x0F, 0b0011_0011);
    trans.extend(vec![
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0xE8]),
        SpiTrans::read_vec(vec![0x00, 0x01, 0x00, 0x02, 0x00, 0xFD]),
        SpiTrans::transaction_end(),
    ]);
    let mock = SpiMock::new(&trans);

    let mut dev = Lis3de::new_spi(mock).unwrap();
    let acc = dev.accel_raw().unwrap();
    assert_eq!((acc.x, acc.y, acc.z), (1, 2, -3));
    dev.destroy().release().done();
}

#[test]
fn free_fall_over_spi() {
    let mut trans = spi_read(0x0F, 0b0011_0011);
    trans.extend(spi_read(0x20, 0b0000_0111));
    trans.extend(spi_write(0x20, 0b0101_0111));
    trans.extend(spi_read(0x23, 0b0000_0000));
    trans.extend(spi_write(0x23, 0b0000_0000));
    trans.extend(spi_write(0x22, 0b0100_0000));
    trans.extend(spi_read(0x24, 0b0000_0000));
    trans.extend(spi_write(0x24, 0b0000_1000));
    trans.extend(spi_write(0x32, 0x16));
    trans.extend(spi_write(0x33, 0x03));
    trans.extend(spi_write(0x30, 0b1001_0101));
    trans.extend(spi_read(0x20, 0b0101_0111));
    trans.extend(spi_write(0x20, 0b0101_1111));
    trans.extend(spi_read(0x31, 0b0101_0101));
    let spi = SpiMock::new(&trans);
    let pin = PinMock::new(&[PinTrans::get(PinState::High)]);
    let mut console = String::new();

    let mut ff = FreeFall::new(SpiInterface::new(spi), pin, FreeFallConfig::default());
    let src = ff.poll(&mut console).unwrap();
    assert!(src.map_or(false, |s| s.is_free_fall()));
    assert_eq!(console, FREE_FALL_MESSAGE);

    let (dev, mut pin) = ff.release();
    dev.destroy().release().done();
    pin.done();
}

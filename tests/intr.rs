mod common;

use common::*;

#[test]
fn int1_disable() {
    let trans = [
        trans_who_am_i(),
        // write IG1_CFG: 0x00
        write(0x30, 0x00),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.int1().disable().unwrap();
    dev.destroy().release().done();
}

#[test]
fn int2_disable() {
    let trans = [
        trans_who_am_i(),
        // write IG2_CFG: 0x00
        write(0x34, 0x00),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.int2().disable().unwrap();
    dev.destroy().release().done();
}

#[test]
fn int1_free_fall_config() {
    let trans = [
        trans_who_am_i(),
        write(0x30, 0b1001_0101),
        read(0x30, 0b1001_0101),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.int1().set_config(&IgConfig::free_fall()).unwrap();
    let cfg = dev.int1().get_config().unwrap();
    assert_eq!(cfg.mode, Aoi6d::And);
    assert_eq!(cfg.low, (true, true, true));
    assert_eq!(cfg.high, (false, false, false));
    dev.destroy().release().done();
}

#[test]
fn int2_mode_keeps_axes() {
    let trans = [
        trans_who_am_i(),
        read(0x34, 0b0010_1010),
        write(0x34, 0b1110_1010),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.int2().set_mode(Aoi6d::Position6D).unwrap();
    dev.destroy().release().done();
}

#[test]
fn int1_ths_duration_masked() {
    let trans = [
        trans_who_am_i(),
        // IG1_THS, IG1_DURATION: bit 7 is reserved
        write(0x32, 0x7F),
        write(0x33, 0x03),
        write(0x36, 0x10),
        write(0x37, 0x00),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.int1().set_ths(0xFF).unwrap();
    dev.int1().set_duration(0x83).unwrap();
    dev.int2().set_ths(0x10).unwrap();
    dev.int2().set_duration(0x80).unwrap();
    dev.destroy().release().done();
}

#[test]
fn int1_src() {
    let trans = [
        trans_who_am_i(),
        // IA | ZL | YL | XL
        read(0x31, 0b0101_0101),
        // XH only, IA not set
        read(0x31, 0b0000_0010),
        read(0x35, 0b0110_0000),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();

    let src = dev.int1().get_src().unwrap();
    assert!(src.active);
    assert!(src.is_free_fall());
    assert_eq!(src.z, (false, true));

    let src = dev.int1().get_src().unwrap();
    assert!(!src.active);
    assert_eq!(src.x, (true, false));

    let src = dev.int2().get_src().unwrap();
    assert!(src.active);
    assert!(!src.is_free_fall());
    assert_eq!(src.z, (true, false));

    dev.destroy().release().done();
}

#[test]
fn pin_int1_routing() {
    let trans = [
        trans_who_am_i(),
        // whole CTRL_REG3
        write(0x22, 0b0100_0000),
        read(0x22, 0b1000_0110),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.set_pin_int1_config(&Int1Routing {
        ig1: true,
        ..Default::default()
    })
    .unwrap();
    let routing = dev.get_pin_int1_config().unwrap();
    assert_eq!(
        routing,
        Int1Routing {
            click: true,
            wtm: true,
            overrun: true,
            ..Default::default()
        }
    );
    dev.destroy().release().done();
}

#[test]
fn pin_int2_routing_keeps_polarity() {
    let trans = [
        trans_who_am_i(),
        read(0x25, 0b1000_0010),
        write(0x25, 0b0010_1010),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.set_pin_int2_config(&Int2Routing {
        ig2: true,
        act: true,
        ..Default::default()
    })
    .unwrap();
    dev.destroy().release().done();
}

#[test]
fn notification_modes() {
    let trans = [
        trans_who_am_i(),
        read(0x24, 0b0000_0000),
        write(0x24, 0b0000_1000),
        read(0x24, 0b0000_1000),
        write(0x24, 0b0000_1010),
        read(0x24, 0b0000_1010),
        write(0x24, 0b0000_0010),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.set_int1_notification(Notification::Latched).unwrap();
    dev.set_int2_notification(Notification::Latched).unwrap();
    dev.set_int1_notification(Notification::Pulsed).unwrap();
    dev.destroy().release().done();
}

#[test]
fn click_source() {
    let trans = [
        trans_who_am_i(),
        write(0x38, 0b0001_0101),
        read(0x39, 0b0101_1100),
        read(0x39, 0b0001_0100),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.set_click_config(&ClickConfig {
        single: (true, true, true),
        ..Default::default()
    })
    .unwrap();

    let src = dev.get_click_src().unwrap().unwrap();
    assert!(src.single);
    assert!(!src.double);
    assert!(src.negative);
    assert_eq!(src.axis, (false, false, true));

    assert_eq!(dev.get_click_src().unwrap(), None);
    dev.destroy().release().done();
}

#[test]
fn click_ths_keeps_latch() {
    let trans = [
        trans_who_am_i(),
        read(0x3A, 0b0000_0000),
        write(0x3A, 0b1000_0000),
        read(0x3A, 0b1000_0000),
        write(0x3A, 0b1010_1010),
    ];
    let mock = I2cMock::new(&trans);
    let mut dev = Lis3de::new_i2c(mock, SlaveAddr::Default).unwrap();
    dev.enable_lir_click(true).unwrap();
    dev.set_click_ths(0b1010_1010).unwrap();
    dev.destroy().release().done();
}

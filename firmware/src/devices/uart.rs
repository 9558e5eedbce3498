use core::convert::Infallible;

use arduino_hal::{
    hal::port::{PD0, PD1},
    pac::USART0,
    port::{
        mode::{Input, Output},
        Pin,
    },
    prelude::*,
    Usart,
};
use paintstepper::SerialPort;
use ufmt::uWrite;

pub type UnoSerial = Usart<USART0, Pin<Input, PD0>, Pin<Output, PD1>>;

/// The Uno's USB serial port.
pub struct Uart {
    serial: UnoSerial,
}
impl Uart {
    pub fn new(serial: UnoSerial) -> Self {
        Self { serial }
    }
}

impl uWrite for Uart {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.serial.write_str(s)
    }
}

impl SerialPort for Uart {
    fn read(&mut self) -> nb::Result<u8, Infallible> {
        self.serial.read()
    }
}

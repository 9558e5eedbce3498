use core::convert::Infallible;

use heapless::String;
use ufmt::uWrite;

/// Serial port: infallible text output and non-blocking byte input.
pub trait SerialPort: uWrite<Error = Infallible> {
    /// Reads one byte, if one is waiting.
    fn read(&mut self) -> nb::Result<u8, Infallible>;
}

/// Assembles newline-terminated lines from a serial port without blocking.
///
/// # Type Parameters
///
/// - `N`: Maximum line length, in bytes.
pub struct LineReader<const N: usize> {
    buffer: String<N>,
    /// A complete line is in the buffer, and has been handed out.
    complete: bool,
    /// The current line did not fit, and is being discarded.
    overflowed: bool,
}
impl<const N: usize> LineReader<N> {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            complete: false,
            overflowed: false,
        }
    }

    /// Reads whatever bytes are waiting, up to the end of one line.
    ///
    /// # Returns
    ///
    /// - `Ok(line)`: a complete line, without its terminator.
    /// - `Err(nb::Error::WouldBlock)`: no complete line yet.
    /// - `Err(nb::Error::Other(Error::BufferOverflow))`: a line longer than
    ///   the buffer ended, and was discarded.
    pub fn poll<S: SerialPort>(
        &mut self,
        serial: &mut S,
    ) -> nb::Result<&str, Error> {
        if self.complete {
            self.buffer.clear();
            self.complete = false;
        }
        loop {
            let c = match serial.read() {
                Ok(c) => c,
                Err(nb::Error::WouldBlock) => return Err(nb::Error::WouldBlock),
                Err(nb::Error::Other(never)) => match never {},
            };
            if c == b'\n' {
                if self.overflowed {
                    self.overflowed = false;
                    self.buffer.clear();
                    return Err(nb::Error::Other(Error::BufferOverflow));
                }
                self.complete = true;
                return Ok(self.buffer.as_str());
            }
            if self.overflowed {
                continue;
            }
            if self.buffer.push(c as char).is_err() {
                self.overflowed = true;
                self.buffer.clear();
            }
        }
    }
}
impl<const N: usize> Default for LineReader<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that might occur when reading.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// A line was too long for the buffer.
    BufferOverflow,
}

#[cfg(test)]
pub use self::test::TestSerial;

//! Serial diagnostics.
//!
//! There is no logging framework on the target; every message is a single
//! human-readable line written to the serial port. Write results are
//! discarded, since serial ports here are infallible.

/// Writes a protocol notice line. Notices are always written.
macro_rules! notice {
    ($out:expr, $($arg:tt)*) => {{
        let _ = ufmt::uwriteln!(&mut *$out, $($arg)*);
    }};
}

/// Writes an `INFO: ` line, if the verbosity allows it.
macro_rules! info {
    ($verbosity:expr, $out:expr, $($arg:tt)*) => {{
        if $verbosity.shows_info() {
            let _ = ufmt::uwrite!(&mut *$out, "INFO: ");
            let _ = ufmt::uwriteln!(&mut *$out, $($arg)*);
        }
    }};
}

/// Writes an `ERROR: ` line. Errors are always written.
macro_rules! error {
    ($out:expr, $($arg:tt)*) => {{
        let _ = ufmt::uwrite!(&mut *$out, "ERROR: ");
        let _ = ufmt::uwriteln!(&mut *$out, $($arg)*);
    }};
}

use ufmt::{uDisplay, uWrite, Formatter};

/// Underlying type representing the number of mils.
type MilsRepr = i32;

/// Distance in mils (thousandths of an inch).
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct Mils(MilsRepr);
impl Mils {
    /// Creates a new `Mils`.
    pub const fn new(value: MilsRepr) -> Self {
        Self(value)
    }

    /// Returns the value as an `i32`.
    pub const fn get_value(&self) -> MilsRepr {
        self.0
    }
}

impl uDisplay for Mils {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        udisplay_millis(self.get_value(), f)
    }
}

/// Writes a fixed-point value with three decimal places and an explicit sign.
pub fn udisplay_millis<W>(
    value: i32,
    f: &mut Formatter<W>,
) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    // Sign character.
    if value >= 0 {
        f.write_char('+')?;
    } else {
        f.write_char('-')?;
    }

    let v = value.unsigned_abs();
    let int_part = v / 1000;
    let frc_part = v % 1000;

    int_part.fmt(f)?;
    f.write_char('.')?;

    if frc_part < 10 {
        f.write_str("00")?;
    } else if frc_part < 100 {
        f.write_char('0')?;
    }
    frc_part.fmt(f)?;

    Ok(())
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    /// Collects `ufmt` output into an owned `String`.
    struct Buffer(String);
    impl uWrite for Buffer {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    /// Renders a `uDisplay` value into an owned `String`.
    pub fn render<T: uDisplay>(value: &T) -> String {
        let mut out = Buffer(String::new());
        ufmt::uwrite!(&mut out, "{}", value).unwrap();
        out.0
    }

    /// Strategy for generating [Mils] covering a few metres of travel.
    pub fn mils() -> impl Strategy<Value = Mils> {
        (-200_000i32..200_000i32).prop_map(Mils::new)
    }

    #[test]
    fn test_display_examples() {
        assert_eq!("+4.160", render(&Mils::new(4160)));
        assert_eq!("-26.000", render(&Mils::new(-26000)));
        assert_eq!("+0.005", render(&Mils::new(5)));
        assert_eq!("-0.050", render(&Mils::new(-50)));
        assert_eq!("+0.000", render(&Mils::new(0)));
    }

    #[test]
    fn test_display_extremes() {
        assert_eq!("-2147483.648", render(&Mils::new(i32::MIN)));
        assert_eq!("+2147483.647", render(&Mils::new(i32::MAX)));
    }

    proptest! {
        #[test]
        fn test_display_sign(value in mils()) {
            let text = render(&value);
            let negative = value.get_value() < 0;
            assert_eq!(negative, text.starts_with('-'));
            assert_eq!(Some('.'), text.chars().rev().nth(3));
        }
    }
}

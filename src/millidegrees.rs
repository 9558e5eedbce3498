use ufmt::uDisplay;

use crate::mils::udisplay_millis;

/// Underlying type representing the number of millidegrees.
type MilliDegreesRepr = i32;

/// Angle in millidegrees.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MilliDegrees(MilliDegreesRepr);
impl MilliDegrees {
    /// Creates a new `MilliDegrees`.
    pub const fn new(value: MilliDegreesRepr) -> Self {
        Self(value)
    }

    /// Creates a `MilliDegrees` from a whole number of degrees.
    pub const fn from_degrees(degrees: i16) -> Self {
        Self(degrees as MilliDegreesRepr * 1000)
    }

    /// Returns the value as an `i32`.
    pub const fn get_value(&self) -> MilliDegreesRepr {
        self.0
    }
}

impl uDisplay for MilliDegrees {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        udisplay_millis(self.get_value(), f)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::mils::test::render;
    use proptest::prelude::*;

    /// Strategy for generating [MilliDegrees] within a few turns.
    pub fn millidegrees() -> impl Strategy<Value = MilliDegrees> {
        (-1_080_000i32..1_080_000i32).prop_map(MilliDegrees::new)
    }

    #[test]
    fn test_from_degrees() {
        assert_eq!(MilliDegrees::new(180000), MilliDegrees::from_degrees(180));
        assert_eq!(MilliDegrees::new(-90000), MilliDegrees::from_degrees(-90));
    }

    #[test]
    fn test_display() {
        assert_eq!("+180.000", render(&MilliDegrees::from_degrees(180)));
        assert_eq!("-0.500", render(&MilliDegrees::new(-500)));
    }
}

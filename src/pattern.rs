use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

use crate::MilliDegrees;
use crate::Mils;

mod tables;

/// One atomic instruction of a motion pattern.
///
/// Moves and rotations are relative.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PrimitiveCommand {
    /// Move the X axis, engaging the spray first if `spray` is set.
    MoveX { distance: Mils, spray: bool },
    /// Move the Y axis, engaging the spray first if `spray` is set.
    MoveY { distance: Mils, spray: bool },
    /// Rotate the tray.
    Rotate(MilliDegrees),
    /// Engage (`true`) or release (`false`) the spray.
    Spray(bool),
}
impl PrimitiveCommand {
    pub const fn move_x(distance: Mils, spray: bool) -> Self {
        Self::MoveX { distance, spray }
    }

    pub const fn move_y(distance: Mils, spray: bool) -> Self {
        Self::MoveY { distance, spray }
    }

    pub const fn rotate(angle: MilliDegrees) -> Self {
        Self::Rotate(angle)
    }

    pub const fn spray_on() -> Self {
        Self::Spray(true)
    }

    pub const fn spray_off() -> Self {
        Self::Spray(false)
    }
}

impl uDisplay for PrimitiveCommand {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            PrimitiveCommand::MoveX { distance, spray } => {
                ufmt::uwrite!(f, "X {} in", distance)?;
                if *spray {
                    f.write_str(" spraying")?;
                }
                Ok(())
            }
            PrimitiveCommand::MoveY { distance, spray } => {
                ufmt::uwrite!(f, "Y {} in", distance)?;
                if *spray {
                    f.write_str(" spraying")?;
                }
                Ok(())
            }
            PrimitiveCommand::Rotate(angle) => {
                ufmt::uwrite!(f, "rotate {} deg", angle)
            }
            PrimitiveCommand::Spray(true) => f.write_str("spray on"),
            PrimitiveCommand::Spray(false) => f.write_str("spray off"),
        }
    }
}

/// A paintable face of the workpiece.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    One,
    Two,
    Three,
    Four,
}
impl Side {
    /// All sides, in the order they are painted.
    pub const ALL: [Side; 4] = [Side::One, Side::Two, Side::Three, Side::Four];

    /// Returns the zero-based index of the side.
    pub const fn index(&self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
            Side::Three => 2,
            Side::Four => 3,
        }
    }

    /// Returns the side with a zero-based index, if there is one.
    pub fn from_index(index: usize) -> Option<Side> {
        Self::ALL.get(index).copied()
    }

    /// Returns the side named by an operator digit `'1'` to `'4'`.
    pub fn from_digit(c: char) -> Option<Side> {
        match c {
            '1' => Some(Side::One),
            '2' => Some(Side::Two),
            '3' => Some(Side::Three),
            '4' => Some(Side::Four),
            _ => None,
        }
    }

    /// Returns the one-based side number that operators use.
    pub const fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Returns the motion pattern that paints this side.
    pub fn pattern(&self) -> &'static [PrimitiveCommand] {
        match self {
            Side::One => &tables::SIDE_1,
            Side::Two => &tables::SIDE_2,
            Side::Three => &tables::SIDE_3,
            Side::Four => &tables::SIDE_4,
        }
    }
}

/// Which sides a paint cycle visits.
///
/// Sides are always visited in ascending order.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub struct SideSelection([bool; 4]);
impl SideSelection {
    pub const fn all() -> Self {
        Self([true; 4])
    }

    pub const fn none() -> Self {
        Self([false; 4])
    }

    /// Builds a selection from operator text.
    ///
    /// Each digit `1` to `4` selects that side. Every other character is
    /// ignored, and sides that are not mentioned are not selected.
    pub fn from_digits(text: &str) -> Self {
        let mut selection = Self::none();
        for side in text.chars().filter_map(Side::from_digit) {
            selection.set(side, true);
        }
        selection
    }

    pub fn set(&mut self, side: Side, selected: bool) {
        self.0[side.index()] = selected;
    }

    pub fn is_selected(&self, side: Side) -> bool {
        self.0[side.index()]
    }

    /// Iterates over the selected sides, in ascending order.
    pub fn sides(&self) -> impl Iterator<Item = Side> + '_ {
        Side::ALL.into_iter().filter(|side| self.is_selected(*side))
    }
}
impl Default for SideSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Space-separated side numbers, eg. `1 3`.
impl uDisplay for SideSelection {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for (i, side) in self.sides().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            side.number().fmt(f)?;
        }
        Ok(())
    }
}

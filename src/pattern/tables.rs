use crate::MilliDegrees;
use crate::Mils;
use crate::PrimitiveCommand;
use crate::PrimitiveCommand as Cmd;

// Pattern magnitudes are in mils and whole degrees.

/// Side 1: offset in X, eight rows 26 in wide stepping +Y, then a half turn
/// of the tray.
pub const SIDE_1: [PrimitiveCommand; 33] = [
    Cmd::move_x(Mils::new(4500), false),
    // Row 1.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4160), false),
    // Row 2.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4160), false),
    // Row 3.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4160), false),
    // Row 4.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4160), false),
    // Row 5.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4160), false),
    // Row 6.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4160), false),
    // Row 7.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4160), false),
    // Row 8.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::rotate(MilliDegrees::from_degrees(180)),
];

/// Side 2: eight rows 26 in wide stepping -Y, back out of the X offset, then
/// a quarter turn.
pub const SIDE_2: [PrimitiveCommand; 33] = [
    // Row 1.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4160), false),
    // Row 2.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4160), false),
    // Row 3.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4160), false),
    // Row 4.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4160), false),
    // Row 5.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4160), false),
    // Row 6.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4160), false),
    // Row 7.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(26_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4160), false),
    // Row 8.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-26_000), true),
    Cmd::spray_off(),
    Cmd::move_x(Mils::new(-4500), false),
    Cmd::rotate(MilliDegrees::from_degrees(90)),
];

/// Side 3: offset in Y, six rows 35 in wide stepping +Y, then a half turn.
pub const SIDE_3: [PrimitiveCommand; 25] = [
    Cmd::move_y(Mils::new(4500), false),
    // Row 1.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4415), false),
    // Row 2.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4415), false),
    // Row 3.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4415), false),
    // Row 4.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4415), false),
    // Row 5.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(4415), false),
    // Row 6.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-35_000), true),
    Cmd::spray_off(),
    Cmd::rotate(MilliDegrees::from_degrees(180)),
];

/// Side 4: six rows 35 in wide stepping -Y, then back out of the Y offset.
pub const SIDE_4: [PrimitiveCommand; 24] = [
    // Row 1.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4415), false),
    // Row 2.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4415), false),
    // Row 3.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4415), false),
    // Row 4.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4415), false),
    // Row 5.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4415), false),
    // Row 6.
    Cmd::spray_on(),
    Cmd::move_x(Mils::new(-35_000), true),
    Cmd::spray_off(),
    Cmd::move_y(Mils::new(-4500), false),
];

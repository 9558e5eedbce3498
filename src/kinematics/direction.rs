/// Direction of a single step.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    /// Towards increasing positions.
    Positive,
    /// Towards decreasing positions, and the home sensors.
    Negative,
}
impl Direction {
    /// Returns the direction of travel for a signed distance.
    ///
    /// A zero distance counts as negative.
    pub fn toward(distance: i64) -> Direction {
        if distance > 0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

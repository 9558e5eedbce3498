/// A two-state switch read directly from its input.
///
/// Readings are instantaneous and may bounce; see [crate::DebouncedSwitch].
pub trait LimitSwitch {
    fn read_limitswitch_state(&self) -> LimitSwitchState;
}

/// State of a limit switch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LimitSwitchState {
    /// The switch is closed. For a home switch, the axis is at zero.
    AtLimit,
    /// The switch is open.
    NotAtLimit,
}

/// Switch for tests, whose state is set directly.
#[cfg(test)]
#[derive(Debug)]
pub struct TestLimitSwitch(LimitSwitchState);
#[cfg(test)]
impl TestLimitSwitch {
    pub fn new(state: LimitSwitchState) -> Self {
        Self(state)
    }

    pub fn set_limitswitch_state(&mut self, state: LimitSwitchState) {
        self.0 = state;
    }
}
#[cfg(test)]
impl LimitSwitch for TestLimitSwitch {
    fn read_limitswitch_state(&self) -> LimitSwitchState {
        self.0
    }
}

use ufmt::{uDisplay, uWrite, Formatter};

/// Top-level state of the machine.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SystemState {
    #[default]
    Idle,
    HomingX,
    HomingY,
    HomedWaiting,
    ExecutingPattern,
    Error,
    CycleComplete,
}
impl SystemState {
    /// Every state, for exhaustive tests.
    pub const ALL: [SystemState; 7] = [
        SystemState::Idle,
        SystemState::HomingX,
        SystemState::HomingY,
        SystemState::HomedWaiting,
        SystemState::ExecutingPattern,
        SystemState::Error,
        SystemState::CycleComplete,
    ];

    /// Returns `true` while an axis is seeking its home sensor.
    pub fn is_homing(&self) -> bool {
        matches!(self, SystemState::HomingX | SystemState::HomingY)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SystemState::Idle => "IDLE",
            SystemState::HomingX => "HOMING_X",
            SystemState::HomingY => "HOMING_Y",
            SystemState::HomedWaiting => "HOMED_WAITING",
            SystemState::ExecutingPattern => "EXECUTING_PATTERN",
            SystemState::Error => "ERROR",
            SystemState::CycleComplete => "CYCLE_COMPLETE",
        }
    }
}
impl uDisplay for SystemState {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}

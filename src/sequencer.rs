use crate::Board;
use crate::Executor;
use crate::PrimitiveCommand;
use crate::Rig;
use crate::Side;
use crate::SideSelection;

/// Position of the sequencer within a paint cycle.
///
/// `side` is a zero-based side index; a value of 4 or more means every
/// side has been passed. `command` indexes into that side's pattern.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Cursor {
    pub side: usize,
    pub command: usize,
}
impl Cursor {
    pub const START: Cursor = Cursor {
        side: 0,
        command: 0,
    };

    /// Moves to the first command of the next side.
    fn next_side(&mut self) {
        self.side += 1;
        self.command = 0;
    }
}

/// Outcome of one sequencer step.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequencerStep {
    /// Motion is still in progress; nothing was done.
    Waiting,
    /// This command was handed to the executor.
    Dispatched(PrimitiveCommand),
    /// Every selected side has been painted.
    Complete,
}

/// Walks the patterns of the selected sides, one command at a time.
///
/// A command is only dispatched once all motion from the previous one has
/// finished, so at most one primitive command is ever in flight.
#[derive(Debug, Default)]
pub struct Sequencer {
    cursor: Cursor,
}
impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewinds to the first command of the first side.
    pub fn reset(&mut self) {
        self.cursor = Cursor::START;
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Performs one non-blocking step of the paint cycle.
    ///
    /// # Parameters
    ///
    /// - `motors_running`: Whether any actuator still has motion left.
    /// - `selection`: Sides to visit.
    /// - `executor`: Executor for the dispatched command.
    /// - `rig`: Devices the command acts on.
    pub fn step<B: Board>(
        &mut self,
        motors_running: bool,
        selection: &SideSelection,
        executor: &Executor,
        rig: &mut Rig<B>,
    ) -> SequencerStep {
        if motors_running {
            return SequencerStep::Waiting;
        }

        loop {
            let side = match Side::from_index(self.cursor.side) {
                None => return SequencerStep::Complete,
                Some(side) => side,
            };
            if !selection.is_selected(side) {
                self.cursor.next_side();
                continue;
            }

            let pattern = side.pattern();
            let command = match pattern.get(self.cursor.command) {
                None => {
                    self.cursor.next_side();
                    continue;
                }
                Some(command) => *command,
            };

            executor.execute(&command, rig);
            self.cursor.command += 1;
            if self.cursor.command >= pattern.len() {
                self.cursor.next_side();
            }
            return SequencerStep::Dispatched(command);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::test::test_rig;
    use crate::pattern::test::side_selection;
    use crate::Actuator;
    use crate::MachineConfig;
    use crate::board::TestBoard;
    use crate::MicroSeconds;
    use crate::SprayRelay;
    use proptest::prelude::*;

    fn executor() -> Executor {
        Executor::new(&MachineConfig::DEFAULT)
    }

    /// Runs a full cycle, alternating motion with idle ticks, and returns
    /// every dispatched command.
    fn run_cycle(
        selection: &SideSelection,
        rig: &mut Rig<TestBoard>,
    ) -> Vec<PrimitiveCommand> {
        let exec = executor();
        let mut sequencer = Sequencer::new();
        let mut dispatched = Vec::new();
        rig.x.ticks_per_move = 3;
        rig.y.ticks_per_move = 2;
        rig.rotation.ticks_per_move = 5;
        for tick in 0..5000 {
            let now = MicroSeconds::new(tick);
            rig.run(now);
            match sequencer.step(rig.motors_running(), selection, &exec, rig) {
                SequencerStep::Complete => return dispatched,
                SequencerStep::Waiting => {}
                SequencerStep::Dispatched(cmd) => dispatched.push(cmd),
            }
        }
        panic!("cycle did not complete");
    }

    #[test]
    fn test_waits_for_motors() {
        let mut rig = test_rig();
        let mut sequencer = Sequencer::new();
        let selection = SideSelection::all();
        let step = sequencer.step(true, &selection, &executor(), &mut rig);
        assert_eq!(SequencerStep::Waiting, step);
        assert_eq!(Cursor::START, sequencer.cursor());
        assert!(rig.x.relative_moves.is_empty());
    }

    #[test]
    fn test_empty_selection_completes_immediately() {
        let mut rig = test_rig();
        let mut sequencer = Sequencer::new();
        let none = SideSelection::none();
        let step = sequencer.step(false, &none, &executor(), &mut rig);
        assert_eq!(SequencerStep::Complete, step);
        assert!(rig.x.relative_moves.is_empty());
        assert!(rig.relay.history.is_empty());
    }

    #[test]
    fn test_skips_to_selected_side() {
        let mut rig = test_rig();
        let mut sequencer = Sequencer::new();
        let selection = SideSelection::from_digits("34");
        let step = sequencer.step(false, &selection, &executor(), &mut rig);

        assert_eq!(SequencerStep::Dispatched(Side::Three.pattern()[0]), step);
        assert_eq!(Cursor { side: 2, command: 1 }, sequencer.cursor());
    }

    #[test]
    fn test_last_command_advances_side() {
        let mut rig = test_rig();
        let mut sequencer = Sequencer::new();
        let selection = SideSelection::from_digits("4");
        let len = Side::Four.pattern().len();
        for _ in 0..len {
            sequencer.step(false, &selection, &executor(), &mut rig);
        }
        assert_eq!(Cursor { side: 4, command: 0 }, sequencer.cursor());
        assert_eq!(
            SequencerStep::Complete,
            sequencer.step(false, &selection, &executor(), &mut rig)
        );
    }

    #[test]
    fn test_reset() {
        let mut rig = test_rig();
        let mut sequencer = Sequencer::new();
        let selection = SideSelection::all();
        sequencer.step(false, &selection, &executor(), &mut rig);
        assert_ne!(Cursor::START, sequencer.cursor());
        sequencer.reset();
        assert_eq!(Cursor::START, sequencer.cursor());
    }

    #[test]
    fn test_full_cycle_returns_tray() {
        let mut rig = test_rig();
        run_cycle(&SideSelection::all(), &mut rig);
        // Sides 1 and 2 cancel, as do 3 and 4, in X and Y.
        assert_eq!(0, rig.x.current_position().get_value());
        assert_eq!(0, rig.y.current_position().get_value());
        assert_eq!(6250, rig.rotation.current_position().get_value());
        assert!(!rig.relay.is_engaged());
    }

    proptest! {
        #[test]
        fn test_dispatches_selected_patterns_in_order(
            selection in side_selection()
        ) {
            let mut rig = test_rig();
            let dispatched = run_cycle(&selection, &mut rig);
            let expected: Vec<PrimitiveCommand> = selection
                .sides()
                .flat_map(|side| side.pattern().iter().copied())
                .collect();
            assert_eq!(expected, dispatched);
        }
    }
}

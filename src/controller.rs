use crate::command::{self, Command};
use crate::serial::{self, LineReader, SerialPort};
use crate::Actuator;
use crate::Board;
use crate::Cursor;
use crate::Executor;
use crate::HomeSensor;
use crate::MachineConfig;
use crate::MicroSeconds;
use crate::Rig;
use crate::Sequencer;
use crate::SequencerStep;
use crate::SideSelection;
use crate::SprayRelay;
use crate::Steps;
use crate::SystemState;

/// Longest accepted command line, in bytes.
const LINE_LENGTH: usize = 64;

/// Lines written when the machine starts.
const BANNER: [&str; 7] = [
    "CNC Paint Sprayer Ready",
    "Commands:",
    "H - Home",
    "S - Start",
    "E - Stop",
    "R - Reset",
    "12/13/14/23/24/34 etc. - Select sides to paint",
];

/// The machine's control loop.
///
/// Each call to [Controller::tick] samples the home sensors, advances the
/// actuators, handles at most one line of operator input and then performs
/// the work of the current [SystemState]. Nothing in a tick blocks.
pub struct Controller<B: Board> {
    rig: Rig<B>,
    config: MachineConfig,
    executor: Executor,
    sequencer: Sequencer,
    selection: SideSelection,
    state: SystemState,
    line_reader: LineReader<LINE_LENGTH>,
    motors_running: bool,
    homing_started: MicroSeconds,
}
impl<B: Board> Controller<B> {
    pub fn new(rig: Rig<B>, config: MachineConfig) -> Self {
        Self {
            rig,
            executor: Executor::new(&config),
            config,
            sequencer: Sequencer::new(),
            selection: SideSelection::default(),
            state: SystemState::Idle,
            line_reader: LineReader::new(),
            motors_running: false,
            homing_started: MicroSeconds::new(0),
        }
    }

    /// Prepares the machine and writes the start-up banner.
    pub fn begin<S: SerialPort>(&mut self, serial: &mut S) {
        self.rig.relay.release();
        self.config.x_homing_profile().apply(&mut self.rig.x);
        self.config.y_homing_profile().apply(&mut self.rig.y);
        self.config.rotation_profile.apply(&mut self.rig.rotation);
        for line in BANNER {
            notice!(serial, "{}", line);
        }
    }

    /// Runs one pass of the control loop.
    pub fn tick<S: SerialPort>(&mut self, now: MicroSeconds, serial: &mut S) {
        self.rig.update_sensors(now);
        self.rig.run(now);
        self.motors_running = self.rig.motors_running();

        if let Some(command) = self.read_command(serial) {
            self.handle_command(command, now, serial);
        }

        self.run_state(now, serial);
    }

    pub fn state(&self) -> SystemState {
        self.state
    }

    pub fn cursor(&self) -> Cursor {
        self.sequencer.cursor()
    }

    pub fn selection(&self) -> SideSelection {
        self.selection
    }

    /// Returns whether any actuator was moving at the start of the last tick.
    pub fn motors_running(&self) -> bool {
        self.motors_running
    }

    pub fn rig(&self) -> &Rig<B> {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut Rig<B> {
        &mut self.rig
    }

    /// Reads a line, if a complete one has arrived, and decodes it.
    ///
    /// Lines that are not commands are dropped without comment.
    fn read_command<S: SerialPort>(
        &mut self,
        serial: &mut S,
    ) -> Option<Command> {
        match self.line_reader.poll(serial) {
            Ok(line) => match Command::parse(line) {
                Ok(command) => Some(command),
                Err(command::Error::Unrecognized) => None,
            },
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(serial::Error::BufferOverflow)) => {
                error!(serial, "UART buffer overflow.");
                None
            }
        }
    }

    fn handle_command<S: SerialPort>(
        &mut self,
        command: Command,
        now: MicroSeconds,
        serial: &mut S,
    ) {
        info!(self.config.verbosity, serial, "Command {:?}.", command);
        match command {
            Command::Home => {
                if self.state == SystemState::Idle {
                    self.config.x_homing_profile().apply(&mut self.rig.x);
                    self.config.y_homing_profile().apply(&mut self.rig.y);
                    self.homing_started = now;
                    self.transition(SystemState::HomingX, serial);
                }
            }
            Command::Start => {
                if self.state == SystemState::HomedWaiting {
                    self.config.x_profile.apply(&mut self.rig.x);
                    self.config.y_profile.apply(&mut self.rig.y);
                    self.config.rotation_profile.apply(&mut self.rig.rotation);
                    self.sequencer.reset();
                    self.transition(SystemState::ExecutingPattern, serial);
                }
            }
            Command::EmergencyStop => self.emergency_stop(serial),
            Command::Reset => {
                if self.state == SystemState::Error {
                    self.transition(SystemState::Idle, serial);
                }
            }
            Command::SelectSides(selection) => {
                self.selection = selection;
                notice!(serial, "Selected sides to paint: {}", self.selection);
            }
        }
    }

    fn run_state<S: SerialPort>(&mut self, now: MicroSeconds, serial: &mut S) {
        match self.state {
            SystemState::Idle
            | SystemState::HomedWaiting
            | SystemState::Error => {}
            SystemState::HomingX => {
                if self.homing_timed_out(now, serial) {
                    return;
                }
                if self.rig.x_home.is_triggered() {
                    self.rig.x.set_current_position(Steps::zero());
                    self.transition(SystemState::HomingY, serial);
                } else if !self.rig.x.is_running() {
                    let target = self.homing_seek_target();
                    self.rig.x.move_to(target);
                }
            }
            SystemState::HomingY => {
                if self.homing_timed_out(now, serial) {
                    return;
                }
                if self.rig.y_home.is_triggered() {
                    self.rig.y.set_current_position(Steps::zero());
                    self.transition(SystemState::HomedWaiting, serial);
                    notice!(
                        serial,
                        "Homing complete. Enter 'S' to start painting."
                    );
                } else if !self.rig.y.is_running() {
                    let target = self.homing_seek_target();
                    self.rig.y.move_to(target);
                }
            }
            SystemState::ExecutingPattern => {
                match self.sequencer.step(
                    self.motors_running,
                    &self.selection,
                    &self.executor,
                    &mut self.rig,
                ) {
                    SequencerStep::Waiting => {}
                    SequencerStep::Dispatched(command) => {
                        let verbosity = self.config.verbosity;
                        info!(verbosity, serial, "Run {}.", command);
                    }
                    SequencerStep::Complete => {
                        self.transition(SystemState::CycleComplete, serial);
                    }
                }
            }
            SystemState::CycleComplete => {
                if !self.motors_running {
                    notice!(serial, "Cycle complete");
                    self.transition(SystemState::Idle, serial);
                }
            }
        }
    }

    /// Releases the spray, stops every axis and abandons the cycle.
    fn emergency_stop<S: SerialPort>(&mut self, serial: &mut S) {
        self.rig.relay.release();
        self.rig.stop_all();
        self.sequencer.reset();
        self.transition(SystemState::Error, serial);
    }

    /// Aborts homing if it has run for longer than the configured timeout.
    fn homing_timed_out<S: SerialPort>(
        &mut self,
        now: MicroSeconds,
        serial: &mut S,
    ) -> bool {
        let timeout = match self.config.homing_timeout {
            None => return false,
            Some(timeout) => timeout,
        };
        if now.elapsed_since(self.homing_started) <= timeout {
            return false;
        }
        error!(serial, "Homing timed out.");
        self.emergency_stop(serial);
        true
    }

    fn homing_seek_target(&self) -> Steps {
        Steps::new(self.config.homing_seek_target)
    }

    fn transition<S: SerialPort>(
        &mut self,
        state: SystemState,
        serial: &mut S,
    ) {
        if state != self.state {
            let verbosity = self.config.verbosity;
            info!(verbosity, serial, "{} -> {}.", self.state, state);
        }
        self.state = state;
    }
}

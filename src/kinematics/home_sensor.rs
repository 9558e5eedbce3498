use crate::LimitSwitch;
use crate::LimitSwitchState;
use crate::MicroSeconds;

/// A polled home-position sensor.
///
/// `update` must be called once per control-loop tick, before
/// `is_triggered` is consulted.
pub trait HomeSensor {
    /// Samples the sensor.
    ///
    /// # Parameters
    ///
    /// - `now`: Current time from the control loop's clock.
    fn update(&mut self, now: MicroSeconds);

    /// Returns `true` if the axis is at its home position.
    fn is_triggered(&self) -> bool;
}

/// Limit switch with a debounced, stable state.
///
/// A reading that differs from the stable state starts a timer. The new
/// reading is accepted once it has differed for at least `interval`; a
/// reading that agrees with the stable state again cancels the timer.
///
/// # Type Parameters
///
/// - `L`: type of the underlying [LimitSwitch].
pub struct DebouncedSwitch<L> {
    switch: L,
    interval: MicroSeconds,
    stable: LimitSwitchState,
    /// When the raw reading started to differ from `stable`.
    differs_since: Option<MicroSeconds>,
}
impl<L: LimitSwitch> DebouncedSwitch<L> {
    /// Creates a new `DebouncedSwitch`.
    ///
    /// The initial stable state is whatever the switch reads right now.
    ///
    /// # Parameters
    ///
    /// - `switch`: The raw switch.
    /// - `interval`: How long a reading must hold before it is accepted.
    pub fn new(switch: L, interval: MicroSeconds) -> Self {
        let stable = switch.read_limitswitch_state();
        Self {
            switch,
            interval,
            stable,
            differs_since: None,
        }
    }

    /// Returns the underlying switch.
    #[cfg(test)]
    pub fn inner(&mut self) -> &mut L {
        &mut self.switch
    }
}

impl<L: LimitSwitch> HomeSensor for DebouncedSwitch<L> {
    fn update(&mut self, now: MicroSeconds) {
        if self.switch.read_limitswitch_state() == self.stable {
            self.differs_since = None;
            return;
        }
        match self.differs_since {
            None => self.differs_since = Some(now),
            Some(since) if now.elapsed_since(since) >= self.interval => {
                self.stable = self.switch.read_limitswitch_state();
                self.differs_since = None;
            }
            Some(_) => {}
        }
    }

    fn is_triggered(&self) -> bool {
        self.stable == LimitSwitchState::AtLimit
    }
}

/// Home sensor whose state is set directly by a test.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestHomeSensor {
    triggered: bool,
    updates: usize,
}
#[cfg(test)]
impl TestHomeSensor {
    pub fn set_triggered(&mut self, triggered: bool) {
        self.triggered = triggered;
    }

    pub fn updates(&self) -> usize {
        self.updates
    }
}
#[cfg(test)]
impl HomeSensor for TestHomeSensor {
    fn update(&mut self, _now: MicroSeconds) {
        self.updates += 1;
    }

    fn is_triggered(&self) -> bool {
        self.triggered
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TestLimitSwitch;
    use proptest::collection;
    use proptest::prelude::*;

    const INTERVAL: MicroSeconds = MicroSeconds::from_millis(10);

    fn at(ms: u32) -> MicroSeconds {
        MicroSeconds::from_millis(ms)
    }

    fn debounced(state: LimitSwitchState) -> DebouncedSwitch<TestLimitSwitch> {
        DebouncedSwitch::new(TestLimitSwitch::new(state), INTERVAL)
    }

    #[test]
    fn test_initial_state_follows_switch() {
        assert!(debounced(LimitSwitchState::AtLimit).is_triggered());
        assert!(!debounced(LimitSwitchState::NotAtLimit).is_triggered());
    }

    #[test]
    fn test_change_accepted_after_interval() {
        let mut ds = debounced(LimitSwitchState::NotAtLimit);
        ds.inner()
            .set_limitswitch_state(LimitSwitchState::AtLimit);

        ds.update(at(1));
        assert!(!ds.is_triggered());
        ds.update(at(6));
        assert!(!ds.is_triggered());
        ds.update(at(11));
        assert!(ds.is_triggered());
    }

    #[test]
    fn test_release_is_debounced_too() {
        let mut ds = debounced(LimitSwitchState::AtLimit);
        ds.inner()
            .set_limitswitch_state(LimitSwitchState::NotAtLimit);
        ds.update(at(3));
        ds.update(at(12));
        assert!(ds.is_triggered());
        ds.update(at(13));
        assert!(!ds.is_triggered());
    }

    #[test]
    fn test_change_accepted_across_clock_wrap() {
        let start = MicroSeconds::new(u32::MAX - 4_000);
        let mut ds = DebouncedSwitch::new(
            TestLimitSwitch::new(LimitSwitchState::NotAtLimit),
            INTERVAL,
        );
        ds.inner()
            .set_limitswitch_state(LimitSwitchState::AtLimit);
        ds.update(start);
        ds.update(MicroSeconds::new(3_000));
        assert!(!ds.is_triggered());
        ds.update(MicroSeconds::new(6_000));
        assert!(ds.is_triggered());
    }

    #[test]
    fn test_bounce_restarts_interval() {
        let mut ds = debounced(LimitSwitchState::NotAtLimit);

        ds.inner()
            .set_limitswitch_state(LimitSwitchState::AtLimit);
        ds.update(at(1));
        ds.inner()
            .set_limitswitch_state(LimitSwitchState::NotAtLimit);
        ds.update(at(5));
        ds.inner()
            .set_limitswitch_state(LimitSwitchState::AtLimit);
        ds.update(at(8));

        // 10ms after the first edge, but only 2ms after the last one.
        ds.update(at(10));
        assert!(!ds.is_triggered());
        ds.update(at(18));
        assert!(ds.is_triggered());
    }

    #[test]
    fn test_short_glitch_ignored() {
        let mut ds = debounced(LimitSwitchState::AtLimit);
        ds.inner()
            .set_limitswitch_state(LimitSwitchState::NotAtLimit);
        ds.update(at(20));
        ds.inner()
            .set_limitswitch_state(LimitSwitchState::AtLimit);
        ds.update(at(22));
        for ms in 23..60 {
            ds.update(at(ms));
            assert!(ds.is_triggered());
        }
    }

    proptest! {
        #[test]
        fn test_stable_input_always_wins(
            noise in collection::vec(any::<bool>(), 0..32),
            settled: bool
        ) {
            let mut ds = debounced(LimitSwitchState::NotAtLimit);
            let mut t = 0;
            for level in noise {
                let state = if level {
                    LimitSwitchState::AtLimit
                } else {
                    LimitSwitchState::NotAtLimit
                };
                ds.inner().set_limitswitch_state(state);
                t += 1;
                ds.update(at(t));
            }

            let state = if settled {
                LimitSwitchState::AtLimit
            } else {
                LimitSwitchState::NotAtLimit
            };
            ds.inner().set_limitswitch_state(state);
            for _ in 0..3 {
                t += 11;
                ds.update(at(t));
            }
            assert_eq!(settled, ds.is_triggered());
        }
    }
}

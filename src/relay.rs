/// Spray gun relay.
///
/// Engaging the relay starts the spray; releasing it stops the spray. The
/// electrical polarity is a property of the implementation.
pub trait SprayRelay {
    fn engage(&mut self);
    fn release(&mut self);
    fn is_engaged(&self) -> bool;
}

/// Relay for tests, which records every level it is driven to.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestRelay {
    engaged: bool,
    pub history: Vec<bool>,
}
#[cfg(test)]
impl SprayRelay for TestRelay {
    fn engage(&mut self) {
        self.engaged = true;
        self.history.push(true);
    }

    fn release(&mut self) {
        self.engaged = false;
        self.history.push(false);
    }

    fn is_engaged(&self) -> bool {
        self.engaged
    }
}

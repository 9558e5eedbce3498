use arduino_hal::pac::TC1;
use paintstepper::MicroSeconds;

/// Free-running microsecond clock on Timer/Counter 1.
///
/// The 16-bit counter runs at 250 kHz (16 MHz / 64) and wraps every 262 ms.
/// Elapsed counts are accumulated on every call to [Clock::now], which must
/// therefore be called more often than that.
pub struct Clock {
    tc1: TC1,
    last_count: u16,
    micros: u32,
}
impl Clock {
    const MICROS_PER_COUNT: u32 = 4;

    /// Takes over `TC1` in normal mode and starts it counting.
    pub fn new(tc1: TC1) -> Self {
        tc1.tccr1a.write(|w| w.wgm1().bits(0b00));
        tc1.tccr1b.write(|w| w.cs1().prescale_64());
        let last_count = tc1.tcnt1.read().bits();
        Self {
            tc1,
            last_count,
            micros: 0,
        }
    }

    /// Returns the current time.
    pub fn now(&mut self) -> MicroSeconds {
        let count = self.tc1.tcnt1.read().bits();
        let elapsed = count.wrapping_sub(self.last_count) as u32;
        self.last_count = count;
        self.micros = self
            .micros
            .wrapping_add(elapsed * Self::MICROS_PER_COUNT);
        MicroSeconds::new(self.micros)
    }
}

use portable_atomic::Ordering;

use crate::blinker::Blinker;
use crate::countdown::{Countdown, Expire};
use crate::indicator::Line;

/// Phase flip, run from the countdown interrupt.
///
/// Thread mode never changes the shared state while a program is armed, so
/// everything read here belongs to the program that just expired.
impl<'a, L, C> Expire for Blinker<'a, L, C>
where
    L: Line + Sync,
    C: Countdown<'a> + Sync,
{
    fn expired(&self) {
        // Latched before a stop; the countdown is no longer ours.
        if !self.running.load(Ordering::Acquire) {
            return;
        }

        let lit = !self.lit.load(Ordering::Acquire);
        let ticks = if lit {
            self.on_ticks.load(Ordering::Acquire)
        } else {
            self.off_ticks.load(Ordering::Acquire)
        };

        self.indicator.set(lit);
        self.countdown.program(ticks);
        self.lit.store(lit, Ordering::Release);
        trace!("blink phase: lit={} for {} ticks", lit, ticks);
    }
}

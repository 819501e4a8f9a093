use core::marker::PhantomData;

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::config::BlinkConfig;
use crate::countdown::Countdown;
use crate::indicator::{Indicator, Line};

/// Whether the blinker currently holds the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    Idle,
    Running,
}

/// Drives an [`Indicator`] through an endless on/off pattern.
///
/// The phase flag, the phase lengths and the run flag are shared with the
/// timer interrupt. Thread-mode code never writes any of them while a
/// program is armed: it cancels the countdown first, updates the state, and
/// only then programs the next phase. That ordering is the only mutual
/// exclusion between [`start`](Blinker::start)/[`stop`](Blinker::stop) and the
/// interrupt handler.
pub struct Blinker<'a, L: Line, C: Countdown<'a>> {
    pub(crate) indicator: Indicator<L>,
    pub(crate) countdown: C,
    pub(crate) lit: AtomicBool,
    pub(crate) running: AtomicBool,
    pub(crate) on_ticks: AtomicU32,
    pub(crate) off_ticks: AtomicU32,
    _handler: PhantomData<&'a ()>,
}

impl<'a, L, C> Blinker<'a, L, C>
where
    L: Line + Sync,
    C: Countdown<'a> + Sync,
{
    pub const fn new(indicator: Indicator<L>, countdown: C) -> Self {
        Self {
            indicator,
            countdown,
            lit: AtomicBool::new(false),
            running: AtomicBool::new(false),
            on_ticks: AtomicU32::new(0),
            off_ticks: AtomicU32::new(0),
            _handler: PhantomData,
        }
    }

    /// Blink with `on_ms` lit and `off_ms` dark, starting lit.
    ///
    /// Calling this again with the same durations while running does nothing,
    /// so it is safe to call on every poll of whatever decides the pattern.
    /// New durations restart the cycle at the beginning of the lit phase.
    pub fn start(&'a self, on_ms: u32, off_ms: u32) {
        let config = BlinkConfig::from_millis(on_ms, off_ms, C::TICKS_PER_MS, C::MAX_TICKS);

        if self.running.load(Ordering::Acquire) {
            if self.config() == Some(config) {
                return;
            }
            // The handler may still fire until this returns.
            self.countdown.cancel();
            self.publish(config);
            info!("blink retarget: {} on / {} off ticks", config.on_ticks, config.off_ticks);
            self.countdown.program(config.on_ticks);
        } else {
            self.publish(config);
            self.countdown.attach(self);
            self.running.store(true, Ordering::Release);
            info!("blink start: {} on / {} off ticks", config.on_ticks, config.off_ticks);
            self.countdown.program(config.on_ticks);
        }
    }

    /// Stop blinking and release the countdown.
    ///
    /// The indicator keeps the level of the phase it was in.
    pub fn stop(&self) {
        if !self.running.load(Ordering::Acquire) {
            return;
        }
        self.countdown.cancel();
        self.countdown.detach();
        self.running.store(false, Ordering::Release);
        debug!("blink stop");
    }

    pub fn state(&self) -> RunState {
        if self.running.load(Ordering::Acquire) {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Phase lengths of the last start, or `None` if never started.
    pub fn config(&self) -> Option<BlinkConfig> {
        let on_ticks = self.on_ticks.load(Ordering::Acquire);
        // Converted durations are never zero, so zero means "never started".
        if on_ticks == 0 {
            return None;
        }
        Some(BlinkConfig {
            on_ticks,
            off_ticks: self.off_ticks.load(Ordering::Acquire),
        })
    }

    pub fn is_on(&self) -> bool {
        self.lit.load(Ordering::Acquire)
    }

    pub fn indicator(&self) -> &Indicator<L> {
        &self.indicator
    }

    pub fn countdown(&self) -> &C {
        &self.countdown
    }

    // Only call with the countdown disarmed.
    fn publish(&self, config: BlinkConfig) {
        self.on_ticks.store(config.on_ticks, Ordering::Release);
        self.off_ticks.store(config.off_ticks, Ordering::Release);
        self.lit.store(true, Ordering::Release);
        self.indicator.on();
    }
}

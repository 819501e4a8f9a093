//! One-shot countdown on TIMER1.
//!
//! TIMER1 runs in 32-bit timer mode at 16 MHz / 2^6 = 250 kHz. Compare
//! channel 0 is shorted to CLEAR and STOP so each program fires once. The
//! RTC1 time driver used by embassy-time does not touch TIMER1.

use core::cell::Cell;

use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::{pac, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use linklight_blink::{Countdown, Expire};

const PRESCALER: u32 = 6;
const MODE_TIMER: u32 = 0;
const BITMODE_32: u32 = 3;
const SHORT_COMPARE0_CLEAR: u32 = 1 << 0;
const SHORT_COMPARE0_STOP: u32 = 1 << 8;
const INT_COMPARE0: u32 = 1 << 16;

// Written only by `attach`/`detach`; read by the interrupt.
static HANDLER: Mutex<CriticalSectionRawMutex, Cell<Option<&'static dyn Expire>>> =
    Mutex::new(Cell::new(None));

fn regs() -> &'static pac::timer0::RegisterBlock {
    unsafe { &*pac::TIMER1::ptr() }
}

/// Owns TIMER1. Hand it to exactly one blinker.
pub struct Timer1Countdown {
    _timer: peripherals::TIMER1,
}

impl Timer1Countdown {
    pub fn new(timer: peripherals::TIMER1) -> Self {
        let r = regs();
        r.tasks_stop.write(|w| unsafe { w.bits(1) });
        r.mode.write(|w| unsafe { w.bits(MODE_TIMER) });
        r.bitmode.write(|w| unsafe { w.bits(BITMODE_32) });
        r.prescaler.write(|w| unsafe { w.bits(PRESCALER) });
        r.shorts.write(|w| unsafe { w.bits(SHORT_COMPARE0_CLEAR | SHORT_COMPARE0_STOP) });
        r.tasks_clear.write(|w| unsafe { w.bits(1) });
        r.events_compare[0].write(|w| unsafe { w.bits(0) });
        r.intenset.write(|w| unsafe { w.bits(INT_COMPARE0) });

        interrupt::TIMER1.unpend();
        interrupt::TIMER1.set_priority(Priority::P3);
        unsafe { interrupt::TIMER1.enable() };

        Self { _timer: timer }
    }
}

impl Countdown<'static> for Timer1Countdown {
    const TICKS_PER_MS: u32 = 250;
    const MAX_TICKS: u32 = u32::MAX;

    fn attach(&self, handler: &'static dyn Expire) {
        HANDLER.lock(|h| h.set(Some(handler)));
    }

    fn detach(&self) {
        HANDLER.lock(|h| h.set(None));
    }

    fn program(&self, ticks: u32) {
        let r = regs();
        // A compare value of 0 would only match after a full 32-bit wrap.
        r.cc[0].write(|w| unsafe { w.bits(ticks.max(1)) });
        r.tasks_clear.write(|w| unsafe { w.bits(1) });
        r.tasks_start.write(|w| unsafe { w.bits(1) });
    }

    fn cancel(&self) {
        let r = regs();
        // With the line off an expiry latched before the stop cannot run
        // until the event and the pending bit are gone, so it is dropped.
        interrupt::TIMER1.disable();
        r.tasks_stop.write(|w| unsafe { w.bits(1) });
        r.tasks_clear.write(|w| unsafe { w.bits(1) });
        r.events_compare[0].write(|w| unsafe { w.bits(0) });
        interrupt::TIMER1.unpend();
        unsafe { interrupt::TIMER1.enable() };
    }
}

#[interrupt]
fn TIMER1() {
    let r = regs();
    if r.events_compare[0].read().bits() == 0 {
        return;
    }
    r.events_compare[0].write(|w| unsafe { w.bits(0) });

    if let Some(handler) = HANDLER.lock(|h| h.get()) {
        handler.expired();
    }
}

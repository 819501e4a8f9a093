use core::cell::RefCell;

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use linklight_blink::Line;

/// GPIO output that can be written from thread mode and from interrupts.
///
/// The write holds a critical section for the duration of one register
/// store, so it never blocks.
pub struct LedLine {
    out: Mutex<CriticalSectionRawMutex, RefCell<Output<'static, AnyPin>>>,
}

impl LedLine {
    pub fn new(pin: impl Pin, initial: Level) -> Self {
        let out = Output::new(pin.degrade(), initial, OutputDrive::Standard);
        Self {
            out: Mutex::new(RefCell::new(out)),
        }
    }
}

impl Line for LedLine {
    fn drive(&self, high: bool) {
        let level = if high { Level::High } else { Level::Low };
        self.out.lock(|out| out.borrow_mut().set_level(level));
    }
}

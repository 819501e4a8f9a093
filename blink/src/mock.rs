//! Host-side stand-ins for the line and the countdown.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::config::{REFERENCE_MAX_TICKS, REFERENCE_TICKS_PER_MS};
use crate::countdown::{Countdown, Expire};
use crate::indicator::Line;

pub(crate) struct MockLine {
    high: AtomicBool,
    writes: AtomicUsize,
}

impl MockLine {
    pub fn new() -> Self {
        Self {
            high: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn is_high(&self) -> bool {
        self.high.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Line for MockLine {
    fn drive(&self, high: bool) {
        self.high.store(high, Ordering::SeqCst);
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    Attach,
    Detach,
    Program(u32),
    Cancel,
}

struct Inner<'a> {
    handler: Option<&'a dyn Expire>,
    armed: Option<u32>,
    calls: Vec<Call>,
    double_arms: usize,
    fire_on_cancel: bool,
    latch_on_cancel: bool,
    pending: bool,
}

/// Countdown with the reference tick rate that only fires when told to.
pub(crate) struct MockCountdown<'a> {
    inner: Mutex<Inner<'a>>,
}

impl<'a> MockCountdown<'a> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                handler: None,
                armed: None,
                calls: Vec::new(),
                double_arms: 0,
                fire_on_cancel: false,
                latch_on_cancel: false,
                pending: false,
            }),
        }
    }

    /// Expire the armed program as the interrupt would. Returns `false` when
    /// nothing was armed.
    pub fn fire(&self) -> bool {
        // The lock is released before the handler runs, since it reprograms.
        let handler = {
            let mut inner = self.inner.lock().unwrap();
            if inner.armed.take().is_none() {
                return false;
            }
            inner.handler
        };
        if let Some(handler) = handler {
            handler.expired();
        }
        true
    }

    /// Make the next `cancel` get preempted by the expiry of whatever is armed
    /// before it disarms.
    pub fn fire_during_next_cancel(&self) {
        self.inner.lock().unwrap().fire_on_cancel = true;
    }

    /// Make the armed program expire inside the next `cancel` with its
    /// interrupt held off until [`service_pending`](Self::service_pending).
    pub fn latch_during_next_cancel(&self) {
        self.inner.lock().unwrap().latch_on_cancel = true;
    }

    /// Run the interrupt for an expiry that latched while it was held off.
    /// Returns `false` if `cancel` already dropped it.
    pub fn service_pending(&self) -> bool {
        let handler = {
            let mut inner = self.inner.lock().unwrap();
            if !core::mem::take(&mut inner.pending) {
                return false;
            }
            inner.handler
        };
        if let Some(handler) = handler {
            handler.expired();
        }
        true
    }

    pub fn armed(&self) -> Option<u32> {
        self.inner.lock().unwrap().armed
    }

    pub fn attached(&self) -> bool {
        self.inner.lock().unwrap().handler.is_some()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn programs(&self) -> usize {
        self.count(|c| matches!(c, Call::Program(_)))
    }

    pub fn cancels(&self) -> usize {
        self.count(|c| matches!(c, Call::Cancel))
    }

    /// Programs issued while a previous one was still armed.
    pub fn double_arms(&self) -> usize {
        self.inner.lock().unwrap().double_arms
    }

    fn count(&self, f: impl Fn(&Call) -> bool) -> usize {
        self.inner.lock().unwrap().calls.iter().filter(|c| f(c)).count()
    }
}

impl<'a> Countdown<'a> for MockCountdown<'a> {
    const TICKS_PER_MS: u32 = REFERENCE_TICKS_PER_MS;
    const MAX_TICKS: u32 = REFERENCE_MAX_TICKS;

    fn attach(&self, handler: &'a dyn Expire) {
        let mut inner = self.inner.lock().unwrap();
        inner.handler = Some(handler);
        inner.calls.push(Call::Attach);
    }

    fn detach(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.handler = None;
        inner.calls.push(Call::Detach);
    }

    fn program(&self, ticks: u32) {
        let mut inner = self.inner.lock().unwrap();
        if inner.armed.is_some() {
            inner.double_arms += 1;
        }
        inner.armed = Some(ticks);
        inner.calls.push(Call::Program(ticks));
    }

    fn cancel(&self) {
        let preempted = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Cancel);
            if core::mem::take(&mut inner.latch_on_cancel) && inner.armed.take().is_some() {
                inner.pending = true;
            }
            core::mem::take(&mut inner.fire_on_cancel)
        };
        if preempted {
            self.fire();
        }
        // Disarming clears the compare event and the pending interrupt.
        let mut inner = self.inner.lock().unwrap();
        inner.armed = None;
        inner.pending = false;
    }
}

//! One-shot countdown contract.
//!
//! The countdown is exclusively owned by one [`Blinker`](crate::Blinker).
//! Programming it from anywhere else while that blinker is running is a
//! usage error with undefined hardware consequences; nothing checks for it
//! at runtime.

/// Receiver of countdown expirations. Runs in interrupt context.
pub trait Expire: Sync {
    /// Called once per expired program. Must not block or allocate.
    fn expired(&self);
}

/// A hardware countdown that fires an attached [`Expire`] exactly once per
/// [`program`](Countdown::program).
pub trait Countdown<'a> {
    /// Integer tick rate used to convert milliseconds. Truncated, never
    /// rounded up.
    const TICKS_PER_MS: u32;

    /// Longest program the hardware can represent.
    const MAX_TICKS: u32;

    /// Route expirations to `handler` until [`detach`](Countdown::detach).
    fn attach(&self, handler: &'a dyn Expire);

    fn detach(&self);

    /// Arm a one-shot expiration `ticks` from now.
    ///
    /// The countdown must not already be armed: call
    /// [`cancel`](Countdown::cancel) first. The attached handler may call this
    /// from inside [`Expire::expired`], where the expired program no longer
    /// counts as armed.
    fn program(&self, ticks: u32);

    /// Disarm any pending program. Once this returns the handler will not run
    /// for the cancelled program, even if its interrupt was already latched.
    /// No-op when nothing is armed.
    fn cancel(&self);
}

impl<'a, T: Countdown<'a>> Countdown<'a> for &T {
    const TICKS_PER_MS: u32 = T::TICKS_PER_MS;
    const MAX_TICKS: u32 = T::MAX_TICKS;

    fn attach(&self, handler: &'a dyn Expire) {
        (**self).attach(handler)
    }

    fn detach(&self) {
        (**self).detach()
    }

    fn program(&self, ticks: u32) {
        (**self).program(ticks)
    }

    fn cancel(&self) {
        (**self).cancel()
    }
}

#![cfg_attr(not(test), no_std)]

//! Blink an indicator from a one-shot timer interrupt.
//!
//! A [`Blinker`] owns one [`Indicator`] and one [`Countdown`]. The main
//! context calls [`Blinker::start`] and [`Blinker::stop`]; the countdown
//! calls back into the blinker from interrupt context every time a phase
//! ends. The two sides share no lock: the main context always cancels the
//! countdown before it touches the shared phase state.

// This must go first so the log macros are visible to the other modules.
mod fmt;

pub mod blinker;
pub mod config;
pub mod countdown;
pub mod indicator;
pub mod monitor;
mod toggle;

#[cfg(test)]
mod mock;

pub use blinker::{Blinker, RunState};
pub use config::{BlinkConfig, REFERENCE_MAX_TICKS, REFERENCE_TICKS_PER_MS};
pub use countdown::{Countdown, Expire};
pub use indicator::{Indicator, Line, Polarity};
pub use monitor::{LinkProbe, LinkState, Monitor, MonitorConfig, Pattern};

#![no_std]

//! nRF52840-DK bindings for the link beacon: the LED line, the TIMER1
//! countdown and the link-up input.

pub mod led;
pub mod link;
pub mod timer;

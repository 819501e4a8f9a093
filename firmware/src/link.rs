use embassy_nrf::gpio::{AnyPin, Input, Pin, Pull};

use linklight_blink::{LinkProbe, LinkState};

/// Link-up line from the network coprocessor. Active-low, pulled up, so a
/// missing coprocessor reads as "connecting".
pub struct LinkInput {
    input: Input<'static, AnyPin>,
}

impl LinkInput {
    pub fn new(pin: impl Pin) -> Self {
        Self {
            input: Input::new(pin.degrade(), Pull::Up),
        }
    }
}

impl LinkProbe for LinkInput {
    fn link_state(&mut self) -> LinkState {
        if self.input.is_low() {
            LinkState::Connected
        } else {
            LinkState::Connecting
        }
    }
}

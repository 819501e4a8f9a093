//! Map link state to a blink pattern.
//!
//! The monitor does not keep track of whether the pattern changed: it calls
//! [`Blinker::start`] on every sample and relies on the blinker ignoring
//! repeats.

use crate::blinker::Blinker;
use crate::countdown::Countdown;
use crate::indicator::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Connecting,
    Connected,
}

/// Lit and dark durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern {
    pub on_ms: u32,
    pub off_ms: u32,
}

impl Pattern {
    pub const CONNECTING: Pattern = Pattern::new(250, 250);
    pub const CONNECTED: Pattern = Pattern::new(333, 1000);

    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self { on_ms, off_ms }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    pub sample_period_ms: u32,
    pub connecting: Pattern,
    pub connected: Pattern,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: 1000,
            connecting: Pattern::CONNECTING,
            connected: Pattern::CONNECTED,
        }
    }
}

impl MonitorConfig {
    pub fn pattern(&self, state: LinkState) -> Pattern {
        match state {
            LinkState::Connecting => self.connecting,
            LinkState::Connected => self.connected,
        }
    }
}

pub trait LinkProbe {
    fn link_state(&mut self) -> LinkState;
}

pub struct Monitor<'a, P, L, C>
where
    L: Line + Sync,
    C: Countdown<'a> + Sync,
{
    probe: P,
    blinker: &'a Blinker<'a, L, C>,
    config: MonitorConfig,
    last: Option<LinkState>,
}

impl<'a, P, L, C> Monitor<'a, P, L, C>
where
    P: LinkProbe,
    L: Line + Sync,
    C: Countdown<'a> + Sync,
{
    pub fn new(probe: P, blinker: &'a Blinker<'a, L, C>, config: MonitorConfig) -> Self {
        Self {
            probe,
            blinker,
            config,
            last: None,
        }
    }

    /// Read the link once and point the blinker at the matching pattern.
    pub fn sample(&mut self) -> LinkState {
        let state = self.probe.link_state();
        match state {
            LinkState::Connected if self.last != Some(state) => info!("link up"),
            LinkState::Connected => {}
            LinkState::Connecting if self.last == Some(LinkState::Connected) => warn!("link lost"),
            LinkState::Connecting => debug!("link still connecting"),
        }

        let pattern = self.config.pattern(state);
        self.blinker.start(pattern.on_ms, pattern.off_ms);
        self.last = Some(state);
        state
    }

    /// Stop blinking. The next [`sample`](Monitor::sample) starts it again.
    pub fn halt(&mut self) {
        self.blinker.stop();
        self.last = None;
    }

    pub fn last_state(&self) -> Option<LinkState> {
        self.last
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}

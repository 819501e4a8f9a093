#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_nrf::gpio::Level;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;

use defmt::{info, unwrap};
use {defmt_rtt as _, panic_probe as _};

use linklight_blink::{Blinker, Indicator, Monitor, MonitorConfig, Polarity};
use linklight_firmware::led::LedLine;
use linklight_firmware::link::LinkInput;
use linklight_firmware::timer::Timer1Countdown;

type Beacon = Blinker<'static, LedLine, Timer1Countdown>;

static BEACON: StaticCell<Beacon> = StaticCell::new();

#[embassy_executor::task]
async fn monitor(mut monitor: Monitor<'static, LinkInput, LedLine, Timer1Countdown>) -> ! {
    let period = Duration::from_millis(monitor.config().sample_period_ms as u64);
    let mut ticker = Ticker::every(period);
    loop {
        monitor.sample();
        ticker.next().await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("boot");

    // LED1 on the DK is active-low; start dark.
    let led = LedLine::new(p.P0_13, Level::High);
    let beacon: &'static Beacon = BEACON.init(Blinker::new(
        Indicator::new(led, Polarity::ActiveLow),
        Timer1Countdown::new(p.TIMER1),
    ));

    // Button 1 stands in for the coprocessor's link-up line.
    let link = LinkInput::new(p.P0_11);

    let config = MonitorConfig::default();
    info!("monitor: {}", config);
    unwrap!(spawner.spawn(monitor(Monitor::new(link, beacon, config))));
}

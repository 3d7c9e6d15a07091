//! Blink renderer. Single consumer of the blink queue, sole owner of the
//! indicator GPIO.

use defmt::{debug, info};
use embassy_nrf::gpio;
use embassy_time::Timer;

use indicator::config::INTERVAL_MS;
use indicator::render::render;
use indicator::BlinkQueue;

use crate::board::LedResources;

#[embassy_executor::task]
pub async fn blink_process_task(queue: &'static BlinkQueue, res: LedResources) {
    info!("blink renderer running...");

    let mut led = gpio::Output::new(res.led, gpio::Level::Low, gpio::OutputDrive::Standard);

    loop {
        // wait until a blink item is received and process it
        let blink = queue.next().await;
        debug!(
            "got a blink item, rate {}, duration {}",
            blink.rate, blink.duration_ms
        );

        render(&mut led, blink.rate).await;

        // wait interval before processing another blink
        let idle_ms = if blink.sleep_ms > 0 {
            blink.sleep_ms
        } else {
            INTERVAL_MS
        };
        Timer::after_millis(idle_ms.into()).await;
    }
}

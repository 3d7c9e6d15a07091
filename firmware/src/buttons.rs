//! Momentary layer switch. Stands in for the keymap subsystem so the
//! layer indication has a live producer on the bench: layer 1 is active
//! while the button is held.

use defmt::info;
use embassy_nrf::gpio::{Input, Pull};
use embassy_time::Timer;

use indicator::StatusEvent;

use crate::board::ButtonResources;
use crate::listeners::EventPublisher;
use crate::state;

const MOMENTARY_LAYER: u8 = 1;
const DEBOUNCE_MS: u64 = 50;

#[embassy_executor::task]
pub async fn layer_switch_task(events: EventPublisher, res: ButtonResources) {
    let mut switch = Input::new(res.layer_switch, Pull::Up);

    loop {
        switch.wait_for_low().await;
        info!("layer switch pressed, layer {} on", MOMENTARY_LAYER);

        state::set_highest_layer(MOMENTARY_LAYER);
        events.publish_immediate(StatusEvent::LayerChanged {
            layer: MOMENTARY_LAYER,
            active: true,
        });
        Timer::after_millis(DEBOUNCE_MS).await;

        switch.wait_for_high().await;
        state::set_highest_layer(0);
        events.publish_immediate(StatusEvent::LayerChanged {
            layer: MOMENTARY_LAYER,
            active: false,
        });
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}

//! One-shot boot sequencer: battery probe with retry, initial battery and
//! connectivity indications, then the readiness gate flips and the task
//! returns.

use defmt::info;
use embassy_time::Timer;

use indicator::{config, policy, BlinkQueue, Capabilities, ReadyGate};

use crate::state;

#[embassy_executor::task]
pub async fn startup_sequence_task(
    queue: &'static BlinkQueue,
    ready: &'static ReadyGate,
    caps: Capabilities,
) {
    // let the battery/radio subsystems come up first
    Timer::after_millis(config::STARTUP_DELAY_MS).await;

    if caps.battery {
        info!("indicating initial battery status");

        let mut state_of_charge = state::battery_state_of_charge();
        let mut retry = 0;
        while state_of_charge == 0 && retry < config::BATTERY_READ_RETRIES {
            Timer::after_millis(config::BATTERY_READ_RETRY_MS).await;
            state_of_charge = state::battery_state_of_charge();
            retry += 1;
        }

        let blink = policy::battery_boot_blink(state_of_charge);
        info!("battery level {}, blinking {}", state_of_charge, blink.rate);
        queue.enqueue(blink);

        // wait until the blink should be displayed before the next check
        Timer::after_millis((config::BATTERY_BLINK_MS + config::INTERVAL_MS) as u64).await;
    }

    if caps.connectivity {
        info!("indicating initial connectivity status");
        crate::listeners::indicate_connectivity(queue, caps.peripheral_role);
    }

    ready.set_ready();
    info!("finished initializing led widget");
}

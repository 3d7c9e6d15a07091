#![no_std]
#![no_main]

mod battery;
mod board;
mod buttons;
mod leds;
mod listeners;
mod panic;
mod startup;
mod state;

use crate::board::*;
use crate::listeners::EventBus;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use git_version::git_version;
use indicator::{BlinkQueue, Capabilities, ReadyGate};

use defmt_rtt as _;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    let r = split_resources!(p);

    info!(
        "status led widget ({}) is running. Hello!",
        git_version!(fallback = "unknown")
    );

    static BLINK_QUEUE: BlinkQueue = BlinkQueue::new();
    static READY: ReadyGate = ReadyGate::new();
    static EVENTS: EventBus = EventBus::new();

    let caps = Capabilities {
        connectivity: true,
        peripheral_role: false,
        battery: true,
        layer_indication: true,
    };

    unwrap!(spawner.spawn(leds::blink_process_task(&BLINK_QUEUE, r.led)));

    // state sources
    if caps.battery {
        unwrap!(spawner.spawn(battery::battery_monitor_task(
            unwrap!(EVENTS.publisher()),
            r.battery
        )));
    }
    if caps.layer_indication {
        unwrap!(spawner.spawn(buttons::layer_switch_task(
            unwrap!(EVENTS.publisher()),
            r.buttons
        )));
    }

    // event-driven blink producers, gated until the boot sequence is done
    if caps.connectivity {
        unwrap!(spawner.spawn(listeners::output_listener_task(
            unwrap!(EVENTS.subscriber()),
            &BLINK_QUEUE,
            &READY,
            caps.peripheral_role,
        )));
    }
    if caps.battery {
        unwrap!(spawner.spawn(listeners::battery_listener_task(
            unwrap!(EVENTS.subscriber()),
            &BLINK_QUEUE,
            &READY,
        )));
    }
    if caps.layer_indication && !caps.peripheral_role {
        unwrap!(spawner.spawn(listeners::layer_listener_task(
            unwrap!(EVENTS.subscriber()),
            &BLINK_QUEUE,
            &READY,
        )));
    }

    unwrap!(spawner.spawn(startup::startup_sequence_task(&BLINK_QUEUE, &READY, caps)));
}

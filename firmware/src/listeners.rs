//! Event-driven blink producers. Each listener owns a bus subscription,
//! checks the readiness gate and enqueues at most a handful of requests
//! per event. A failed enqueue is dropped, never retried.

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use indicator::{policy, BlinkQueue, ReadyGate, StatusEvent};

use crate::state;

const EVENT_CAP: usize = 8;
const EVENT_SUBS: usize = 4;
const EVENT_PUBS: usize = 4;

pub type EventBus = PubSubChannel<CriticalSectionRawMutex, StatusEvent, EVENT_CAP, EVENT_SUBS, EVENT_PUBS>;
pub type EventSubscriber =
    Subscriber<'static, CriticalSectionRawMutex, StatusEvent, EVENT_CAP, EVENT_SUBS, EVENT_PUBS>;
pub type EventPublisher =
    Publisher<'static, CriticalSectionRawMutex, StatusEvent, EVENT_CAP, EVENT_SUBS, EVENT_PUBS>;

/// Enqueue one connectivity indication for the current link condition.
/// Shared between the output listener and the startup sequencer.
pub fn indicate_connectivity(queue: &BlinkQueue, peripheral_role: bool) {
    let link = state::link_state(peripheral_role);
    let blink = policy::output_blink(link);

    if peripheral_role {
        info!("link {}, blinking {}", link, blink.rate);
    } else {
        info!(
            "profile {} {}, blinking {}",
            state::active_profile(),
            link,
            blink.rate
        );
    }

    queue.enqueue(blink);
}

#[embassy_executor::task]
pub async fn output_listener_task(
    mut events: EventSubscriber,
    queue: &'static BlinkQueue,
    ready: &'static ReadyGate,
    peripheral_role: bool,
) {
    loop {
        let relevant = match events.next_message_pure().await {
            StatusEvent::ProfileChanged { .. } => !peripheral_role,
            StatusEvent::PeripheralConnection { .. } => peripheral_role,
            _ => false,
        };

        if relevant && ready.is_ready() {
            indicate_connectivity(queue, peripheral_role);
        }
    }
}

#[embassy_executor::task]
pub async fn battery_listener_task(
    mut events: EventSubscriber,
    queue: &'static BlinkQueue,
    ready: &'static ReadyGate,
) {
    loop {
        let StatusEvent::BatteryLevel { state_of_charge } = events.next_message_pure().await
        else {
            continue;
        };

        if !ready.is_ready() {
            continue;
        }

        // only the critical band gets a runtime indication
        if let Some(blink) = policy::battery_critical_blink(state_of_charge) {
            info!("battery level {}, blinking fast for critical", state_of_charge);
            queue.enqueue(blink);
        }
    }
}

#[embassy_executor::task]
pub async fn layer_listener_task(
    mut events: EventSubscriber,
    queue: &'static BlinkQueue,
    ready: &'static ReadyGate,
) {
    loop {
        let StatusEvent::LayerChanged { active, .. } = events.next_message_pure().await else {
            continue;
        };

        // ignore layer off events
        if !active || !ready.is_ready() {
            continue;
        }

        // read the layer at event time, not from the payload
        let index = state::highest_active_layer();
        info!("counting out layer {}", index);

        for blink in policy::layer_blinks(index) {
            queue.enqueue(blink);
        }
    }
}

//! Last-known device state, written by the radio/keymap/battery subsystems
//! and read synchronously by the listeners at event time. Using the latest
//! read rather than event payloads means a rapid burst of layer changes
//! counts out the final layer, not a queued history.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use indicator::LinkState;

static ACTIVE_PROFILE: AtomicU8 = AtomicU8::new(0);
static PROFILE_CONNECTED: AtomicBool = AtomicBool::new(false);
static PROFILE_OPEN: AtomicBool = AtomicBool::new(false);
static PERIPHERAL_CONNECTED: AtomicBool = AtomicBool::new(false);
static HIGHEST_LAYER: AtomicU8 = AtomicU8::new(0);
static BATTERY_SOC: AtomicU8 = AtomicU8::new(0);

// The radio stack writes through these when it owns the link.
#[allow(dead_code)]
pub fn set_profile(index: u8, connected: bool, open: bool) {
    ACTIVE_PROFILE.store(index, Ordering::Relaxed);
    PROFILE_CONNECTED.store(connected, Ordering::Relaxed);
    PROFILE_OPEN.store(open, Ordering::Relaxed);
}

#[allow(dead_code)]
pub fn set_peripheral_connected(connected: bool) {
    PERIPHERAL_CONNECTED.store(connected, Ordering::Relaxed);
}

pub fn active_profile() -> u8 {
    ACTIVE_PROFILE.load(Ordering::Relaxed)
}

/// Current link condition, folded down by device role.
pub fn link_state(peripheral_role: bool) -> LinkState {
    if peripheral_role {
        if PERIPHERAL_CONNECTED.load(Ordering::Relaxed) {
            LinkState::PeripheralConnected
        } else {
            LinkState::PeripheralDisconnected
        }
    } else if PROFILE_CONNECTED.load(Ordering::Relaxed) {
        LinkState::CentralConnected
    } else if PROFILE_OPEN.load(Ordering::Relaxed) {
        LinkState::CentralOpen
    } else {
        LinkState::CentralDisconnected
    }
}

pub fn set_highest_layer(layer: u8) {
    HIGHEST_LAYER.store(layer, Ordering::Relaxed);
}

pub fn highest_active_layer() -> u8 {
    HIGHEST_LAYER.load(Ordering::Relaxed)
}

pub fn set_battery_soc(state_of_charge: u8) {
    BATTERY_SOC.store(state_of_charge, Ordering::Relaxed);
}

/// Last sampled state of charge, 0 until the first sample lands.
pub fn battery_state_of_charge() -> u8 {
    BATTERY_SOC.load(Ordering::Relaxed)
}

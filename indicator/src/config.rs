//! Build-time tuning of the widget. None of these are runtime-mutable.

/// `duration_ms` stamped on connectivity status requests.
pub const OUTPUT_BLINK_MS: u16 = 1000;
/// `duration_ms` stamped on battery status requests.
pub const BATTERY_BLINK_MS: u16 = 2000;
/// `duration_ms` (and inter-item delay) for layer count requests.
pub const LAYER_BLINK_MS: u16 = 100;
/// Default renderer idle time between requests, used when `sleep_ms` is 0.
pub const INTERVAL_MS: u16 = 500;

/// State of charge at or above which the boot indication blinks slow.
pub const BATTERY_LEVEL_HIGH: u8 = 80;
/// State of charge at or above which the boot indication blinks fast.
pub const BATTERY_LEVEL_LOW: u8 = 20;
/// State of charge at or below which runtime battery events blink fast.
pub const BATTERY_LEVEL_CRITICAL: u8 = 10;

/// Pending blink requests held at most; further enqueues are dropped.
pub const QUEUE_DEPTH: usize = 16;

/// Delay before the startup sequencer begins probing, letting the
/// battery/radio subsystems come up.
pub const STARTUP_DELAY_MS: u64 = 200;
/// Boot battery probe: retries while the gauge reads the 0 sentinel.
pub const BATTERY_READ_RETRIES: u8 = 10;
/// Boot battery probe: pause between retries.
pub const BATTERY_READ_RETRY_MS: u64 = 100;

/// Which event producers exist on this device. Assembled once by the
/// composition root; each producer task is spawned only if its capability
/// is set.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities {
    /// Indicate radio link status changes.
    pub connectivity: bool,
    /// Device is the peripheral half of a split; collapses the link
    /// mapping to connected/disconnected.
    pub peripheral_role: bool,
    /// Battery reporting is available, both at boot and at runtime.
    pub battery: bool,
    /// Count out the active layer on layer activation.
    pub layer_indication: bool,
}

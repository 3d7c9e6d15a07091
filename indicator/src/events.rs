/// Device-state notifications the widget subscribes to.
///
/// Delivery is at-least-once per underlying transition; handlers re-read
/// the current device state rather than trusting stale payloads where the
/// distinction matters (layer counting, link status).
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusEvent {
    /// Active BLE profile changed (central role).
    ProfileChanged { index: u8 },
    /// Link to the central went up or down (peripheral role).
    PeripheralConnection { connected: bool },
    /// Battery state of charge was sampled; 0 means "unknown".
    BatteryLevel { state_of_charge: u8 },
    /// A keymap layer was toggled.
    LayerChanged { layer: u8, active: bool },
}

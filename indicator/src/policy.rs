//! Pure condition-to-pattern mapping. No state, no I/O; callers enqueue
//! whatever comes out.

use crate::blink::{BlinkRate, BlinkRequest};
use crate::config;

/// Radio link condition at the moment a connectivity event fired.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    CentralConnected,
    CentralOpen,
    CentralDisconnected,
    PeripheralConnected,
    PeripheralDisconnected,
}

/// Connectivity status indication, one request per event.
///
/// The peripheral mapping is deliberately not symmetric with the central
/// one: a connected peripheral blinks slow rather than going dark. This
/// matches the shipped behavior and is kept as-is.
pub fn output_blink(link: LinkState) -> BlinkRequest {
    let rate = match link {
        LinkState::CentralConnected => BlinkRate::Off,
        LinkState::CentralOpen => BlinkRate::Fast,
        LinkState::CentralDisconnected => BlinkRate::Slow,
        LinkState::PeripheralConnected => BlinkRate::Slow,
        LinkState::PeripheralDisconnected => BlinkRate::Fast,
    };

    BlinkRequest {
        rate,
        duration_ms: config::OUTPUT_BLINK_MS,
        ..Default::default()
    }
}

/// Boot-time battery indication. Marked `first_item`, built exactly once
/// per boot by the startup sequencer.
///
/// A state of charge between 1 and the low threshold falls through to the
/// default (off) rate; only the unknown/high/low bands are distinguished.
pub fn battery_boot_blink(state_of_charge: u8) -> BlinkRequest {
    let mut blink = BlinkRequest {
        duration_ms: config::BATTERY_BLINK_MS,
        first_item: true,
        ..Default::default()
    };

    if state_of_charge == 0 {
        blink.rate = BlinkRate::Off;
    } else if state_of_charge >= config::BATTERY_LEVEL_HIGH {
        blink.rate = BlinkRate::Slow;
    } else if state_of_charge >= config::BATTERY_LEVEL_LOW {
        blink.rate = BlinkRate::Fast;
    }

    blink
}

/// Runtime battery indication: one fast blink when a battery event lands
/// in the critical band, nothing otherwise. 0 is the unknown sentinel and
/// never counts as critical.
pub fn battery_critical_blink(state_of_charge: u8) -> Option<BlinkRequest> {
    if state_of_charge > 0 && state_of_charge <= config::BATTERY_LEVEL_CRITICAL {
        Some(BlinkRequest {
            rate: BlinkRate::Fast,
            duration_ms: config::BATTERY_BLINK_MS,
            ..Default::default()
        })
    } else {
        None
    }
}

/// Count out the highest active layer: N−1 frantic blinks then one medium
/// one, so the layer number is visually countable. Layer 0 (base) yields
/// nothing.
pub fn layer_blinks(index: u8) -> impl Iterator<Item = BlinkRequest> {
    (0..index).map(move |i| {
        if i + 1 < index {
            BlinkRequest {
                rate: BlinkRate::Frantic,
                duration_ms: config::LAYER_BLINK_MS,
                sleep_ms: config::LAYER_BLINK_MS,
                ..Default::default()
            }
        } else {
            BlinkRequest {
                rate: BlinkRate::Medium,
                duration_ms: config::LAYER_BLINK_MS,
                ..Default::default()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_link_mapping() {
        assert_eq!(output_blink(LinkState::CentralConnected).rate, BlinkRate::Off);
        assert_eq!(output_blink(LinkState::CentralOpen).rate, BlinkRate::Fast);
        assert_eq!(output_blink(LinkState::CentralDisconnected).rate, BlinkRate::Slow);
    }

    #[test]
    fn peripheral_link_mapping_is_asymmetric() {
        // connected peripherals blink slow instead of going dark
        assert_eq!(output_blink(LinkState::PeripheralConnected).rate, BlinkRate::Slow);
        assert_eq!(output_blink(LinkState::PeripheralDisconnected).rate, BlinkRate::Fast);
    }

    #[test]
    fn output_blink_is_not_a_boot_item() {
        assert!(!output_blink(LinkState::CentralConnected).first_item);
    }

    #[test]
    fn boot_battery_bands() {
        let unknown = battery_boot_blink(0);
        assert_eq!(unknown.rate, BlinkRate::Off);
        assert!(unknown.first_item);

        assert_eq!(battery_boot_blink(100).rate, BlinkRate::Slow);
        assert_eq!(battery_boot_blink(config::BATTERY_LEVEL_HIGH).rate, BlinkRate::Slow);
        assert_eq!(battery_boot_blink(config::BATTERY_LEVEL_LOW).rate, BlinkRate::Fast);
        assert_eq!(battery_boot_blink(50).rate, BlinkRate::Fast);
    }

    #[test]
    fn boot_battery_below_low_falls_through_to_off() {
        // no distinguishing pattern between the sentinel and the low band
        let blink = battery_boot_blink(config::BATTERY_LEVEL_LOW - 1);
        assert_eq!(blink.rate, BlinkRate::Off);
        assert!(blink.first_item);
    }

    #[test]
    fn critical_battery_band() {
        assert_eq!(battery_critical_blink(3).map(|b| b.rate), Some(BlinkRate::Fast));
        assert_eq!(
            battery_critical_blink(config::BATTERY_LEVEL_CRITICAL).map(|b| b.rate),
            Some(BlinkRate::Fast)
        );
        assert!(battery_critical_blink(config::BATTERY_LEVEL_CRITICAL + 1).is_none());
        assert!(battery_critical_blink(0).is_none());
        assert!(battery_critical_blink(100).is_none());
    }

    #[test]
    fn layer_zero_counts_nothing() {
        assert_eq!(layer_blinks(0).count(), 0);
    }

    #[test]
    fn layer_one_is_a_single_medium_blink() {
        let mut it = layer_blinks(1);

        let blink = it.next().unwrap();
        assert_eq!(blink.rate, BlinkRate::Medium);
        assert_eq!(blink.sleep_ms, 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn layer_three_is_two_frantic_then_medium() {
        let mut it = layer_blinks(3);

        for _ in 0..2 {
            let blink = it.next().unwrap();
            assert_eq!(blink.rate, BlinkRate::Frantic);
            assert_eq!(blink.sleep_ms, config::LAYER_BLINK_MS);
        }

        let last = it.next().unwrap();
        assert_eq!(last.rate, BlinkRate::Medium);
        assert_eq!(last.sleep_ms, 0);
        assert!(it.next().is_none());
    }
}

use embassy_time::Duration;

/// Named blink speeds, from "LED held off" up to a barely-visible flicker.
///
/// The default is [`BlinkRate::Off`]: a request built without an explicit
/// rate renders as a forced-off LED.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkRate {
    #[default]
    Off,
    Slow,
    Medium,
    Fast,
    Frantic,
}

impl BlinkRate {
    /// Half-period of one on/off cycle, `None` for [`BlinkRate::Off`].
    pub const fn half_period(self) -> Option<Duration> {
        match self {
            BlinkRate::Off => None,
            BlinkRate::Slow => Some(Duration::from_millis(300)),
            BlinkRate::Medium => Some(Duration::from_millis(150)),
            BlinkRate::Fast => Some(Duration::from_millis(80)),
            BlinkRate::Frantic => Some(Duration::from_millis(20)),
        }
    }
}

/// One unit of queued work for the renderer.
///
/// Copied by value into the queue; once enqueued it is immutable and
/// consumed exactly once.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkRequest {
    pub rate: BlinkRate,
    /// Intended total visible duration. Carried on every request but not
    /// consulted by the renderer, which always plays a single on/off cycle.
    pub duration_ms: u16,
    /// Set only on the very first battery request emitted at boot.
    pub first_item: bool,
    /// Idle time after rendering this request, 0 = default interval.
    pub sleep_ms: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_periods_match_rate_tiers() {
        assert_eq!(BlinkRate::Off.half_period(), None);
        assert_eq!(BlinkRate::Slow.half_period(), Some(Duration::from_millis(300)));
        assert_eq!(BlinkRate::Medium.half_period(), Some(Duration::from_millis(150)));
        assert_eq!(BlinkRate::Fast.half_period(), Some(Duration::from_millis(80)));
        assert_eq!(BlinkRate::Frantic.half_period(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn default_request_renders_off() {
        let blink = BlinkRequest::default();
        assert_eq!(blink.rate, BlinkRate::Off);
        assert!(!blink.first_item);
        assert_eq!(blink.sleep_ms, 0);
    }
}

use embassy_time::Timer;
use embedded_hal::digital::OutputPin;

use crate::blink::BlinkRate;

/// Play one blink request's worth of LED activity.
///
/// `Off` forces the pin low and returns immediately; any other rate is a
/// single on/off cycle at the rate's half-period. The request's
/// `duration_ms` is intentionally not consulted. Pin write failures are
/// ignored, the indicator is best-effort by design.
pub async fn render<P: OutputPin>(led: &mut P, rate: BlinkRate) {
    let Some(half_period) = rate.half_period() else {
        let _ = led.set_low();
        return;
    };

    let _ = led.set_high();
    Timer::after(half_period).await;
    let _ = led.set_low();
    Timer::after(half_period).await;
}

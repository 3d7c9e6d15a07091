//! Battery monitor. Samples VDD through the SAADC, estimates a state of
//! charge and fans it out as battery events.

use defmt::info;
use embassy_nrf::saadc::{ChannelConfig, Config, Saadc, VddInput};
use embassy_time::{Duration, Timer};

use indicator::StatusEvent;

use crate::board::{BatteryResources, Irqs};
use crate::listeners::EventPublisher;
use crate::state;

const SAMPLE_PERIOD: Duration = Duration::from_secs(60);

/// Internal 0.6 V reference with 1/6 gain, 12-bit resolution: full scale
/// is 3.6 V over 4096 counts.
fn millivolts(raw: i16) -> u32 {
    raw.max(0) as u32 * 3600 / 4096
}

/// Linear approximation between the LiPo cutoff and full-charge voltages.
/// Clamped to 1..=100 so 0 stays reserved as the "unknown" sentinel.
fn state_of_charge(mv: u32) -> u8 {
    const EMPTY_MV: u32 = 3100;
    const FULL_MV: u32 = 4200;

    let mv = mv.clamp(EMPTY_MV, FULL_MV);
    ((100 * (mv - EMPTY_MV) / (FULL_MV - EMPTY_MV)) as u8).max(1)
}

#[embassy_executor::task]
pub async fn battery_monitor_task(events: EventPublisher, res: BatteryResources) {
    let config = Config::default();
    let channel_config = ChannelConfig::single_ended(VddInput);
    let mut saadc = Saadc::new(res.adc, Irqs, config, [channel_config]);

    loop {
        let mut buf = [0i16; 1];
        saadc.sample(&mut buf).await;

        let mv = millivolts(buf[0]);
        let soc = state_of_charge(mv);
        info!("battery: {} mV, {}%", mv, soc);

        state::set_battery_soc(soc);
        events.publish_immediate(StatusEvent::BatteryLevel {
            state_of_charge: soc,
        });

        Timer::after(SAMPLE_PERIOD).await;
    }
}

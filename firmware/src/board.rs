use assign_resources::assign_resources;

use embassy_nrf::{bind_interrupts, peripherals, saadc};

bind_interrupts!(pub struct Irqs {
    SAADC => saadc::InterruptHandler;
});

assign_resources! {
    led: LedResources {
        led: P0_17
    },
    battery: BatteryResources {
        adc: SAADC
    },
    buttons: ButtonResources {
        layer_switch: P0_13
    }
}

use core::panic::PanicInfo;

use cortex_m::peripheral::SCB;

#[inline(never)]
#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    SCB::sys_reset();
}

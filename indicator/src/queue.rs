//! Bounded blink work queue.
//!
//! Decouples event handlers (which must never block) from the renderer
//! (which owns all timing). Backpressure is drop-newest: an enqueue against
//! a full queue is discarded, so a burst of events costs at most
//! `QUEUE_DEPTH` pending cycles of indicator lag.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::blink::BlinkRequest;
use crate::config::QUEUE_DEPTH;

pub struct BlinkQueue {
    channel: Channel<CriticalSectionRawMutex, BlinkRequest, QUEUE_DEPTH>,
}

impl BlinkQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Non-blocking enqueue. Returns whether the request was accepted;
    /// callers must not retry on `false` and must not treat it as fatal.
    pub fn enqueue(&self, blink: BlinkRequest) -> bool {
        self.channel.try_send(blink).is_ok()
    }

    /// Blocking dequeue, renderer only. FIFO in enqueue-completion order
    /// across all producers.
    pub async fn next(&self) -> BlinkRequest {
        self.channel.receive().await
    }

    #[cfg(test)]
    fn try_next(&self) -> Option<BlinkRequest> {
        self.channel.try_receive().ok()
    }
}

impl Default for BlinkQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::BlinkRate;

    fn request(sleep_ms: u16) -> BlinkRequest {
        BlinkRequest {
            rate: BlinkRate::Fast,
            sleep_ms,
            ..Default::default()
        }
    }

    #[test]
    fn overflow_drops_newest_without_growing() {
        let queue = BlinkQueue::new();

        for i in 0..QUEUE_DEPTH {
            assert!(queue.enqueue(request(i as u16)));
        }

        // queue is full, further enqueues lose
        assert!(!queue.enqueue(request(999)));
        assert!(!queue.enqueue(request(1000)));

        // exactly the accepted items come out, in order
        for i in 0..QUEUE_DEPTH {
            assert_eq!(queue.try_next().unwrap().sleep_ms, i as u16);
        }
        assert!(queue.try_next().is_none());
    }

    #[test]
    fn accepts_again_after_drain() {
        let queue = BlinkQueue::new();

        for _ in 0..QUEUE_DEPTH {
            assert!(queue.enqueue(request(0)));
        }
        assert!(!queue.enqueue(request(0)));

        queue.try_next().unwrap();
        assert!(queue.enqueue(request(7)));

        // the slot freed by the dequeue went to the newest item, at the back
        let mut last = None;
        while let Some(blink) = queue.try_next() {
            last = Some(blink);
        }
        assert_eq!(last.unwrap().sleep_ms, 7);
    }
}

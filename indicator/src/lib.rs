//! Status LED blink widget, hardware-independent part.
//!
//! Translates device-state conditions (link status, battery level, active
//! layer) into blink requests, queues them through a bounded MPSC channel
//! and renders them one at a time onto a single on/off LED. The firmware
//! crate owns the tasks and the GPIO; everything in here is plain logic
//! that also builds and tests on the host.

#![no_std]

pub mod blink;
pub mod config;
pub mod events;
pub mod policy;
pub mod queue;
pub mod ready;
pub mod render;

pub use blink::{BlinkRate, BlinkRequest};
pub use config::Capabilities;
pub use events::StatusEvent;
pub use policy::LinkState;
pub use queue::BlinkQueue;
pub use ready::ReadyGate;

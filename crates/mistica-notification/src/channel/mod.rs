//! Push channel implementations.

pub mod broadcast;
pub mod noop;

pub use broadcast::BroadcastPushChannel;
pub use noop::NoopPushChannel;

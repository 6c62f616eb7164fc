//! Notification fan-out: audience rules and the delivery service.

pub mod fanout;
pub mod rules;

pub use fanout::Notifier;
pub use rules::{broadcast_audience, interaction_target};

//! Reply protocol
//!
//! Defines how the result of one command is rendered as an output line.
//! It is completely independent from other modules (loose coupling).

mod reply;

pub use reply::{Reply, ERROR_PREFIX};

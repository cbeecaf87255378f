//! Real-time channel from the antenna reader (SignalR hub over WebSocket).

pub mod connection;
pub mod protocol;

pub use connection::{connect, PushHandle};

//! Async discovery client for INPLUG smart plugs and power strips.
//!
//! One discovery round is a single value-to-value transform plus one bounded
//! I/O loop: encode a probe from the current UTC time and the socket's bound
//! address, broadcast it once, then collect and validate replies until the
//! response window closes.

#![allow(async_fn_in_trait)]

pub mod client;
pub mod discovery;
pub mod error;
pub mod link;

pub use client::{DiscoveryClient, RESPONSE_WINDOW};
pub use discovery::DiscoveredSwitch;
pub use error::ClientError;
pub use link::{broadcast_target, DatagramLink, LinkError, UdpLink, DISCOVERY_PORT};

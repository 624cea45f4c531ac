//! INPLUG discovery wire protocol in pure Rust.
//!
//! `inplug-core` provides zero-copy, `no_std`-compatible encoding of the
//! 48-byte discovery probe and decoding of the 128-byte reply that INPLUG
//! smart plugs and power strips exchange over UDP broadcast. It carries no
//! I/O; the `inplug-client` crate drives a discovery round on top of it.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`alloc`** (default) — enables the reply decoder (device names allocate).
//! - **`serde`** — derives `Serialize`/`Deserialize` on public types.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Bounds-checked reader/writer over fixed-size datagram buffers.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// Plain data types shared by the probe and reply codecs.
pub mod types;
/// Probe and reply codecs for the discovery datagrams.
pub mod wire;

pub use error::{DecodeError, EncodeError};

use crate::link::LinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("link error: {0}")]
    Link(#[from] LinkError),
    #[error("encode error: {0}")]
    Encode(#[from] inplug_core::EncodeError),
    #[error("decode error: {0}")]
    Decode(#[from] inplug_core::DecodeError),
    /// A reply's first 32 bytes did not echo the probe. Either a foreign
    /// responder or a parsing misalignment; the round is aborted rather
    /// than accepting a desynced stream.
    #[error("reply did not echo the probe header")]
    EchoMismatch,
}

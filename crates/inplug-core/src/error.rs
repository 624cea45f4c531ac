use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    BufferTooSmall,
    /// The source address does not reduce to four bytes (not IPv4).
    InvalidAddress,
    /// The encoded probe did not come out at its fixed length.
    InvalidLength,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => f.write_str("buffer too small"),
            Self::InvalidAddress => f.write_str("source address must be IPv4"),
            Self::InvalidLength => f.write_str("encoded probe has wrong length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    UnexpectedEof,
    /// The reply datagram is not exactly the fixed reply length.
    InvalidLength,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => f.write_str("unexpected end of input"),
            Self::InvalidLength => f.write_str("reply datagram has wrong length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

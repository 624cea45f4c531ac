use crate::encoding::reader::Reader;
use crate::types::MacAddr;
use crate::DecodeError;
use alloc::string::String;
use core::net::Ipv4Addr;

/// Exact size of a discovery reply datagram.
pub const REPLY_LEN: usize = 128;

/// Length of the request echo at the head of every reply.
pub const ECHO_LEN: usize = 32;

/// One switch's answer to a discovery probe.
///
/// Decoding does not validate the echo against the originating probe; the
/// decoder never sees the probe bytes. Callers compare [`echo`] (or the raw
/// datagram head) against what they sent. See `inplug-client`.
///
/// [`echo`]: DiscoveryReply::echo
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveryReply {
    /// Verbatim copy of the first 32 bytes of the probe being answered.
    pub echo: [u8; ECHO_LEN],
    /// Undecoded 4-byte block at offset 32. Passed through as-is.
    pub opaque_a: [u8; 4],
    /// Undecoded 18-byte block at offset 36. Passed through as-is.
    pub opaque_b: [u8; 18],
    /// The switch's IPv4 address.
    pub ip: Ipv4Addr,
    /// The switch's hardware address.
    pub mac: MacAddr,
    /// Human-readable switch name.
    pub name: String,
}

impl DiscoveryReply {
    /// Decodes a reply datagram, which must be exactly [`REPLY_LEN`] bytes.
    ///
    /// The IP and MAC fields sit on the wire in reverse byte order relative
    /// to their natural representation. That is a quirk of the device
    /// firmware, not an artifact to correct on either side of this call.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() != REPLY_LEN {
            return Err(DecodeError::InvalidLength);
        }
        let mut r = Reader::new(data);

        let echo = r.read_array::<ECHO_LEN>()?;
        let opaque_a = r.read_array::<4>()?;
        let opaque_b = r.read_array::<18>()?;
        let ip = Ipv4Addr::from(r.read_array_reversed::<4>()?);
        let mac = MacAddr::new(r.read_array_reversed::<6>()?);

        // The remaining 64 bytes hold the name, padded with zeros.
        let raw = r.read_rest();
        let trimmed = &raw[..raw.len() - raw.iter().rev().take_while(|b| **b == 0).count()];
        let name = String::from_utf8_lossy(trimmed).into_owned();

        Ok(Self {
            echo,
            opaque_a,
            opaque_b,
            ip,
            mac,
            name,
        })
    }
}

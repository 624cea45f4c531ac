use crate::encoding::writer::Writer;
use crate::types::WireTimestamp;
use crate::EncodeError;
use core::net::IpAddr;

/// Exact size of an encoded discovery probe.
pub const PROBE_LEN: usize = 48;

/// Format-version marker at offset 8 of every probe.
pub const FORMAT_MARKER: u8 = 0x0A;

/// Constant following the clock fields at offset 17.
///
/// Purpose unknown; observed as 4 or 5 on real devices. Kept verbatim.
pub const CLOCK_SUFFIX: u8 = 0x04;

/// Default firmware magic at offset 32.
///
/// Firmware-revision dependent. 0x6C worked on early units; current ones
/// want 0x8C. 0x7B, 0x7C, 0x8E and 0x91 have also been seen to work.
pub const DEFAULT_FIRMWARE_MAGIC: u8 = 0x8C;

/// Fixed trailing block at offsets 33..48. Uninterpreted.
pub const PROBE_TRAILER: [u8; 15] = [
    0xC1, 0x00, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// A broadcast probe asking every switch on the subnet to report itself.
///
/// Devices echo the first 32 probe bytes back at the head of their reply,
/// so the encoded form must be retained by the sender for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryRequest {
    /// Time the request is made, in UTC.
    pub timestamp: WireTimestamp,
    /// Return address the devices reply to; must be IPv4.
    pub source: IpAddr,
    pub source_port: u16,
    /// Offset-32 magic, firmware dependent. See [`DEFAULT_FIRMWARE_MAGIC`].
    pub firmware_magic: u8,
}

impl DiscoveryRequest {
    pub const fn new(timestamp: WireTimestamp, source: IpAddr, source_port: u16) -> Self {
        Self {
            timestamp,
            source,
            source_port,
            firmware_magic: DEFAULT_FIRMWARE_MAGIC,
        }
    }

    /// The source address as four bytes, accepting IPv4-mapped IPv6.
    fn source_octets(&self) -> Result<[u8; 4], EncodeError> {
        match self.source {
            IpAddr::V4(v4) => Ok(v4.octets()),
            IpAddr::V6(v6) => v6
                .to_ipv4_mapped()
                .map(|v4| v4.octets())
                .ok_or(EncodeError::InvalidAddress),
        }
    }

    /// Encodes the probe into `w`. Writes exactly [`PROBE_LEN`] bytes.
    ///
    /// Multi-byte fields are little-endian. The source address goes out in
    /// natural byte order, unlike the reversed fields in the reply.
    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        let start = w.position();
        let source = self.source_octets()?;

        w.write_zeros(8)?;
        w.write_all(&[FORMAT_MARKER, 0, 0, 0])?;
        w.write_le_u16(self.timestamp.year)?;
        w.write_u8(self.timestamp.second)?;
        w.write_u8(self.timestamp.minute)?;
        w.write_u8(self.timestamp.hour)?;
        w.write_u8(CLOCK_SUFFIX)?;
        w.write_u8(self.timestamp.day)?;
        w.write_u8(self.timestamp.month)?;
        w.write_zeros(4)?;
        w.write_all(&source)?;
        w.write_le_u16(self.source_port)?;
        w.write_zeros(2)?;
        w.write_u8(self.firmware_magic)?;
        w.write_all(&PROBE_TRAILER)?;

        // Unreachable with the fixed layout above, but the devices silently
        // ignore malformed probes, so a miscount must not leave this crate.
        if w.position() - start != PROBE_LEN {
            return Err(EncodeError::InvalidLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DiscoveryRequest, CLOCK_SUFFIX, FORMAT_MARKER, PROBE_LEN};
    use crate::encoding::writer::Writer;
    use crate::types::WireTimestamp;
    use crate::EncodeError;
    use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use proptest::prelude::*;

    fn sample_timestamp() -> WireTimestamp {
        WireTimestamp {
            year: 2017,
            month: 5,
            day: 4,
            hour: 18,
            minute: 46,
            second: 51,
        }
    }

    #[test]
    fn probe_layout_matches_capture() {
        let req = DiscoveryRequest::new(
            sample_timestamp(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50)),
            5000,
        );
        let mut buf = [0u8; PROBE_LEN];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w).unwrap();
        assert_eq!(w.position(), PROBE_LEN);

        assert_eq!(&buf[..8], &[0u8; 8]);
        assert_eq!(&buf[8..12], &[0x0A, 0x00, 0x00, 0x00]);
        // year 2017 LE, then second/minute/hour, clock suffix, day/month
        assert_eq!(&buf[12..20], &[0xE1, 0x07, 51, 46, 18, CLOCK_SUFFIX, 4, 5]);
        assert_eq!(&buf[20..24], &[0u8; 4]);
        // source address natural order, port LE
        assert_eq!(&buf[24..30], &[192, 168, 1, 50, 0x88, 0x13]);
        assert_eq!(&buf[30..32], &[0, 0]);
        assert_eq!(buf[32], 0x8C);
        assert_eq!(buf[33], 0xC1);
        assert_eq!(buf[38], 0x06);
        assert_eq!(&buf[39..48], &[0u8; 9]);
    }

    #[test]
    fn ipv6_source_is_rejected() {
        let req = DiscoveryRequest::new(
            sample_timestamp(),
            IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)),
            5000,
        );
        let mut buf = [0u8; PROBE_LEN];
        let mut w = Writer::new(&mut buf);
        assert_eq!(req.encode(&mut w).unwrap_err(), EncodeError::InvalidAddress);
        assert_eq!(w.position(), 0);
    }

    #[test]
    fn ipv4_mapped_source_encodes_embedded_address() {
        let req = DiscoveryRequest::new(
            sample_timestamp(),
            IpAddr::V6(Ipv4Addr::new(10, 0, 0, 7).to_ipv6_mapped()),
            80,
        );
        let mut buf = [0u8; PROBE_LEN];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w).unwrap();
        assert_eq!(&buf[24..28], &[10, 0, 0, 7]);
    }

    #[test]
    fn firmware_magic_is_configurable() {
        let mut req = DiscoveryRequest::new(
            sample_timestamp(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50)),
            5000,
        );
        req.firmware_magic = 0x6C;
        let mut buf = [0u8; PROBE_LEN];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w).unwrap();
        assert_eq!(buf[32], 0x6C);
    }

    proptest! {
        #[test]
        fn probe_is_always_48_bytes_with_format_marker(
            year in 0u16..=9999,
            month in 1u8..=12,
            day in 1u8..=31,
            hour in 0u8..=23,
            minute in 0u8..=59,
            second in 0u8..=59,
            ip in any::<[u8; 4]>(),
            port in any::<u16>(),
        ) {
            let req = DiscoveryRequest::new(
                WireTimestamp { year, month, day, hour, minute, second },
                IpAddr::V4(Ipv4Addr::from(ip)),
                port,
            );
            let mut buf = [0u8; 64];
            let mut w = Writer::new(&mut buf);
            req.encode(&mut w).unwrap();
            prop_assert_eq!(w.position(), PROBE_LEN);
            prop_assert_eq!(w.as_written()[8], FORMAT_MARKER);
        }
    }
}

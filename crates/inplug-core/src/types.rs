use core::fmt;

/// Civil UTC date and time, to the second, as carried in the probe.
///
/// The codec has no clock; callers capture wall-clock time (the client
/// uses `chrono::Utc::now()`) and hand the broken-down fields over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireTimestamp {
    pub year: u16,
    /// 1-based month.
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// A 6-byte hardware address, in natural (transmission) byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::MacAddr;
    use alloc::format;

    #[test]
    fn mac_displays_colon_hex() {
        let mac = MacAddr::new([0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
        assert_eq!(format!("{mac}"), "66:55:44:33:22:11");
    }
}

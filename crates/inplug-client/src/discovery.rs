use inplug_core::wire::reply::DiscoveryReply;
use std::net::SocketAddr;

/// One switch found during a discovery round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveredSwitch {
    /// Where the reply datagram came from.
    pub source: SocketAddr,
    /// The decoded reply, including the opaque pass-through blocks.
    pub reply: DiscoveryReply,
}

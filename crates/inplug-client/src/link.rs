use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use tokio::net::UdpSocket;

/// UDP port INPLUG switches listen on for discovery probes.
pub const DISCOVERY_PORT: u16 = 80;

/// The limited-broadcast target a probe is sent to.
pub fn broadcast_target(port: u16) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::BROADCAST), port)
}

/// Errors that can occur at the datagram transport.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Async trait over the transport a discovery round needs: a bindable,
/// broadcast-capable datagram socket.
///
/// [`UdpLink`] is the real implementation; tests substitute their own.
pub trait DatagramLink: Send + Sync {
    /// The bound local address, encoded into the probe as the return address.
    fn local_addr(&self) -> Result<SocketAddr, LinkError>;

    /// Sends one datagram to `target`.
    async fn send(&self, target: SocketAddr, payload: &[u8]) -> Result<(), LinkError>;

    /// Receives one datagram into `buf`, returning `(bytes_read, source)`.
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), LinkError>;
}

/// Tokio UDP socket on an ephemeral IPv4 port with `SO_BROADCAST` set.
///
/// Devices reply unicast to the port the probe went out on, so the same
/// socket serves both directions of the round.
#[derive(Debug)]
pub struct UdpLink {
    socket: UdpSocket,
}

impl UdpLink {
    pub async fn bind() -> Result<Self, LinkError> {
        let bind_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0);
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.set_broadcast(true)?;
        Ok(Self { socket })
    }
}

impl DatagramLink for UdpLink {
    fn local_addr(&self) -> Result<SocketAddr, LinkError> {
        self.socket.local_addr().map_err(LinkError::Io)
    }

    async fn send(&self, target: SocketAddr, payload: &[u8]) -> Result<(), LinkError> {
        self.socket.send_to(payload, target).await?;
        Ok(())
    }

    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), LinkError> {
        let (n, src) = self.socket.recv_from(buf).await?;
        Ok((n, src))
    }
}

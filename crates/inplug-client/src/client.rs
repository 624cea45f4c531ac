use crate::discovery::DiscoveredSwitch;
use crate::error::ClientError;
use crate::link::{broadcast_target, DatagramLink, UdpLink, DISCOVERY_PORT};
use chrono::{Datelike, Timelike, Utc};
use inplug_core::encoding::writer::Writer;
use inplug_core::types::WireTimestamp;
use inplug_core::wire::probe::{DiscoveryRequest, DEFAULT_FIRMWARE_MAGIC, PROBE_LEN};
use inplug_core::wire::reply::{DiscoveryReply, ECHO_LEN, REPLY_LEN};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::timeout;

/// How long replies are collected after the probe goes out.
///
/// A protocol-level constant; switches that have not answered within two
/// seconds will not answer at all.
pub const RESPONSE_WINDOW: Duration = Duration::from_secs(2);

/// Drives one discovery round over a [`DatagramLink`].
///
/// States run Idle → Sending → Collecting → Done; [`discover`] walks the
/// whole chain and the link is dropped with the client on every exit path.
///
/// [`discover`]: DiscoveryClient::discover
#[derive(Debug)]
pub struct DiscoveryClient<L: DatagramLink> {
    link: L,
    target: SocketAddr,
    response_window: Duration,
    firmware_magic: u8,
}

impl DiscoveryClient<UdpLink> {
    /// Binds an ephemeral broadcast-capable UDP socket.
    pub async fn new() -> Result<Self, ClientError> {
        Ok(Self::with_link(UdpLink::bind().await?))
    }
}

impl<L: DatagramLink> DiscoveryClient<L> {
    pub fn with_link(link: L) -> Self {
        Self {
            link,
            target: broadcast_target(DISCOVERY_PORT),
            response_window: RESPONSE_WINDOW,
            firmware_magic: DEFAULT_FIRMWARE_MAGIC,
        }
    }

    /// Overrides the probe destination (default `255.255.255.255:80`).
    pub fn target(mut self, target: SocketAddr) -> Self {
        self.target = target;
        self
    }

    /// Overrides the collection window (default [`RESPONSE_WINDOW`]).
    pub fn response_window(mut self, window: Duration) -> Self {
        self.response_window = window;
        self
    }

    /// Overrides the offset-32 firmware magic (default `0x8C`).
    pub fn firmware_magic(mut self, magic: u8) -> Self {
        self.firmware_magic = magic;
        self
    }

    /// Runs one discovery round: send the probe, then collect replies until
    /// the response window closes.
    ///
    /// Replies come back in arrival order, undeduplicated. A reply that is
    /// not exactly 128 bytes or does not echo the probe header aborts the
    /// round; an elapsed window is the normal termination, not an error.
    pub async fn discover(&self) -> Result<Vec<DiscoveredSwitch>, ClientError> {
        let local = self.link.local_addr()?;
        let mut request = DiscoveryRequest::new(wire_now(), local.ip(), local.port());
        request.firmware_magic = self.firmware_magic;

        let mut probe = [0u8; PROBE_LEN];
        let mut w = Writer::new(&mut probe);
        request.encode(&mut w)?;

        log::debug!("probing {} from {local}", self.target);
        self.link.send(self.target, &probe).await?;

        let deadline = tokio::time::Instant::now() + self.response_window;
        let mut found = Vec::new();
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }
            let mut rx = [0u8; REPLY_LEN + 1];
            match timeout(remaining, self.link.recv(&mut rx)).await {
                Ok(Ok((n, src))) => {
                    let reply = DiscoveryReply::decode(&rx[..n])?;
                    if reply.echo != probe[..ECHO_LEN] {
                        log::warn!("reply from {src} does not echo the probe header");
                        return Err(ClientError::EchoMismatch);
                    }
                    log::info!("found {:?} at {} ({})", reply.name, reply.ip, reply.mac);
                    found.push(DiscoveredSwitch { source: src, reply });
                }
                Ok(Err(e)) => return Err(e.into()),
                // Window elapsed; the round is done.
                Err(_) => break,
            }
        }

        log::debug!("round complete, {} replies", found.len());
        Ok(found)
    }
}

fn wire_now() -> WireTimestamp {
    let now = Utc::now();
    WireTimestamp {
        year: now.year() as u16,
        month: now.month() as u8,
        day: now.day() as u8,
        hour: now.hour() as u8,
        minute: now.minute() as u8,
        second: now.second() as u8,
    }
}

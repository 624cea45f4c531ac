pub mod probe;
#[cfg(feature = "alloc")]
pub mod reply;

pub use probe::DiscoveryRequest;
#[cfg(feature = "alloc")]
pub use reply::DiscoveryReply;

use clap::Parser;
use inplug_client::{DiscoveryClient, DISCOVERY_PORT};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "inplug-discover")]
struct Args {
    /// Seconds to wait for replies after the probe is sent.
    #[arg(long, default_value_t = 2)]
    timeout_secs: u64,
    #[arg(long, default_value_t = DISCOVERY_PORT)]
    port: u16,
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::BROADCAST))]
    broadcast: IpAddr,
    /// Offset-32 firmware magic, in hex. Try 6C if nothing answers.
    #[arg(long, default_value = "8C", value_parser = parse_magic)]
    magic: u8,
    #[arg(long)]
    json: bool,
}

fn parse_magic(s: &str) -> Result<u8, String> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u8::from_str_radix(s, 16).map_err(|e| format!("invalid magic byte: {e}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let client = DiscoveryClient::new()
        .await?
        .target(SocketAddr::new(args.broadcast, args.port))
        .response_window(Duration::from_secs(args.timeout_secs))
        .firmware_magic(args.magic);

    let switches = client.discover().await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&switches)?);
    } else {
        for (i, s) in switches.iter().enumerate() {
            println!(
                "{i}: {} ({}, {}) via {}",
                s.reply.name, s.reply.ip, s.reply.mac, s.source
            );
        }
        println!("{} switch(es) found", switches.len());
    }
    Ok(())
}

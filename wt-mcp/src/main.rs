use anyhow::Result;
use std::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wt_core::config::ServerConfig;

mod args;
mod server;
mod tools;
mod transport;

use server::Server;
use transport::{Incoming, Transport};

// stdout carries the protocol, so logs must go to stderr.
fn init_tracing() {
    let filter = std::env::var("WT_LOG")
        .ok()
        .and_then(|s| EnvFilter::try_new(s).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let config = ServerConfig::from_env();
    info!(prefix = %config.tool_prefix, base_dir = ?config.base_dir, "starting {}", server::SERVER_NAME);
    let server = Server::new(config);

    let stdin = std::io::stdin();
    let mut transport = Transport::new(BufReader::new(stdin.lock()), std::io::stdout());
    while let Some(incoming) = transport.read_message()? {
        match incoming {
            Incoming::Skip => {}
            Incoming::Malformed(e) => transport.write_message(&server::parse_error(&e))?,
            Incoming::Message(msg) => {
                if let Some(resp) = server.handle(msg) {
                    transport.write_message(&resp)?;
                }
            }
        }
    }
    info!(framing = ?transport.mode(), "stdin closed, exiting");
    Ok(())
}

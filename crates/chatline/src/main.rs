//! Main entry point for Chatline.
//!
//! Reads console commands from stdin and writes every outbound chat packet
//! to stdout as one JSON object per line:
//!
//! ```text
//! join <name> [locale]
//! quit <name>
//! cmd <name> <command line>
//! stop
//! ```

use anyhow::Context;
use chatline::{ChatPacket, ChatServer};
use chatline_common::init_default_logging;
use chatline_config::ConfigLoader;
use chatline_i18n::locale::DEFAULT_LOCALE_CODE;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    init_default_logging()?;

    info!("Starting Chatline");

    let config = ConfigLoader::load().context("failed to load configuration")?;
    let mut server = ChatServer::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read console input")?;
        let mut words = line.split_whitespace();

        let result = match (words.next(), words.next()) {
            (Some("join"), Some(name)) => {
                server.join(name, words.next().unwrap_or(DEFAULT_LOCALE_CODE))
            }
            (Some("quit"), Some(name)) => server.quit(name),
            (Some("cmd"), Some(name)) => {
                let rest: Vec<&str> = words.collect();
                server.command(name, &rest.join(" "))
            }
            (Some("stop"), _) => break,
            (None, _) => continue,
            (Some(other), _) => {
                warn!("Unknown console input: {other}");
                continue;
            }
        };

        if let Err(e) = result {
            error!("{e}");
        }
        write_packets(&mut stdout, server.drain())?;
    }

    write_packets(&mut stdout, server.shutdown())?;
    info!("Chatline stopped");
    Ok(())
}

fn write_packets(out: &mut impl Write, packets: Vec<(String, ChatPacket)>) -> anyhow::Result<()> {
    for (player, packet) in packets {
        let mut json = packet.to_json()?;
        json["player"] = serde_json::Value::String(player);
        writeln!(out, "{json}")?;
    }
    out.flush()?;
    Ok(())
}

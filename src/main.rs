//! Contact Book - Main entry point
//!
//! Runs the assistant as a read-eval-print loop on stdin/stdout. Logs go to
//! stderr so they never interleave with the conversation.

use anyhow::Result;
use contact_book::assistant::messages;
use contact_book::config::DEFAULT_LOG_FILTER;
use contact_book::{Assistant, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("CONTACT_BOOK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let prompt = config.prompt.clone();
    let mut assistant = Assistant::new(config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    info!("Assistant session started");
    writeln!(stdout, "{}", messages::GREETING)?;

    loop {
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // EOF behaves like `exit`
            writeln!(stdout)?;
            writeln!(stdout, "{}", messages::GOODBYE)?;
            break;
        };
        let line = line?;

        let ask = |question: &str| -> io::Result<String> {
            let mut out = io::stdout();
            write!(out, "{}", question)?;
            out.flush()?;
            lines.next().unwrap_or_else(|| {
                Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for an answer",
                ))
            })
        };

        let Some(reply) = assistant.handle(&line, ask) else {
            continue;
        };

        writeln!(stdout, "{}", reply.text)?;
        if reply.exit {
            break;
        }
    }

    info!("Assistant session finished");
    Ok(())
}

use std::io;

use anyhow::Result;
use tracing::info;

use regent_host::Host;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("regent starting");
    Host::new().run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

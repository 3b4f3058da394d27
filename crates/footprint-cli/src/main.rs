//! footprint - public exposure checker
//!
//! Shows what anyone can learn about an IP address or a username.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    footprint_cli::run().await
}

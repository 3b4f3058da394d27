//! `footprint <ip>` - Network class and reverse DNS for an address.

use anyhow::Result;
use footprint::recon::{classify_network, reverse_lookup, DnsResolver};
use footprint::IpExposure;
use std::io;
use tracing::debug;

use super::Context;
use crate::education::Explain;
use crate::output;

pub async fn execute(ctx: &Context, ip: &str) -> Result<()> {
    if ctx.explain {
        Explain::ip(ip).print();
    }

    let spinner = output::spinner("Looking up reverse DNS...");

    let records = match DnsResolver::new() {
        Ok(resolver) => reverse_lookup(&resolver, ip).await,
        Err(e) => {
            debug!(error = %e, "system resolver unavailable");
            Vec::new()
        }
    };

    spinner.finish_and_clear();

    let exposure = IpExposure::assess(ip, classify_network(ip), records);
    output::write_ip_exposure(&mut io::stdout().lock(), &exposure)?;

    Ok(())
}

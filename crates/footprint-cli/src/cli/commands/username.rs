//! `footprint <username>` - Which public platforms know this username.

use anyhow::Result;
use footprint::{HttpTransport, PlatformProber, UsernameExposure};
use std::io;

use super::Context;
use crate::education::Explain;
use crate::output;

pub async fn execute(ctx: &Context, username: &str) -> Result<()> {
    let transport = HttpTransport::from_config(&ctx.probe)?;
    let prober = PlatformProber::new(transport).with_config(ctx.probe.clone());

    if ctx.explain {
        Explain::username(username, prober.platforms()).print();
    }

    let spinner = output::spinner(&format!(
        "Checking {} platforms for {username}...",
        prober.platforms().len()
    ));

    let report = prober.probe(username).await;

    spinner.finish_and_clear();

    let exposure = UsernameExposure::assess(report.found());

    let mut out = io::stdout().lock();
    output::write_username_exposure(&mut out, &exposure)?;

    if ctx.details {
        output::write_probe_details(&mut out, &report)?;
    }

    Ok(())
}

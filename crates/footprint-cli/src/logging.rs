//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

const QUIET: &str = "warn";
const VERBOSE: &str = "warn,footprint_cli=debug,footprint_client=debug,footprint_recon=debug";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::new(if verbose { VERBOSE } else { QUIET });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

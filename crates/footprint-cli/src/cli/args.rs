//! Command-line argument definitions using clap.

use clap::Parser;
use footprint::DEFAULT_MAX_CONCURRENT;

/// Upper bound accepted for `--concurrency`
pub const MAX_CONCURRENCY: usize = 64;

/// See what anyone can learn about an IP address or a username
///
/// Only public data is used: reverse DNS for addresses, public profile
/// pages for usernames.
#[derive(Parser, Debug)]
#[command(name = "footprint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// IP address or username to check
    pub input: Option<String>,

    /// Explain what each check does (educational mode)
    #[arg(long)]
    pub explain: bool,

    /// Show the outcome for every probed platform
    #[arg(long)]
    pub details: bool,

    /// Maximum profile probes in flight
    #[arg(short, long, default_value_t = DEFAULT_MAX_CONCURRENT, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;

    if (1..=MAX_CONCURRENCY).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_CONCURRENCY}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrency_defaults_to_one_per_platform() {
        let cli = Cli::try_parse_from(["footprint", "alice"]).unwrap();
        assert_eq!(cli.concurrency, DEFAULT_MAX_CONCURRENT);
    }

    #[test]
    fn concurrency_must_be_in_range() {
        assert!(Cli::try_parse_from(["footprint", "-c", "0", "alice"]).is_err());
        assert!(Cli::try_parse_from(["footprint", "-c", "65", "alice"]).is_err());
        assert!(Cli::try_parse_from(["footprint", "-c", "18446744073709551615", "alice"]).is_err());

        let cli = Cli::try_parse_from(["footprint", "-c", "64", "alice"]).unwrap();
        assert_eq!(cli.concurrency, 64);
    }
}

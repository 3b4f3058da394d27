//! Exposure report rendering.
//!
//! Every writer takes `impl Write` so reports can be captured in tests;
//! the commands pass a locked stdout.

use colored::{ColoredString, Colorize};
use footprint::{ExposureLevel, ExposureWarning, IpExposure, ProbeReport, UsernameExposure};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ProbeRow {
    #[tabled(rename = "Platform")]
    platform: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "URL")]
    url: String,
}

/// Spinner on stderr; hidden when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn colored_level(level: ExposureLevel) -> ColoredString {
    let text = level.to_string();
    match level {
        ExposureLevel::Low => text.green(),
        ExposureLevel::Moderate => text.yellow(),
        ExposureLevel::High => text.red().bold(),
    }
}

fn write_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("[ {title} ]").bold().cyan())
}

fn write_warnings<W: Write>(out: &mut W, warnings: &[ExposureWarning]) -> io::Result<()> {
    for line in warnings.iter().flat_map(|w| w.lines()) {
        writeln!(out, "{} {}", "-".yellow(), line)?;
    }
    Ok(())
}

/// Username section: platform count, names, level and warnings.
pub fn write_username_exposure<W: Write>(out: &mut W, exposure: &UsernameExposure) -> io::Result<()> {
    write_section(out, "Username Exposure")?;
    writeln!(out, "Found on {} platform(s)", exposure.count())?;

    for name in &exposure.found {
        writeln!(out, "  {} {}", "+".green(), name)?;
    }

    writeln!(out, "Exposure Level: {}", colored_level(exposure.level))?;
    write_warnings(out, &exposure.warnings)
}

/// IP section: network type, reverse DNS records, level and warnings.
pub fn write_ip_exposure<W: Write>(out: &mut W, exposure: &IpExposure) -> io::Result<()> {
    write_section(out, "IP Exposure")?;
    writeln!(out, "Network Type: {}", exposure.network)?;

    if exposure.records.is_empty() {
        writeln!(out, "No reverse DNS records found.")?;
    } else {
        writeln!(out, "Reverse DNS Records Found:")?;
        for host in &exposure.records {
            writeln!(out, " - {}", host.cyan())?;
        }
    }

    writeln!(out, "Exposure Level: {}", colored_level(exposure.level))?;
    write_warnings(out, &exposure.warnings)
}

/// Per-platform probe outcomes as a table.
pub fn write_probe_details<W: Write>(out: &mut W, report: &ProbeReport) -> io::Result<()> {
    let rows: Vec<ProbeRow> = report
        .probes
        .iter()
        .map(|p| ProbeRow {
            platform: p.platform.clone(),
            result: p.status.to_string(),
            url: p.url.clone(),
        })
        .collect();

    writeln!(out)?;
    writeln!(out, "{}", "Probe Details:".bold().underline())?;
    writeln!(out, "{}", Table::new(&rows).with(Style::rounded()))?;

    let inconclusive = report.inconclusive_count();
    if inconclusive > 0 {
        writeln!(
            out,
            "{}",
            format!("{inconclusive} platform(s) could not be checked and count as not found.")
                .dimmed()
        )?;
    }

    Ok(())
}

/// Closing notice printed after every report.
pub fn write_awareness_footer<W: Write>(out: &mut W) -> io::Result<()> {
    write_section(out, "Awareness Notice")?;
    writeln!(out, "This information is publicly accessible.")?;
    writeln!(out, "No hacking, login, or private access was used.")?;
    writeln!(out, "It means others can see it too.")
}

//! Educational features: explanations of what each check does.

use colored::Colorize;
use footprint::PlatformSet;
use std::fmt;

/// Command explanation builder.
pub struct Explain {
    description: String,
    what_happens: Vec<String>,
    sources: Vec<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            what_happens: Vec::new(),
            sources: Vec::new(),
        }
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn source(mut self, source: &str) -> Self {
        self.sources.push(source.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    // ========================================================================
    // Factory methods for each check
    // ========================================================================

    pub fn ip(ip: &str) -> Self {
        Self::new(&format!(
            "Shows what the address {ip} reveals to anyone who looks it up."
        ))
        .step("Checks whether the address is in a private or public range")
        .step("Asks the system DNS resolver for reverse DNS (PTR) names")
        .step("Rates how much the names and range give away")
        .source("System DNS resolver")
    }

    pub fn username(username: &str, platforms: &PlatformSet) -> Self {
        let mut explanation = Self::new(&format!(
            "Checks which public platforms have a profile page for {username}."
        ))
        .step("Requests each public profile page at the same time")
        .step("Counts a profile as present only when the page answers 200 OK")
        .step("Treats errors and slow platforms as not found")
        .step("Rates how easy it is to link the profiles together");

        for platform in platforms {
            explanation = explanation.source(&format!(
                "{}: {}",
                platform.name,
                platform.profile_url(username)
            ));
        }

        explanation
    }
}

impl fmt::Display for Explain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=== What This Does ===".bold().cyan())?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if !self.what_happens.is_empty() {
            writeln!(f, "{}", "How it works:".bold())?;
            for (i, step) in self.what_happens.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
            writeln!(f)?;
        }

        if !self.sources.is_empty() {
            writeln!(f, "{}", "Data sources:".bold())?;
            for source in &self.sources {
                writeln!(f, "  - {}", source.dimmed())?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", "=== Results ===".bold().cyan())
    }
}

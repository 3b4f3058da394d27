//! Platform probing.
//!
//! One task per platform, bounded by a semaphore, all racing a single batch
//! deadline. Handles are joined in platform order so the report order never
//! depends on which server answered first.

use crate::config::ProbeConfig;
use crate::error::TransportError;
use crate::transport::Transport;
use footprint_core::{PlatformProbe, PlatformSet, ProbeReport, ProbeStatus};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Checks which platforms have a profile for a username
pub struct PlatformProber<T> {
    transport: Arc<T>,
    platforms: PlatformSet,
    config: ProbeConfig,
}

impl<T: Transport + 'static> PlatformProber<T> {
    /// Create a prober over the built-in platforms with default limits
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            platforms: PlatformSet::default(),
            config: ProbeConfig::default(),
        }
    }

    /// Replace the platform set
    #[must_use]
    pub fn with_platforms(mut self, platforms: PlatformSet) -> Self {
        self.platforms = platforms;
        self
    }

    /// Replace the probe configuration
    #[must_use]
    pub fn with_config(mut self, config: ProbeConfig) -> Self {
        self.config = config;
        self
    }

    /// Platforms this prober checks
    #[must_use]
    pub const fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    /// Probe configuration in use
    #[must_use]
    pub const fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Names of the platforms where `username` exists, in platform order.
    ///
    /// Failed and timed-out probes count as not found.
    pub async fn probe_all(&self, username: &str) -> Vec<String> {
        self.probe(username).await.found()
    }

    /// Probe every platform and return one explicit outcome each
    pub async fn probe(&self, username: &str) -> ProbeReport {
        let deadline = Instant::now() + self.config.batch_deadline;
        let permits = self
            .config
            .max_concurrent
            .clamp(1, self.platforms.len().clamp(1, Semaphore::MAX_PERMITS));
        let semaphore = Arc::new(Semaphore::new(permits));

        let mut pending = Vec::with_capacity(self.platforms.len());

        for platform in &self.platforms {
            let url = platform.profile_url(username);
            let transport = Arc::clone(&self.transport);
            let sem = Arc::clone(&semaphore);
            let task_url = url.clone();

            let handle = tokio::spawn(async move {
                let attempt = async {
                    let _permit = sem
                        .acquire()
                        .await
                        .map_err(|e| TransportError::Request(e.to_string()))?;

                    // A permit freed by a cancelled probe must not start a new request
                    if Instant::now() >= deadline {
                        return Ok(None);
                    }

                    transport.get(&task_url).await.map(Some)
                };

                match timeout_at(deadline, attempt).await {
                    Ok(Ok(Some(response))) if response.is_ok() => ProbeStatus::Found,
                    Ok(Ok(Some(response))) => ProbeStatus::NotFound {
                        status: response.status,
                    },
                    Ok(Err(err)) => ProbeStatus::Failed {
                        reason: err.to_string(),
                    },
                    Ok(Ok(None)) | Err(_) => ProbeStatus::DeadlineExceeded,
                }
            });

            pending.push((platform.name.clone(), url, handle));
        }

        let mut probes = Vec::with_capacity(pending.len());

        for (platform, url, handle) in pending {
            let status = match handle.await {
                Ok(status) => status,
                Err(e) => {
                    warn!(platform = %platform, error = %e, "probe task did not complete");
                    ProbeStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            debug!(platform = %platform, status = %status, "probe finished");
            probes.push(PlatformProbe {
                platform,
                url,
                status,
            });
        }

        ProbeReport {
            username: username.to_string(),
            probes,
        }
    }
}

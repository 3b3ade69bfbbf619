//! # Stale Server Audit
//!
//! Implements the one use case of the tool: pull the running configuration
//! from an appliance and leave an `rm server` script next to the operator.

use std::collections::BTreeSet;
use std::path::PathBuf;

use nsprune_common::address::AddressToken;
use nsprune_common::config::Config;
use nsprune_common::error::SessionError;
use nsprune_common::session::{SessionClient, SessionToken};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{extract, remediation};

/// Fatal failures of a run. None of them leaves an artifact on disk.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("login to {device} failed")]
    Authentication {
        device: String,
        #[source]
        source: SessionError,
    },

    #[error("fetching the running configuration from {device} failed")]
    Fetch {
        device: String,
        #[source]
        source: SessionError,
    },

    #[error("could not write {}", .path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a successful run found and where it left the script.
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub servers: usize,
    pub services: usize,
    pub group_members: usize,
    pub stale: BTreeSet<AddressToken>,
    pub artifact: PathBuf,
}

/// Application service for the stale server audit.
///
/// Login, fetch and logout go through the [`SessionClient`]; everything
/// after the fetch is pure and never touches the network.
pub struct AuditService {
    session: Box<dyn SessionClient>,
}

impl AuditService {
    pub fn new(session: Box<dyn SessionClient>) -> Self {
        Self { session }
    }

    pub async fn run(&self, cfg: &Config) -> Result<AuditReport, RunError> {
        let config_text = self.fetch(cfg).await?;

        let sets = extract::extract(&config_text);
        info!("Found {} IP-named servers", sets.servers.len());
        debug!(
            services = sets.services.len(),
            group_members = sets.group_members.len(),
            "referenced addresses"
        );

        let stale = sets.stale_candidates();
        info!("Found {} potential stale servers", stale.len());

        let artifact = remediation::emit(&stale, &cfg.device);
        let artifact_path = remediation::write_artifact(&artifact, &cfg.output_dir).map_err(
            |source| RunError::Artifact {
                path: cfg.output_dir.join(&artifact.file_name),
                source,
            },
        )?;

        Ok(AuditReport {
            servers: sets.servers.len(),
            services: sets.services.len(),
            group_members: sets.group_members.len(),
            stale,
            artifact: artifact_path,
        })
    }

    /// Login, fetch, then best-effort logout whatever the fetch returned.
    async fn fetch(&self, cfg: &Config) -> Result<String, RunError> {
        let token = self
            .session
            .login(&cfg.credentials)
            .await
            .map_err(|source| RunError::Authentication {
                device: cfg.device.clone(),
                source,
            })?;
        debug!(device = %cfg.device, "session established");

        let fetched = self
            .session
            .fetch_running_config(&token, &cfg.credentials)
            .await
            .map_err(|source| RunError::Fetch {
                device: cfg.device.clone(),
                source,
            });

        if cfg.logout {
            self.logout(&token).await;
        }

        let text = fetched?;
        debug!(bytes = text.len(), "running configuration received");
        Ok(text)
    }

    async fn logout(&self, token: &SessionToken) {
        if let Err(e) = self.session.logout(token).await {
            warn!("Logout failed, the session will expire on its own: {e}");
        }
    }
}

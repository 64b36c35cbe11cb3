// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Harness configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the Kuadrant CR and its workloads live in
    pub namespace: String,
    /// Name of the Kuadrant CR
    pub name: String,
    /// How long readiness waits poll before giving up
    pub wait_timeout: Duration,
    /// Kubeconfig context to use instead of the inferred one
    pub kube_context: Option<String>,
    /// Desired observability state, left untouched when unset
    pub observability: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let namespace = env::var("KUADRANT_NAMESPACE")
            .context("KUADRANT_NAMESPACE environment variable not set")?;
        let name = env::var("KUADRANT_NAME").unwrap_or_else(|_| "kuadrant".to_string());
        let wait_timeout = match env::var("KUADRANT_WAIT_TIMEOUT_SECS") {
            Ok(v) => Duration::from_secs(
                v.parse()
                    .with_context(|| format!("Invalid KUADRANT_WAIT_TIMEOUT_SECS '{}'", v))?,
            ),
            Err(_) => Duration::from_secs(300),
        };
        let kube_context = env::var("KUADRANT_KUBE_CONTEXT").ok();
        let observability = match env::var("KUADRANT_OBSERVABILITY") {
            Ok(v) => Some(
                v.parse()
                    .with_context(|| format!("Invalid KUADRANT_OBSERVABILITY '{}'", v))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            namespace,
            name,
            wait_timeout,
            kube_context,
            observability,
        })
    }
}

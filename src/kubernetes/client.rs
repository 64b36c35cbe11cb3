// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the cluster under test

use crate::config::Config;
use crate::error::{KuadrantError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client, honouring an explicit kubeconfig context if configured
#[instrument(skip(config), fields(context = ?config.kube_context))]
pub async fn connect(config: &Config) -> Result<Client> {
    let kube_config = match &config.kube_context {
        Some(context) => {
            debug!("Using kubeconfig context {}", context);
            let options = KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            };
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                KuadrantError::KubeconfigError(format!(
                    "Failed to load context {}: {}",
                    context, e
                ))
            })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| KuadrantError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    debug!("Connecting to {}", kube_config.cluster_url);

    Client::try_from(kube_config)
        .map_err(|e| KuadrantError::KubeconfigError(format!("Failed to create client: {}", e)))
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::ResourceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kuadrant_harness::config::Config;
use kuadrant_harness::kubernetes::connect;
use kuadrant_harness::KuadrantCr;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: kuadrant={}/{}",
        config.namespace, config.name
    );

    // Create Kubernetes client
    let client = connect(&config).await?;
    info!("Connected to Kubernetes cluster");

    let mut kuadrant = KuadrantCr::get(client, &config.namespace, &config.name)
        .await
        .with_context(|| format!("Failed to load Kuadrant {}/{}", config.namespace, config.name))?;

    if let Some(enabled) = config.observability {
        kuadrant.set_observability(enabled).await?;
    }

    info!("Waiting for Kuadrant to become ready...");
    kuadrant.wait_for_ready(config.wait_timeout).await?;

    let authorino = kuadrant.authorino();
    authorino.wait_for_ready(config.wait_timeout).await?;
    info!("Authorino authorization endpoint: {}", authorino.authorization_url());
    info!("Authorino OIDC endpoint: {}", authorino.oidc_url());
    drop(authorino);

    let limitador = kuadrant.limitador();
    let pod = limitador.pod().await?;
    info!("Limitador pod: {}", pod.name_any());
    drop(limitador);

    println!("{}", serde_yaml::to_string(kuadrant.model())?);

    Ok(())
}

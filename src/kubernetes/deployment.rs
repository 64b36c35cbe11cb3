// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment readiness checks

use crate::error::{KuadrantError, Result};
use crate::kubernetes::selector::{label_selector, Selector};
use crate::kubernetes::wait::poll_until;
use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;
use std::future::Future;
use std::time::Duration;
use tracing::{info, instrument};

/// A deployment is ready once its controller has observed the latest generation
/// and every desired replica reports ready.
pub fn is_ready(deployment: &Deployment) -> bool {
    let desired = deployment
        .spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(1);

    let Some(status) = deployment.status.as_ref() else {
        return false;
    };

    let observed = status.observed_generation.unwrap_or(0)
        >= deployment.metadata.generation.unwrap_or(0);

    observed && status.ready_replicas.unwrap_or(0) >= desired
}

/// Wait until the named deployment is ready, returning its final state
#[instrument(skip(selector), fields(namespace = %selector.namespace()))]
pub async fn wait_for_ready(
    selector: &Selector,
    name: &str,
    timeout: Duration,
) -> Result<Deployment> {
    let what = format!("deployment {}/{}", selector.namespace(), name);
    wait_until_ready(&what, timeout, || selector.named::<Deployment>(name)).await
}

/// Wait until the single deployment matching `labels` exists and is ready.
/// A missing or ambiguous match is retried until the deadline.
#[instrument(skip(selector), fields(namespace = %selector.namespace()))]
pub async fn wait_for_ready_labelled(
    selector: &Selector,
    labels: &[(&str, &str)],
    timeout: Duration,
) -> Result<Deployment> {
    let what = format!(
        "deployment {}/{}",
        selector.namespace(),
        label_selector(labels)
    );
    wait_until_ready(&what, timeout, || selector.labelled::<Deployment>(labels)).await
}

async fn wait_until_ready<F, Fut>(
    what: &str,
    timeout: Duration,
    mut fetch: F,
) -> Result<Deployment>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Deployment>>,
{
    let deployment = poll_until(what, timeout, || {
        let current = fetch();
        async move {
            let deployment = current.await?;
            Ok::<_, KuadrantError>(is_ready(&deployment).then_some(deployment))
        }
    })
    .await?;

    info!("Deployment {} is ready", deployment.name_any());
    Ok(deployment)
}

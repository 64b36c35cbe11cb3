// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace-scoped lookups of cluster objects by name or label

use crate::error::{KuadrantError, Result};
use k8s_openapi::NamespaceResourceScope;
use kube::{api::ListParams, Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Resolves objects inside one namespace. Every call is a fresh API round trip.
#[derive(Clone)]
pub struct Selector {
    client: Client,
    namespace: String,
}

impl Selector {
    pub fn new(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn api<K>(&self) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        <K as Resource>::DynamicType: Default,
    {
        Api::namespaced(self.client.clone(), &self.namespace)
    }

    /// Fetch the object with the given name
    #[instrument(skip(self), fields(namespace = %self.namespace, kind = %kind_of::<K>()))]
    pub async fn named<K>(&self, name: &str) -> Result<K>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        debug!("Fetching {}", name);
        Ok(self.api::<K>().get(name).await?)
    }

    /// List every object matching all of the given labels
    #[instrument(skip(self), fields(namespace = %self.namespace, kind = %kind_of::<K>()))]
    pub async fn list_labelled<K>(&self, labels: &[(&str, &str)]) -> Result<Vec<K>>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        let selector = label_selector(labels);
        debug!("Listing objects matching {}", selector);
        let list = self
            .api::<K>()
            .list(&ListParams::default().labels(&selector))
            .await?;
        Ok(list.items)
    }

    /// Fetch the single object matching all of the given labels
    pub async fn labelled<K>(&self, labels: &[(&str, &str)]) -> Result<K>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        let mut items = self.list_labelled::<K>(labels).await?;
        match items.len() {
            1 => Ok(items.remove(0)),
            0 => Err(KuadrantError::NotFound {
                kind: kind_of::<K>(),
                selector: label_selector(labels),
            }),
            count => Err(KuadrantError::Ambiguous {
                kind: kind_of::<K>(),
                selector: label_selector(labels),
                count,
            }),
        }
    }
}

/// Render labels as a Kubernetes equality-based label selector
pub fn label_selector(labels: &[(&str, &str)]) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

fn kind_of<K>() -> String
where
    K: Resource,
    <K as Resource>::DynamicType: Default,
{
    K::kind(&Default::default()).to_string()
}

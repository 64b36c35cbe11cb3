// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Facade over the Kuadrant custom resource and its Authorino / Limitador sections.

pub mod authorino;
pub mod limitador;
pub mod section;

pub use authorino::AuthorinoSection;
pub use limitador::LimitadorSection;
pub use section::Section;

use crate::constants::MODIFY_MAX_ATTEMPTS;
use crate::error::{KuadrantError, Result};
use crate::kubernetes::{poll_until, Selector};
use crate::types::{Kuadrant, Observability, SectionName};
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, ResourceExt,
};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// A Kuadrant CR together with the client used to read and persist it.
///
/// Local edits (through sections or [`KuadrantCr::model_mut`]) stay in memory
/// until [`KuadrantCr::apply`] is called. [`KuadrantCr::modify`] and
/// [`KuadrantCr::set_observability`] persist immediately.
pub struct KuadrantCr {
    client: Client,
    model: Kuadrant,
}

impl KuadrantCr {
    /// Wrap an in-memory document without talking to the cluster
    pub fn from_model(client: Client, model: Kuadrant) -> Self {
        Self { client, model }
    }

    /// Load the named Kuadrant from the cluster
    #[instrument(skip(client))]
    pub async fn get(client: Client, namespace: &str, name: &str) -> Result<Self> {
        let api: Api<Kuadrant> = Api::namespaced(client.clone(), namespace);
        let model = api.get(name).await?;
        debug!("Loaded Kuadrant {}/{}", namespace, name);
        Ok(Self { client, model })
    }

    pub fn name(&self) -> String {
        self.model.name_any()
    }

    /// Namespace of the CR, falling back to the client's default namespace
    pub fn namespace(&self) -> String {
        self.model
            .namespace()
            .unwrap_or_else(|| self.client.default_namespace().to_string())
    }

    pub fn model(&self) -> &Kuadrant {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Kuadrant {
        &mut self.model
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Object lookups scoped to the CR's namespace
    pub fn selector(&self) -> Selector {
        Selector::new(self.client.clone(), self.namespace())
    }

    fn api(&self) -> Api<Kuadrant> {
        Api::namespaced(self.client.clone(), &self.namespace())
    }

    /// `spec.authorino`, created as an empty map if absent
    pub fn authorino(&mut self) -> AuthorinoSection<'_> {
        AuthorinoSection::new(Section::new(self, SectionName::Authorino))
    }

    /// `spec.limitador`, created as an empty map if absent
    pub fn limitador(&mut self) -> LimitadorSection<'_> {
        LimitadorSection::new(Section::new(self, SectionName::Limitador))
    }

    /// Create the CR in the cluster from the local document
    #[instrument(skip(self), fields(kuadrant = %self.name()))]
    pub async fn create(&mut self) -> Result<()> {
        self.model = self
            .api()
            .create(&PostParams::default(), &self.model)
            .await?;
        info!("Created Kuadrant {}/{}", self.namespace(), self.name());
        Ok(())
    }

    /// Replace the local document with the cluster's current state
    #[instrument(skip(self), fields(kuadrant = %self.name()))]
    pub async fn refresh(&mut self) -> Result<()> {
        self.model = self.api().get(&self.name()).await?;
        Ok(())
    }

    /// Persist local edits. Fails with a conflict if the CR changed since it was read.
    #[instrument(skip(self), fields(kuadrant = %self.name()))]
    pub async fn apply(&mut self) -> Result<()> {
        self.model = self
            .api()
            .replace(&self.name(), &PostParams::default(), &self.model)
            .await?;
        info!("Applied Kuadrant {}/{}", self.namespace(), self.name());
        Ok(())
    }

    /// Read-modify-write: apply `mutate` to the latest cluster state and persist it,
    /// retrying on update conflicts.
    #[instrument(skip(self, mutate), fields(kuadrant = %self.name()))]
    pub async fn modify<F>(&mut self, mut mutate: F) -> Result<()>
    where
        F: FnMut(&mut Kuadrant),
    {
        let api = self.api();
        let name = self.name();

        for attempt in 1..=MODIFY_MAX_ATTEMPTS {
            let mut latest = api.get(&name).await?;
            mutate(&mut latest);

            match api.replace(&name, &PostParams::default(), &latest).await {
                Ok(updated) => {
                    self.model = updated;
                    return Ok(());
                }
                Err(kube::Error::Api(err)) if err.code == 409 => {
                    warn!(
                        "Conflict updating Kuadrant {} (attempt {}/{}), retrying",
                        name, attempt, MODIFY_MAX_ATTEMPTS
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(KuadrantError::Conflict {
            name,
            attempts: MODIFY_MAX_ATTEMPTS,
        })
    }

    /// Enable observability, or remove the setting entirely when disabled
    pub async fn set_observability(&mut self, enabled: bool) -> Result<()> {
        self.modify(|kuadrant| {
            kuadrant.spec.observability = enabled.then_some(Observability { enable: true });
        })
        .await?;
        info!("Observability for Kuadrant {} set to {}", self.name(), enabled);
        Ok(())
    }

    /// Delete the CR from the cluster
    #[instrument(skip(self), fields(kuadrant = %self.name()))]
    pub async fn delete(&self) -> Result<()> {
        self.api()
            .delete(&self.name(), &DeleteParams::default())
            .await?;
        info!("Deleted Kuadrant {}/{}", self.namespace(), self.name());
        Ok(())
    }

    /// Wait until the operator reports the CR as ready, keeping the ready state locally
    #[instrument(skip(self), fields(kuadrant = %self.name()))]
    pub async fn wait_for_ready(&mut self, timeout: Duration) -> Result<()> {
        let api = self.api();
        let name = self.name();
        let what = format!("Kuadrant {}/{}", self.namespace(), name);

        self.model = poll_until(&what, timeout, || async {
            let kuadrant = api.get(&name).await?;
            Ok::<_, KuadrantError>(kuadrant.is_ready().then_some(kuadrant))
        })
        .await?;

        Ok(())
    }
}

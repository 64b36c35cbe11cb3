// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `spec.authorino` of the Kuadrant CR.

use super::Section;
use crate::constants::{labels, CLUSTER_DOMAIN};
use crate::error::Result;
use crate::kubernetes::deployment;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

pub struct AuthorinoSection<'a>(Section<'a>);

impl<'a> AuthorinoSection<'a> {
    pub fn new(section: Section<'a>) -> Self {
        Self(section)
    }

    /// In-cluster hostname of the external authorization service
    pub fn authorization_url(&self) -> String {
        format!(
            "{}-authorino-authorization.{}.{}",
            self.name(),
            self.namespace(),
            CLUSTER_DOMAIN
        )
    }

    /// In-cluster hostname of the OIDC discovery service
    pub fn oidc_url(&self) -> String {
        format!(
            "{}-authorino-oidc.{}.{}",
            self.name(),
            self.namespace(),
            CLUSTER_DOMAIN
        )
    }

    pub fn metrics_service_name(&self) -> String {
        format!("{}-controller-metrics", self.name())
    }

    /// The service exposing Authorino controller metrics
    pub async fn metrics_service(&self) -> Result<Service> {
        self.selector().named(&self.metrics_service_name()).await
    }

    /// Wait until the Authorino deployment exists and every replica is ready
    pub async fn wait_for_ready(&self, timeout: Duration) -> Result<Deployment> {
        deployment::wait_for_ready_labelled(
            &self.selector(),
            &[(labels::APP, self.name())],
            timeout,
        )
        .await
    }
}

impl<'a> Deref for AuthorinoSection<'a> {
    type Target = Section<'a>;

    fn deref(&self) -> &Section<'a> {
        &self.0
    }
}

impl DerefMut for AuthorinoSection<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

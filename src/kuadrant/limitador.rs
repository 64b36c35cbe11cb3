// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `spec.limitador` of the Kuadrant CR.

use super::Section;
use crate::constants::labels;
use crate::error::Result;
use crate::kubernetes::deployment;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Pod;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

pub struct LimitadorSection<'a>(Section<'a>);

impl<'a> LimitadorSection<'a> {
    pub fn new(section: Section<'a>) -> Self {
        Self(section)
    }

    /// The deployment named after the section
    pub async fn deployment(&self) -> Result<Deployment> {
        self.selector().named(self.name()).await
    }

    /// The single pod labelled `app=<name>`
    pub async fn pod(&self) -> Result<Pod> {
        self.selector().labelled(&[(labels::APP, self.name())]).await
    }

    pub async fn wait_for_ready(&self, timeout: Duration) -> Result<Deployment> {
        deployment::wait_for_ready(&self.selector(), self.name(), timeout).await
    }
}

impl<'a> Deref for LimitadorSection<'a> {
    type Target = Section<'a>;

    fn deref(&self) -> &Section<'a> {
        &self.0
    }
}

impl DerefMut for LimitadorSection<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Borrowing view over one sub-tree of the Kuadrant spec.

use super::KuadrantCr;
use crate::constants::labels;
use crate::error::{KuadrantError, Result};
use crate::types::SectionName;
use k8s_openapi::api::apps::v1::Deployment;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Reads and writes `spec.<name>` of the owning CR.
///
/// Dereferences to [`KuadrantCr`], so helpers such as `namespace()`, `selector()`
/// or `apply()` are reachable through the section.
pub struct Section<'a> {
    cr: &'a mut KuadrantCr,
    name: SectionName,
}

impl<'a> Section<'a> {
    /// Bind a section to the CR, creating its spec key if absent
    pub fn new(cr: &'a mut KuadrantCr, name: SectionName) -> Self {
        cr.model.spec.section_mut(name);
        Self { cr, name }
    }

    /// The section's spec key
    pub fn name(&self) -> &'static str {
        self.name.as_str()
    }

    /// The section's entries, if the section is present in the document
    pub fn entries(&self) -> Option<&Map<String, Value>> {
        self.cr.model.spec.section(self.name)
    }

    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries()
            .and_then(|entries| entries.get(key))
            .ok_or_else(|| KuadrantError::MissingField {
                section: self.name().to_string(),
                field: key.to_string(),
            })
    }

    /// Deserialize a stored value into `T`
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        Ok(serde_json::from_value(self.get(key)?.clone())?)
    }

    /// Store a value under `key`. Structured values are flattened to plain maps.
    pub fn set<V: Serialize>(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        let value = serde_json::to_value(value)?;
        debug!("Setting {}.{}", self.name(), key);
        self.cr
            .model
            .spec
            .section_mut(self.name)
            .insert(key, value);
        Ok(())
    }

    /// Remove `key`, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.cr.model.spec.section_mut(self.name).remove(key)
    }

    /// The deployment labelled `app=<name>`
    pub async fn deployment(&self) -> Result<Deployment> {
        self.cr
            .selector()
            .labelled(&[(labels::APP, self.name())])
            .await
    }
}

impl Deref for Section<'_> {
    type Target = KuadrantCr;

    fn deref(&self) -> &KuadrantCr {
        &*self.cr
    }
}

impl DerefMut for Section<'_> {
    fn deref_mut(&mut self) -> &mut KuadrantCr {
        &mut *self.cr
    }
}

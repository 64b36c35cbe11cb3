// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::spec_keys;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "kuadrant.io", version = "v1beta1", kind = "Kuadrant")]
#[kube(namespaced)]
#[kube(status = "KuadrantStatus")]
#[serde(rename_all = "camelCase")]
pub struct KuadrantSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorino: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limitador: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observability: Option<Observability>,
    /// Spec keys this crate does not model, kept so updates round-trip them
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct Observability {
    pub enable: bool,
}

/// Sub-trees of the spec that are exposed as sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionName {
    Authorino,
    Limitador,
}

impl SectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Authorino => spec_keys::AUTHORINO,
            SectionName::Limitador => spec_keys::LIMITADOR,
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl KuadrantSpec {
    pub fn section(&self, name: SectionName) -> Option<&Map<String, Value>> {
        match name {
            SectionName::Authorino => self.authorino.as_ref(),
            SectionName::Limitador => self.limitador.as_ref(),
        }
    }

    /// Mutable access to a section, inserting an empty map when it is absent
    pub fn section_mut(&mut self, name: SectionName) -> &mut Map<String, Value> {
        let slot = match name {
            SectionName::Authorino => &mut self.authorino,
            SectionName::Limitador => &mut self.limitador,
        };
        slot.get_or_insert_with(Map::new)
    }
}

impl Kuadrant {
    /// Check if the operator reports this Kuadrant as ready
    pub fn is_ready(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.conditions.as_ref())
            .is_some_and(|conditions| {
                conditions
                    .iter()
                    .any(|c| c.condition_type == "Ready" && c.status == "True")
            })
    }

    pub fn observability_enabled(&self) -> bool {
        self.spec
            .observability
            .as_ref()
            .is_some_and(|o| o.enable)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KuadrantStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KuadrantError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to convert value: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("'{section}' has no field '{field}'")]
    MissingField { section: String, field: String },

    #[error("No {kind} matches '{selector}'")]
    NotFound { kind: String, selector: String },

    #[error("Expected a single {kind} for '{selector}', found {count}")]
    Ambiguous {
        kind: String,
        selector: String,
        count: usize,
    },

    #[error("Update of {name} kept conflicting after {attempts} attempts")]
    Conflict { name: String, attempts: usize },

    #[error("Timed out after {timeout:?} waiting for {what}")]
    Timeout { what: String, timeout: Duration },
}

pub type Result<T> = std::result::Result<T, KuadrantError>;

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label keys used to find section workloads
pub mod labels {
    /// Deployments and pods of a section carry `app=<section name>`
    pub const APP: &str = "app";
}

/// Spec keys of the Kuadrant CR
pub mod spec_keys {
    pub const AUTHORINO: &str = "authorino";
    pub const LIMITADOR: &str = "limitador";
}

/// In-cluster DNS suffix for service endpoints
pub const CLUSTER_DOMAIN: &str = "svc.cluster.local";

/// Number of read-modify-write rounds before giving up on a conflicting update
pub const MODIFY_MAX_ATTEMPTS: usize = 5;

/// Readiness polling configuration
pub mod wait {
    /// Initial polling interval in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 500;
    /// Maximum polling interval in milliseconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_MS: u64 = 5_000;
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, object lookup and readiness polling.

pub mod client;
pub mod deployment;
pub mod selector;
pub mod wait;

pub use client::connect;
pub use selector::{label_selector, Selector};
pub use wait::poll_until;

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource definitions.

pub mod kuadrant;

pub use kuadrant::{Kuadrant, KuadrantSpec, KuadrantStatus, Observability, SectionName};

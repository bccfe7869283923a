// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for sweep tools.
//! Keeps front ends (CLI, future viewers) thin and storage-agnostic.

pub mod config;
pub mod config_port;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Temporal types used by the fixed-step loop.

#[doc = "Discrete physics ticks (u64 newtype)."]
pub mod tick;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Kestrel tools (config, prefs).
//! Storage stays behind the [`config::ConfigStore`] port so adapters remain thin.

pub mod config;
pub mod prefs;

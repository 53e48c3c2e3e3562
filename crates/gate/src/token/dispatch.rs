// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent dispatch: which automated participant the room server should start
//! when the room is created, and the metadata it hands that agent.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One agent the room server should dispatch into the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAgentDispatch {
    pub agent_name: String,
    /// JSON-encoded metadata, opaque to the room server.
    #[serde(default)]
    pub metadata: String,
}

/// Room creation settings embedded in the `roomConfig` claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfiguration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<RoomAgentDispatch>,
}

/// Operator-supplied description of the agent to dispatch.
///
/// Loaded once at startup (`--dispatch-config`) and turned into a fresh
/// [`RoomConfiguration`] per token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchProfile {
    pub agent_name: String,
    #[serde(default = "empty_object")]
    pub metadata: serde_json::Value,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Default for DispatchProfile {
    /// Clinic receptionist demo agent.
    fn default() -> Self {
        Self {
            agent_name: "base_agent".to_owned(),
            metadata: serde_json::json!({
                "agent_id": "clinic_receptionist",
                "call_id": "Rohan-123-call",
                "customer_name": "",
                "customer_id": "9988877023",
                "phone_number": "+919988877023",
            }),
        }
    }
}

impl DispatchProfile {
    /// Read a profile from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading dispatch config {}", path.display()))?;
        let profile: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing dispatch config {}", path.display()))?;
        if profile.agent_name.is_empty() {
            anyhow::bail!("dispatch config {}: agent_name must not be empty", path.display());
        }
        Ok(profile)
    }

    /// Build the room configuration for a single token.
    pub fn room_configuration(&self) -> Result<RoomConfiguration, serde_json::Error> {
        let metadata = serde_json::to_string(&self.metadata)?;
        Ok(RoomConfiguration {
            agents: vec![RoomAgentDispatch { agent_name: self.agent_name.clone(), metadata }],
        })
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;

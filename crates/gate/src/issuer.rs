// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant token issuance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::GateConfig;
use crate::error::IssueError;
use crate::identity;
use crate::token::{AccessToken, DispatchProfile, VideoGrant};

/// What a client needs to join a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetails {
    pub server_url: String,
    pub room_name: String,
    pub participant_name: String,
    pub participant_token: String,
}

/// Signs participant tokens for one LiveKit deployment.
///
/// Only constructible when all three LiveKit settings are present.
pub struct TokenIssuer<'a> {
    server_url: &'a str,
    api_key: &'a str,
    api_secret: &'a str,
    ttl: Duration,
    dispatch: &'a DispatchProfile,
}

impl<'a> TokenIssuer<'a> {
    pub fn from_config(
        config: &'a GateConfig,
        dispatch: &'a DispatchProfile,
    ) -> Result<Self, IssueError> {
        if let Some(var) = config.missing_credential() {
            return Err(IssueError::Configuration(var));
        }
        Ok(Self {
            server_url: config.server_url.as_deref().unwrap_or_default(),
            api_key: config.api_key.as_deref().unwrap_or_default(),
            api_secret: config.api_secret.as_deref().unwrap_or_default(),
            ttl: config.token_ttl(),
            dispatch,
        })
    }

    /// Sign a token admitting `identity` to `room_name` with full participant
    /// rights and the configured agent dispatch.
    pub fn issue(&self, identity: &str, room_name: &str) -> Result<String, IssueError> {
        if identity.is_empty() {
            return Err(IssueError::InvalidInput("identity must not be empty".to_owned()));
        }
        if room_name.is_empty() {
            return Err(IssueError::InvalidInput("room name must not be empty".to_owned()));
        }

        let mut token = AccessToken::new(self.api_key, self.api_secret, identity, self.ttl);
        token.add_grant(VideoGrant::participant(room_name));
        let room_config =
            self.dispatch.room_configuration().map_err(|e| IssueError::Encode(e.to_string()))?;
        token.set_room_config(room_config);

        token.to_jwt().map_err(|e| IssueError::Encode(e.to_string()))
    }

    /// Generate a fresh identity and room, then issue a token for them.
    pub fn connection_details(
        &self,
        participant_prefix: &str,
        room_prefix: &str,
    ) -> Result<ConnectionDetails, IssueError> {
        let participant_name = identity::generate(participant_prefix);
        let room_name = identity::generate(room_prefix);
        let participant_token = self.issue(&participant_name, &room_name)?;
        tracing::debug!(
            room = %room_name,
            participant = %participant_name,
            agent = %self.dispatch.agent_name,
            "issued participant token"
        );
        Ok(ConnectionDetails {
            server_url: self.server_url.to_owned(),
            room_name,
            participant_name,
            participant_token,
        })
    }
}

#[cfg(test)]
#[path = "issuer_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! LiveKit-compatible participant access tokens.
//!
//! An [`AccessToken`] collects the participant identity, a [`VideoGrant`]
//! and an optional [`RoomConfiguration`], then signs them into an HS256 JWT
//! that the media server verifies with the same API secret.

pub mod dispatch;
pub mod grant;

use std::fmt;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub use dispatch::{DispatchProfile, RoomAgentDispatch, RoomConfiguration};
pub use grant::VideoGrant;

/// Claims carried by a participant token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// API key id.
    pub iss: String,
    /// Participant identity.
    pub sub: String,
    pub jti: String,
    pub nbf: u64,
    pub exp: u64,
    /// Display name. Never set by this service but accepted from other issuers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoGrant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_config: Option<RoomConfiguration>,
}

/// Why a token failed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Malformed(String),
    UnsupportedAlgorithm,
    BadSignature,
    NotYetValid,
    Expired,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed token: {msg}"),
            Self::UnsupportedAlgorithm => f.write_str("unsupported algorithm"),
            Self::BadSignature => f.write_str("signature mismatch"),
            Self::NotYetValid => f.write_str("token not yet valid"),
            Self::Expired => f.write_str("token expired"),
        }
    }
}

impl std::error::Error for TokenError {}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::InvalidAlgorithm => Self::UnsupportedAlgorithm,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::ImmatureSignature => Self::NotYetValid,
            _ => Self::Malformed(e.to_string()),
        }
    }
}

/// Builder for a signed participant token.
#[derive(Debug, Clone)]
pub struct AccessToken {
    api_key: String,
    api_secret: String,
    identity: String,
    ttl: Duration,
    video: Option<VideoGrant>,
    room_config: Option<RoomConfiguration>,
}

impl AccessToken {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        identity: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            identity: identity.into(),
            ttl,
            video: None,
            room_config: None,
        }
    }

    /// Add a video grant, merging into any grant already present.
    pub fn add_grant(&mut self, grant: VideoGrant) {
        match self.video {
            Some(ref mut existing) => existing.merge(grant),
            None => self.video = Some(grant),
        }
    }

    pub fn set_room_config(&mut self, config: RoomConfiguration) {
        self.room_config = Some(config);
    }

    /// Claims as they would be signed at `now` (epoch seconds).
    ///
    /// `nbf` is the issuance time, so the whole window is exactly the TTL.
    /// A room server whose clock lags ours accepts the token only within its
    /// own leeway (one minute for LiveKit), where a zero `nbf` would not care.
    pub fn claims_at(&self, now: u64) -> Claims {
        Claims {
            iss: self.api_key.clone(),
            sub: self.identity.clone(),
            jti: self.identity.clone(),
            nbf: now,
            exp: now.saturating_add(self.ttl.as_secs()),
            name: None,
            video: self.video.clone(),
            room_config: self.room_config.clone(),
        }
    }

    /// Sign the token with the validity window starting at `now`.
    pub fn to_jwt_at(&self, now: u64) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::new(Algorithm::HS256),
            &self.claims_at(now),
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )
    }

    /// Sign the token with the validity window starting now.
    pub fn to_jwt(&self) -> Result<String, jsonwebtoken::errors::Error> {
        self.to_jwt_at(epoch_secs())
    }
}

/// Verify a participant token and return its claims.
///
/// Checks the HS256 signature, `exp` and `nbf`, allowing the library's
/// default clock leeway.
pub fn verify(token: &str, api_secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;
    let data =
        decode::<Claims>(token, &DecodingKey::from_secret(api_secret.as_bytes()), &validation)?;
    Ok(data.claims)
}

/// Return current epoch seconds.
pub fn epoch_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;

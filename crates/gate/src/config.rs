// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::time::Duration;

/// Longest validity window a participant token may carry.
pub const MAX_TOKEN_TTL_SECS: u64 = 15 * 60;

/// Configuration for the roomgate token service.
///
/// The LiveKit credentials are optional here: a missing value fails the
/// individual request, not process startup.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "roomgate", version, about = "Issue LiveKit participant tokens with agent dispatch")]
pub struct GateConfig {
    /// Host to bind on.
    #[arg(long, default_value = "127.0.0.1", env = "ROOMGATE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000, env = "ROOMGATE_PORT")]
    pub port: u16,

    /// API key id used as the token issuer.
    #[arg(long, env = "LIVEKIT_API_KEY")]
    pub api_key: Option<String>,

    /// Shared secret used to sign tokens.
    #[arg(long, env = "LIVEKIT_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    /// LiveKit server URL handed back to clients.
    #[arg(long, env = "LIVEKIT_URL")]
    pub server_url: Option<String>,

    /// Token validity window in seconds (at most 900).
    #[arg(long, default_value_t = MAX_TOKEN_TTL_SECS, env = "ROOMGATE_TOKEN_TTL_SECS")]
    pub token_ttl_secs: u64,

    /// Path to a JSON agent dispatch profile. Uses the built-in demo profile if unset.
    #[arg(long, env = "ROOMGATE_DISPATCH_CONFIG")]
    pub dispatch_config: Option<PathBuf>,

    /// Prefix for generated participant identities.
    #[arg(long, default_value = "voice_assistant_user_")]
    pub participant_prefix: String,

    /// Prefix for generated room names.
    #[arg(long, default_value = "voice_assistant_room_")]
    pub room_prefix: String,

    /// Log format (json or text).
    #[arg(long, env = "ROOMGATE_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "ROOMGATE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl GateConfig {
    /// Check startup-time invariants. LiveKit credentials are deliberately not
    /// checked here; see [`GateConfig::missing_credential`].
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.token_ttl_secs == 0 {
            anyhow::bail!("--token-ttl-secs must be greater than zero");
        }
        if self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            anyhow::bail!(
                "--token-ttl-secs must not exceed {MAX_TOKEN_TTL_SECS} (got {})",
                self.token_ttl_secs
            );
        }
        if self.participant_prefix.is_empty() || self.room_prefix.is_empty() {
            anyhow::bail!("participant and room prefixes must not be empty");
        }
        match self.log_format.as_str() {
            "json" | "text" => Ok(()),
            other => anyhow::bail!("invalid log format: {other} (expected json or text)"),
        }
    }

    /// Filter directive for the log subscriber. A non-empty `RUST_LOG`
    /// overrides `--log-level`.
    pub fn log_directive<'a>(&'a self, rust_log: Option<&'a str>) -> &'a str {
        rust_log.filter(|d| !d.trim().is_empty()).unwrap_or(self.log_level.as_str())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Name of the first LiveKit variable that is unset or empty, in the
    /// order URL, key, secret.
    pub fn missing_credential(&self) -> Option<&'static str> {
        let unset = |v: &Option<String>| v.as_deref().is_none_or(str::is_empty);
        if unset(&self.server_url) {
            Some("LIVEKIT_URL")
        } else if unset(&self.api_key) {
            Some("LIVEKIT_API_KEY")
        } else if unset(&self.api_secret) {
            Some("LIVEKIT_API_SECRET")
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

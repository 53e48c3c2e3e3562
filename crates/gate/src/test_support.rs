// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test infrastructure: config builders and assertion helpers.

use std::sync::Arc;

use crate::config::GateConfig;
use crate::state::GateState;
use crate::token::DispatchProfile;

pub const TEST_API_KEY: &str = "APItestkey";
pub const TEST_API_SECRET: &str = "test-secret-with-enough-entropy";
pub const TEST_SERVER_URL: &str = "wss://test.livekit.example";

/// Config with all LiveKit settings present and default TTL and prefixes.
pub fn configured_config() -> GateConfig {
    GateConfig {
        host: "127.0.0.1".into(),
        port: 0,
        api_key: Some(TEST_API_KEY.into()),
        api_secret: Some(TEST_API_SECRET.into()),
        server_url: Some(TEST_SERVER_URL.into()),
        token_ttl_secs: crate::config::MAX_TOKEN_TTL_SECS,
        dispatch_config: None,
        participant_prefix: "voice_assistant_user_".into(),
        room_prefix: "voice_assistant_room_".into(),
        log_format: "text".into(),
        log_level: "debug".into(),
    }
}

/// Shared state around `config` with the default dispatch profile.
pub fn test_state(config: GateConfig) -> Arc<GateState> {
    Arc::new(GateState::new(config, DispatchProfile::default()))
}

/// Assert that an expression evaluates to `Err` whose Display output
/// contains the given substring.
#[macro_export]
macro_rules! assert_err_contains {
    ($expr:expr, $substr:expr) => {{
        let result = $expr;
        let err = result.expect_err(concat!("expected Err for: ", stringify!($expr)));
        let msg = err.to_string();
        assert!(msg.contains($substr), "expected error containing {:?}, got: {msg:?}", $substr);
    }};
}

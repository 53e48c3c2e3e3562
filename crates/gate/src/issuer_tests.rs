// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{configured_config, TEST_API_SECRET, TEST_SERVER_URL};
use crate::token::{epoch_secs, verify};

#[test]
fn issued_token_grants_room_and_dispatches_agent() -> anyhow::Result<()> {
    let config = configured_config();
    let profile = DispatchProfile::default();
    let issuer = TokenIssuer::from_config(&config, &profile)?;

    let jwt = issuer.issue("alice", "room-1")?;
    let claims = verify(&jwt, TEST_API_SECRET)?;

    assert_eq!(claims.sub, "alice");
    let video = claims.video.unwrap_or_default();
    assert_eq!(video.room.as_deref(), Some("room-1"));
    assert!(video.allows_full_participation());

    let agents = claims.room_config.unwrap_or_default().agents;
    assert_eq!(agents.len(), 1);
    let metadata: serde_json::Value = serde_json::from_str(&agents[0].metadata)?;
    for field in ["agent_id", "call_id", "phone_number"] {
        assert!(metadata.get(field).is_some(), "metadata missing {field}");
    }
    Ok(())
}

#[test]
fn validity_window_respects_ttl() -> anyhow::Result<()> {
    let mut config = configured_config();
    config.token_ttl_secs = 120;
    let profile = DispatchProfile::default();
    let issuer = TokenIssuer::from_config(&config, &profile)?;

    let before = epoch_secs();
    let claims = verify(&issuer.issue("bob", "room-2")?, TEST_API_SECRET)?;
    assert_eq!(claims.exp - claims.nbf, 120);
    assert!(claims.exp <= epoch_secs() + 120);
    assert!(claims.nbf >= before);
    Ok(())
}

#[yare::parameterized(
    no_url    = { "LIVEKIT_URL" },
    no_key    = { "LIVEKIT_API_KEY" },
    no_secret = { "LIVEKIT_API_SECRET" },
)]
fn missing_setting_is_configuration_error(var: &str) {
    let mut config = configured_config();
    match var {
        "LIVEKIT_URL" => config.server_url = None,
        "LIVEKIT_API_KEY" => config.api_key = None,
        _ => config.api_secret = None,
    }
    let profile = DispatchProfile::default();
    let err = TokenIssuer::from_config(&config, &profile).err();
    assert_eq!(err.map(|e| e.to_string()), Some(format!("{var} is not defined")));
}

#[yare::parameterized(
    empty_identity = { "", "room" },
    empty_room     = { "alice", "" },
)]
fn empty_inputs_are_rejected(identity: &str, room: &str) {
    let config = configured_config();
    let profile = DispatchProfile::default();
    let result = TokenIssuer::from_config(&config, &profile).and_then(|i| i.issue(identity, room));
    assert!(matches!(result, Err(IssueError::InvalidInput(_))), "got {result:?}");
}

#[test]
fn connection_details_use_prefixes() -> anyhow::Result<()> {
    let config = configured_config();
    let profile = DispatchProfile::default();
    let issuer = TokenIssuer::from_config(&config, &profile)?;

    let details = issuer.connection_details("user_", "room_")?;
    assert_eq!(details.server_url, TEST_SERVER_URL);
    assert!(details.participant_name.starts_with("user_"));
    assert!(details.room_name.starts_with("room_"));

    let claims = verify(&details.participant_token, TEST_API_SECRET)?;
    assert_eq!(claims.sub, details.participant_name);
    assert_eq!(claims.video.and_then(|v| v.room), Some(details.room_name));
    Ok(())
}

#[test]
fn custom_profile_is_embedded() -> anyhow::Result<()> {
    let config = configured_config();
    let profile = DispatchProfile {
        agent_name: "nps_survey".into(),
        metadata: serde_json::json!({ "agent_id": "test_agent", "call_id": "c-9" }),
    };
    let issuer = TokenIssuer::from_config(&config, &profile)?;
    let claims = verify(&issuer.issue("carol", "room-3")?, TEST_API_SECRET)?;
    let agents = claims.room_config.unwrap_or_default().agents;
    assert_eq!(agents[0].agent_name, "nps_survey");
    assert_eq!(agents[0].metadata, r#"{"agent_id":"test_agent","call_id":"c-9"}"#);
    Ok(())
}

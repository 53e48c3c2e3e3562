// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Video capability grant carried in the `video` claim.

use serde::{Deserialize, Serialize};

/// Permissions a participant holds within a single room.
///
/// Unset fields are omitted from the token so the media server applies its
/// own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_join: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
}

impl VideoGrant {
    /// Full participant rights in `room`: join, publish media and data, subscribe.
    pub fn participant(room: impl Into<String>) -> Self {
        Self {
            room: Some(room.into()),
            room_join: Some(true),
            can_publish: Some(true),
            can_publish_data: Some(true),
            can_subscribe: Some(true),
        }
    }

    /// Overlay every field set in `other` onto `self`.
    pub fn merge(&mut self, other: VideoGrant) {
        if other.room.is_some() {
            self.room = other.room;
        }
        if other.room_join.is_some() {
            self.room_join = other.room_join;
        }
        if other.can_publish.is_some() {
            self.can_publish = other.can_publish;
        }
        if other.can_publish_data.is_some() {
            self.can_publish_data = other.can_publish_data;
        }
        if other.can_subscribe.is_some() {
            self.can_subscribe = other.can_subscribe;
        }
    }

    /// True when the grant lets a participant join, publish and subscribe.
    #[cfg(test)]
    pub(crate) fn allows_full_participation(&self) -> bool {
        self.room_join == Some(true)
            && self.can_publish == Some(true)
            && self.can_publish_data == Some(true)
            && self.can_subscribe == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_grant_serializes_camel_case() -> anyhow::Result<()> {
        let value = serde_json::to_value(VideoGrant::participant("room-1"))?;
        assert_eq!(
            value,
            serde_json::json!({
                "room": "room-1",
                "roomJoin": true,
                "canPublish": true,
                "canPublishData": true,
                "canSubscribe": true,
            })
        );
        Ok(())
    }

    #[test]
    fn unset_fields_are_omitted() -> anyhow::Result<()> {
        let grant = VideoGrant { room: Some("r".into()), room_join: Some(true), ..Default::default() };
        let value = serde_json::to_value(grant)?;
        assert_eq!(value, serde_json::json!({ "room": "r", "roomJoin": true }));
        Ok(())
    }

    #[test]
    fn merge_keeps_single_room_and_existing_flags() {
        let mut grant = VideoGrant::participant("first");
        grant.merge(VideoGrant {
            room: Some("first".into()),
            room_join: Some(true),
            ..Default::default()
        });
        assert_eq!(grant, VideoGrant::participant("first"));
        assert!(grant.allows_full_participation());
    }

    #[test]
    fn merge_overrides_set_fields() {
        let mut grant = VideoGrant::participant("a");
        grant.merge(VideoGrant {
            room: Some("b".into()),
            can_publish: Some(false),
            ..Default::default()
        });
        assert_eq!(grant.room.as_deref(), Some("b"));
        assert_eq!(grant.can_publish, Some(false));
        assert!(!grant.allows_full_participation());
    }
}

//! Request and response types for settings handlers

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use setstore_core::{null_as_default, DBDateTime};
use utoipa::ToSchema;

use crate::services::{NewSetting, SettingUpdate, SettingWithTtl, SettingsService};

/// Application state for settings handlers
pub struct SettingsAppState {
    pub settings_service: Arc<SettingsService>,
}

/// A stored setting with its live cache expiry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "theme")]
    pub key: String,
    #[schema(example = "dark")]
    pub value: String,
    /// Seconds until the cached copy expires, 0 if it is gone
    #[schema(example = 42)]
    pub ttl: i64,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DBDateTime,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DBDateTime,
}

impl From<SettingWithTtl> for SettingResponse {
    fn from(item: SettingWithTtl) -> Self {
        Self {
            id: item.setting.id,
            key: item.setting.key,
            value: item.setting.value,
            ttl: item.ttl,
            created_at: item.setting.created_at,
            updated_at: item.setting.updated_at,
        }
    }
}

/// Body of create and update requests, echoed back on success.
///
/// Missing or `null` fields read as empty / zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"key": "theme", "value": "dark", "ttl": 60}))]
pub struct SettingPayload {
    /// Only echoed when supplied; the store assigns ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    /// Cache expiry in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub ttl: i64,
}

impl SettingPayload {
    pub fn to_new_setting(&self) -> NewSetting {
        NewSetting {
            key: self.key.clone(),
            value: self.value.clone(),
            ttl: self.ttl,
        }
    }

    pub fn to_update(&self) -> SettingUpdate {
        SettingUpdate {
            value: Some(self.value.clone()).filter(|v| !v.is_empty()),
            ttl: Some(self.ttl).filter(|ttl| *ttl != 0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    #[schema(example = "Hello!")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_missing_fields_default() {
        let payload: SettingPayload = serde_json::from_value(json!({"ttl": 30})).unwrap();

        assert_eq!(payload.key, "");
        assert_eq!(payload.value, "");
        assert_eq!(payload.id, None);
        assert_eq!(payload.ttl, 30);
    }

    #[test]
    fn test_payload_null_fields_default() {
        let payload: SettingPayload =
            serde_json::from_value(json!({"id": null, "key": null, "value": null, "ttl": 15}))
                .unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.key, "");
        assert_eq!(payload.value, "");
        assert_eq!(payload.ttl, 15);
        assert!(payload.to_update().value.is_none());
    }

    #[test]
    fn test_payload_echo_omits_absent_id() {
        let payload: SettingPayload =
            serde_json::from_value(json!({"key": "theme", "value": "dark", "ttl": 60})).unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"key": "theme", "value": "dark", "ttl": 60})
        );
    }

    #[test]
    fn test_payload_echo_keeps_supplied_id() {
        let payload: SettingPayload =
            serde_json::from_value(json!({"id": 9, "key": "k", "value": "v", "ttl": 1})).unwrap();

        assert_eq!(serde_json::to_value(&payload).unwrap()["id"], 9);
    }

    #[test]
    fn test_update_treats_empty_and_zero_as_absent() {
        let update = SettingPayload::default().to_update();
        assert!(update.value.is_none());
        assert!(update.ttl.is_none());

        let update = SettingPayload {
            value: "light".into(),
            ttl: -5,
            ..Default::default()
        }
        .to_update();
        assert_eq!(update.value.as_deref(), Some("light"));
        assert_eq!(update.ttl, Some(-5));
    }
}

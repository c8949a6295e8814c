//! Text and binary encodings of [`SaveSnapshot`].
//!
//! The structured form is camelCase JSON. The export form is that JSON
//! wrapped in standard base64 so it survives copy and paste. Every decode
//! path runs [`SaveSnapshot::validate`] before returning.

use super::snapshot::SaveSnapshot;
use crate::error::SaveError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Structured JSON form.
pub fn serialize(snapshot: &SaveSnapshot) -> Result<String, SaveError> {
    serde_json::to_string(snapshot).map_err(|e| SaveError::malformed(e.to_string()))
}

pub fn deserialize(json: &str) -> Result<SaveSnapshot, SaveError> {
    let snapshot: SaveSnapshot =
        serde_json::from_str(json).map_err(|e| SaveError::malformed(e.to_string()))?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Compact transport form for copy/paste.
pub fn export(snapshot: &SaveSnapshot) -> Result<String, SaveError> {
    Ok(STANDARD.encode(serialize(snapshot)?))
}

/// Inverse of [`export`]. Surrounding whitespace is ignored.
pub fn import(text: &str) -> Result<SaveSnapshot, SaveError> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|e| SaveError::malformed(format!("not base64: {e}")))?;
    let json =
        String::from_utf8(bytes).map_err(|e| SaveError::malformed(format!("not utf-8: {e}")))?;
    deserialize(&json)
}

/// Binary payload for durable storage.
pub fn to_bytes(snapshot: &SaveSnapshot) -> Result<Vec<u8>, SaveError> {
    bincode::serialize(snapshot).map_err(|e| SaveError::malformed(e.to_string()))
}

pub fn from_bytes(data: &[u8]) -> Result<SaveSnapshot, SaveError> {
    let snapshot: SaveSnapshot =
        bincode::deserialize(data).map_err(|e| SaveError::malformed(e.to_string()))?;
    snapshot.validate()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;
    use crate::save::snapshot::Role;

    fn sample() -> SaveSnapshot {
        let mut snapshot = SaveSnapshot::fresh(1_700_000_000_000);
        snapshot.current_amount = 1234.5;
        snapshot.lifetime_amount = 9876.0;
        snapshot.producers[0].owned_count = 7;
        snapshot.click_upgrades[1].owned_count = 2;
        snapshot.prestige_level = 2;
        snapshot.unlocked_achievement_ids = vec![AchievementId::FirstSip, AchievementId::Keg];
        snapshot.stats.total_clicks = 420;
        snapshot.stats.total_cookies_ever_earned = 2_009_876.0;
        snapshot.stats.prestige_level = 2;
        snapshot.role = Role::Admin;
        snapshot
    }

    #[test]
    fn test_export_import_roundtrip() {
        let snapshot = sample();
        let text = export(&snapshot).unwrap();
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric() || "+/=".contains(c)));
        assert_eq!(import(&text).unwrap(), snapshot);
    }

    #[test]
    fn test_import_tolerates_surrounding_whitespace() {
        let text = format!("  {}\n", export(&sample()).unwrap());
        assert!(import(&text).is_ok());
    }

    #[test]
    fn test_binary_roundtrip() {
        let snapshot = sample();
        assert_eq!(from_bytes(&to_bytes(&snapshot).unwrap()).unwrap(), snapshot);
    }

    #[test]
    fn test_json_field_names() {
        let json = serialize(&sample()).unwrap();
        for field in [
            "currentAmount",
            "lifetimeAmount",
            "producers",
            "clickUpgrades",
            "ownedCount",
            "prestigeLevel",
            "unlockedAchievementIds",
            "stats",
            "lastSaveTimestamp",
            "role",
        ] {
            assert!(json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(matches!(import("!!!"), Err(SaveError::MalformedSave(_))));
        assert!(matches!(
            import(&STANDARD.encode("{\"hello\":1}")),
            Err(SaveError::MalformedSave(_))
        ));
        assert!(matches!(import(""), Err(SaveError::MalformedSave(_))));
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let mut value: serde_json::Value = serde_json::from_str(&serialize(&sample()).unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("role");
        assert!(deserialize(&value.to_string()).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let mut value: serde_json::Value = serde_json::from_str(&serialize(&sample()).unwrap()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("cheat".into(), serde_json::Value::Bool(true));
        assert!(deserialize(&value.to_string()).is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_amount() {
        let mut value: serde_json::Value = serde_json::from_str(&serialize(&sample()).unwrap()).unwrap();
        value["currentAmount"] = serde_json::json!(-10.0);
        assert!(deserialize(&value.to_string()).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_achievement() {
        let mut value: serde_json::Value = serde_json::from_str(&serialize(&sample()).unwrap()).unwrap();
        value["unlockedAchievementIds"] = serde_json::json!(["first_sip", "moon_landing"]);
        assert!(deserialize(&value.to_string()).is_err());
    }
}

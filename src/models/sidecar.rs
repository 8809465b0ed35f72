use serde::{Deserialize, Serialize};

/// User-facing annotations attached to a listed item by naming convention.
/// Unknown fields in the file are ignored; absent fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SidecarRecord {
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_default_to_empty() {
        let record: SidecarRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.notes, "");
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn unknown_fields_ignored() {
        let record: SidecarRecord =
            serde_json::from_str(r#"{"notes": "keep", "rating": 5}"#).unwrap();
        assert_eq!(record.notes, "keep");
    }

    #[test]
    fn empty_record_serializes_without_timestamp() {
        let json = serde_json::to_string(&SidecarRecord::default()).unwrap();
        assert_eq!(json, r#"{"notes":""}"#);
    }
}

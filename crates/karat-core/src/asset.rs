//! # Asset Record
//!
//! The sole entity of the registry. An asset is keyed in the world state
//! by its `id` verbatim; the remaining fields are descriptive attributes
//! with no uniqueness constraints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered asset.
///
/// Serialized field names are capitalized (`ID`, `Color`, ...) to match
/// the JSON documents already present in ledger state. Both `size` and
/// `appraised_value` are plain integers with no range constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Asset {
    /// Unique identifier; doubles as the world-state key.
    #[serde(rename = "ID")]
    pub id: String,
    /// Descriptive color attribute.
    #[serde(rename = "Color")]
    pub color: String,
    /// Size attribute.
    #[serde(rename = "Size")]
    pub size: i64,
    /// Free-form identity label of the current owner.
    #[serde(rename = "Owner")]
    pub owner: String,
    /// Appraised market value.
    #[serde(rename = "AppraisedValue")]
    pub appraised_value: i64,
}

impl Asset {
    /// Create an asset record.
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        size: i64,
        owner: impl Into<String>,
        appraised_value: i64,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            size,
            owner: owner.into(),
            appraised_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_populates_all_fields() {
        let asset = Asset::new("asset1", "blue", 5, "Tomoko", 300);
        assert_eq!(asset.id, "asset1");
        assert_eq!(asset.color, "blue");
        assert_eq!(asset.size, 5);
        assert_eq!(asset.owner, "Tomoko");
        assert_eq!(asset.appraised_value, 300);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let asset = Asset::new("asset1", "blue", 5, "Tomoko", 300);
        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["ID"], "asset1");
        assert_eq!(value["Color"], "blue");
        assert_eq!(value["Size"], 5);
        assert_eq!(value["Owner"], "Tomoko");
        assert_eq!(value["AppraisedValue"], 300);
    }

    #[test]
    fn test_deserializes_from_wire_field_names() {
        let json = r#"{"ID":"asset2","Color":"red","Size":5,"Owner":"Brad","AppraisedValue":400}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset, Asset::new("asset2", "red", 5, "Brad", 400));
    }
}

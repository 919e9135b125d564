use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const COLLECTION_RACE: &str = "Race";
pub const COLLECTION_CLASS: &str = "Class";
pub const COLLECTION_PROFESSION: &str = "Profession";

/// The collections the editor knows about, in menu order.
pub const COLLECTIONS: [&str; 3] = [COLLECTION_RACE, COLLECTION_CLASS, COLLECTION_PROFESSION];

/// One catalog entry as stored in the document database.
///
/// `full_tag` keys the entry into the nominal hierarchy; `id` is the opaque
/// store-assigned identifier (absent until the store has accepted the
/// document). Everything except `full_tag`, `display_name` and `description`
/// is opaque to the layout engine; unknown fields round-trip through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub tag: String,
    pub full_tag: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "iconPath")]
    pub icon_path: String,
    #[serde(default, rename = "grantedTags")]
    pub granted_tags: Vec<String>,
    #[serde(default, rename = "grantStats", skip_serializing_if = "Option::is_none")]
    pub grant_stats: Option<Map<String, Value>>,
    #[serde(
        default,
        rename = "grantAbilities",
        skip_serializing_if = "Option::is_none"
    )]
    pub grant_abilities: Option<Map<String, Value>>,
    #[serde(
        default,
        rename = "customFields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<Map<String, Value>>,
    /// Character mesh asset path; only Race entries carry one.
    #[serde(default, rename = "meshPath", skip_serializing_if = "Option::is_none")]
    pub mesh_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Minimal entry for the given collection-relative tag. `full_tag` is
    /// derived as `<collection>.<tag>`.
    pub fn new(collection: &str, tag: &str, display_name: &str) -> Self {
        Self {
            id: None,
            display_name: display_name.to_string(),
            tag: tag.to_string(),
            full_tag: crate::tag::full_tag_for(collection, tag),
            description: String::new(),
            icon_path: String::new(),
            granted_tags: Vec::new(),
            grant_stats: None,
            grant_abilities: None,
            custom_fields: None,
            mesh_path: None,
            extra: Map::new(),
        }
    }

    /// Collection this entry belongs to (first segment of `full_tag`).
    pub fn collection(&self) -> &str {
        crate::tag::collection_of(&self.full_tag)
    }

    /// Form-level validation: `display_name` and `tag` must be non-blank.
    /// Everything else is optional.
    pub fn validate(&self) -> Result<()> {
        if self.display_name.trim().is_empty() {
            return Err(Error::InvalidDocument {
                message: "displayName cannot be empty".to_string(),
            });
        }
        if self.tag.trim().is_empty() {
            return Err(Error::InvalidDocument {
                message: "tag cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses a collection snapshot: a JSON array of documents, in store order.
pub fn parse_documents(text: &str) -> Result<Vec<Document>> {
    Ok(serde_json::from_str(text)?)
}

use serde::{Deserialize, Serialize};

use crate::types::identifiers::RecipeId;

/// A recipe as returned by the catalog.
///
/// Fields the pipeline does not interpret are kept in `extra` so a
/// presentation layer can still reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub image_url: String,

    #[serde(default, flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RecipeRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: RecipeId::new(id),
            name: name.into(),
            image_url: image_url.into(),
            extra: serde_json::Map::new(),
        }
    }
}

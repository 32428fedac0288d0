use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Catalog identity of a recipe. Two records with the same id are the same
/// recipe no matter which query produced them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        RecipeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId(id.to_string())
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of an ordered keyword selection.
///
/// Two runs with the same fingerprint asked the catalog the same questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordFingerprint(String);

impl KeywordFingerprint {
    pub fn from_keywords(keywords: &[String]) -> Self {
        let mut hasher = Sha256::new();
        for (i, keyword) in keywords.iter().enumerate() {
            if i > 0 {
                hasher.update(b"\n");
            }
            hasher.update(keyword.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        KeywordFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
